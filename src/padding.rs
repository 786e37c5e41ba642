/*
 * // Copyright (c) Radzivon Bartoshyk. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::transform::SpectralNumber;
use crate::{ImageSize, SpectralError, SpectralImage};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Zero padded real raster fed to the forward transform.
///
/// Source samples occupy the top-left corner, everything else is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedImage<F> {
    pub(crate) data: Vec<F>,
    pub(crate) size: ImageSize,
    pub(crate) source_size: ImageSize,
}

impl<F: SpectralNumber> PaddedImage<F> {
    /// Padded extent `P x Q`
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Extent of the raster that was padded, also the crop extent after reconstruction
    #[inline]
    pub fn source_size(&self) -> ImageSize {
        self.source_size
    }

    #[inline]
    pub fn data(&self) -> &[F] {
        &self.data
    }
}

/// Computes padded extent `P = 2M - 1`, `Q = 2N - 1`.
///
/// This is the smallest extent where circular convolution of two `M x N` supports
/// does not wrap around into the `M x N` region of interest.
pub fn padded_size(size: ImageSize) -> Result<ImageSize, SpectralError> {
    if size.width == 0 || size.height == 0 {
        return Err(SpectralError::ZeroBaseSize);
    }
    let width = size
        .width
        .checked_mul(2)
        .ok_or(SpectralError::ExceedingPointerSize)?
        - 1;
    let height = size
        .height
        .checked_mul(2)
        .ok_or(SpectralError::ExceedingPointerSize)?
        - 1;
    width
        .checked_mul(height)
        .ok_or(SpectralError::ExceedingPointerSize)?;
    Ok(ImageSize::new(width, height))
}

/// `(-1)^(row + column)` from parity.
#[inline(always)]
pub fn centering_sign<F: SpectralNumber>(row: usize, column: usize) -> F {
    if (row + column) % 2 == 0 {
        F::one()
    } else {
        -F::one()
    }
}

/// Places image into the top-left corner of a zero filled `P x Q` arena
pub fn zero_pad<T, F>(image: &SpectralImage<T>) -> Result<PaddedImage<F>, SpectralError>
where
    T: Copy + Default + Debug + AsPrimitive<F>,
    F: SpectralNumber,
{
    image.check_layout()?;
    let source_size = image.size();
    let size = padded_size(source_size)?;

    let mut data = vec![F::zero(); size.area()];
    for (dst, src) in data.chunks_exact_mut(size.width).zip(image.rows()) {
        for (dst, &src) in dst.iter_mut().zip(src.iter()) {
            *dst = src.as_();
        }
    }

    Ok(PaddedImage {
        data,
        size,
        source_size,
    })
}
