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

use crate::lines::{transform_lines, transpose};
use crate::padding::centering_sign;
use crate::transform::{SpectralNumber, Transform1D, TransformDirection};
use crate::{ImageSize, MismatchedSize, SpectralError, Spectrum, ThreadingPolicy};

/// Reconstructs real raster from a centered spectrum and crops it.
///
/// Mirrors [forward_2d](crate::forward_2d): columns are inverted first, then rows.
/// Imaginary part of every reconstructed sample is discarded, then centering sign
/// is undone. Only the first `crop.height` rows and `crop.width` columns are kept,
/// that is the region where circular convolution equals linear convolution.
///
/// Returned samples are not clamped.
///
/// # Arguments
///
/// * `spectrum`: Spectrum to invert, consumed.
/// * `crop`: Extent of the source raster, must not exceed spectrum extent.
/// * `transform`: One dimensional engine, see [Transform1D].
/// * `threading_policy`: Threads usage policy for row and column passes.
///
pub fn inverse_2d<F, Tr>(
    spectrum: Spectrum<F>,
    crop: ImageSize,
    transform: &Tr,
    threading_policy: ThreadingPolicy,
) -> Result<Vec<F>, SpectralError>
where
    F: SpectralNumber,
    Tr: Transform1D<F> + ?Sized,
{
    let size = spectrum.size();
    let (width, height) = (size.width, size.height);
    if crop.width == 0 || crop.height == 0 {
        return Err(SpectralError::ZeroBaseSize);
    }
    if crop.width > width || crop.height > height {
        return Err(SpectralError::SpectrumSizeMismatch(MismatchedSize {
            expected: crop.area(),
            received: size.area(),
        }));
    }

    let pool = threading_policy.make_pool(size)?;

    let mut columns = transpose(&spectrum.into_raw(), width, height)?;

    transform_lines(
        &mut columns,
        height,
        transform,
        TransformDirection::Inverse,
        pool.as_ref(),
    );

    let mut arena = transpose(&columns, height, width)?;
    drop(columns);

    transform_lines(
        &mut arena,
        width,
        transform,
        TransformDirection::Inverse,
        pool.as_ref(),
    );

    let mut residue = 0f64;
    let mut output = Vec::with_capacity(crop.area());
    for (y, row) in arena.chunks_exact(width).take(crop.height).enumerate() {
        for (x, v) in row.iter().take(crop.width).enumerate() {
            residue = residue.max(v.im.abs().as_());
            output.push(v.re * centering_sign::<F>(y, x));
        }
    }

    tracing::debug!(
        width = crop.width,
        height = crop.height,
        max_imaginary_residue = residue,
        "spatial raster reconstructed"
    );

    Ok(output)
}
