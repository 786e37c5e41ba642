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
use crate::{ImageSize, MismatchedSize, SpectralError};
use num_complex::Complex;

/// Centered complex spectrum of a padded raster.
///
/// Stored row-major, `size.height` rows (`u`) by `size.width` columns (`v`).
/// Zero frequency lives at [Spectrum::center].
///
/// Filtering mutates a spectrum in place, so every filter pass must work on its own
/// [Clone] of the spectrum built by [forward_2d](crate::forward_2d).
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum<F> {
    pub(crate) data: Vec<Complex<F>>,
    pub(crate) size: ImageSize,
}

impl<F: SpectralNumber> Spectrum<F> {
    /// Wraps existing coefficients, `data` must hold exactly `size.width * size.height` items.
    pub fn from_raw(data: Vec<Complex<F>>, size: ImageSize) -> Result<Self, SpectralError> {
        if size.width == 0 || size.height == 0 {
            return Err(SpectralError::ZeroBaseSize);
        }
        if data.len() != size.area() {
            return Err(SpectralError::SpectrumSizeMismatch(MismatchedSize {
                expected: size.area(),
                received: data.len(),
            }));
        }
        Ok(Spectrum { data, size })
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Zero frequency coordinate `(P div 2, Q div 2)` as `(u, v)`
    #[inline]
    pub fn center(&self) -> (usize, usize) {
        (self.size.height / 2, self.size.width / 2)
    }

    #[inline]
    pub fn data(&self) -> &[Complex<F>] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [Complex<F>] {
        &mut self.data
    }

    #[inline]
    pub fn at(&self, u: usize, v: usize) -> Complex<F> {
        self.data[u * self.size.width + v]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Complex<F>> {
        self.data.chunks_exact(self.size.width)
    }

    /// Sum of squared magnitudes of all coefficients
    pub fn energy(&self) -> F {
        self.data
            .iter()
            .fold(F::zero(), |acc, v| acc + v.norm_sqr())
    }

    pub fn into_raw(self) -> Vec<Complex<F>> {
        self.data
    }
}
