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
use crate::Spectrum;
use num_complex::Complex;

/// Applies ideal low pass filter in place.
///
/// Every coefficient farther than `cutoff` from [Spectrum::center] is zeroed,
/// coefficients exactly at `cutoff` are kept.
/// Hard cutoff has no transition band, reconstructed images ring near edges.
///
/// Returns amount of retained coefficients.
pub fn ideal_low_pass<F: SpectralNumber>(spectrum: &mut Spectrum<F>, cutoff: f64) -> usize {
    let (center_u, center_v) = spectrum.center();
    let width = spectrum.size().width;
    let zero = Complex::new(F::zero(), F::zero());

    let mut retained = 0usize;
    for (u, row) in spectrum.data_mut().chunks_exact_mut(width).enumerate() {
        let du = u as f64 - center_u as f64;
        for (v, item) in row.iter_mut().enumerate() {
            let dv = v as f64 - center_v as f64;
            let distance = (du * du + dv * dv).sqrt();
            if distance > cutoff {
                *item = zero;
            } else {
                retained += 1;
            }
        }
    }
    retained
}

/// Radius covering every coefficient of a spectrum of this extent,
/// filtering with it or anything larger leaves the spectrum unchanged.
pub fn pass_through_cutoff<F: SpectralNumber>(spectrum: &Spectrum<F>) -> f64 {
    let size = spectrum.size();
    let half_height = size.height as f64 / 2.;
    let half_width = size.width as f64 / 2.;
    (half_height * half_height + half_width * half_width).sqrt()
}
