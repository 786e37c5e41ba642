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
use crate::padding::{centering_sign, PaddedImage};
use crate::transform::{SpectralNumber, Transform1D, TransformDirection};
use crate::{SpectralError, Spectrum, ThreadingPolicy};
use num_complex::Complex;

/// Computes centered 2D spectrum of a padded raster.
///
/// Each sample is multiplied by `(-1)^(i + j)` so zero frequency lands at
/// [Spectrum::center], then rows are transformed, then columns.
/// Every row transform completes before any column transform begins.
///
/// # Arguments
///
/// * `padded`: Zero padded raster, see [zero_pad](crate::zero_pad).
/// * `transform`: One dimensional engine, see [Transform1D].
/// * `threading_policy`: Threads usage policy for row and column passes.
///
pub fn forward_2d<F, Tr>(
    padded: &PaddedImage<F>,
    transform: &Tr,
    threading_policy: ThreadingPolicy,
) -> Result<Spectrum<F>, SpectralError>
where
    F: SpectralNumber,
    Tr: Transform1D<F> + ?Sized,
{
    let size = padded.size();
    let (width, height) = (size.width, size.height);

    let mut arena = padded
        .data()
        .chunks_exact(width)
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &v)| Complex::new(v * centering_sign::<F>(y, x), F::zero()))
        })
        .collect::<Vec<Complex<F>>>();

    let pool = threading_policy.make_pool(size)?;

    transform_lines(
        &mut arena,
        width,
        transform,
        TransformDirection::Forward,
        pool.as_ref(),
    );

    let mut columns = transpose(&arena, width, height)?;
    drop(arena);

    transform_lines(
        &mut columns,
        height,
        transform,
        TransformDirection::Forward,
        pool.as_ref(),
    );

    let data = transpose(&columns, height, width)?;

    tracing::debug!(
        width = width,
        height = height,
        "forward spectrum computed"
    );

    Spectrum::from_raw(data, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{zero_pad, DirectDft, ImageSize, SpectralImage};

    #[test]
    fn test_impulse_gives_flat_spectrum() {
        let mut src = vec![0u8; 4 * 3];
        src[0] = 200;
        let image = SpectralImage::borrow(&src, 4, 3);
        let padded = zero_pad::<u8, f64>(&image).unwrap();
        let spectrum = forward_2d(&padded, &DirectDft, ThreadingPolicy::Single).unwrap();
        assert_eq!(spectrum.size(), padded.size());
        for (i, v) in spectrum.data().iter().enumerate() {
            let diff = (v.norm() - 200.).abs();
            assert!(
                diff <= 1e-9,
                "Diff expected to be less than 1e-9 but it was {diff} at {i}"
            );
        }
    }

    #[test]
    fn test_constant_scenario_peaks_at_center() {
        let src = vec![100u8; 9];
        let image = SpectralImage::borrow(&src, 3, 3);
        let padded = zero_pad::<u8, f64>(&image).unwrap();
        let spectrum = forward_2d(&padded, &DirectDft, ThreadingPolicy::Single).unwrap();
        assert_eq!(spectrum.center(), (2, 2));

        let (cu, cv) = spectrum.center();
        let center = spectrum.at(cu, cv).norm();
        let max = spectrum
            .data()
            .iter()
            .map(|x| x.norm())
            .fold(0f64, f64::max);
        assert!(
            (center - max).abs() <= 1e-9,
            "Center magnitude {center} expected to be the maximum {max}"
        );

        // Parseval: Σ|F|² = PQ·Σ|f|²
        let expected_energy = 25. * 9. * 100. * 100.;
        let diff = (spectrum.energy() - expected_energy).abs() / expected_energy;
        assert!(diff <= 1e-12, "Relative energy diff {diff}");
    }

    #[test]
    fn test_threaded_matches_single() {
        let src = (0..6 * 5).map(|i| (i * 37 % 256) as u8).collect::<Vec<_>>();
        let image = SpectralImage::borrow(&src, 6, 5);
        let padded = zero_pad::<u8, f64>(&image).unwrap();
        let single = forward_2d(&padded, &DirectDft, ThreadingPolicy::Single).unwrap();
        let threaded = forward_2d(
            &padded,
            &DirectDft,
            ThreadingPolicy::Fixed(std::num::NonZeroUsize::new(4).unwrap()),
        )
        .unwrap();
        assert_eq!(single, threaded);
    }

    #[test]
    fn test_coefficients_match_double_sum() {
        // 3 rows x 4 columns, padded to 5 x 7
        #[rustfmt::skip]
        let src = [
            3u8, 17, 250, 41,
            90, 6, 128, 77,
            12, 201, 55, 164,
        ];
        let image = SpectralImage::borrow(&src, 4, 3);
        let padded = zero_pad::<u8, f64>(&image).unwrap();
        let spectrum = forward_2d(&padded, &DirectDft, ThreadingPolicy::Single).unwrap();
        let size = spectrum.size();
        assert_eq!(size, ImageSize::new(7, 5));

        let (p, q) = (size.height as f64, size.width as f64);
        for u in 0..size.height {
            for v in 0..size.width {
                let mut expected = Complex::new(0f64, 0.);
                for i in 0..3usize {
                    for j in 0..4usize {
                        let sign = if (i + j) % 2 == 0 { 1. } else { -1. };
                        let angle = -std::f64::consts::TAU
                            * ((u * i) as f64 / p + (v * j) as f64 / q);
                        expected += Complex::new(angle.cos(), angle.sin())
                            * (src[i * 4 + j] as f64 * sign);
                    }
                }
                let diff = (spectrum.at(u, v) - expected).norm();
                assert!(
                    diff <= 1e-9,
                    "Diff expected to be less than 1e-9 but it was {diff} at ({u}, {v})"
                );
            }
        }
    }
}
