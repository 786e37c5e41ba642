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

use crate::transform::{SpectralNumber, Transform1D, TransformDirection};
use num_complex::Complex;

/// Direct discrete Fourier transform.
///
/// Every output coefficient is an explicit `O(L)` sum, so a full sequence costs `O(L²)`.
/// Any positive length is supported, there is no power of two requirement.
#[derive(Debug, Copy, Clone, Default)]
pub struct DirectDft;

/// `exp(∓2πi·m/L)` for `m` in `0..L`, sign chosen by direction.
fn make_twiddles<F: SpectralNumber>(length: usize, direction: TransformDirection) -> Vec<Complex<F>> {
    let sign = match direction {
        TransformDirection::Forward => -F::one(),
        TransformDirection::Inverse => F::one(),
    };
    let step = sign * F::TAU() / F::from_index(length);
    (0..length)
        .map(|m| Complex::from_polar(F::one(), step * F::from_index(m)))
        .collect()
}

fn direct_dft<F: SpectralNumber>(
    input: &[Complex<F>],
    direction: TransformDirection,
) -> Vec<Complex<F>> {
    let length = input.len();
    if length == 0 {
        return Vec::new();
    }
    let twiddles = make_twiddles::<F>(length, direction);

    let mut output = vec![Complex::<F>::default(); length];
    for (k, dst) in output.iter_mut().enumerate() {
        let mut sum = Complex::new(F::zero(), F::zero());
        // twiddle index is k·n mod L, advanced by k per sample
        let mut index = 0usize;
        for &sample in input.iter() {
            sum = sum + sample * twiddles[index];
            index += k;
            if index >= length {
                index -= length;
            }
        }
        *dst = sum;
    }

    if direction == TransformDirection::Inverse {
        let norm = F::one() / F::from_index(length);
        for v in output.iter_mut() {
            *v = *v * norm;
        }
    }
    output
}

impl<F: SpectralNumber> Transform1D<F> for DirectDft {
    fn forward(&self, input: &[Complex<F>]) -> Vec<Complex<F>> {
        direct_dft(input, TransformDirection::Forward)
    }

    fn inverse(&self, input: &[Complex<F>]) -> Vec<Complex<F>> {
        direct_dft(input, TransformDirection::Inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_dft(input: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let length = input.len() as f64;
        (0..input.len())
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(n, &x)| {
                        let angle = -2. * std::f64::consts::PI * (k * n) as f64 / length;
                        x * Complex::new(angle.cos(), angle.sin())
                    })
                    .sum::<Complex<f64>>()
            })
            .collect()
    }

    fn make_sequence(length: usize) -> Vec<Complex<f64>> {
        (0..length)
            .map(|i| Complex::new((i * 7 % 11) as f64 - 3.5, (i * 3 % 5) as f64 * 0.25))
            .collect()
    }

    #[test]
    fn test_direct_matches_definition() {
        for length in [1usize, 2, 3, 5, 7, 12, 17] {
            let input = make_sequence(length);
            let expected = naive_dft(&input);
            let output = DirectDft.forward(&input);
            for (i, (a, b)) in output.iter().zip(expected.iter()).enumerate() {
                let diff = (a - b).norm();
                assert!(
                    diff <= 1e-9,
                    "Diff expected to be less than 1e-9 but it was {diff} at {i}, length {length}"
                );
            }
        }
    }

    #[test]
    fn test_inverse_restores_sequence() {
        for length in [1usize, 4, 9, 31] {
            let input = make_sequence(length);
            let restored = DirectDft.inverse(&DirectDft.forward(&input));
            for (i, (a, b)) in restored.iter().zip(input.iter()).enumerate() {
                let diff = (a - b).norm();
                assert!(
                    diff <= 1e-9,
                    "Diff expected to be less than 1e-9 but it was {diff} at {i}, length {length}"
                );
            }
        }
    }

    #[test]
    fn test_impulse_has_flat_spectrum() {
        let mut input = vec![Complex::new(0.0f64, 0.0); 9];
        input[0] = Complex::new(42.0, 0.0);
        for (i, v) in DirectDft.forward(&input).iter().enumerate() {
            let diff = (v - Complex::new(42.0, 0.0)).norm();
            assert!(diff <= 1e-9, "Diff expected to be less than 1e-9 but it was {diff} at {i}");
        }
    }

    #[test]
    fn test_inverse_is_normalized() {
        let input = vec![Complex::new(6.0f32, 0.0); 6];
        let output = DirectDft.inverse(&input);
        assert!((output[0].re - 6.0).abs() <= 1e-4);
        for v in output.iter().skip(1) {
            assert!(v.norm() <= 1e-4);
        }
    }

    #[test]
    fn test_empty_sequence() {
        let output: Vec<Complex<f64>> = DirectDft.forward(&[]);
        assert!(output.is_empty());
    }
}
