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
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftDirection, FftNum, FftPlanner};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type PlanCache<F> = HashMap<(usize, TransformDirection), Arc<dyn Fft<F>>>;

/// Fast Fourier transform backed by `rustfft`.
///
/// Produces the same coefficients as [DirectDft](crate::DirectDft) within floating point tolerance,
/// plans are cached per length and direction.
pub struct FastDft<F: FftNum> {
    plans: Mutex<PlanCache<F>>,
}

impl<F: FftNum> Default for FastDft<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FftNum> FastDft<F> {
    pub fn new() -> Self {
        FastDft {
            plans: Mutex::new(HashMap::new()),
        }
    }

    fn plan(&self, length: usize, direction: TransformDirection) -> Arc<dyn Fft<F>> {
        let mut plans = match self.plans.lock() {
            Ok(plans) => plans,
            Err(poisoned) => poisoned.into_inner(),
        };
        plans
            .entry((length, direction))
            .or_insert_with(|| {
                let fft_direction = match direction {
                    TransformDirection::Forward => FftDirection::Forward,
                    TransformDirection::Inverse => FftDirection::Inverse,
                };
                FftPlanner::<F>::new().plan_fft(length, fft_direction)
            })
            .clone()
    }
}

impl<F: SpectralNumber + FftNum> FastDft<F> {
    fn run(&self, input: &[Complex<F>], direction: TransformDirection) -> Vec<Complex<F>> {
        if input.is_empty() {
            return Vec::new();
        }
        let fft = self.plan(input.len(), direction);
        let mut buffer = input.to_vec();
        fft.process(&mut buffer);
        if direction == TransformDirection::Inverse {
            let norm = F::one() / F::from_index(input.len());
            for v in buffer.iter_mut() {
                *v = *v * norm;
            }
        }
        buffer
    }
}

impl<F: SpectralNumber + FftNum> Transform1D<F> for FastDft<F> {
    fn forward(&self, input: &[Complex<F>]) -> Vec<Complex<F>> {
        self.run(input, TransformDirection::Forward)
    }

    fn inverse(&self, input: &[Complex<F>]) -> Vec<Complex<F>> {
        self.run(input, TransformDirection::Inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DirectDft;

    #[test]
    fn test_fast_matches_direct() {
        let fast = FastDft::<f64>::new();
        for length in [1usize, 2, 3, 5, 8, 13, 27] {
            let input = (0..length)
                .map(|i| Complex::new((i % 4) as f64 * 10.0 - 7.0, (i % 3) as f64))
                .collect::<Vec<_>>();
            let expected = DirectDft.forward(&input);
            let output = fast.forward(&input);
            for (i, (a, b)) in output.iter().zip(expected.iter()).enumerate() {
                let diff = (a - b).norm();
                assert!(
                    diff <= 1e-9,
                    "Diff expected to be less than 1e-9 but it was {diff} at {i}, length {length}"
                );
            }
            let restored = fast.inverse(&output);
            for (i, (a, b)) in restored.iter().zip(input.iter()).enumerate() {
                let diff = (a - b).norm();
                assert!(
                    diff <= 1e-9,
                    "Diff expected to be less than 1e-9 but it was {diff} at {i}, length {length}"
                );
            }
        }
    }
}
