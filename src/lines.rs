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
use crate::SpectralError;
use fast_transpose::{transpose_arbitrary, FlipMode, FlopMode};
use num_complex::Complex;
use rayon::iter::ParallelIterator;
use rayon::prelude::ParallelSliceMut;

/// Plain transpose of a row-major `width x height` matrix into `height x width`
pub(crate) fn transpose<T: Copy + Default>(
    matrix: &[T],
    width: usize,
    height: usize,
) -> Result<Vec<T>, SpectralError> {
    if matrix.is_empty() {
        return Ok(Vec::new());
    }

    let mut transposed = vec![T::default(); width * height];

    transpose_arbitrary(
        matrix,
        width,
        &mut transposed,
        height,
        width,
        height,
        FlipMode::NoFlip,
        FlopMode::Flop,
    )
    .map_err(|_| SpectralError::Transpose)?;

    Ok(transposed)
}

/// Replaces every line of `line_length` items with its transform.
///
/// Lines are independent, when pool is present they are spread across it.
pub(crate) fn transform_lines<F, Tr>(
    data: &mut [Complex<F>],
    line_length: usize,
    transform: &Tr,
    direction: TransformDirection,
    pool: Option<&rayon::ThreadPool>,
) where
    F: SpectralNumber,
    Tr: Transform1D<F> + ?Sized,
{
    let execute = |line: &mut [Complex<F>]| {
        let transformed = transform.execute(line, direction);
        line.copy_from_slice(&transformed);
    };
    if let Some(pool) = pool {
        pool.install(|| {
            data.par_chunks_exact_mut(line_length).for_each(execute);
        });
    } else {
        data.chunks_exact_mut(line_length).for_each(execute);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DirectDft;

    #[test]
    fn test_transpose() {
        #[rustfmt::skip]
        let matrix = [
            1, 2, 3,
            4, 5, 6,
        ];
        let transposed = transpose(&matrix, 3, 2).unwrap();
        assert_eq!(transposed, vec![1, 4, 2, 5, 3, 6]);
        let restored = transpose(&transposed, 2, 3).unwrap();
        assert_eq!(restored, matrix.to_vec());
    }

    #[test]
    fn test_transpose_keeps_columns_in_order() {
        #[rustfmt::skip]
        let matrix = [
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
        ];
        let transposed = transpose(&matrix, 4, 3).unwrap();
        #[rustfmt::skip]
        let expected = vec![
            1, 5, 9,
            2, 6, 10,
            3, 7, 11,
            4, 8, 12,
        ];
        assert_eq!(transposed, expected);
        assert_eq!(transpose(&transposed, 3, 4).unwrap(), matrix.to_vec());
    }

    #[test]
    fn test_pool_matches_single_thread() {
        let source = (0..35)
            .map(|i| Complex::new((i % 6) as f64, (i % 4) as f64 * 0.5))
            .collect::<Vec<_>>();
        let mut single = source.clone();
        transform_lines(&mut single, 7, &DirectDft, TransformDirection::Forward, None);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(3)
            .build()
            .unwrap();
        let mut threaded = source.clone();
        transform_lines(
            &mut threaded,
            7,
            &DirectDft,
            TransformDirection::Forward,
            Some(&pool),
        );
        assert_eq!(single, threaded);
    }
}
