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

use crate::to_storage::ToStorage;
use crate::transform::{SpectralNumber, Transform1D, TransformEngineNumber};
use crate::{
    forward_2d, ideal_low_pass, inverse_2d, zero_pad, ImageSize, SpectralError, SpectralImage,
    SpectralImageMut, Spectrum, ThreadingPolicy, TransformKind,
};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// One filtered raster tagged with the cutoff that produced it
pub struct FilteredImage<T: Clone + Copy + Default + Debug + 'static> {
    pub cutoff: f64,
    pub image: SpectralImageMut<'static, T>,
}

/// Ideal low pass filtering of one raster against several cutoffs.
///
/// Spectrum is computed once on construction. Every cutoff filters its own copy of it,
/// so results never depend on processing order.
pub struct LowPassPipeline<F: SpectralNumber = f64> {
    spectrum: Spectrum<F>,
    source_size: ImageSize,
    transform: Box<dyn Transform1D<F>>,
    threading_policy: ThreadingPolicy,
}

impl<F: SpectralNumber> LowPassPipeline<F> {
    /// Pads the image to `(2M - 1) x (2N - 1)` and computes its centered spectrum
    pub fn new<T>(
        image: &SpectralImage<T>,
        transform: Box<dyn Transform1D<F>>,
        threading_policy: ThreadingPolicy,
    ) -> Result<Self, SpectralError>
    where
        T: Copy + Default + Debug + AsPrimitive<F>,
    {
        let padded = zero_pad::<T, F>(image)?;
        let spectrum = forward_2d(&padded, transform.as_ref(), threading_policy)?;
        Ok(LowPassPipeline {
            spectrum,
            source_size: padded.source_size(),
            transform,
            threading_policy,
        })
    }

    /// Same as [LowPassPipeline::new] with engine picked by [TransformKind]
    pub fn with_kind<T>(
        image: &SpectralImage<T>,
        kind: TransformKind,
        threading_policy: ThreadingPolicy,
    ) -> Result<Self, SpectralError>
    where
        T: Copy + Default + Debug + AsPrimitive<F>,
        F: TransformEngineNumber,
    {
        Self::new(image, kind.make_transform::<F>(), threading_policy)
    }

    /// Unfiltered spectrum
    #[inline]
    pub fn spectrum(&self) -> &Spectrum<F> {
        &self.spectrum
    }

    #[inline]
    pub fn source_size(&self) -> ImageSize {
        self.source_size
    }

    /// Filters a copy of the spectrum and returns unclamped reconstructed samples
    pub fn reconstruct(&self, cutoff: f64) -> Result<Vec<F>, SpectralError> {
        let mut filtered = self.spectrum.clone();
        let retained = ideal_low_pass(&mut filtered, cutoff);
        tracing::debug!(cutoff = cutoff, retained = retained, "spectrum filtered");
        inverse_2d(
            filtered,
            self.source_size,
            self.transform.as_ref(),
            self.threading_policy,
        )
    }

    /// Reconstructs filtered image into destination, samples are clamped to storage range
    pub fn filter<T>(
        &self,
        cutoff: f64,
        dst: &mut SpectralImageMut<T>,
    ) -> Result<(), SpectralError>
    where
        T: Copy + Default + Debug + 'static,
        F: ToStorage<T>,
    {
        dst.check_layout(Some(self.source_size))?;
        let samples = self.reconstruct(cutoff)?;
        for (dst, src) in dst
            .rows_mut()
            .zip(samples.chunks_exact(self.source_size.width))
        {
            for (dst, &src) in dst.iter_mut().zip(src.iter()) {
                *dst = src.to_();
            }
        }
        Ok(())
    }

    /// Filters every cutoff in order, output `i` belongs to `cutoffs[i]`
    pub fn filter_all<T>(&self, cutoffs: &[f64]) -> Result<Vec<FilteredImage<T>>, SpectralError>
    where
        T: Copy + Default + Debug + 'static,
        F: ToStorage<T>,
    {
        cutoffs
            .iter()
            .map(|&cutoff| -> Result<FilteredImage<T>, SpectralError> {
                let mut image = SpectralImageMut::default();
                self.filter(cutoff, &mut image)?;
                Ok(FilteredImage { cutoff, image })
            })
            .collect()
    }
}

/// Performs ideal low pass filtering on single plane image.
///
/// Image is zero padded to `(2M - 1) x (2N - 1)`, transformed with a centered 2D DFT,
/// coefficients farther than `cutoff` from spectrum center are zeroed, then image is
/// reconstructed, cropped back to `M x N` and clamped to destination storage range.
///
/// # Arguments
///
/// * `src`: Single plane image.
/// * `dst`: Destination image, owned storage is resized to source extent.
/// * `cutoff`: Radius in frequency index units, coefficients exactly at it are kept.
/// * `kind`: Transform engine, see [TransformKind].
/// * `threading_policy`: Threads usage policy.
///
pub fn ideal_low_pass_filter<T>(
    src: &SpectralImage<T>,
    dst: &mut SpectralImageMut<T>,
    cutoff: f64,
    kind: TransformKind,
    threading_policy: ThreadingPolicy,
) -> Result<(), SpectralError>
where
    T: Copy + Default + Debug + AsPrimitive<f64> + 'static,
    f64: ToStorage<T>,
{
    let pipeline = LowPassPipeline::<f64>::with_kind(src, kind, threading_policy)?;
    pipeline.filter(cutoff, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pass_through_cutoff, DirectDft};

    fn make_gradient(width: usize, height: usize) -> Vec<u8> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| ((x * 40 + y * 25) % 256) as u8))
            .collect()
    }

    #[test]
    fn test_large_cutoff_is_round_trip() {
        let src = make_gradient(6, 5);
        let image = SpectralImage::borrow(&src, 6, 5);
        let pipeline =
            LowPassPipeline::<f64>::new(&image, Box::new(DirectDft), ThreadingPolicy::Single)
                .unwrap();
        let cutoff = pass_through_cutoff(pipeline.spectrum());
        let samples = pipeline.reconstruct(cutoff).unwrap();
        for (i, (&a, &b)) in samples.iter().zip(src.iter()).enumerate() {
            let diff = (a - b as f64).abs();
            assert!(
                diff <= 1e-6,
                "Diff expected to be less than 1e-6 but it was {diff} at {i}"
            );
        }
        let mut dst = SpectralImageMut::<u8>::default();
        pipeline.filter(cutoff + 100., &mut dst).unwrap();
        assert_eq!(dst.data.borrow(), src.as_slice());
    }

    #[test]
    fn test_cutoffs_are_order_independent() {
        let src = make_gradient(7, 4);
        let image = SpectralImage::borrow(&src, 7, 4);
        let pipeline =
            LowPassPipeline::<f64>::new(&image, Box::new(DirectDft), ThreadingPolicy::Single)
                .unwrap();
        let untouched = pipeline.spectrum().clone();

        let forward = pipeline.filter_all::<u8>(&[1., 3., 100.]).unwrap();
        let backward = pipeline.filter_all::<u8>(&[100., 3., 1.]).unwrap();
        assert_eq!(pipeline.spectrum(), &untouched);

        assert_eq!(forward.len(), 3);
        for (a, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(a.cutoff, b.cutoff);
            assert_eq!(a.image.data.borrow(), b.image.data.borrow());
        }
        assert_eq!(forward[2].image.data.borrow(), src.as_slice());
    }

    #[test]
    fn test_filter_all_wide_storage() {
        let src = (0..20u16).map(|i| i * 1000).collect::<Vec<_>>();
        let image = SpectralImage::borrow(&src, 5, 4);
        let pipeline =
            LowPassPipeline::<f64>::new(&image, Box::new(DirectDft), ThreadingPolicy::Single)
                .unwrap();
        let outputs: Vec<FilteredImage<u16>> = pipeline.filter_all(&[0.5, 100.]).unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].cutoff, 0.5);
        assert_eq!(outputs[1].image.size(), ImageSize::new(5, 4));
        assert_eq!(outputs[1].image.data.borrow(), src.as_slice());
    }

    #[test]
    fn test_output_is_clamped() {
        // sharp edge rings after hard cutoff
        let width = 8usize;
        let height = 8usize;
        let src = (0..height)
            .flat_map(|_| (0..width).map(|x| if x < 4 { 0u8 } else { 255u8 }))
            .collect::<Vec<_>>();
        let image = SpectralImage::borrow(&src, width as u32, height as u32);
        let pipeline =
            LowPassPipeline::<f64>::new(&image, Box::new(DirectDft), ThreadingPolicy::Single)
                .unwrap();
        let samples = pipeline.reconstruct(3.).unwrap();

        let mut dst = SpectralImageMut::<u8>::default();
        pipeline.filter(3., &mut dst).unwrap();
        for (&stored, &raw) in dst.data.borrow().iter().zip(samples.iter()) {
            let expected = if raw < 0. {
                0u8
            } else if raw > 255. {
                255u8
            } else {
                raw.round() as u8
            };
            assert_eq!(stored, expected, "Raw sample {raw}");
        }
    }

    #[test]
    fn test_zero_cutoff_keeps_only_center_coefficient() {
        let src = make_gradient(4, 4);
        let image = SpectralImage::borrow(&src, 4, 4);
        let pipeline =
            LowPassPipeline::<f64>::new(&image, Box::new(DirectDft), ThreadingPolicy::Single)
                .unwrap();
        let spectrum = pipeline.spectrum();
        let (cu, cv) = spectrum.center();
        let coefficient = spectrum.at(cu, cv);
        let size = spectrum.size();

        let samples = pipeline.reconstruct(0.).unwrap();
        for y in 0..4usize {
            for x in 0..4usize {
                let angle = std::f64::consts::TAU
                    * (cu as f64 * y as f64 / size.height as f64
                        + cv as f64 * x as f64 / size.width as f64);
                let sign = if (x + y) % 2 == 0 { 1. } else { -1. };
                let expected = (coefficient
                    * num_complex::Complex::new(angle.cos(), angle.sin()))
                .re
                    / size.area() as f64
                    * sign;
                let diff = (samples[y * 4 + x] - expected).abs();
                assert!(
                    diff <= 1e-9,
                    "Diff expected to be less than 1e-9 but it was {diff} at ({y}, {x})"
                );
            }
        }
    }

    #[test]
    fn test_ideal_low_pass_filter_borrowed_destination() {
        let src = make_gradient(5, 3);
        let image = SpectralImage::borrow(&src, 5, 3);
        let mut dst_data = vec![0u8; 15];
        let mut dst = SpectralImageMut::borrow(&mut dst_data, 5, 3);
        ideal_low_pass_filter(
            &image,
            &mut dst,
            1000.,
            TransformKind::Direct,
            ThreadingPolicy::Adaptive,
        )
        .unwrap();
        assert_eq!(dst_data, src);
    }

    #[test]
    fn test_mismatched_borrowed_destination() {
        let src = make_gradient(5, 3);
        let image = SpectralImage::borrow(&src, 5, 3);
        let mut dst_data = vec![0u8; 15];
        let mut dst = SpectralImageMut::borrow(&mut dst_data, 3, 5);
        let result = ideal_low_pass_filter(
            &image,
            &mut dst,
            10.,
            TransformKind::Direct,
            ThreadingPolicy::Single,
        );
        assert_eq!(result, Err(SpectralError::ImagesMustMatch));
    }

    #[cfg(feature = "fft")]
    #[test]
    fn test_fast_engine_matches_direct() {
        let src = make_gradient(9, 6);
        let image = SpectralImage::borrow(&src, 9, 6);
        let direct =
            LowPassPipeline::<f64>::with_kind(&image, TransformKind::Direct, ThreadingPolicy::Single)
                .unwrap();
        let fast =
            LowPassPipeline::<f64>::with_kind(&image, TransformKind::Fast, ThreadingPolicy::Single)
                .unwrap();
        for cutoff in [0., 2.5, 4., 50.] {
            let a = direct.reconstruct(cutoff).unwrap();
            let b = fast.reconstruct(cutoff).unwrap();
            for (i, (&a, &b)) in a.iter().zip(b.iter()).enumerate() {
                let diff = (a - b).abs();
                assert!(
                    diff <= 1e-6,
                    "Diff expected to be less than 1e-6 but it was {diff} at {i}, cutoff {cutoff}"
                );
            }
        }
    }
}
