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

#![cfg_attr(docsrs, feature(doc_cfg))]
//! Frequency domain filtering of single plane images.
//!
//! An image is zero padded to `(2M - 1) x (2N - 1)`, transformed with a centered
//! separable 2D DFT, filtered by an ideal low pass, inverted and cropped back to `M x N`.
//!
//! ```
//! use libspectral::{ideal_low_pass_filter, SpectralImage, SpectralImageMut, ThreadingPolicy, TransformKind};
//!
//! let src = vec![100u8; 4 * 3];
//! let image = SpectralImage::borrow(&src, 4, 3);
//! let mut dst = SpectralImageMut::default();
//! ideal_low_pass_filter(&image, &mut dst, 160., TransformKind::Direct, ThreadingPolicy::Single).unwrap();
//! assert_eq!(dst.data.borrow(), src.as_slice());
//! ```

mod config;
mod forward;
mod image;
mod img_size;
mod inverse;
mod lines;
mod low_pass;
mod padding;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod pgm;
mod pipeline;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod runner;
mod spectrum;
mod threading_policy;
mod to_storage;
mod transform;
mod util;

pub use config::{output_path, PipelineConfig};
pub use forward::forward_2d;
pub use image::{BufferStore, SpectralImage, SpectralImageMut};
pub use img_size::ImageSize;
pub use inverse::inverse_2d;
pub use low_pass::{ideal_low_pass, pass_through_cutoff};
pub use padding::{centering_sign, padded_size, zero_pad, PaddedImage};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use pgm::{decode_pgm, encode_pgm, read_pgm, write_pgm};
pub use pipeline::{ideal_low_pass_filter, FilteredImage, LowPassPipeline};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use runner::{run_pipeline, PipelineReport};
pub use spectrum::Spectrum;
pub use threading_policy::ThreadingPolicy;
pub use to_storage::ToStorage;
pub use transform::{
    DirectDft, SpectralNumber, Transform1D, TransformDirection, TransformEngineNumber,
    TransformKind,
};
#[cfg(feature = "fft")]
#[cfg_attr(docsrs, doc(cfg(feature = "fft")))]
pub use transform::FastDft;
pub use util::{MismatchedSize, SpectralError};
