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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use libspectral::{
    ideal_low_pass_filter, SpectralImage, SpectralImageMut, ThreadingPolicy, TransformKind,
};

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u8,
    pub src_height: u8,
    pub value: u8,
    pub cutoff: u16,
    pub fraction: u8,
    pub threading: bool,
    pub fast: bool,
}

fuzz_target!(|data: SrcImage| {
    if data.src_width > 24 || data.src_height > 24 {
        return;
    }
    if data.src_width == 0 || data.src_height == 0 {
        return;
    }
    let threading_policy = if data.threading {
        ThreadingPolicy::Adaptive
    } else {
        ThreadingPolicy::Single
    };
    let kind = if data.fast {
        #[cfg(feature = "fft")]
        {
            TransformKind::Fast
        }
        #[cfg(not(feature = "fft"))]
        {
            TransformKind::Direct
        }
    } else {
        TransformKind::Direct
    };
    let width = data.src_width as u32;
    let height = data.src_height as u32;
    let src = (0..width * height)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(data.value))
        .collect::<Vec<u8>>();
    let src_image = SpectralImage::borrow(&src, width, height);
    let mut dst_image = SpectralImageMut::default();
    let cutoff = data.cutoff as f64 + data.fraction as f64 / 256.;
    ideal_low_pass_filter(&src_image, &mut dst_image, cutoff, kind, threading_policy).unwrap();
    assert_eq!(dst_image.width, width);
    assert_eq!(dst_image.height, height);
});
