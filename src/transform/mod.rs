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

mod direct;
#[cfg(feature = "fft")]
mod fast;

pub use direct::DirectDft;
#[cfg(feature = "fft")]
pub use fast::FastDft;

use num_complex::Complex;
use num_traits::{AsPrimitive, Float, FloatConst};
use std::fmt::Debug;

/// Floating point type the spectral transforms work in, only `f32` and `f64` are supported.
pub trait SpectralNumber:
    Float + FloatConst + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>
{
    fn from_index(index: usize) -> Self;
}

impl SpectralNumber for f32 {
    #[inline]
    fn from_index(index: usize) -> Self {
        index as f32
    }
}

impl SpectralNumber for f64 {
    #[inline]
    fn from_index(index: usize) -> Self {
        index as f64
    }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TransformDirection {
    /// `X[k] = Σ x[n]·exp(−2πi·k·n/L)`
    Forward,
    /// `x[n] = (1/L)·Σ X[k]·exp(2πi·k·n/L)`
    Inverse,
}

/// One dimensional discrete Fourier transform of a complex sequence of arbitrary length.
///
/// Two dimensional stages only see this interface, so engines are interchangeable.
/// The inverse is normalized by `1/L`, forward is not.
pub trait Transform1D<F: SpectralNumber>: Send + Sync {
    fn forward(&self, input: &[Complex<F>]) -> Vec<Complex<F>>;

    fn inverse(&self, input: &[Complex<F>]) -> Vec<Complex<F>>;

    #[inline]
    fn execute(&self, input: &[Complex<F>], direction: TransformDirection) -> Vec<Complex<F>> {
        match direction {
            TransformDirection::Forward => self.forward(input),
            TransformDirection::Inverse => self.inverse(input),
        }
    }
}

/// Selects transform engine
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub enum TransformKind {
    /// Direct O(L²) summation
    #[default]
    Direct,
    /// Mixed radix FFT provided by `rustfft`
    #[cfg(feature = "fft")]
    #[cfg_attr(docsrs, doc(cfg(feature = "fft")))]
    Fast,
}

impl TransformKind {
    pub fn make_transform<F>(self) -> Box<dyn Transform1D<F>>
    where
        F: SpectralNumber + TransformEngineNumber,
    {
        match self {
            TransformKind::Direct => Box::new(DirectDft),
            #[cfg(feature = "fft")]
            TransformKind::Fast => Box::new(FastDft::<F>::new()),
        }
    }
}

/// Float types every engine of this build can work with
#[cfg(feature = "fft")]
pub trait TransformEngineNumber: rustfft::FftNum {}
#[cfg(feature = "fft")]
impl<T: rustfft::FftNum> TransformEngineNumber for T {}

/// Float types every engine of this build can work with
#[cfg(not(feature = "fft"))]
pub trait TransformEngineNumber {}
#[cfg(not(feature = "fft"))]
impl<T> TransformEngineNumber for T {}

impl<F: SpectralNumber, Tr: Transform1D<F> + ?Sized> Transform1D<F> for Box<Tr> {
    #[inline]
    fn forward(&self, input: &[Complex<F>]) -> Vec<Complex<F>> {
        self.as_ref().forward(input)
    }

    #[inline]
    fn inverse(&self, input: &[Complex<F>]) -> Vec<Complex<F>> {
        self.as_ref().inverse(input)
    }
}
