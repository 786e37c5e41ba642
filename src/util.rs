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

use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpectralError {
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    MinimumStrideSizeMismatch(MismatchedSize),
    ImagesMustMatch,
    SpectrumSizeMismatch(MismatchedSize),
    ExceedingPointerSize,
    /// Input raster could not be opened or read
    InputOpen(String),
    /// Input raster has a wrong magic or an unparsable header
    MalformedHeader(String),
    /// Output raster could not be written
    OutputWrite(String),
    ThreadPool(String),
    Transpose,
}

impl Error for SpectralError {}

impl std::fmt::Display for SpectralError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SpectralError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            SpectralError::MinimumStrideSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum stride must have size at least {} but it is {}",
                size.expected, size.received
            )),
            SpectralError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            SpectralError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
            SpectralError::SpectrumSizeMismatch(size) => f.write_fmt(format_args!(
                "Spectrum size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            SpectralError::ExceedingPointerSize => {
                f.write_str("Padded image bounds exceed pointer capacity")
            }
            SpectralError::InputOpen(reason) => {
                f.write_fmt(format_args!("Unable to open input raster: {reason}"))
            }
            SpectralError::MalformedHeader(reason) => {
                f.write_fmt(format_args!("Malformed raster header: {reason}"))
            }
            SpectralError::OutputWrite(reason) => {
                f.write_fmt(format_args!("Unable to write output raster: {reason}"))
            }
            SpectralError::ThreadPool(reason) => {
                f.write_fmt(format_args!("Unable to create thread pool: {reason}"))
            }
            SpectralError::Transpose => f.write_str("Matrix transposition failed"),
        }
    }
}

pub(crate) fn check_slice_size<T>(
    arr: &[T],
    stride: usize,
    width: usize,
    height: usize,
) -> Result<(), SpectralError> {
    if width == 0 || height == 0 {
        return Err(SpectralError::ZeroBaseSize);
    }
    if arr.len() < stride * (height - 1) + width {
        return Err(SpectralError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: stride * height,
            received: arr.len(),
        }));
    }
    if stride < width {
        return Err(SpectralError::MinimumStrideSizeMismatch(MismatchedSize {
            expected: width,
            received: stride,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_slice_size() {
        let data = vec![0u8; 12];
        assert_eq!(check_slice_size(&data, 4, 4, 3), Ok(()));
        assert_eq!(
            check_slice_size(&data, 4, 4, 4),
            Err(SpectralError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: 16,
                received: 12,
            }))
        );
        assert_eq!(
            check_slice_size(&data, 2, 4, 2),
            Err(SpectralError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: 4,
                received: 2,
            }))
        );
        assert_eq!(
            check_slice_size(&data, 4, 0, 3),
            Err(SpectralError::ZeroBaseSize)
        );
    }

    #[test]
    fn test_error_display() {
        let err = SpectralError::MalformedHeader("expected P5 magic".to_string());
        assert_eq!(err.to_string(), "Malformed raster header: expected P5 magic");
    }
}
