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

use crate::image::BufferStore;
use crate::{SpectralError, SpectralImage, SpectralImageMut};
use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use std::io::Cursor;
use std::path::Path;

const PGM_MAGIC: &[u8] = b"P5";

/// Decodes binary graymap (`P5`) bytes into an owned single plane image
pub fn decode_pgm(bytes: &[u8]) -> Result<SpectralImageMut<'static, u8>, SpectralError> {
    if !bytes.starts_with(PGM_MAGIC) {
        return Err(SpectralError::MalformedHeader(
            "expected P5 magic".to_string(),
        ));
    }
    let decoder = PnmDecoder::new(Cursor::new(bytes))
        .map_err(|e| SpectralError::MalformedHeader(e.to_string()))?;
    let gray = DynamicImage::from_decoder(decoder)
        .map_err(|e| SpectralError::MalformedHeader(e.to_string()))?
        .into_luma8();
    let (width, height) = gray.dimensions();
    Ok(SpectralImageMut {
        data: BufferStore::Owned(gray.into_raw()),
        width,
        height,
        stride: width,
    })
}

/// Reads binary graymap from disk
pub fn read_pgm(path: impl AsRef<Path>) -> Result<SpectralImageMut<'static, u8>, SpectralError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| SpectralError::InputOpen(format!("{}: {e}", path.display())))?;
    decode_pgm(&bytes)
}

/// Encodes image as binary graymap with maxval 255
pub fn encode_pgm(image: &SpectralImage<u8>) -> Result<Vec<u8>, SpectralError> {
    image.check_layout()?;
    let packed = image.rows().flatten().copied().collect::<Vec<u8>>();
    let mut encoded = Vec::new();
    PnmEncoder::new(&mut encoded)
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
        .write_image(&packed, image.width, image.height, ExtendedColorType::L8)
        .map_err(|e| SpectralError::OutputWrite(e.to_string()))?;
    Ok(encoded)
}

/// Writes binary graymap to disk
pub fn write_pgm(path: impl AsRef<Path>, image: &SpectralImage<u8>) -> Result<(), SpectralError> {
    let path = path.as_ref();
    let encoded = encode_pgm(image)?;
    std::fs::write(path, encoded)
        .map_err(|e| SpectralError::OutputWrite(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_comment() {
        let mut bytes = b"P5\n# knee scan\n3 2\n255\n".to_vec();
        bytes.extend_from_slice(&[0, 10, 20, 200, 250, 255]);
        let image = decode_pgm(&bytes).unwrap();
        assert_eq!(image.width, 3);
        assert_eq!(image.height, 2);
        assert_eq!(image.data.borrow(), &[0u8, 10, 20, 200, 250, 255]);
    }

    #[test]
    fn test_encode_then_decode() {
        let src = (0..35).map(|i| (i * 7) as u8).collect::<Vec<_>>();
        let image = SpectralImage::borrow(&src, 7, 5);
        let encoded = encode_pgm(&image).unwrap();
        assert!(encoded.starts_with(b"P5"));
        let decoded = decode_pgm(&encoded).unwrap();
        assert_eq!(decoded.width, 7);
        assert_eq!(decoded.height, 5);
        assert_eq!(decoded.data.borrow(), src.as_slice());
    }

    #[test]
    fn test_wrong_magic() {
        let bytes = b"P6\n1 1\n255\n\x00\x00\x00".to_vec();
        assert!(matches!(
            decode_pgm(&bytes),
            Err(SpectralError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_unparsable_dimensions() {
        let bytes = b"P5\nwide tall\n255\n".to_vec();
        assert!(matches!(
            decode_pgm(&bytes),
            Err(SpectralError::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("libspectral_missing_input_7f3a.pgm");
        assert!(matches!(read_pgm(&path), Err(SpectralError::InputOpen(_))));
    }
}
