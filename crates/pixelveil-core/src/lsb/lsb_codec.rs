use std::io::{Read, Write};

use image::RgbaImage;

use super::decoder::LsbReader;
use super::encoder::LsbWriter;
use super::frame::{length_header, parse_length_header, LENGTH_HEADER_LEN, MAX_HEADER_VALUE};
use crate::error::PixelveilError;
use crate::result::Result;

/// The LSB pixel codec: a reversible mapping between an opaque byte payload
/// and the least significant bits of an image's RGB channels.
///
/// On the wire the payload is framed as `header || payload`, where the
/// header is the 8-byte decimal length (see [`super::frame`]). Each pixel
/// contributes 3 one-bit slots, alpha is never used.
pub struct LsbCodec;

impl LsbCodec {
    /// how many payload bytes an image can hold, header already accounted for
    pub fn capacity(image: &RgbaImage) -> usize {
        let slots = image.width() as usize * image.height() as usize * 3;
        (slots / 8).saturating_sub(LENGTH_HEADER_LEN)
    }

    /// hides `payload` in a copy of `carrier`
    ///
    /// The carrier is left untouched: the returned image is a pixel-for-pixel
    /// copy with only the LSBs of the embedding region rewritten. Fails
    /// before producing anything when the payload cannot fit, so there is no
    /// silently truncated output.
    pub fn embed(carrier: &RgbaImage, payload: &[u8]) -> Result<RgbaImage> {
        if payload.len() >= MAX_HEADER_VALUE {
            return Err(PixelveilError::PayloadTooLarge(payload.len()));
        }

        let slots = carrier.width() as usize * carrier.height() as usize * 3;
        let bits_needed = (LENGTH_HEADER_LEN + payload.len()) * 8;
        if bits_needed > slots {
            return Err(PixelveilError::ImageCapacityError(
                carrier.width(),
                carrier.height(),
                Self::capacity(carrier),
                payload.len(),
            ));
        }

        let mut embedded = carrier.clone();
        {
            let mut writer = LsbWriter::new(&mut embedded);
            writer.write_all(&length_header(payload.len()))?;
            writer.write_all(payload)?;
        }

        Ok(embedded)
    }

    /// recovers a payload hidden by [`LsbCodec::embed`]
    ///
    /// Returns an empty payload when the first 64 bits do not parse into a
    /// plausible length, which is how "no hidden content" looks — this never
    /// fails. No integrity check happens here; corruption only surfaces when
    /// a cipher layer on top rejects its tag.
    pub fn extract(image: &RgbaImage) -> Vec<u8> {
        let mut reader = LsbReader::new(image);

        let mut header = [0u8; LENGTH_HEADER_LEN];
        match reader.read(&mut header) {
            Ok(n) if n == LENGTH_HEADER_LEN => {}
            _ => return Vec::new(),
        }
        let Some(payload_len) = parse_length_header(&header) else {
            return Vec::new();
        };

        let mut payload = vec![0u8; payload_len];
        let mut filled = 0;
        while filled < payload_len {
            match reader.read(&mut payload[filled..]) {
                Ok(0) | Err(_) => break,
                Ok(n) => filled += n,
            }
        }

        payload
    }
}
