use bitstream_io::{BigEndian, BitWrite, BitWriter};
use image::RgbaImage;
use std::io::{Read, Result};

use super::iterators::RgbSubpixels;

/// Reads the hidden bitstream back out of a carrier image.
///
/// Every call collects one bit per color channel slot, in the same
/// row-major R, G, B traversal the embedder used, and packs the bits
/// MSB-first into the output buffer. Reading keeps its position across
/// calls, so a header read followed by a payload read consumes consecutive
/// channel slots.
pub struct LsbReader<'i> {
    channels: RgbSubpixels<'i>,
}

impl<'i> LsbReader<'i> {
    pub fn new(image: &'i RgbaImage) -> Self {
        Self {
            channels: RgbSubpixels::from_image(image),
        }
    }
}

impl Read for LsbReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bits_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(&mut buf[..], BigEndian);

        let mut bits_read = 0;
        for channel in self.channels.by_ref().take(bits_to_take) {
            bit_buffer.write_bit(channel & 1 == 1)?;
            bits_read += 1;
        }

        if !bit_buffer.byte_aligned() {
            bit_buffer.byte_align()?;
        }

        Ok(bits_read >> 3)
    }
}
