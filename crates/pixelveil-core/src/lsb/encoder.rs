use bitstream_io::{BigEndian, BitRead, BitReader};
use image::RgbaImage;
use std::io::{Cursor, Error, ErrorKind, Result, Write};

use super::iterators::RgbSubpixelsMut;

/// Writes a bitstream into the channel LSBs of a carrier image.
///
/// Bits are taken MSB-first from each input byte and stored one per color
/// channel slot, row-major, R then G then B per pixel. Channels beyond the
/// written bitstream are never touched, and neither is alpha.
pub struct LsbWriter<'i> {
    channels: RgbSubpixelsMut<'i>,
}

impl<'i> LsbWriter<'i> {
    pub fn new(carrier: &'i mut RgbaImage) -> Self {
        Self {
            channels: RgbSubpixelsMut::from_image(carrier),
        }
    }
}

impl Write for LsbWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bit_iter = BitReader::endian(Cursor::new(buf), BigEndian);
        let mut bits_written = 0;

        while let Ok(bit) = bit_iter.read_bit() {
            let Some(channel) = self.channels.next() else {
                return Err(Error::new(
                    ErrorKind::WriteZero,
                    "carrier image has no channel slots left",
                ));
            };
            *channel = (*channel & (u8::MAX - 1)) | u8::from(bit);
            bits_written += 1;
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
