//! # LSB Pixel Codec
//!
//! Serializes an opaque byte payload into a self-describing bitstream
//! (length header + payload) and embeds it across the RGB channels of an
//! image, one bit per channel LSB, in row-major pixel order. Extraction is
//! the exact inverse and needs nothing but the carrier image.

pub mod frame;
pub mod lsb_codec;

mod decoder;
mod encoder;
mod iterators;

pub use decoder::LsbReader;
pub use encoder::LsbWriter;
pub use lsb_codec::LsbCodec;
