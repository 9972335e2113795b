//! # Pixelveil Core API
//!
//! Conceals a text message inside the pixel data of an image using least
//! significant bit substitution and recovers it losslessly later. A password
//! optionally seals the message with AES-256-GCM before it is embedded, so
//! tampering and wrong passwords fail closed on the way out.
//!
//! The two layers compose into one pipeline:
//!
//! - [`crypto`] — turns the plaintext into an opaque payload and back
//! - [`lsb`] — maps that payload onto the RGB channel LSBs of an image
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{ImageBuffer, Rgba};
//! use pixelveil_core::{hide_message, unveil_message};
//!
//! let carrier: image::RgbaImage = ImageBuffer::from_pixel(64, 64, Rgba([120, 120, 120, 255]));
//!
//! let secret = hide_message(&carrier, "Hello, World!", "SuperSecret42")
//!     .expect("Failed to hide message in image");
//!
//! let message = unveil_message(&secret, "SuperSecret42")
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Without a password
//!
//! An empty password bypasses the cipher layer entirely: the message is
//! stored unprotected, only geometrically hidden.
//!
//! ```rust
//! use image::{ImageBuffer, Rgba};
//! use pixelveil_core::{hide_message, unveil_message};
//!
//! let carrier: image::RgbaImage = ImageBuffer::from_pixel(32, 32, Rgba([0, 0, 0, 255]));
//!
//! let secret = hide_message(&carrier, "hi", "").unwrap();
//! assert_eq!(unveil_message(&secret, "").unwrap(), "hi");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod crypto;
pub mod error;
pub mod lsb;
pub mod media;
pub mod result;

pub use crate::error::PixelveilError;
pub use crate::lsb::LsbCodec;
pub use crate::result::Result;

pub use image::RgbaImage;

/// the full encode pipeline: cipher layer, then pixel codec
///
/// The carrier is never mutated; a new image with identical dimensions and
/// alpha comes back. An empty `password` skips encryption.
pub fn hide_message(carrier: &RgbaImage, message: &str, password: &str) -> Result<RgbaImage> {
    let payload = crypto::encrypt_message(message, password)?;
    LsbCodec::embed(carrier, &payload)
}

/// the full decode pipeline: pixel codec, then cipher layer
///
/// Returns the recovered message, or a decryption error when the password
/// does not open what was extracted. An image without a plausible hidden
/// payload decodes to an empty message.
pub fn unveil_message(image: &RgbaImage, password: &str) -> Result<String> {
    let payload = LsbCodec::extract(image);
    crypto::decrypt_message(&payload, password)
}

#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::test_utils::prepare_10x10_image;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn should_hide_and_unveil_without_password() {
        let carrier = prepare_10x10_image();

        let secret = hide_message(&carrier, "hi", "").unwrap();
        assert_eq!(unveil_message(&secret, "").unwrap(), "hi");
    }

    #[test]
    fn should_hide_and_unveil_with_password() {
        let carrier: RgbaImage = ImageBuffer::from_pixel(64, 64, Rgba([13, 37, 42, 255]));

        let secret = hide_message(&carrier, "Hello, World!", "SuperSecret42").unwrap();
        let message = unveil_message(&secret, "SuperSecret42").unwrap();

        assert_eq!(message, "Hello, World!");
    }

    #[test]
    fn should_fail_closed_on_a_wrong_password() {
        let carrier: RgbaImage = ImageBuffer::from_pixel(64, 64, Rgba([13, 37, 42, 255]));

        let secret = hide_message(&carrier, "Hello, World!", "SuperSecret42").unwrap();
        let result = unveil_message(&secret, "NotTheSecret");

        assert!(matches!(result, Err(PixelveilError::DecryptionError)));
    }

    #[test]
    fn should_unveil_nothing_from_a_plain_image() {
        let message = unveil_message(&prepare_10x10_image(), "").unwrap();
        assert_eq!(message, "");
    }

    #[test]
    fn should_refuse_a_message_bigger_than_the_carrier() {
        let carrier = prepare_10x10_image();

        // 29 payload bytes fit into 100 pixels, 30 do not
        let result = hide_message(&carrier, &"x".repeat(30), "");
        assert!(matches!(result, Err(PixelveilError::ImageCapacityError(..))));
    }

    #[test]
    fn should_round_trip_multibyte_text() {
        let carrier: RgbaImage = ImageBuffer::from_pixel(32, 32, Rgba([200, 100, 50, 255]));

        let secret = hide_message(&carrier, "grüße aus dem bild 🖼", "päßwörd").unwrap();
        assert_eq!(unveil_message(&secret, "päßwörd").unwrap(), "grüße aus dem bild 🖼");
    }
}

#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, RgbaImage};
    use std::path::{Path, PathBuf};

    /// This image has some traits:
    /// --------------y-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 0,1 -> (4, 5, 6, 7 ) | ...
    /// | 1,0 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// x ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, i + 3])
        })
    }

    /// 100 pixels, 300 channel slots, capacity for 29 payload bytes
    pub fn prepare_10x10_image() -> RgbaImage {
        ImageBuffer::from_fn(10, 10, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, 255])
        })
    }

    /// writes a plain carrier image into `dir` and returns its path
    pub fn prepare_carrier_file(dir: &Path) -> PathBuf {
        let path = dir.join("carrier.png");
        let img: RgbaImage = ImageBuffer::from_pixel(48, 48, image::Rgba([90, 120, 180, 255]));
        img.save(&path).expect("Failed to write carrier image");
        path
    }
}
