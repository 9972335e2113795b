use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;
use log::error;

use crate::error::PixelveilError;
use crate::result::Result;

/// loads a carrier image from disk
///
/// Only raster formats that survive a lossless round trip of their pixel
/// data are accepted as input; the hidden bits would not survive anything
/// else being written back.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return Err(PixelveilError::UnsupportedMedia);
    };

    match ext.to_lowercase().as_str() {
        "png" | "jpg" | "jpeg" | "gif" => Ok(image::open(path)
            .map_err(|_e| PixelveilError::InvalidImageMedia)?
            .to_rgba8()),
        _ => Err(PixelveilError::UnsupportedMedia),
    }
}

/// writes an image to disk, always PNG so the LSBs survive
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        error!("Error creating file {path:?}: {e}");
        PixelveilError::WriteError { source: e }
    })?;

    image
        .write_to(&mut BufWriter::new(file), image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            PixelveilError::ImageEncodingError
        })
}
