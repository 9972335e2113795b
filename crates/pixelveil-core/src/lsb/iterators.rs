use image::buffer::{Pixels, PixelsMut};
use image::{Rgba, RgbaImage};
use std::iter::Take;
use std::slice::{Iter, IterMut};

/// The number of subpixels per pixel that carry hidden bits. Alpha is the
/// fourth channel and is never yielded.
const USABLE_CHANNELS: usize = 3;

/// Iterates the R, G and B subpixels of every pixel in row-major order,
/// rows top-to-bottom and columns left-to-right, which is the native layout
/// of the underlying buffer.
pub(crate) struct RgbSubpixels<'a> {
    pixels: Pixels<'a, Rgba<u8>>,
    colors: Take<Iter<'a, u8>>,
}

impl<'a> RgbSubpixels<'a> {
    pub fn from_image(image: &'a RgbaImage) -> Self {
        Self {
            pixels: image.pixels(),
            colors: Iter::default().take(USABLE_CHANNELS),
        }
    }
}

impl<'a> Iterator for RgbSubpixels<'a> {
    type Item = &'a u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.colors = pixel.0.iter().take(USABLE_CHANNELS);
            }
            self.colors.next()
        })
    }
}

/// Mutable twin of [`RgbSubpixels`], same traversal order.
pub(crate) struct RgbSubpixelsMut<'a> {
    pixels: PixelsMut<'a, Rgba<u8>>,
    colors: Take<IterMut<'a, u8>>,
}

impl<'a> RgbSubpixelsMut<'a> {
    pub fn from_image(image: &'a mut RgbaImage) -> Self {
        Self {
            pixels: image.pixels_mut(),
            colors: IterMut::default().take(USABLE_CHANNELS),
        }
    }
}

impl<'a> Iterator for RgbSubpixelsMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.colors = pixel.0.iter_mut().take(USABLE_CHANNELS);
            }
            self.colors.next()
        })
    }
}
