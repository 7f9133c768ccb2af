//! Fixed-size 8-bit framebuffer, the renderer's output surface.
//!
//! Pixels are 3-byte BGR triplets (the channel order agreed with the
//! display collaborator), row-major with row 0 at the top of the image.

use image::{ImageBuffer, Rgb};
use rayon::prelude::*;

use crate::error::Error;
use crate::shading::Color;

/// Bytes per pixel: blue, green, red.
const CHANNELS: usize = 3;

/// 2D grid of BGR pixels, dimensions fixed at construction.
///
/// Each cell is written exactly once per render; the buffer is handed off
/// by value to the display/persist collaborator when rendering completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Framebuffer {
    /// Create a framebuffer of the given dimensions, initialized to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encode a linear color as a BGR byte triplet.
    ///
    /// Channels are mapped with `(255.999 * c) as u8`: plain truncation,
    /// no clamping. The shading model never produces values above 1.0.
    pub fn encode_bgr(color: Color) -> [u8; 3] {
        [
            (255.999 * color.z) as u8,
            (255.999 * color.y) as u8,
            (255.999 * color.x) as u8,
        ]
    }

    /// Write a color at (x, y), with (0, 0) the top-left pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), Error> {
        let i = self.index(x, y)?;
        self.data[i..i + CHANNELS].copy_from_slice(&Self::encode_bgr(color));
        Ok(())
    }

    /// Read the BGR triplet at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 3], Error> {
        let i = self.index(x, y)?;
        Ok([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Raw pixel bytes, row-major BGR.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Parallel iterator over mutable rows, top row first.
    ///
    /// Rows are disjoint slices, so the render loop can fill them from
    /// rayon workers without any synchronization.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, u8> {
        self.data.par_chunks_mut(self.width as usize * CHANNELS)
    }

    /// Convert to an RGB image for the persistence collaborator.
    pub fn to_rgb_image(&self) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
            Rgb([self.data[i + 2], self.data[i + 1], self.data[i]])
        })
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black() {
        let fb = Framebuffer::new(4, 2);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 2);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.as_bytes().len(), 4 * 2 * 3);
    }

    #[test]
    fn stores_pixels_in_bgr_order() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_pixel(1, 0, Color::new(1.0, 0.5, 0.0)).unwrap();
        // red -> last byte, green -> middle, blue -> first
        assert_eq!(fb.pixel(1, 0).unwrap(), [0, 127, 255]);
        assert_eq!(fb.pixel(0, 0).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn channel_encoding_truncates() {
        assert_eq!(Framebuffer::encode_bgr(Color::new(1.0, 0.5, 0.0)), [0, 127, 255]);
        assert_eq!(Framebuffer::encode_bgr(Color::ZERO), [0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_coordinates_are_rejected() {
        let mut fb = Framebuffer::new(4, 2);
        let err = fb.set_pixel(4, 0, Color::ZERO).unwrap_err();
        assert_eq!(
            err,
            Error::PixelOutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 2
            }
        );
        assert!(fb.pixel(0, 2).is_err());
    }

    #[test]
    fn rgb_conversion_swaps_the_channel_order_back() {
        let mut fb = Framebuffer::new(1, 1);
        fb.set_pixel(0, 0, Color::new(1.0, 0.0, 0.5)).unwrap();
        let img = fb.to_rgb_image();
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 127]);
    }
}
