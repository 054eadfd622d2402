//! Pixel access that always yields red, green, blue, whatever order the
//! backing buffer stores its channels in.
use crate::error::{PixchunkError, Result};
use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};
use std::ops::Deref;

pub trait PixelSource {
    /// (width, height) in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Color of the pixel at column `x`, row `y` as `[red, green, blue]`.
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel<Subpixel = u8>,
    C: Deref<Target = [P::Subpixel]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).to_rgb().0
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).to_rgb().0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    /// Blue first, as many decoders hand out 24-bit pixels.
    Bgr,
}

/// Borrowed, tightly packed 3-byte-per-pixel buffer.
///
/// Entry point for callers that decode with their own codec and hand over raw
/// frames; `convert` reads files through `DynamicImage` instead.
#[derive(Clone, Debug)]
pub struct RawPixels<'a> {
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: &'a [u8],
}

impl<'a> RawPixels<'a> {
    pub fn new(width: u32, height: u32, order: ChannelOrder, data: &'a [u8]) -> Result<Self> {
        let want = width as usize * height as usize * 3;
        if data.len() != want {
            return Err(PixchunkError::Format(format!(
                "raw buffer for {width}x{height} needs {want} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }
}

impl PixelSource for RawPixels<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let off = (y as usize * self.width as usize + x as usize) * 3;
        let px = &self.data[off..off + 3];
        match self.order {
            ChannelOrder::Rgb => [px[0], px[1], px[2]],
            ChannelOrder::Bgr => [px[2], px[1], px[0]],
        }
    }
}

/// `#rrggbb`, lowercase.
pub fn hex_color(rgb: [u8; 3]) -> String {
    format!("#{}", hex::encode(rgb))
}
