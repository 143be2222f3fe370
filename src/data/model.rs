use image::{DynamicImage, RgbaImage};

use crate::color::Pixel;

// ---------------------------------------------------------------------------
// ImageError – everything the data layer can fail with
// ---------------------------------------------------------------------------

pub type ImageResult<T> = Result<T, ImageError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// The byte stream is not a recognised or supported image encoding.
    #[error("unrecognized image format: {0}")]
    Format(String),
    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// ImageBuffer – the decoded pixel grid
// ---------------------------------------------------------------------------

/// An RGBA pixel grid whose dimensions are fixed after construction.
///
/// Storage is row-major, four bytes per pixel, no padding between rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pixels: RgbaImage,
}

impl ImageBuffer {
    /// A `width` x `height` buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::BLACK)
    }

    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        ImageBuffer {
            pixels: RgbaImage::from_pixel(width, height, pixel.into()),
        }
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        ImageBuffer { pixels }
    }

    /// Convert any decoded image to 8-bit RGBA.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self::from_rgba(image.into_rgba8())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Whether the buffer holds no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> ImageResult<Pixel> {
        self.check_bounds(x, y)?;
        Ok((*self.pixels.get_pixel(x, y)).into())
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> ImageResult<()> {
        self.check_bounds(x, y)?;
        self.pixels.put_pixel(x, y, pixel.into());
        Ok(())
    }

    /// Number of bytes in one row (`width * 4`).
    pub fn row_stride(&self) -> usize {
        self.width() as usize * 4
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Mutable raw RGBA bytes. The length never changes, only the values.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    fn check_bounds(&self, x: u32, y: u32) -> ImageResult<()> {
        if x < self.width() && y < self.height() {
            Ok(())
        } else {
            Err(ImageError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}
