use image::Rgba;

// ---------------------------------------------------------------------------
// Pixel – one RGBA sample of an image buffer
// ---------------------------------------------------------------------------

/// A single 8-bit RGBA sample.
///
/// Images decoded without an alpha channel get `alpha = 255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

    /// Opaque pixel from three colour channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Integer mean of three colour channels; always fits in a `u8`.
#[inline]
pub fn brightness(red: u8, green: u8, blue: u8) -> u8 {
    ((red as u16 + green as u16 + blue as u16) / 3) as u8
}

// -- Conversions to the image crate's pixel type --

impl From<Rgba<u8>> for Pixel {
    fn from(px: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = px.0;
        Pixel::rgba(red, green, blue, alpha)
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(px: Pixel) -> Self {
        Rgba([px.red, px.green, px.blue, px.alpha])
    }
}
