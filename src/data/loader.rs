use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use super::model::{ImageBuffer, ImageError, ImageResult};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an image file. The format is sniffed from the content, not the
/// extension, so a mislabelled PNG still opens.
///
/// Supported encodings: PNG, JPEG, GIF (first frame) and BMP. Failing to
/// open the file is an IO error; anything that goes wrong while decoding,
/// including a stream that ends early, is a format error.
pub fn load_file(path: &Path) -> ImageResult<ImageBuffer> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    if reader.format().is_none() {
        return Err(ImageError::Format(format!(
            "{} is not a recognized image file",
            path.display()
        )));
    }
    let image = reader
        .decode()
        .map_err(|e| ImageError::Format(format!("{}: {e}", path.display())))?;
    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(ImageBuffer::from_dynamic(image))
}

/// Decode an in-memory encoded image. Nothing here touches the disk, so any
/// failure, including a premature end of stream, is a format error.
pub fn load_bytes(bytes: &[u8]) -> ImageResult<ImageBuffer> {
    let image =
        image::load_from_memory(bytes).map_err(|e| ImageError::Format(e.to_string()))?;
    Ok(ImageBuffer::from_dynamic(image))
}

/// Encode `buffer` to `path`; the format follows the file extension.
///
/// JPEG has no alpha channel, so it is dropped for `.jpg` / `.jpeg`.
pub fn save_file(buffer: &ImageBuffer, path: &Path) -> ImageResult<()> {
    let format = ImageFormat::from_path(path).map_err(|_| {
        ImageError::Format(format!(
            "cannot choose an image format for {}",
            path.display()
        ))
    })?;

    let image = DynamicImage::ImageRgba8(buffer.as_rgba().clone());
    let result = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()).save_with_format(path, format),
        ImageFormat::Png | ImageFormat::Gif | ImageFormat::Bmp => image.save_with_format(path, format),
        other => {
            return Err(ImageError::Format(format!(
                "saving as {other:?} is not supported"
            )));
        }
    };
    result.map_err(from_image_error)
}

/// Extensions offered by the open / save dialogs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

// -- helpers --

fn from_image_error(err: image::ImageError) -> ImageError {
    match err {
        image::ImageError::IoError(e) => ImageError::Io(e),
        other => ImageError::Format(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::color::Pixel;

    fn encode(buffer: &ImageBuffer, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(buffer.as_rgba().clone())
            .write_to(&mut Cursor::new(&mut bytes), format)
            .unwrap();
        bytes
    }

    fn sample() -> ImageBuffer {
        let mut buf = ImageBuffer::new(3, 2);
        buf.set_pixel(0, 0, Pixel::rgb(200, 200, 200)).unwrap();
        buf.set_pixel(2, 1, Pixel::rgba(10, 20, 30, 40)).unwrap();
        buf
    }

    #[test]
    fn non_image_bytes_are_a_format_error() {
        let err = load_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Format(_)), "got {err:?}");
    }

    #[test]
    fn truncated_png_is_a_format_error() {
        let bytes = encode(&sample(), ImageFormat::Png);
        let err = load_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, ImageError::Format(_)), "got {err:?}");
    }

    #[test]
    fn png_bytes_decode_to_the_same_pixels() {
        let buf = sample();
        let loaded = load_bytes(&encode(&buf, ImageFormat::Png)).unwrap();
        assert_eq!(loaded, buf);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, ImageError::Io(_)), "got {err:?}");
    }

    #[test]
    fn text_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "just some text").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ImageError::Format(_)), "got {err:?}");
    }

    #[test]
    fn truncated_png_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cut.png");
        let big = ImageBuffer::filled(64, 64, Pixel::rgb(12, 200, 99));
        let bytes = encode(&big, ImageFormat::Png);
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ImageError::Format(_)), "got {err:?}");
    }

    #[test]
    fn format_is_sniffed_not_taken_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually_png.bin");
        std::fs::write(&path, encode(&sample(), ImageFormat::Png)).unwrap();
        assert_eq!(load_file(&path).unwrap(), sample());
    }

    #[test]
    fn png_save_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        save_file(&sample(), &path).unwrap();
        assert_eq!(load_file(&path).unwrap(), sample());
    }

    #[test]
    fn jpeg_save_produces_an_opaque_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        save_file(&ImageBuffer::filled(8, 8, Pixel::rgba(90, 90, 90, 10)), &path).unwrap();
        let loaded = load_file(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (8, 8));
        assert_eq!(loaded.get_pixel(4, 4).unwrap().alpha, 255);
    }

    #[test]
    fn unknown_extension_cannot_be_saved() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_file(&sample(), &dir.path().join("out.xyz")).unwrap_err();
        assert!(matches!(err, ImageError::Format(_)), "got {err:?}");
    }
}
