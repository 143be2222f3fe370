use eframe::egui::{self, ColorImage, ScrollArea, TextureHandle, TextureOptions, Ui};

use crate::data::model::ImageBuffer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Image view (central panel)
// ---------------------------------------------------------------------------

/// Render the current image at 1:1 scale inside a scroll area.
///
/// `texture` caches the upload; it is rebuilt only when `state.revision`
/// differs from `texture_revision`.
pub fn image_view(
    ui: &mut Ui,
    state: &AppState,
    texture: &mut Option<TextureHandle>,
    texture_revision: &mut u64,
) {
    let Some(image) = &state.image else {
        *texture = None;
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an image to view it  (File → Open…)");
        });
        return;
    };

    if texture.is_none() || *texture_revision != state.revision {
        let color_image = to_color_image(image);
        match texture {
            Some(handle) => handle.set(color_image, TextureOptions::NEAREST),
            None => {
                *texture = Some(ui.ctx().load_texture(
                    "current_image",
                    color_image,
                    TextureOptions::NEAREST,
                ));
            }
        }
        *texture_revision = state.revision;
    }

    if let Some(handle) = texture {
        ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                ui.add(egui::Image::new((handle.id(), handle.size_vec2())));
            });
    }
}

/// Copy the RGBA buffer into an egui image.
pub fn to_color_image(image: &ImageBuffer) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;
    use eframe::egui::Color32;

    #[test]
    fn color_image_matches_buffer() {
        let mut buf = ImageBuffer::new(3, 2);
        buf.set_pixel(2, 1, Pixel::rgb(1, 2, 3)).unwrap();
        let img = to_color_image(&buf);
        assert_eq!(img.size, [3, 2]);
        assert_eq!(img.pixels.len(), 6);
        assert_eq!(img.pixels[5], Color32::from_rgb(1, 2, 3));
        assert_eq!(img.pixels[0], Color32::BLACK);
    }
}
