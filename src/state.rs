use std::path::{Path, PathBuf};

use crate::command::{Command, Flow};
use crate::config::ViewerConfig;
use crate::data::filter::{Filter, FilterSettings};
use crate::data::loader;
use crate::data::model::{ImageBuffer, ImageError};

pub const APP_NAME: &str = "ImageViewer";
pub const VERSION: &str = concat!(
    "Version ",
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

pub const MSG_LOADED: &str = "File loaded.";
pub const MSG_NO_IMAGE: &str = "No image loaded";
pub const MSG_BAD_FORMAT: &str = "The file was not in a recognized image file format.";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Loaded image (None until the user opens a file, and again after Close).
    pub image: Option<ImageBuffer>,

    /// Path of the displayed file.
    pub file_path: Option<PathBuf>,

    /// Status line shown at the bottom of the window.
    pub status_message: String,

    /// Whether the last status message reports a failure.
    pub status_is_error: bool,

    /// Step / cutoff used by the filters.
    pub filter_settings: FilterSettings,

    /// Where file dialogs open.
    pub dialog_dir: Option<PathBuf>,

    /// Whether the About window is open.
    pub show_about: bool,

    /// Bumped on every change to `image`; the renderer re-uploads its
    /// texture when this moves.
    pub revision: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl AppState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            image: None,
            file_path: None,
            status_message: String::new(),
            status_is_error: false,
            filter_settings: config.filters,
            dialog_dir: config.dialog_dir(),
            show_about: false,
            revision: 0,
        }
    }

    /// Run one command against the state.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::Open(path) => self.open(&path),
            Command::SaveAs(path) => self.save_as(&path),
            Command::Close => self.close(),
            Command::Quit => return Flow::Quit,
            Command::Apply(filter) => self.apply_filter(filter),
            Command::About => self.show_about = true,
        }
        Flow::Continue
    }

    /// Text of the filename label.
    pub fn filename_label(&self) -> String {
        match &self.file_path {
            Some(path) => format!("File: {}", path.display()),
            None => "No file displayed.".to_string(),
        }
    }

    fn open(&mut self, path: &Path) {
        remember_dir(&mut self.dialog_dir, path);
        match loader::load_file(path) {
            Ok(image) => {
                log::info!(
                    "Loaded {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                self.image = Some(image);
                self.file_path = Some(path.to_path_buf());
                self.revision += 1;
                self.set_status(MSG_LOADED);
            }
            Err(ImageError::Format(reason)) => {
                log::error!("Failed to load {}: {reason}", path.display());
                self.set_error(MSG_BAD_FORMAT.to_string());
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.set_error(format!("Error: {e}"));
            }
        }
    }

    fn save_as(&mut self, path: &Path) {
        let Some(image) = &self.image else {
            log::warn!("Save requested with no image loaded");
            self.set_status(MSG_NO_IMAGE);
            return;
        };
        remember_dir(&mut self.dialog_dir, path);
        match loader::save_file(image, path) {
            Ok(()) => {
                log::info!("Saved {}", path.display());
                self.file_path = Some(path.to_path_buf());
                self.set_status("File saved.");
            }
            Err(e) => {
                log::error!("Failed to save {}: {e}", path.display());
                self.set_error(format!("Error: {e}"));
            }
        }
    }

    /// Drop the image; the status line keeps its last message.
    fn close(&mut self) {
        self.image = None;
        self.file_path = None;
        self.revision += 1;
    }

    fn apply_filter(&mut self, filter: Filter) {
        let Some(image) = self.image.as_mut() else {
            log::warn!("{} requested with no image loaded", filter.label());
            self.set_status(MSG_NO_IMAGE);
            return;
        };
        filter.apply(image, &self.filter_settings);
        log::info!("Applied {} ({:?})", filter.name(), self.filter_settings);
        self.revision += 1;
        self.set_status(&format!("Applied: {}", filter.name()));
    }

    fn set_status(&mut self, text: &str) {
        self.status_message = text.to_string();
        self.status_is_error = false;
    }

    fn set_error(&mut self, text: String) {
        self.status_message = text;
        self.status_is_error = true;
    }
}

fn remember_dir(dialog_dir: &mut Option<PathBuf>, path: &Path) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        *dialog_dir = Some(parent.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;

    fn write_png(dir: &Path, name: &str, buffer: &ImageBuffer) -> PathBuf {
        let path = dir.join(name);
        loader::save_file(buffer, &path).unwrap();
        path
    }

    fn grey_image() -> ImageBuffer {
        ImageBuffer::filled(2, 2, Pixel::rgb(200, 200, 200))
    }

    #[test]
    fn starts_with_nothing_displayed() {
        let state = AppState::default();
        assert!(state.image.is_none());
        assert_eq!(state.filename_label(), "No file displayed.");
        assert_eq!(state.filter_settings, FilterSettings::default());
    }

    #[test]
    fn open_loads_image_and_updates_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "grey.png", &grey_image());
        let mut state = AppState::default();

        assert_eq!(state.dispatch(Command::Open(path.clone())), Flow::Continue);

        assert_eq!(state.image.as_ref(), Some(&grey_image()));
        assert_eq!(state.status_message, MSG_LOADED);
        assert_eq!(state.filename_label(), format!("File: {}", path.display()));
        assert_eq!(state.dialog_dir.as_deref(), Some(dir.path()));
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn open_non_image_reports_format_error_and_keeps_previous_image() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_png(dir.path(), "grey.png", &grey_image());
        let bad = dir.path().join("readme.txt");
        std::fs::write(&bad, "hello").unwrap();

        let mut state = AppState::default();
        state.dispatch(Command::Open(good.clone()));
        state.dispatch(Command::Open(bad));

        assert_eq!(state.status_message, MSG_BAD_FORMAT);
        assert!(state.status_is_error);
        assert_eq!(state.image.as_ref(), Some(&grey_image()));
        assert_eq!(state.file_path.as_deref(), Some(good.as_path()));
    }

    #[test]
    fn filters_without_image_only_set_status() {
        let mut state = AppState::default();
        for filter in Filter::ALL {
            state.dispatch(Command::Apply(filter));
            assert_eq!(state.status_message, MSG_NO_IMAGE);
        }
        assert_eq!(state.revision, 0);
    }

    #[test]
    fn filter_commands_mutate_the_image() {
        let mut state = AppState::default();
        state.image = Some(grey_image());

        state.dispatch(Command::Apply(Filter::Darker));
        assert_eq!(state.status_message, "Applied: darker");
        let px = state.image.as_ref().unwrap().get_pixel(1, 1).unwrap();
        assert_eq!(px, Pixel::rgb(190, 190, 190));

        state.dispatch(Command::Apply(Filter::Threshold));
        assert_eq!(state.status_message, "Applied: threshold");
        let px = state.image.as_ref().unwrap().get_pixel(0, 0).unwrap();
        assert_eq!(px, Pixel::WHITE);

        state.dispatch(Command::Apply(Filter::Lighter));
        assert_eq!(state.status_message, "Applied: lighter");
        assert_eq!(state.revision, 3);
    }

    #[test]
    fn close_discards_image() {
        let mut state = AppState::default();
        state.image = Some(grey_image());
        state.file_path = Some(PathBuf::from("grey.png"));

        state.dispatch(Command::Apply(Filter::Darker));
        state.dispatch(Command::Close);

        assert!(state.image.is_none());
        assert_eq!(state.filename_label(), "No file displayed.");
        assert_eq!(state.status_message, "Applied: darker");
    }

    #[test]
    fn open_truncated_png_reports_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let full = write_png(
            dir.path(),
            "full.png",
            &ImageBuffer::filled(64, 64, Pixel::rgb(40, 80, 120)),
        );
        let bytes = std::fs::read(&full).unwrap();
        let cut = dir.path().join("cut.png");
        std::fs::write(&cut, &bytes[..bytes.len() / 2]).unwrap();

        let mut state = AppState::default();
        state.dispatch(Command::Open(cut));

        assert_eq!(state.status_message, MSG_BAD_FORMAT);
        assert!(state.status_is_error);
        assert!(state.image.is_none());
    }

    #[test]
    fn about_title_carries_major_minor_version() {
        assert_eq!(VERSION, "Version 1.0");
    }

    #[test]
    fn save_as_writes_current_image() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dark.png");
        let mut state = AppState::default();
        state.image = Some(grey_image());
        state.dispatch(Command::Apply(Filter::Darker));

        state.dispatch(Command::SaveAs(out.clone()));

        assert_eq!(state.status_message, "File saved.");
        let saved = loader::load_file(&out).unwrap();
        assert_eq!(saved.get_pixel(0, 0).unwrap(), Pixel::rgb(190, 190, 190));
    }

    #[test]
    fn save_without_image_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");
        let mut state = AppState::default();
        state.dispatch(Command::SaveAs(out.clone()));
        assert_eq!(state.status_message, MSG_NO_IMAGE);
        assert!(!out.exists());
    }

    #[test]
    fn quit_and_about() {
        let mut state = AppState::default();
        assert_eq!(state.dispatch(Command::About), Flow::Continue);
        assert!(state.show_about);
        assert_eq!(state.dispatch(Command::Quit), Flow::Quit);
    }

    #[test]
    fn config_settings_reach_the_filters() {
        let config = ViewerConfig {
            filters: FilterSettings {
                step: 50,
                cutoff: 200,
            },
            start_dir: None,
        };
        let mut state = AppState::new(&config);
        state.image = Some(grey_image());
        state.dispatch(Command::Apply(Filter::Darker));
        let px = state.image.as_ref().unwrap().get_pixel(0, 0).unwrap();
        assert_eq!(px, Pixel::rgb(150, 150, 150));
    }
}
