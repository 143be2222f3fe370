use eframe::egui::{self, Key, KeyboardShortcut, Modifiers, TextureHandle};

use crate::command::{Command, Flow};
use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::panels::MenuAction;
use crate::ui::{canvas, panels};

const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const CLOSE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::W);
const QUIT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Q);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ImageViewerApp {
    pub state: AppState,
    /// GPU copy of `state.image`, refreshed when `state.revision` moves.
    texture: Option<TextureHandle>,
    texture_revision: u64,
}

impl Default for ImageViewerApp {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl ImageViewerApp {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            state: AppState::new(config),
            texture: None,
            texture_revision: 0,
        }
    }

    fn shortcut_action(&self, ctx: &egui::Context) -> Option<MenuAction> {
        ctx.input_mut(|i| {
            if i.consume_shortcut(&OPEN_SHORTCUT) {
                Some(MenuAction::OpenDialog)
            } else if i.consume_shortcut(&CLOSE_SHORTCUT) {
                Some(MenuAction::Run(Command::Close))
            } else if i.consume_shortcut(&QUIT_SHORTCUT) {
                Some(MenuAction::Run(Command::Quit))
            } else {
                None
            }
        })
    }
}

impl eframe::App for ImageViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending = self.shortcut_action(ctx);

        // ---- Top panel: menu bar + file name ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            if let Some(action) = panels::menu_bar(ui) {
                pending = Some(action);
            }
            ui.label(self.state.filename_label());
        });

        // ---- Bottom panel: status line ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: the image ----
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::image_view(ui, &self.state, &mut self.texture, &mut self.texture_revision);
        });

        panels::about_window(ctx, &mut self.state.show_about);

        // Open / Save As pick their path here, after the frame is laid out.
        if let Some(cmd) = pending.and_then(|action| panels::resolve(action, &self.state)) {
            if self.state.dispatch(cmd) == Flow::Quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
