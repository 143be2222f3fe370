use eframe::egui::{self, Color32, RichText, Ui};

use crate::command::Command;
use crate::data::filter::Filter;
use crate::data::loader::SUPPORTED_EXTENSIONS;
use crate::state::{AppState, APP_NAME, VERSION};

/// A menu pick or shortcut. Open / Save As still need a path from a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    OpenDialog,
    SaveDialog,
    Run(Command),
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the File / Filter / Help menus and report what was clicked.
pub fn menu_bar(ui: &mut Ui) -> Option<MenuAction> {
    let mut action = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.add(egui::Button::new("Open…").shortcut_text("Ctrl+O")).clicked() {
                action = Some(MenuAction::OpenDialog);
                ui.close_menu();
            }
            if ui.button("Save As…").clicked() {
                action = Some(MenuAction::SaveDialog);
                ui.close_menu();
            }
            if ui.add(egui::Button::new("Close").shortcut_text("Ctrl+W")).clicked() {
                action = Some(MenuAction::Run(Command::Close));
                ui.close_menu();
            }
            if ui.add(egui::Button::new("Quit").shortcut_text("Ctrl+Q")).clicked() {
                action = Some(MenuAction::Run(Command::Quit));
                ui.close_menu();
            }
        });

        ui.menu_button("Filter", |ui: &mut Ui| {
            for filter in Filter::ALL {
                if ui.button(filter.label()).clicked() {
                    action = Some(MenuAction::Run(Command::Apply(filter)));
                    ui.close_menu();
                }
            }
        });

        ui.menu_button("Help", |ui: &mut Ui| {
            if ui.button(format!("About {APP_NAME}...")).clicked() {
                action = Some(MenuAction::Run(Command::About));
                ui.close_menu();
            }
        });
    });

    action
}

// ---------------------------------------------------------------------------
// Status bar / About
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let text = RichText::new(&state.status_message);
    if state.status_is_error {
        ui.label(text.color(Color32::RED));
    } else {
        ui.label(text);
    }
}

pub fn about_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new(VERSION)
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.label(APP_NAME);
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

/// Turn a menu action into a command, asking for a path where needed.
/// Returns `None` when the user cancels a dialog.
pub fn resolve(action: MenuAction, state: &AppState) -> Option<Command> {
    match action {
        MenuAction::OpenDialog => file_dialog(state, "Open image")
            .pick_file()
            .map(Command::Open),
        MenuAction::SaveDialog => file_dialog(state, "Save image as")
            .save_file()
            .map(Command::SaveAs),
        MenuAction::Run(cmd) => Some(cmd),
    }
}

fn file_dialog(state: &AppState, title: &str) -> rfd::FileDialog {
    let dialog = rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Images", SUPPORTED_EXTENSIONS)
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"]);
    match &state.dialog_dir {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}
