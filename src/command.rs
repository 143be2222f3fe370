use std::path::PathBuf;

use crate::data::filter::Filter;

/// Everything the menus and keyboard shortcuts can ask for.
///
/// The UI only builds commands; [`crate::state::AppState::dispatch`] runs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    SaveAs(PathBuf),
    Close,
    Quit,
    Apply(Filter),
    About,
}

/// What the window should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
