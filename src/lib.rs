//! A small desktop image viewer with darker / lighter / threshold filters.
//!
//! The pixel core (`data`, `color`) has no UI dependency beyond colour
//! conversions; `app` and `ui` put an egui window on top of it.

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
pub mod vehicle;
