use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::model::ImageBuffer;
use crate::color::brightness;

/// Per-channel amount added or removed by [`lighter`] / [`darker`].
pub const DEFAULT_STEP: u8 = 10;
/// Brightness at or above which [`threshold`] turns a pixel white.
pub const DEFAULT_CUTOFF: u8 = 128;

// ---------------------------------------------------------------------------
// Filter selection and parameters
// ---------------------------------------------------------------------------

/// The three filters offered by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    Darker,
    Lighter,
    Threshold,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::Darker, Filter::Lighter, Filter::Threshold];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::Darker => "Darker",
            Filter::Lighter => "Lighter",
            Filter::Threshold => "Threshold",
        }
    }

    /// Lower-case name used in status messages.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Darker => "darker",
            Filter::Lighter => "lighter",
            Filter::Threshold => "threshold",
        }
    }

    pub fn apply(&self, buffer: &mut ImageBuffer, settings: &FilterSettings) {
        match self {
            Filter::Darker => darker(buffer, settings.step),
            Filter::Lighter => lighter(buffer, settings.step),
            Filter::Threshold => threshold(buffer, settings.cutoff),
        }
    }
}

/// Tunable constants of the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub step: u8,
    pub cutoff: u8,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Subtract `step` from every colour channel, saturating at 0.
pub fn darker(buffer: &mut ImageBuffer, step: u8) {
    map_pixels(buffer, |px| {
        for c in &mut px[..3] {
            *c = c.saturating_sub(step);
        }
    });
}

/// Add `step` to every colour channel, saturating at 255.
pub fn lighter(buffer: &mut ImageBuffer, step: u8) {
    map_pixels(buffer, |px| {
        for c in &mut px[..3] {
            *c = c.saturating_add(step);
        }
    });
}

/// Binarise: pixels whose brightness is >= `cutoff` become white, the rest black.
pub fn threshold(buffer: &mut ImageBuffer, cutoff: u8) {
    map_pixels(buffer, |px| {
        let level = if brightness(px[0], px[1], px[2]) >= cutoff {
            255
        } else {
            0
        };
        px[..3].fill(level);
    });
}

/// Run `f` over every RGBA pixel, one rayon task per row.
///
/// Each pixel's new value depends only on its old value, so row order is
/// irrelevant. Alpha is handed to `f` but none of the filters touch it.
fn map_pixels<F>(buffer: &mut ImageBuffer, f: F)
where
    F: Fn(&mut [u8]) + Sync,
{
    if buffer.is_empty() {
        return;
    }
    let stride = buffer.row_stride();
    buffer
        .as_raw_mut()
        .par_chunks_mut(stride)
        .for_each(|row| row.chunks_exact_mut(4).for_each(&f));
}
