/// Data layer: pixel buffer, loading/saving, and filters.
///
/// Architecture:
/// ```text
///  .png / .jpg / .gif / .bmp
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode file → ImageBuffer  (save: the reverse)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ImageBuffer  │  width × height RGBA grid
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  darker / lighter / threshold, in place
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
