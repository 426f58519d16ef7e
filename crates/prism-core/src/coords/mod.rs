//! Geometry value types shared by the host renderer and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! `Point`, `Size` and `Rect` are `Pod` so they can be written to uniform
//! buffers as-is.

mod bounds;
mod point;
mod rect;
mod size;

pub use bounds::WidgetBounds;
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
