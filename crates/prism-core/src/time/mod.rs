//! Time helpers.
//!
//! - wall-clock stamps in the fixed `YYYY-MM-DD_HH-MM-SS` form (via `chrono`)
//! - epoch seconds
//! - monotonic elapsed-time measurement

mod stamp;
mod stopwatch;

pub use stamp::{epoch_seconds, format_timestamp, timestamp_now, TIMESTAMP_FORMAT};
pub use stopwatch::{elapsed_seconds, Stopwatch};
