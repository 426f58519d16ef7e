//! Diagnostic sink backing the on-screen console.
//!
//! Any thread may record a line; the UI layer polls and clears. Code that
//! wants dependency injection can build its own [`DiagnosticSink`] and pass a
//! reference around. Code that needs process-wide reachability (driver error
//! callbacks, the logging mirror) goes through [`global`].

mod global;
mod sink;

pub use global::global;
pub use sink::{DiagnosticSink, DiagnosticSnapshot};
