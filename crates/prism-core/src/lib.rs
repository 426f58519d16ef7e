//! Prism core crate.
//!
//! Shared utilities for the graphics host: geometry value types, time helpers,
//! a self-reporting error type, logger setup, and the diagnostic sink that
//! feeds the on-screen console.

pub mod coords;
pub mod diag;
pub mod error;
pub mod logging;
pub mod time;
