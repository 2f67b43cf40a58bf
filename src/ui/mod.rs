//! UI utilities for terminal output
//!
//! Progress spinners for long-running report builds.

mod spinner;

pub use spinner::{abandon_spinner, create_spinner, finish_spinner};
