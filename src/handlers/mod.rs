//! CLI command handlers.
//!
//! Kept out of main.rs so they can be unit tested with any writer.

mod scan;

use std::process::ExitCode;

pub use scan::{load_config, run_normal_mode, run_scan_to};

/// Exit code for fatal configuration and I/O errors.
pub const EXIT_ERROR: u8 = 2;

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}
