pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod position;
pub mod rules;
pub mod scanner;

pub use error::{DocstringGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
