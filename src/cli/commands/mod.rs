//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod complete;
pub mod exports;
pub mod init;
