//! # CUtil - Common Utilities Library
//!
//! Small helpers shared by the renderer binary.
//!
//! ## Features
//!
//! - `fs`: File system utilities (idempotent directory setup, file sizes)
//! - `time`: Time utilities (log timestamps, elapsed time formatting)

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "time")]
pub mod time;
