//! Utility modules for page generation.

pub mod format;

pub use format::*;
