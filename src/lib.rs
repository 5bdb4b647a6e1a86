//! Docsmith - small document formatting and conversion utilities
//!
//! A library of independent text operations for a toy document workflow:
//! titling, word counting, format conversion, markdown clean-up and a few
//! closure-backed helpers that keep their own state.

pub mod core;
pub mod error;
pub mod filters;
pub mod format;
pub mod logger;
pub mod markdown;
pub mod plugin;

pub use error::{Error, Result};
