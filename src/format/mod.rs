//! File formats, case conversion, colors and sizing

pub mod case;
pub mod color;
pub mod formats;
pub mod style;
