//! Markdown clean-up: header stripping, emphasis, bullets and images

pub mod bullets;
pub mod convert;
pub mod emphasis;
pub mod image;
