//! Font sizes, dimension clamping and CSS style sheets

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Selector to property/value declarations
pub type StyleSheet = BTreeMap<String, BTreeMap<String, String>>;

/// Lower median of the font sizes, or `None` when there are none
pub fn get_median_font_size(font_sizes: &[u32]) -> Option<u32> {
    if font_sizes.is_empty() {
        return None;
    }
    let mut sorted = font_sizes.to_vec();
    sorted.sort_unstable();
    Some(sorted[(sorted.len() - 1) / 2])
}

/// Fix the base font size, then scale it per document type:
/// `txt` x1, `md` x2, `docx` x3. A scaled size past `u32::MAX` is an
/// overflow error.
pub fn converted_font_size(font_size: u32) -> impl Fn(&str) -> Result<u32> {
    move |doc_type: &str| {
        let factor = match doc_type {
            "txt" => 1,
            "md" => 2,
            "docx" => 3,
            other => return Err(Error::InvalidDocType(other.to_string())),
        };
        font_size
            .checked_mul(factor)
            .ok_or(Error::Overflow("font size"))
    }
}

/// Maximum dimensions, waiting for minimums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resizer {
    max_width: u32,
    max_height: u32,
}

/// Clamps dimensions into a fixed min/max box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedResizer {
    min_width: u32,
    min_height: u32,
    max_width: u32,
    max_height: u32,
}

/// Start a resizer with fixed maximum dimensions
pub fn new_resizer(max_width: u32, max_height: u32) -> Resizer {
    Resizer {
        max_width,
        max_height,
    }
}

impl Resizer {
    /// Fix the minimum dimensions; each must not exceed its maximum
    pub fn with_min(&self, min_width: u32, min_height: u32) -> Result<BoundedResizer> {
        if min_width > self.max_width || min_height > self.max_height {
            return Err(Error::MinExceedsMax);
        }
        Ok(BoundedResizer {
            min_width,
            min_height,
            max_width: self.max_width,
            max_height: self.max_height,
        })
    }
}

impl BoundedResizer {
    /// Clamp each dimension into its min/max range
    pub fn resize(&self, width: u32, height: u32) -> (u32, u32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }
}

/// A style sheet owned by one builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyles {
    styles: StyleSheet,
}

impl CssStyles {
    /// Set `property` on `selector` and return a snapshot of the sheet
    pub fn add_style(&mut self, selector: &str, property: &str, value: &str) -> StyleSheet {
        self.styles
            .entry(selector.to_string())
            .or_default()
            .insert(property.to_string(), value.to_string());
        self.styles.clone()
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }
}

/// Start a style builder from a copy of `initial`
pub fn css_styles(initial: &StyleSheet) -> CssStyles {
    CssStyles {
        styles: initial.clone(),
    }
}
