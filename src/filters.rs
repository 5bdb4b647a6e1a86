//! Text filters and the option-driven filter command

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Replace every `bad` with `good`
pub fn replace_bad(text: &str) -> String {
    text.replace("bad", "good")
}

/// Extend every `..` to `...`
pub fn replace_ellipsis(text: &str) -> String {
    text.replace("..", "...")
}

/// Shorten every `....` to `...`
pub fn fix_ellipsis(text: &str) -> String {
    text.replace("....", "...")
}

/// Which filters a filter command applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterOption {
    /// First filter only
    #[default]
    One,
    /// Second filter only
    Two,
    /// First filter, then second
    Three,
}

impl FromStr for FilterOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "--one" => Ok(Self::One),
            "--two" => Ok(Self::Two),
            "--three" => Ok(Self::Three),
            other => Err(Error::InvalidFilterOption(other.to_string())),
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self {
            Self::One => "--one",
            Self::Two => "--two",
            Self::Three => "--three",
        };
        f.write_str(flag)
    }
}

/// Build a command that runs `filter_one`, `filter_two` or both, chosen by
/// a `--one`/`--two`/`--three` flag
pub fn get_filter_cmd<F1, F2>(filter_one: F1, filter_two: F2) -> impl Fn(&str, &str) -> Result<String>
where
    F1: Fn(&str) -> String,
    F2: Fn(&str) -> String,
{
    move |content: &str, option: &str| {
        let filtered = match option.parse::<FilterOption>()? {
            FilterOption::One => filter_one(content),
            FilterOption::Two => filter_two(content),
            FilterOption::Three => filter_two(&filter_one(content)),
        };
        Ok(filtered)
    }
}
