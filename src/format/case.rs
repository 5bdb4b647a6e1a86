//! Case conversion

use crate::error::{Error, Result};

/// Convert `text` to `uppercase`, `lowercase` or `titlecase`
pub fn convert_case(text: &str, format: &str) -> Result<String> {
    if text.is_empty() || format.is_empty() {
        return Err(Error::MissingCaseInput);
    }

    match format {
        "uppercase" => Ok(text.to_uppercase()),
        "lowercase" => Ok(text.to_lowercase()),
        "titlecase" => Ok(title_case(text)),
        other => Err(Error::UnsupportedCaseFormat(other.to_string())),
    }
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
/// Any non-letter starts a new run, so `they're` becomes `They'Re`.
fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(ch);
            in_word = false;
        }
    }
    titled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_case() {
        assert_eq!(convert_case("hello world", "uppercase").unwrap(), "HELLO WORLD");
        assert_eq!(convert_case("HELLO WORLD", "lowercase").unwrap(), "hello world");
        assert_eq!(convert_case("hello world", "titlecase").unwrap(), "Hello World");
    }

    #[test]
    fn test_mixed_case_input() {
        assert_eq!(convert_case("HeLLo WoRLd", "lowercase").unwrap(), "hello world");
        assert_eq!(convert_case("HeLLo WoRLd", "uppercase").unwrap(), "HELLO WORLD");
        assert_eq!(convert_case("hELLO wORLD", "titlecase").unwrap(), "Hello World");
    }

    #[test]
    fn test_titlecase_word_boundaries() {
        assert_eq!(convert_case("they're bill's", "titlecase").unwrap(), "They'Re Bill'S");
        assert_eq!(convert_case("x2y-z", "titlecase").unwrap(), "X2Y-Z");
    }

    #[test]
    fn test_missing_input() {
        let err = convert_case("", "uppercase").unwrap_err();
        assert!(matches!(err, Error::MissingCaseInput));
        assert_eq!(err.to_string(), "no text or target format provided");
        assert!(matches!(convert_case("hello", ""), Err(Error::MissingCaseInput)));
    }

    #[test]
    fn test_unsupported_format() {
        let err = convert_case("hello", "snakecase").unwrap_err();
        assert!(err.to_string().contains("unsupported format"));
    }
}
