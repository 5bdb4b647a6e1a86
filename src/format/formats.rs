//! Document format allow-list and conversions between formats

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A document format from the allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocFormat {
    Docx,
    Pdf,
    Txt,
    Pptx,
    Ppt,
    Md,
}

impl DocFormat {
    pub const ALL: [DocFormat; 6] = [
        DocFormat::Docx,
        DocFormat::Pdf,
        DocFormat::Txt,
        DocFormat::Pptx,
        DocFormat::Ppt,
        DocFormat::Md,
    ];

    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            DocFormat::Docx => "docx",
            DocFormat::Pdf => "pdf",
            DocFormat::Txt => "txt",
            DocFormat::Pptx => "pptx",
            DocFormat::Ppt => "ppt",
            DocFormat::Md => "md",
        }
    }

    /// Formats this one can be converted into
    pub fn targets(self) -> &'static [DocFormat] {
        use DocFormat::*;
        match self {
            Docx => &[Pdf, Txt, Md],
            Pdf => &[Docx, Txt, Md],
            Txt => &[Docx, Pdf, Md],
            Pptx => &[Ppt, Pdf],
            Ppt => &[Pptx, Pdf],
            Md => &[Docx, Pdf, Txt],
        }
    }

    /// Whether the compatibility table allows `self` -> `target`
    pub fn can_convert_to(self, target: DocFormat) -> bool {
        self.targets().contains(&target)
    }
}

impl fmt::Display for DocFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocFormat::ALL
            .into_iter()
            .find(|format| format.extension() == s)
            .ok_or_else(|| Error::InvalidFileFormat(s.to_string()))
    }
}

/// Text after the last `.`, or the whole name when there is none
fn extension_of(filename: &str) -> &str {
    filename.rsplit_once('.').map_or(filename, |(_, ext)| ext)
}

/// Swap the extension of `filename` for `target` when the conversion is allowed
///
/// Returns `None` for unknown formats, incompatible pairs and same-format
/// conversions.
pub fn convert_file_format(filename: &str, target: &str) -> Option<String> {
    let (stem, current) = filename.rsplit_once('.')?;
    let source: DocFormat = current.parse().ok()?;
    let target: DocFormat = target.parse().ok()?;

    if !source.can_convert_to(target) {
        tracing::warn!("Cannot convert {} from {} to {}", filename, source, target);
        return None;
    }
    Some(format!("{stem}.{target}"))
}

/// Pair names with formats, keeping only pairs whose format is allowed
pub fn pair_document_with_format(names: &[&str], formats: &[&str]) -> Vec<(String, String)> {
    names
        .iter()
        .zip(formats)
        .filter(|(_, format)| format.parse::<DocFormat>().is_ok())
        .map(|(name, format)| (name.to_string(), format.to_string()))
        .collect()
}

/// Return a new format list with `format` appended
pub fn add_format(formats: &[String], format: &str) -> Vec<String> {
    let mut added = formats.to_vec();
    added.push(format.to_string());
    added
}

/// Return a copy of the format flags with `format` switched off
pub fn remove_format(formats: &HashMap<String, bool>, format: &str) -> HashMap<String, bool> {
    let mut removed = formats.clone();
    removed.insert(format.to_string(), false);
    removed
}

/// Parser name for a file extension, ignoring case
pub fn choose_parser(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "md" | "markdown" => "markdown",
        _ => "plaintext",
    }
}

/// Build an extension-to-type table once and return a lookup over it
///
/// Lookups are case-sensitive; unknown extensions map to `"Unknown"`.
pub fn file_type_getter(file_types: &[(&str, &[&str])]) -> impl Fn(&str) -> String {
    let table: HashMap<String, String> = file_types
        .iter()
        .flat_map(|(file_type, extensions)| {
            extensions
                .iter()
                .map(move |ext| (ext.to_string(), file_type.to_string()))
        })
        .collect();

    move |extension: &str| {
        table
            .get(extension)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Guard `convert` behind an allow-list of file extensions
pub fn doc_format_checker_and_converter<F>(
    convert: F,
    valid_formats: &[&str],
) -> impl Fn(&str, &str) -> Result<String>
where
    F: Fn(&str) -> String,
{
    let valid: Vec<String> = valid_formats.iter().map(|f| f.to_string()).collect();

    move |filename: &str, content: &str| {
        let extension = extension_of(filename);
        if valid.iter().any(|f| f == extension) {
            Ok(convert(content))
        } else {
            Err(Error::InvalidFileFormat(extension.to_string()))
        }
    }
}

/// Uppercase the whole content
pub fn capitalize_content(content: &str) -> String {
    content.to_uppercase()
}

/// Reverse the content char by char
pub fn reverse_content(content: &str) -> String {
    content.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_allowed_pairs() {
        assert_eq!(convert_file_format("document.docx", "pdf").as_deref(), Some("document.pdf"));
        assert_eq!(convert_file_format("file.docx", "txt").as_deref(), Some("file.txt"));
        assert_eq!(convert_file_format("file.docx", "md").as_deref(), Some("file.md"));
        assert_eq!(convert_file_format("file.pdf", "docx").as_deref(), Some("file.docx"));
        assert_eq!(convert_file_format("file.txt", "md").as_deref(), Some("file.md"));
        assert_eq!(convert_file_format("slides.pptx", "ppt").as_deref(), Some("slides.ppt"));
        assert_eq!(convert_file_format("slides.ppt", "pptx").as_deref(), Some("slides.pptx"));
        assert_eq!(convert_file_format("slides.ppt", "pdf").as_deref(), Some("slides.pdf"));
        assert_eq!(convert_file_format("readme.md", "txt").as_deref(), Some("readme.txt"));
    }

    #[test]
    fn test_convert_every_table_entry() {
        for source in DocFormat::ALL {
            for &target in source.targets() {
                let name = format!("x.{source}");
                assert_eq!(
                    convert_file_format(&name, target.extension()),
                    Some(format!("x.{target}"))
                );
            }
        }
    }

    #[test]
    fn test_convert_rejected() {
        assert_eq!(convert_file_format("file.xyz", "pdf"), None);
        assert_eq!(convert_file_format("file.jpg", "docx"), None);
        assert_eq!(convert_file_format("file.docx", "pptx"), None);
        assert_eq!(convert_file_format("file.pptx", "docx"), None);
        assert_eq!(convert_file_format("file.pdf", "pdf"), None);
        assert_eq!(convert_file_format("noextension", "pdf"), None);
    }

    #[test]
    fn test_convert_keeps_inner_dots() {
        assert_eq!(
            convert_file_format("report.v2.md", "pdf").as_deref(),
            Some("report.v2.pdf")
        );
    }

    #[test]
    fn test_pair_document_with_format() {
        let result = pair_document_with_format(&["doc1", "doc2", "doc3"], &["pdf", "xyz", "txt"]);
        assert_eq!(
            result,
            vec![
                ("doc1".to_string(), "pdf".to_string()),
                ("doc3".to_string(), "txt".to_string())
            ]
        );
        assert!(pair_document_with_format(&["doc1", "doc2"], &["invalid", "unknown"]).is_empty());
        assert!(pair_document_with_format(&[], &[]).is_empty());

        let all = pair_document_with_format(
            &["a", "b", "c", "d", "e", "f"],
            &["docx", "pdf", "txt", "pptx", "ppt", "md"],
        );
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_add_format() {
        let formats = vec!["docx".to_string(), "pdf".to_string()];
        assert_eq!(add_format(&formats, "txt"), vec!["docx", "pdf", "txt"]);
        assert_eq!(add_format(&formats, "docx"), vec!["docx", "pdf", "docx"]);
        assert_eq!(add_format(&[], "docx"), vec!["docx"]);
        assert_eq!(formats, vec!["docx", "pdf"]);
    }

    #[test]
    fn test_remove_format() {
        let formats = HashMap::from([("docx".to_string(), true), ("pdf".to_string(), true)]);
        let result = remove_format(&formats, "pdf");
        assert_eq!(result["pdf"], false);
        assert_eq!(result["docx"], true);
        assert_eq!(formats["pdf"], true);

        let result = remove_format(&HashMap::new(), "docx");
        assert_eq!(result, HashMap::from([("docx".to_string(), false)]));
    }

    #[test]
    fn test_choose_parser() {
        assert_eq!(choose_parser("md"), "markdown");
        assert_eq!(choose_parser("markdown"), "markdown");
        assert_eq!(choose_parser("MD"), "markdown");
        assert_eq!(choose_parser("Markdown"), "markdown");
        assert_eq!(choose_parser("txt"), "plaintext");
        assert_eq!(choose_parser("html"), "plaintext");
    }

    #[test]
    fn test_file_type_getter() {
        let documents: &[&str] = &["doc", "docx", "pdf"];
        let images: &[&str] = &["png", "jpg", "gif"];
        let getter = file_type_getter(&[("Document", documents), ("Image", images)]);
        assert_eq!(getter("pdf"), "Document");
        assert_eq!(getter("doc"), "Document");
        assert_eq!(getter("jpg"), "Image");
        assert_eq!(getter("xyz"), "Unknown");
        assert_eq!(getter(""), "Unknown");
    }

    #[test]
    fn test_file_type_getter_empty_and_case() {
        let getter = file_type_getter(&[]);
        assert_eq!(getter("pdf"), "Unknown");

        let images: &[&str] = &["PNG", "JPG"];
        let getter = file_type_getter(&[("Image", images)]);
        assert_eq!(getter("PNG"), "Image");
        assert_eq!(getter("png"), "Unknown");
    }

    #[test]
    fn test_checker_and_converter() {
        let converter = doc_format_checker_and_converter(capitalize_content, &["txt", "md"]);
        assert_eq!(converter("doc.txt", "hello").unwrap(), "HELLO");
        assert!(matches!(
            converter("doc.pdf", "hello"),
            Err(Error::InvalidFileFormat(ext)) if ext == "pdf"
        ));

        let converter = doc_format_checker_and_converter(reverse_content, &["md"]);
        assert_eq!(converter("file.md", "abc").unwrap(), "cba");
    }

    #[test]
    fn test_checker_error_message() {
        let converter = doc_format_checker_and_converter(capitalize_content, &["txt"]);
        let err = converter("doc.pdf", "hello").unwrap_err();
        assert!(err.to_string().contains("invalid file format"));
    }

    #[test]
    fn test_capitalize_and_reverse() {
        assert_eq!(capitalize_content("HeLLo WoRLd"), "HELLO WORLD");
        assert_eq!(capitalize_content(""), "");
        assert_eq!(reverse_content("hello"), "olleh");
        assert_eq!(reverse_content("racecar"), "racecar");
        assert_eq!(reverse_content(""), "");
    }
}
