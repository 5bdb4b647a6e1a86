//! Markdown to plain text, and a wrapper that applies it to arguments

use std::sync::LazyLock;

use regex_lite::Regex;

static HEADER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#+ *").expect("header pattern is valid")
});

/// Strip leading `#` header markers (and the spaces after them) from every line
pub fn convert_md_to_txt(document: &str) -> String {
    HEADER_MARKER.replace_all(document, "").into_owned()
}

/// Wrap a function over `N` plain-text arguments so every argument is
/// converted from markdown before the call
pub fn markdown_to_text<const N: usize, F, R>(func: F) -> impl Fn([&str; N]) -> R
where
    F: Fn([String; N]) -> R,
{
    move |args: [&str; N]| func(args.map(convert_md_to_txt))
}

/// Lay two documents out one after the other, stripped of markdown headers
pub fn concat(first_doc: &str, second_doc: &str) -> String {
    let render = markdown_to_text(|[first, second]: [String; 2]| {
        format!("  First: {first}\n  Second: {second}")
    });
    render([first_doc, second_doc])
}

/// Lay out a title, body and conclusion, stripped of markdown headers
pub fn format_as_essay(title: &str, body: &str, conclusion: &str) -> String {
    let render = markdown_to_text(|[title, body, conclusion]: [String; 3]| {
        format!("  Title: {title}\n  Body: {body}\n  Conclusion: {conclusion}")
    });
    render([title, body, conclusion])
}
