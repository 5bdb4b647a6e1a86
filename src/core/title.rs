//! Title styling and sentence-level formatting

use serde::{Deserialize, Serialize};

/// How a document title is centered and underlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStyle {
    /// Width the title is centered within
    pub width: usize,
    /// Character repeated under the title
    pub border: char,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            width: 40,
            border: '*',
        }
    }
}

impl TitleStyle {
    /// Center the first line of the document within `self.width`
    pub fn center(&self, document: &str) -> String {
        let (title, body) = split_title(document);
        let centered = pad_center(title, self.width);
        match body {
            Some(body) => format!("{centered}\n{body}"),
            None => centered,
        }
    }

    /// Insert a border line, as long as the title, under the first line
    pub fn border(&self, document: &str) -> String {
        let (title, body) = split_title(document);
        let border: String = std::iter::repeat(self.border)
            .take(title.chars().count())
            .collect();
        match body {
            Some(body) => format!("{title}\n{border}\n{body}"),
            None => format!("{title}\n{border}"),
        }
    }

    /// Center the title, then underline it
    pub fn stylize(&self, document: &str) -> String {
        self.border(&self.center(document))
    }
}

fn split_title(document: &str) -> (&str, Option<&str>) {
    match document.split_once('\n') {
        Some((title, body)) => (title, Some(body)),
        None => (document, None),
    }
}

/// Pad `text` on both sides to `width` chars; an odd leftover goes left only
/// when both the margin and the width are odd.
fn pad_center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Center the first line of a document in 40 columns
pub fn center_title(document: &str) -> String {
    TitleStyle::default().center(document)
}

/// Underline the first line of a document with asterisks
pub fn add_border(document: &str) -> String {
    TitleStyle::default().border(document)
}

/// Center and underline the document title
pub fn stylize_title(document: &str) -> String {
    TitleStyle::default().stylize(document)
}

/// Return a new sequence with `document` appended, numbered by the
/// length of `documents`
pub fn add_prefix(document: &str, documents: &[String]) -> Vec<String> {
    let mut prefixed = documents.to_vec();
    prefixed.push(format!("{}. {}", documents.len(), document));
    prefixed
}

/// Strip periods, uppercase and trim, then end with an ellipsis
pub fn format_line(line: &str) -> String {
    format!("{}...", line.replace('.', "").to_uppercase().trim())
}

/// Join two sentences with a period and a space
pub fn join(first: &str, second: &str) -> String {
    format!("{first}. {second}")
}

/// Join the first `n` sentences into a single period-terminated string
pub fn join_first_sentences(sentences: &[&str], n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let taken = &sentences[..n.min(sentences.len())];
    format!("{}.", taken.join(". "))
}

/// End the line with a blank line
pub fn add_line_break(line: &str) -> String {
    format!("{line}\n\n")
}
