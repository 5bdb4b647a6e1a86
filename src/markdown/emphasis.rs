//! Removing `*` emphasis markers

/// Trim `*` markers from both ends of a word
pub fn remove_word_emphasis(word: &str) -> &str {
    word.trim_matches('*')
}

/// Strip emphasis from every word. Runs of whitespace collapse to one space.
pub fn remove_line_emphasis(line: &str) -> String {
    line.split_whitespace()
        .map(remove_word_emphasis)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip emphasis from every line of the document
pub fn remove_emphasis(document: &str) -> String {
    document
        .split('\n')
        .map(remove_line_emphasis)
        .collect::<Vec<_>>()
        .join("\n")
}
