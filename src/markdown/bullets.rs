//! Bullet list normalization

/// Swap a leading `-` bullet for `*`
pub fn convert_line(line: &str) -> String {
    match line.strip_prefix('-') {
        Some(rest) => format!("*{rest}"),
        None => line.to_string(),
    }
}

/// Normalize every `-` bullet in the document to `*`
pub fn change_bullet_style(document: &str) -> String {
    document
        .split('\n')
        .map(convert_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop every line that starts with a `-` bullet
pub fn remove_invalid_lines(document: &str) -> String {
    document
        .split('\n')
        .filter(|line| !line.starts_with('-'))
        .collect::<Vec<_>>()
        .join("\n")
}
