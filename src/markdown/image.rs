//! Markdown image links

/// Curried image builder: alt text, then URL, then an optional title.
/// Parentheses in the URL are percent-encoded so they cannot close the link.
/// An empty title is left out.
pub fn create_markdown_image(alt_text: &str) -> impl Fn(&str) -> Box<dyn Fn(&str) -> String> {
    let alt_text = alt_text.to_string();
    move |url: &str| -> Box<dyn Fn(&str) -> String> {
        let alt_text = alt_text.clone();
        let url = url.replace('(', "%28").replace(')', "%29");
        Box::new(move |title: &str| {
            if title.is_empty() {
                format!("![{alt_text}]({url})")
            } else {
                format!("![{alt_text}]({url} \"{title}\")")
            }
        })
    }
}
