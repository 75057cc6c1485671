/// Escape text for use inside HTML elements and attributes.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a multi-line description, turning line breaks into `<br>`.
pub fn escape_description(text: &str) -> String {
    escape_text(text).replace('\n', "<br>")
}
