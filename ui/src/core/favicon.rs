//! Emoji favicon rendered as an inline SVG document.

/// SVG with the emoji centred on a transparent 100×100 canvas.
pub fn favicon_svg(emoji: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <text x="50" y="70" font-size="60" text-anchor="middle">{}</text>
</svg>"#,
        escape_xml(emoji)
    )
}

/// `data:` URI usable as the `href` of a `<link rel="icon">`.
pub fn favicon_data_uri(emoji: &str) -> String {
    let svg = favicon_svg(emoji);
    let encoded: String = url::form_urlencoded::byte_serialize(svg.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("data:image/svg+xml,{encoded}")
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
