/// Extracts a bare artist ID from whatever the user pasted.
///
/// Accepts a raw ID, a `spotify:artist:<id>` URI or an
/// `https://open.spotify.com/artist/<id>` link. A trailing slash and any query
/// string (`?si=...`) are dropped.
///
/// # Examples
///
/// ```
/// use livechron::foundation::utils::normalize_artist_id;
///
/// let id = normalize_artist_id("https://open.spotify.com/artist/4TMHGUX5WI7OOm53PqSDAT/");
/// assert_eq!(id, "4TMHGUX5WI7OOm53PqSDAT");
/// ```
pub fn normalize_artist_id(raw: &str) -> String {
    let mut id = raw.trim();
    if let Some((before, _)) = id.split_once('?') {
        id = before;
    }
    if id.contains(':') {
        id = id.rsplit(':').next().unwrap_or(id);
    }
    if id.contains('/') {
        id = id.strip_suffix('/').unwrap_or(id);
        id = id.rsplit('/').next().unwrap_or(id);
    }
    id.to_string()
}

/// Escapes text for use inside HTML element content or quoted attributes.
///
/// # Examples
///
/// ```
/// use livechron::foundation::utils::escape_html;
///
/// assert_eq!(escape_html("Crosby, Stills & Nash"), "Crosby, Stills &amp; Nash");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
