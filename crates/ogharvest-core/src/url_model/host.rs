//! Network-location (authority) extraction for metadata filenames.

/// Returns the authority component of `url` exactly as written: userinfo,
/// host and port included, no normalization.
///
/// Works on strings the `url` crate rejects, so malformed input still maps to
/// a name. Yields an empty string when there is no `scheme://` authority.
pub fn netloc(url: &str) -> &str {
    let rest = match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => url,
    };
    let Some(authority) = rest.strip_prefix("//") else {
        return "";
    };
    let end = authority
        .find(|c| c == '/' || c == '?' || c == '#')
        .unwrap_or(authority.len());
    &authority[..end]
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}
