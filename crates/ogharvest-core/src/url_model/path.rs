//! Filename extraction from URL path.

/// Returns the text after the last `/` of the URL path, excluding query and
/// fragment. The segment is kept verbatim (percent-encoding is not decoded).
///
/// Returns `None` if the URL cannot be parsed, the path ends in `/`, or the
/// segment is `.` / `..`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
