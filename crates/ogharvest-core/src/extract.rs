//! Page metadata extraction: og:image, `<title>`, and meta description.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::http::{FetchError, HttpClient};

/// Metadata pulled from one page. `Default` is the all-absent record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Absolute og:image URL, resolved against the page URL.
    pub og_image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Fetches `page_url` and extracts its metadata. The body is decoded using
/// the `Content-Type` charset (UTF-8 when absent or unknown).
///
/// Transport and status failures are logged here and returned; callers fall
/// back to `PageMetadata::default()`.
pub fn extract_metadata(http: &HttpClient, page_url: &str) -> Result<PageMetadata, FetchError> {
    let body = match http.get_bytes(page_url) {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(url = page_url, "failed to process page: {}", e);
            return Err(e);
        }
    };
    Ok(parse_metadata(&body.text(), page_url))
}

/// Extracts metadata from an HTML document. Malformed markup is parsed
/// best-effort and never fails.
pub fn parse_metadata(html: &str, page_url: &str) -> PageMetadata {
    let doc = Html::parse_document(html);

    let title = first(&doc, "title").map(|t| t.text().collect::<String>().trim().to_string());

    let og_image_url = first(&doc, r#"meta[property="og:image"]"#)
        .and_then(|m| content(&m))
        .and_then(|raw| resolve(page_url, raw));

    let description = first(&doc, r#"meta[name="description"]"#)
        .and_then(|m| content(&m))
        .map(|d| d.trim().to_string());

    PageMetadata {
        og_image_url,
        title,
        description,
    }
}

fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    doc.select(&selector).next()
}

/// Non-empty `content` attribute.
fn content<'a>(el: &ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("content").filter(|c| !c.is_empty())
}

/// Joins `raw` onto `base`; absolute URLs pass through unchanged.
fn resolve(base: &str, raw: &str) -> Option<String> {
    let joined = Url::parse(base).and_then(|b| b.join(raw));
    match joined {
        Ok(u) => Some(u.to_string()),
        Err(e) => {
            tracing::warn!(url = base, og_image = raw, "cannot resolve og:image: {}", e);
            None
        }
    }
}
