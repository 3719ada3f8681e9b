//! Buffered response bodies and their text decoding.

use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

/// A fully received response body.
#[derive(Debug, Clone, Default)]
pub struct FetchedBody {
    pub bytes: Vec<u8>,
    /// `Content-Type` of the final response, if the server sent one.
    pub content_type: Option<String>,
}

impl FetchedBody {
    /// `charset` parameter of the `Content-Type`, unquoted.
    pub fn charset(&self) -> Option<&str> {
        self.content_type.as_deref().and_then(charset_param)
    }

    /// Decodes the body using the declared charset, falling back to UTF-8
    /// for a missing or unknown label. A byte order mark overrides both.
    /// Malformed sequences become U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        let encoding = self
            .charset()
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);
        let (text, _, _) = encoding.decode(&self.bytes);
        text
    }
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches('"').trim();
        (!value.is_empty()).then_some(value)
    })
}
