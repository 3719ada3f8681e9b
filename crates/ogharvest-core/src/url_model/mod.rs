//! URL modeling and filename derivation.
//!
//! Maps image URLs and page URLs onto names inside the output directory.

mod host;
mod path;

pub use host::netloc;
pub use path::filename_from_url_path;

/// Filename used when the image URL path yields no basename.
pub const DEFAULT_IMAGE_FILENAME: &str = "image.jpg";

/// Extension appended to the page host for metadata files.
const METADATA_EXTENSION: &str = ".txt";

/// Derives the local filename for a downloaded preview image.
///
/// # Examples
///
/// - `image_filename("https://example.com/pics/cat.png")` → `"cat.png"`
/// - `image_filename("https://example.com")` → `"image.jpg"`
pub fn image_filename(image_url: &str) -> String {
    filename_from_url_path(image_url).unwrap_or_else(|| DEFAULT_IMAGE_FILENAME.to_string())
}

/// Derives the metadata filename `<host>.txt` for a page URL.
///
/// Two URLs on the same host map to the same name; the later write wins.
pub fn metadata_filename(page_url: &str) -> String {
    format!("{}{}", netloc(page_url), METADATA_EXTENSION)
}
