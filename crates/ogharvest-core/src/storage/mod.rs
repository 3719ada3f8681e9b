//! Disk I/O and file lifecycle.
//!
//! Outputs are written to a uniquely named `.part` file next to the
//! destination and renamed onto the final name only once complete. An
//! interrupted write never leaves a truncated file under the real name, and
//! two writers aiming at the same name never share a temp file.

mod staged;

pub use staged::{write_staged, StagedFile};

use std::path::Path;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Hidden prefix for the temp file of `final_path` (e.g. `cat.png` → `.cat.png.`);
/// a random part and `.part` follow it.
pub fn temp_prefix(final_path: &Path) -> String {
    let name = final_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(".{}.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_prefix_hides_final_name() {
        assert_eq!(temp_prefix(Path::new("cat.png")), ".cat.png.");
        assert_eq!(temp_prefix(Path::new("/tmp/dist/a.example.com.txt")), ".a.example.com.txt.");
    }
}
