//! Sequential writer for a `.part` file with rename-on-finish.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::{temp_prefix, TEMP_SUFFIX};

/// A file being written under a unique `.<final>.XXXXXX.part` name in the
/// destination directory. `finalize` renames it onto the final path; dropping
/// it unfinished removes the temp file.
pub struct StagedFile {
    file: BufWriter<NamedTempFile>,
    final_path: PathBuf,
}

impl StagedFile {
    /// Create a fresh temp file next to `final_path`.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let dir = match final_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let prefix = temp_prefix(final_path);
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(TEMP_SUFFIX);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o644));
        }
        let file = builder.tempfile_in(dir)?;
        Ok(Self {
            file: BufWriter::new(file),
            final_path: final_path.to_path_buf(),
        })
    }

    /// Append `data` to the temp file.
    pub fn write_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    pub fn temp_path(&self) -> &Path {
        self.file.get_ref().path()
    }

    /// Flush and rename the temp file onto the final path, replacing any
    /// existing file there. Returns the final path.
    pub fn finalize(self) -> io::Result<PathBuf> {
        let file = self.file.into_inner().map_err(|e| e.into_error())?;
        file.as_file().sync_all()?;
        file.persist(&self.final_path).map_err(|e| e.error)?;
        Ok(self.final_path)
    }
}

/// Writes `contents` to `path` through a staged temp file.
pub fn write_staged(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut staged = StagedFile::create(path)?;
    staged.write_chunk(contents)?;
    staged.finalize().map(|_| ())
}
