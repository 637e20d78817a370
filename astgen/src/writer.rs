//! Final assembly of emitted fragments, and persisting the result.

use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

const INDENT: &str = "    ";

/// Accumulates fragments in emission order.
#[derive(Debug, Default, Clone)]
pub struct CodeWriter {
    fragments: Vec<String>,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank fragments are dropped.
    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.trim().is_empty() {
            self.fragments.push(fragment);
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Join fragments with one blank line between them, and expand tabs.
    ///
    /// The result always ends with exactly one newline.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            out.push_str(fragment.trim_matches('\n'));
        }
        out.push('\n');
        out.replace('\t', INDENT)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_atomic(path, &self.finish())
    }
}

/// Write `contents` to `path` such that `path` either holds all of
/// `contents`, or is left as it was.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|err| Error::io(dir, err))?;

    let mut file = NamedTempFile::new_in(dir).map_err(|err| Error::io(path, err))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(|err| Error::io(path, err))?;
    file.persist(path).map_err(|err| Error::io(path, err.error))?;

    Ok(())
}

/// Whether `path` already holds exactly `contents`. A missing file is stale.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool> {
    match std::fs::read(path) {
        Ok(current) => Ok(current == contents.as_bytes()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(Error::io(path, err)),
    }
}
