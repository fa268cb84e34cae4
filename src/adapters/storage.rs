use crate::domain::ports::Storage;
use crate::utils::error::{PackError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| PackError::MediaReadError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes through a temporary file in the same directory and renames it into place,
    /// so a failed write never touches an existing file at `path`.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(data)?;
        staged.as_file().sync_all()?;

        // 失敗時暫存檔會在 drop 時自動刪除
        staged.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
