use crate::utils::error::{PackError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// 媒體種類，決定封包內的目錄與 XML 的 `type` 屬性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    pub fn xml_type(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
        }
    }

    pub fn directory(self) -> &'static str {
        match self {
            MediaKind::Image => "Images",
            MediaKind::Audio => "Audio",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("Image"),
            MediaKind::Audio => f.write_str("Audio"),
        }
    }
}

/// A local file embedded into the package and referenced by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    kind: MediaKind,
    path: PathBuf,
    file_name: String,
}

impl MediaRef {
    fn new(kind: MediaKind, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            kind,
            path,
            file_name,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 封包內的路徑，例如 `Images/mars.jpg`
    pub fn archive_path(&self) -> Result<String> {
        if self.file_name.is_empty() {
            return Err(PackError::InvalidMediaPath {
                path: self.path.clone(),
            });
        }
        Ok(format!("{}/{}", self.kind.directory(), self.file_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image(MediaRef);

impl Image {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(MediaRef::new(MediaKind::Image, path))
    }

    pub fn media(&self) -> &MediaRef {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audio(MediaRef);

impl Audio {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(MediaRef::new(MediaKind::Audio, path))
    }

    pub fn media(&self) -> &MediaRef {
        &self.0
    }
}
