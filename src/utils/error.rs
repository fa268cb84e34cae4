use crate::domain::media::MediaKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML rendering error: {message}")]
    XmlError { message: String },

    #[error("Cannot read media file {path:?}: {source}")]
    MediaReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Media path has no file name: {path:?}")]
    InvalidMediaPath { path: PathBuf },

    #[error("{kind} file name '{file_name}' is used by two different files: {first:?} and {second:?}")]
    MediaNameCollision {
        kind: MediaKind,
        file_name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Question '{answer}' has no question content")]
    EmptyQuestionContent { answer: String },

    #[error("Price divisor must be non-zero")]
    InvalidDivisor,

    #[error("Manifest parsing error: {message}")]
    ManifestError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PackError {
    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        PackError::XmlError {
            message: err.to_string(),
        }
    }

    /// 給 CLI 使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PackError::ZipError(_) | PackError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            PackError::XmlError { .. } => "Report this as a bug together with the manifest",
            PackError::MediaReadError { .. } | PackError::InvalidMediaPath { .. } => {
                "Check that every image and audio path points to a readable file"
            }
            PackError::MediaNameCollision { .. } => {
                "Rename one of the files so every media file name is unique"
            }
            PackError::EmptyQuestionContent { .. } => {
                "Give every question at least one text, image or audio item"
            }
            PackError::InvalidDivisor => "Use a non-zero divisor",
            PackError::ManifestError { .. } | PackError::InvalidConfigValueError { .. } => {
                "Fix the manifest file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
