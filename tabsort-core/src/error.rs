use crate::encoding::TextEncoding;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("The file '{}' was not found", .0.display())]
    FileNotFound(PathBuf),

    #[error(
        "Could not decode '{}' using any of the tried encodings: {}",
        .path.display(),
        TextEncoding::list(.tried)
    )]
    UndecodableFile {
        path: PathBuf,
        tried: Vec<TextEncoding>,
    },

    #[error("Failed to read '{}': {source}", .path.display())]
    OtherIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroupError>;
