//! core/error.rs
//!
//! One error type for the whole tag layer.
//!
//! - `InvalidPadding` / `InvalidFilesize`: the caller handed `PaddingInfo` sizes that can't exist.
//! - `NotImplemented`: a `Metadata` impl didn't override a lifecycle method.
//! - Everything else comes from the concrete codec (IO, id3 decode/encode, config).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("Invalid padding: {padding} bytes of padding in a {filesize} byte file")]
    InvalidPadding { padding: i64, filesize: i64 },

    #[error("Invalid filesize: {0}")]
    InvalidFilesize(i64),

    #[error("{operation} is not implemented for this tag format")]
    NotImplemented { operation: &'static str },

    #[error("No destination given and nothing was loaded")]
    NoSource,

    #[error("Padding policy returned a negative amount: {0}")]
    NegativePadding(i64),

    #[error("Padding of {0} bytes does not fit in an ID3v2 tag")]
    PaddingTooLarge(i64),

    #[error("ID3 error: {0}")]
    Id3(#[from] id3::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TagError>;
