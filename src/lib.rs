//! Tag padding policy and the load/save/delete lifecycle for audio metadata,
//! with an ID3v2 implementation.

pub mod core;

pub use crate::core::config::{PaddingMode, TagVersion, WriteConfig};
pub use crate::core::error::{Result, TagError};
pub use crate::core::metadata::Metadata;
pub use crate::core::padding::{PaddingInfo, PaddingPolicy};
pub use crate::core::tags::Id3File;
pub use crate::core::types::TrackRow;
