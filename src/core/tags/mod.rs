//! core/tags/mod.rs
//!
//! ID3v2 codec.
//! Public API:
//! - [`Id3File`] implements [`crate::core::metadata::Metadata`] for MP3 files.
//! - [`find_region`] / [`read_region`] locate the tag bytes without decoding frames.

mod file;
mod read;
mod region;
mod util;
mod write;

pub use file::Id3File;
pub use region::{TagRegion, find_region, read_region};
