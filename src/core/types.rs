//! Plain data types shared between the tag layer and the CLI.
//!
//! Rule of thumb:
//! - These structs are "boring bags of data"
//! - No filesystem code
//! - No tag parsing code
//!
//! `TrackRow` is ONE audio file on disk plus the tag fields we show and edit.

use std::path::PathBuf;

/// One row of track metadata.
///
/// Every tag field is an `Option`: files are often missing frames, and `None` on the write
/// side means "remove that frame".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackRow {
    /// Full file path on disk. The only thing we always have.
    pub path: PathBuf,

    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub genre: Option<String>,

    pub track_no: Option<u32>,
    pub track_total: Option<u32>,
    pub disc_no: Option<u32>,
    pub disc_total: Option<u32>,

    /// Release year (like 1998)
    pub year: Option<i32>,

    pub comment: Option<String>,
}
