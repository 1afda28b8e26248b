//! core/tags/region.rs
//!
//! Find the ID3v2 tag region at the front of a file, without decoding any frames.
//!
//! Layout:
//! - 10-byte header: "ID3", major, revision, flags, 4-byte syncsafe size
//! - `size` bytes of frames + padding
//! - optional 10-byte footer (v2.4, flag 0x10)
//!
//! The codec only needs the total length, so it knows where the audio starts and how much
//! room an in-place rewrite has.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::util::parse_syncsafe_u32;
use crate::core::error::Result;

pub(crate) const HEADER_LEN: usize = 10;
/// Largest body (frames + padding) a 28-bit syncsafe size can describe.
pub(crate) const MAX_BODY_LEN: usize = (1 << 28) - 1;
const FOOTER_FLAG: u8 = 0x10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRegion {
    /// ID3v2 major version (2, 3 or 4).
    pub major: u8,
    /// Header + body + footer, in bytes.
    pub len: usize,
}

fn parse_header(header: &[u8; HEADER_LEN]) -> Option<TagRegion> {
    if &header[..3] != b"ID3" || header[3] == 0xff || header[4] == 0xff {
        return None;
    }

    let body = parse_syncsafe_u32([header[6], header[7], header[8], header[9]])? as usize;
    let footer = if header[5] & FOOTER_FLAG != 0 { HEADER_LEN } else { 0 };

    Some(TagRegion {
        major: header[3],
        len: HEADER_LEN + body + footer,
    })
}

/// Locate the tag region in an in-memory file. A region that claims more bytes than the
/// file has is clamped to the file.
pub fn find_region(bytes: &[u8]) -> Option<TagRegion> {
    let header: &[u8; HEADER_LEN] = bytes.get(..HEADER_LEN)?.try_into().ok()?;
    let region = parse_header(header)?;
    Some(TagRegion {
        len: region.len.min(bytes.len()),
        ..region
    })
}

/// Same as [`find_region`], reading only the header from disk.
pub fn read_region(path: &Path) -> Result<Option<TagRegion>> {
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let mut header = [0u8; HEADER_LEN];
    match file.read_exact(&mut header) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    Ok(parse_header(&header).map(|r| TagRegion {
        len: r.len.min(usize::try_from(file_len).unwrap_or(usize::MAX)),
        ..r
    }))
}
