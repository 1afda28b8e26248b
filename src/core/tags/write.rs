//! core/tags/write.rs
//! Apply a `TrackRow` to an in-memory `id3::Tag`. Nothing here touches the disk;
//! `Id3File::save` does that.
//!
//! Semantics:
//! - `None` (or empty/whitespace string) => remove that frame.

use id3::frame::Comment;
use id3::{Tag, TagLike};

use super::super::types::TrackRow;

/// Set/remove a plain text frame (T***)
fn set_text_opt(tag: &mut Tag, id: &str, v: &Option<String>) {
    match v.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => tag.set_text(id, s.to_string()),
        _ => {
            tag.remove(id);
        }
    }
}

/// Write TRCK/TPOS as "n" or "n/total" (or remove if None)
fn set_slash_pair(tag: &mut Tag, id: &str, n: Option<u32>, total: Option<u32>) {
    match n {
        None => {
            let _ = tag.remove(id); // TagLike::remove returns Vec<Frame>; discard it
        }
        Some(n) => match total {
            Some(t) => tag.set_text(id, format!("{}/{}", n, t)),
            None => tag.set_text(id, n.to_string()),
        },
    }
}

pub(crate) fn apply_row(tag: &mut Tag, row: &TrackRow) {
    set_text_opt(tag, "TIT2", &row.title);
    set_text_opt(tag, "TPE1", &row.artist);
    set_text_opt(tag, "TALB", &row.album);
    set_text_opt(tag, "TPE2", &row.album_artist);
    set_text_opt(tag, "TCON", &row.genre);

    set_slash_pair(tag, "TRCK", row.track_no, row.track_total);
    set_slash_pair(tag, "TPOS", row.disc_no, row.disc_total);

    match row.year {
        Some(y) => tag.set_year(y),
        None => tag.remove_year(),
    }

    // Comment (COMM): replace with a single "eng" comment
    let _ = tag.remove("COMM");
    if let Some(s) = row.comment.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let _ = tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: "".to_string(),
            text: s.to_string(),
        });
    }
}
