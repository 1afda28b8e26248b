//! core/tags/read.rs
//! Turn an in-memory `id3::Tag` into a `TrackRow`.

use std::path::PathBuf;

use id3::frame::Content;
use id3::{Tag, TagLike};

use super::super::types::TrackRow;
use super::util::parse_slash_pair_u32;

pub(crate) fn build_row_from_tag(path: PathBuf, tag: &Tag) -> TrackRow {
    // Pull TRCK / TPOS string values so we can parse totals (e.g. "3/12").
    let (track_no_from_text, track_total) =
        parse_slash_pair_u32(text_frame(tag, "TRCK").as_deref());
    let (disc_no_from_text, disc_total) = parse_slash_pair_u32(text_frame(tag, "TPOS").as_deref());

    TrackRow {
        path,

        title: tag.title().map(str::to_owned),
        artist: tag.artist().map(str::to_owned),
        album: tag.album().map(str::to_owned),
        album_artist: text_frame(tag, "TPE2"),
        genre: text_frame(tag, "TCON"),

        track_no: tag.track().or(track_no_from_text),
        track_total,
        disc_no: tag.disc().or(disc_no_from_text),
        disc_total,

        year: tag.year(),

        comment: first_comment(tag),
    }
}

fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}

fn first_comment(tag: &Tag) -> Option<String> {
    tag.comments().next().map(|c| c.text.clone())
}
