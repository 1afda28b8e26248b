//! core/tags/file.rs
//!
//! `Id3File`: an ID3v2 tag at the front of an MP3, with the full load/save/delete lifecycle.
//!
//! Saving is where padding gets decided:
//! 1. find the old tag region (if any) and how many bytes it spans (`available`)
//! 2. encode the new tag with no padding (`needed`)
//! 3. ask `PaddingInfo` how much padding to keep
//! 4. re-encode with that padding; same length as before => overwrite in place,
//!    otherwise rewrite the whole file as `tag + audio`

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use id3::{Encoder, Tag};
use tracing::{debug, info};

use super::read::build_row_from_tag;
use super::region::{HEADER_LEN, MAX_BODY_LEN, find_region};
use super::write::apply_row;
use crate::core::config::{TagVersion, WriteConfig};
use crate::core::error::{Result, TagError};
use crate::core::metadata::Metadata;
use crate::core::padding::{PaddingInfo, PaddingPolicy};
use crate::core::types::TrackRow;

#[derive(Debug, Clone)]
pub struct Id3File {
    tag: Tag,
    /// Where `load` read from; the default destination for save/delete.
    path: Option<PathBuf>,
    version: TagVersion,
}

impl Default for Id3File {
    fn default() -> Self {
        Self {
            tag: Tag::new(),
            path: None,
            version: TagVersion::default(),
        }
    }
}

impl Id3File {
    /// Construct and load in one go.
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_source(path)
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn version(&self) -> TagVersion {
        self.version
    }

    pub fn set_version(&mut self, version: TagVersion) {
        self.version = version;
    }

    /// Snapshot of the fields we show/edit. Empty path if nothing was loaded.
    pub fn snapshot(&self) -> TrackRow {
        build_row_from_tag(self.path.clone().unwrap_or_default(), &self.tag)
    }

    /// Overwrite the in-memory tag fields from `row`. `row.path` is ignored.
    pub fn apply(&mut self, row: &TrackRow) {
        apply_row(&mut self.tag, row);
    }

    /// Save using the version and padding mode from `config`.
    pub fn save_with_config(&mut self, destination: Option<&Path>, config: &WriteConfig) -> Result<()> {
        self.version = config.version;
        let policy = config.padding.policy();
        self.save_with(destination, policy.as_deref())
    }

    /// Save, letting `policy` (if any) pick the padding instead of the default heuristic.
    pub fn save_with(
        &mut self,
        destination: Option<&Path>,
        policy: Option<PaddingPolicy<'_>>,
    ) -> Result<()> {
        let path = self.destination(destination)?;

        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let available = find_region(&bytes).map_or(0, |r| r.len);
        let audio = &bytes[available..];

        let needed = self.encode(0)?.len();
        let info = PaddingInfo::new(
            available as i64 - needed as i64,
            (audio.len() + available) as i64,
        )?;

        let requested = info.resolve(policy);
        let padding =
            usize::try_from(requested).map_err(|_| TagError::NegativePadding(requested))?;
        debug!(%info, padding, path = %path.display(), "picked tag padding");

        // The syncsafe size field caps frames + padding at 28 bits.
        let body = (needed - HEADER_LEN).checked_add(padding);
        if body.is_none_or(|b| b > MAX_BODY_LEN) {
            return Err(TagError::PaddingTooLarge(requested));
        }

        let region = self.encode(padding)?;

        if region.len() == available {
            debug!(len = region.len(), "tag fits, writing in place");
            let mut file = OpenOptions::new().write(true).open(&path)?;
            file.write_all(&region)?;
            file.flush()?;
        } else {
            info!(
                old = available,
                new = region.len(),
                path = %path.display(),
                "tag size changed, rewriting file"
            );
            let mut out = Vec::with_capacity(region.len() + audio.len());
            out.extend_from_slice(&region);
            out.extend_from_slice(audio);
            fs::write(&path, out)?;
        }

        Ok(())
    }

    fn destination(&self, destination: Option<&Path>) -> Result<PathBuf> {
        destination
            .or(self.path.as_deref())
            .map(Path::to_path_buf)
            .ok_or(TagError::NoSource)
    }

    fn encode(&self, padding: usize) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        Encoder::new()
            .version(self.version.as_id3())
            .padding(padding)
            .encode(&self.tag, &mut out)?;
        Ok(out)
    }
}

impl Metadata for Id3File {
    /// A file without an ID3v2 tag loads as an empty tag.
    fn load(&mut self, source: &Path) -> Result<()> {
        self.tag = match Tag::read_from_path(source) {
            Ok(tag) => tag,
            Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => Tag::new(),
            Err(e) => return Err(e.into()),
        };
        self.path = Some(source.to_path_buf());
        Ok(())
    }

    fn save(&mut self, destination: Option<&Path>) -> Result<()> {
        self.save_with(destination, None)
    }

    /// Strip the ID3v2 region. A file without one is left alone.
    fn delete(&mut self, destination: Option<&Path>) -> Result<()> {
        let path = self.destination(destination)?;
        let bytes = fs::read(&path)?;

        match find_region(&bytes) {
            Some(region) => {
                info!(len = region.len, path = %path.display(), "removing tag");
                fs::write(&path, &bytes[region.len..])?;
            }
            None => debug!(path = %path.display(), "no tag to remove"),
        }

        if self.path.as_deref() == Some(path.as_path()) {
            self.tag = Tag::new();
        }
        Ok(())
    }
}
