//! core/mod.rs
//!
//! Everything that isn't the CLI:
//! - padding policy for tag saves ([`padding`])
//! - the load/save/delete contract every tag format implements ([`metadata`])
//! - the ID3v2 implementation of that contract ([`tags`])
//! - write settings ([`config`]) and plain data rows ([`types`])

pub mod config;
pub mod error;
pub mod library;
pub mod metadata;
pub mod padding;
pub mod tags;
pub mod types;

use std::collections::HashSet;
use std::path::PathBuf;

use error::Result;
use tags::TagRegion;

/// Discover MP3s under multiple roots.
///
/// - De-dupes across overlapping roots by full path
/// - Sorts paths once
pub fn scan_paths(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out: Vec<PathBuf> = Vec::new();

    for root in roots {
        for path in library::scan_mp3s(root)? {
            if seen.insert(path.clone()) {
                out.push(path);
            }
        }
    }

    out.sort();
    Ok(out)
}

/// Tag region (if any) for each path. Never fails hard per-file: unreadable files
/// are counted and skipped.
pub fn read_regions(paths: Vec<PathBuf>) -> (Vec<(PathBuf, Option<TagRegion>)>, usize) {
    let mut rows = Vec::with_capacity(paths.len());
    let mut failures: usize = 0;

    for path in paths {
        match tags::read_region(&path) {
            Ok(region) => rows.push((path, region)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read tag header");
                failures += 1;
            }
        }
    }

    (rows, failures)
}
