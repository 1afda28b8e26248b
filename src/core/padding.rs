//! core/padding.rs
//!
//! How much padding should a tag keep after a save?
//!
//! A codec that is about to write a tag knows two numbers:
//! - how much slack would be left in the old tag region once the new content is in it
//!   (negative = the new content doesn't fit)
//! - how big the whole file would be with that slack still in it
//!
//! It wraps them in a [`PaddingInfo`] and asks for a padding amount, either from the
//! built-in heuristic ([`PaddingInfo::default_padding`]) or from a caller-supplied policy
//! ([`PaddingInfo::resolve`]).
//!
//! Keeping enough padding means the next edit can overwrite the tag in place instead of
//! rewriting the whole file.

use std::fmt;

use super::error::{Result, TagError};

/// Baseline ceiling: existing padding above this gets shrunk.
const HIGH_BASE: i64 = 1024 * 5;
/// Baseline floor: what we hand out when padding has to be (re)allocated.
const LOW_BASE: i64 = 1024;

/// Caller override for the padding heuristic.
///
/// The returned amount is used as-is. Call [`PaddingInfo::default_padding`] inside it
/// for a layered decision.
pub type PaddingPolicy<'a> = &'a dyn Fn(&PaddingInfo) -> i64;

/// Padding figures for one save. Built right before the tag is laid out, then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingInfo {
    /// Bytes of padding left after saving. Negative if the new content needs that many
    /// more bytes than the old region had.
    pub padding: i64,

    /// File size after saving minus padding, or -1 if unknown.
    pub size: i64,
}

impl PaddingInfo {
    /// `filesize` is the size of the file after saving with `padding` left in it,
    /// or -1 if the codec can't tell.
    pub fn new(padding: i64, filesize: i64) -> Result<Self> {
        let size = match filesize {
            -1 => -1,
            f if f >= 0 => {
                match f.checked_sub(padding) {
                    Some(size) if size >= 0 => size,
                    _ => return Err(TagError::InvalidPadding { padding, filesize }),
                }
            }
            f => return Err(TagError::InvalidFilesize(f)),
        };

        Ok(Self { padding, size })
    }

    /// `(low, high)` for this file.
    ///
    /// Larger files are slower to rewrite, so both grow with the content size:
    /// `high` by 2.5%, `low` by 0.5% (truncating division).
    pub fn thresholds(&self) -> (i64, i64) {
        let mut high = HIGH_BASE;
        let mut low = LOW_BASE;
        if self.size != -1 {
            high += self.size / 40;
            low += self.size / 200;
        }
        (low, high)
    }

    /// The built-in heuristic. May change in future versions.
    ///
    /// - not enough padding: allocate `low`
    /// - too much (> `high`): shrink to `low`
    /// - otherwise keep it as is, even when it's below `low`
    pub fn default_padding(&self) -> i64 {
        let (low, high) = self.thresholds();

        if self.padding >= 0 {
            if self.padding > high {
                return low;
            }
            self.padding
        } else {
            low
        }
    }

    /// Padding to use: the policy's answer if one is given, the heuristic otherwise.
    pub fn resolve(&self, policy: Option<PaddingPolicy<'_>>) -> i64 {
        match policy {
            None => self.default_padding(),
            Some(f) => f(self),
        }
    }
}

impl fmt::Display for PaddingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<PaddingInfo size={} padding={}>", self.size, self.padding)
    }
}
