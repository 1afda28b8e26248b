//! core/config.rs
//!
//! Write settings, loadable from a small TOML file:
//!
//! ```toml
//! version = "v24"
//!
//! [padding]
//! mode = "fixed"
//! bytes = 4096
//! ```
//!
//! Everything has a default, so an empty file (or no file) is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, TagError};
use super::padding::PaddingInfo;

/// ID3v2 version to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagVersion {
    V23,
    #[default]
    V24,
}

impl TagVersion {
    pub fn as_id3(self) -> id3::Version {
        match self {
            TagVersion::V23 => id3::Version::Id3v23,
            TagVersion::V24 => id3::Version::Id3v24,
        }
    }
}

/// How a save picks its padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PaddingMode {
    /// Built-in heuristic.
    #[default]
    Default,
    /// Keep whatever padding is left; fall back to the heuristic if the tag grew past it.
    Keep,
    /// Always this many bytes.
    Fixed { bytes: i64 },
}

fn keep_existing(info: &PaddingInfo) -> i64 {
    if info.padding >= 0 {
        info.padding
    } else {
        info.default_padding()
    }
}

impl PaddingMode {
    /// The override to hand to [`PaddingInfo::resolve`]. `None` means "use the heuristic".
    pub fn policy(self) -> Option<Box<dyn Fn(&PaddingInfo) -> i64>> {
        match self {
            PaddingMode::Default => None,
            PaddingMode::Keep => Some(Box::new(keep_existing)),
            PaddingMode::Fixed { bytes } => Some(Box::new(move |_: &PaddingInfo| bytes)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    pub version: TagVersion,
    pub padding: PaddingMode,
}

impl WriteConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| TagError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw).map_err(|e| match e {
            TagError::Config(msg) => TagError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let cfg = WriteConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, WriteConfig::default());
        assert_eq!(cfg.version, TagVersion::V24);
        assert_eq!(cfg.padding, PaddingMode::Default);
    }

    #[test]
    fn parses_fixed_padding() {
        let cfg = WriteConfig::from_toml_str(
            r#"
            version = "v23"

            [padding]
            mode = "fixed"
            bytes = 4096
            "#,
        )
        .unwrap();

        assert_eq!(cfg.version, TagVersion::V23);
        assert_eq!(cfg.padding, PaddingMode::Fixed { bytes: 4096 });
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = WriteConfig::from_toml_str("[padding]\nmode = \"huge\"\n").unwrap_err();
        assert!(matches!(err, TagError::Config(_)));
    }

    #[test]
    fn default_mode_has_no_policy() {
        assert!(PaddingMode::Default.policy().is_none());
    }

    #[test]
    fn keep_mode_keeps_non_negative_padding() {
        let policy = PaddingMode::Keep.policy().unwrap();

        // Way above `high`, but keep means keep.
        let big = PaddingInfo::new(50_000, 60_000).unwrap();
        assert_eq!(big.resolve(Some(policy.as_ref())), 50_000);

        let short = PaddingInfo::new(-10, -1).unwrap();
        assert_eq!(short.resolve(Some(policy.as_ref())), 1024);
    }

    #[test]
    fn fixed_mode_ignores_the_heuristic() {
        let policy = PaddingMode::Fixed { bytes: 7 }.policy().unwrap();
        let info = PaddingInfo::new(-500, -1).unwrap();
        assert_eq!(info.resolve(Some(policy.as_ref())), 7);
    }
}
