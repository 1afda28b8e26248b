//! core/metadata.rs
//!
//! The load/save/delete lifecycle every tag format implements.
//!
//! - `Default` is the "unloaded" state (no tag data, no source).
//! - [`Metadata::from_source`] is construct-and-load.
//! - A `None` destination means "the file we loaded from".
//!
//! Every method has a body that fails with [`TagError::NotImplemented`], so a format that
//! forgets to override one finds out the first time it's called instead of silently doing
//! nothing.

use std::path::Path;

use super::error::{Result, TagError};

pub trait Metadata: Default {
    /// Read tag state from `source`, replacing whatever is in memory.
    fn load(&mut self, _source: &Path) -> Result<()> {
        Err(TagError::NotImplemented { operation: "load" })
    }

    /// Write the in-memory tag to `destination` (or back to the loaded file).
    fn save(&mut self, _destination: Option<&Path>) -> Result<()> {
        Err(TagError::NotImplemented { operation: "save" })
    }

    /// Remove all tag data from `destination` (or the loaded file). Audio stays.
    fn delete(&mut self, _destination: Option<&Path>) -> Result<()> {
        Err(TagError::NotImplemented { operation: "delete" })
    }

    /// Construct and immediately load.
    fn from_source(source: &Path) -> Result<Self> {
        let mut meta = Self::default();
        meta.load(source)?;
        Ok(meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Implements nothing.
    #[derive(Default)]
    struct Bare;

    impl Metadata for Bare {}

    /// Implements only `load`.
    #[derive(Default)]
    struct LoadOnly {
        loaded: Option<String>,
    }

    impl Metadata for LoadOnly {
        fn load(&mut self, source: &Path) -> Result<()> {
            self.loaded = Some(source.display().to_string());
            Ok(())
        }
    }

    fn not_implemented(res: Result<impl Sized>) -> &'static str {
        match res {
            Err(TagError::NotImplemented { operation }) => operation,
            Err(e) => panic!("wrong error: {e}"),
            Ok(_) => panic!("expected NotImplemented"),
        }
    }

    #[test]
    fn bare_contract_fails_every_operation() {
        let mut bare = Bare;
        let p = Path::new("song.mp3");

        assert_eq!(not_implemented(bare.load(p)), "load");
        assert_eq!(not_implemented(bare.save(None)), "save");
        assert_eq!(not_implemented(bare.save(Some(p))), "save");
        assert_eq!(not_implemented(bare.delete(None)), "delete");
        assert_eq!(not_implemented(bare.delete(Some(p))), "delete");
    }

    #[test]
    fn from_source_on_bare_contract_fails() {
        assert_eq!(not_implemented(Bare::from_source(Path::new("x.mp3"))), "load");
    }

    #[test]
    fn default_is_unloaded() {
        assert!(LoadOnly::default().loaded.is_none());
    }

    #[test]
    fn from_source_runs_load() {
        let m = LoadOnly::from_source(Path::new("a.mp3")).unwrap();
        assert_eq!(m.loaded.as_deref(), Some("a.mp3"));
    }

    #[test]
    fn partial_impl_still_fails_the_rest() {
        let mut m = LoadOnly::from_source(Path::new("a.mp3")).unwrap();
        assert_eq!(not_implemented(m.save(None)), "save");
        assert_eq!(not_implemented(m.delete(None)), "delete");
    }
}
