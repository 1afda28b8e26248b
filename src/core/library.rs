//! Filesystem walk for MP3 files.

use std::path::{Path, PathBuf};

use super::error::Result;

pub fn scan_mp3s(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    walk_dir(root, &mut out)?;
    Ok(out)
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            walk_dir(&path, out)?;
        } else if is_mp3(&path) {
            out.push(path);
        }
    }

    Ok(())
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_mp3s_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("album");
        std::fs::create_dir(&nested).unwrap();

        std::fs::write(dir.path().join("a.mp3"), b"").unwrap();
        std::fs::write(nested.join("b.MP3"), b"").unwrap();
        std::fs::write(nested.join("cover.jpg"), b"").unwrap();

        let mut found = scan_mp3s(dir.path()).unwrap();
        found.sort();
        assert_eq!(found, vec![dir.path().join("a.mp3"), nested.join("b.MP3")]);
    }
}
