//! Decorative artwork.
//!
//! Artwork is optional: a provider that has nothing returns `None` and the
//! card renders without it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Artwork {
    Proposal,
    Success,
}

impl Artwork {
    pub fn name(&self) -> &'static str {
        match self {
            Artwork::Proposal => "proposal",
            Artwork::Success => "success",
        }
    }
}

pub trait AssetProvider: Send + Sync {
    fn artwork(&self, which: Artwork) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetProvider for NoAssets {
    fn artwork(&self, _which: Artwork) -> Option<String> {
        None
    }
}

/// Reads `<dir>/<name>.txt` for each artwork.
#[derive(Debug, Clone)]
pub struct DirAssets {
    dir: PathBuf,
}

impl DirAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl AssetProvider for DirAssets {
    fn artwork(&self, which: Artwork) -> Option<String> {
        let path = self.dir.join(format!("{}.txt", which.name()));
        match std::fs::read_to_string(&path) {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "artwork unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_artwork_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("success.txt"), " (\\/)\n  \\/\n").unwrap();
        let assets = DirAssets::new(dir.path());
        assert_eq!(
            assets.artwork(Artwork::Success).as_deref(),
            Some(" (\\/)\n  \\/\n")
        );
        assert_eq!(assets.artwork(Artwork::Proposal), None);
    }

    #[test]
    fn missing_dir_is_not_an_error() {
        let assets = DirAssets::new("/definitely/not/here");
        assert_eq!(assets.artwork(Artwork::Proposal), None);
        assert_eq!(NoAssets.artwork(Artwork::Success), None);
    }
}
