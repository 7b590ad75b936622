//! Project manifest (`lumen.toml`) loading and discovery.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Parsed `lumen.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// The `[package]` table.
    #[serde(default)]
    pub package: Package,
}

/// The `[package]` table of a manifest.
#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
pub struct Package {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Entry script, relative to the manifest's directory.
    pub main: Option<String>,
}

impl Manifest {
    /// Parse a manifest file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid manifest: {}", path.display()))
    }
}

/// Find the nearest `lumen.toml`, walking up from the current directory.
pub fn find_manifest() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join("lumen.toml");
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lumen.toml");
        std::fs::write(
            &path,
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\nmain = \"src/app.lua\"\n",
        )
        .unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest.package.name.as_deref(), Some("demo"));
        assert_eq!(manifest.package.main.as_deref(), Some("src/app.lua"));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lumen.toml");
        std::fs::write(&path, "").unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert!(manifest.package.main.is_none());
    }

    #[test]
    fn test_invalid_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lumen.toml");
        std::fs::write(&path, "package = \"not a table\"").unwrap();

        assert!(Manifest::from_file(&path).is_err());
    }
}
