//! `lumen run` — resolve and execute an entry script.

use anyhow::anyhow;
use lumen_host::Runtime;
use std::path::{Path, PathBuf};

use crate::manifest;

pub fn execute(file: Option<&Path>) -> anyhow::Result<()> {
    let entry = match file {
        Some(path) => path.to_path_buf(),
        None => resolve_default_entry()?,
    };

    if !entry.exists() {
        anyhow::bail!("File not found: {}", entry.display());
    }

    let rt = Runtime::new()?;
    lumen_stdlib::register_stdlib(&rt)?;
    rt.run_file(&entry)?;
    Ok(())
}

/// Entry resolution when no file argument was given:
/// `[package].main` from the nearest `lumen.toml`, then `main.lua` in the
/// current directory.
fn resolve_default_entry() -> anyhow::Result<PathBuf> {
    if let Some(manifest_path) = manifest::find_manifest() {
        let manifest = manifest::Manifest::from_file(&manifest_path)?;
        if let Some(main) = manifest.package.main {
            let base = manifest_path.parent().unwrap_or(Path::new("."));
            return Ok(base.join(main));
        }
    }

    let fallback = PathBuf::from("main.lua");
    if fallback.exists() {
        return Ok(fallback);
    }

    Err(anyhow!(
        "No entry script found.\n\
         Pass a file argument, set [package].main in lumen.toml, or create main.lua."
    ))
}
