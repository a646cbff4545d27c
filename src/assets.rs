//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const SITE: &str = include_str!("../assets/site.css");

/// Writes bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "site.css", &[SITE])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
