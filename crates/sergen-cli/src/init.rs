//! Writes the bundled default template

use anyhow::{Context, Result};
use sergen_core::template::{DEFAULT_TEMPLATE, TEMPLATE_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};

/// Write the default template into `dir`, returning the file path
pub fn write_default_template(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(TEMPLATE_FILE_NAME);

    if path.exists() && !force {
        anyhow::bail!(
            "Template already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    fs::write(&path, DEFAULT_TEMPLATE)
        .with_context(|| format!("Failed to write template: {}", path.display()))?;

    Ok(path)
}

/// Run the init-template command
pub fn run(dir: Option<String>, force: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| ".".to_string());

    let path = write_default_template(Path::new(&dir), force)?;
    println!("Created template: {}", path.display());

    Ok(())
}
