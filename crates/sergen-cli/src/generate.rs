//! Header generation command

use crate::description::Description;
use anyhow::{Context, Result};
use sergen_core::HeaderGenerator;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Load a description file and render the header it describes
pub fn render(description_path: &Path) -> Result<String> {
    let description = Description::from_file(description_path)?;
    description.validate()?;

    let base_dir = description_path.parent().unwrap_or_else(|| Path::new("."));
    let generator = HeaderGenerator::new(description.generator_config(base_dir));
    let headers = description.header_spec()?;

    info!(
        classes = description.classes.len(),
        headers = headers.headers.len(),
        template = %generator.template_path().display(),
        "generating serialization header"
    );

    generator
        .generate_header(&description.classes, &headers)
        .with_context(|| format!("Failed to generate header for {}", description_path.display()))
}

/// Write `content` unless the file already holds exactly that content.
///
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == content {
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write header file: {}", path.display()))?;

    Ok(true)
}

/// Run the generate command. Output `None` or `-` writes to stdout.
pub fn run(description: &str, output: Option<&str>) -> Result<()> {
    let header = render(Path::new(description))?;

    match output {
        None | Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(header.as_bytes())
                .context("Failed to write header to stdout")?;
        }
        Some(output) => {
            let output_path = Path::new(output);
            if write_if_changed(output_path, &header)? {
                info!(path = %output_path.display(), "wrote header");
            } else {
                debug!(path = %output_path.display(), "header unchanged, not rewritten");
            }
        }
    }

    Ok(())
}
