//! Description and template validation

use crate::description::Description;
use anyhow::{Context, Result};
use sergen_core::HeaderGenerator;
use sergen_core::template::{self, TemplateReport};
use std::path::Path;

/// Validate a description file and the template it points to
pub fn check_description(description_path: &Path) -> Result<(Description, TemplateReport)> {
    let description = Description::from_file(description_path)?;
    description.validate()?;
    description.header_spec()?;

    let base_dir = description_path.parent().unwrap_or_else(|| Path::new("."));
    let generator = HeaderGenerator::new(description.generator_config(base_dir));
    let template_path = generator.template_path();

    let text = std::fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;

    let report = template::check_template(&text).map_err(|err| {
        if err.is_template_shape() {
            anyhow::anyhow!("Template {} is malformed: {err}", template_path.display())
        } else {
            err.into()
        }
    })?;

    Ok((description, report))
}

/// Check command implementation
pub fn run(description_path: &str) -> Result<()> {
    println!("Checking description: {description_path}");

    let (description, report) = check_description(Path::new(description_path))?;

    println!("✓ Classes: {}", description.classes.len());
    println!("✓ Headers: {}", description.headers.include.len());
    println!("✓ Sentinel markers present");

    let unused = report.unused_placeholders();
    if !unused.is_empty() {
        println!("  Unused placeholders: {}", unused.join(", "));
    }

    println!("\nDescription is valid!");

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use sergen_core::template::{DEFAULT_TEMPLATE, TEMPLATE_FILE_NAME};
    use std::fs;
    use tempfile::TempDir;

    fn project(template: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TEMPLATE_FILE_NAME), template).unwrap();
        let description_path = dir.path().join("sergen.toml");
        fs::write(&description_path, "[[class]]\nname = \"Foo\"\n").unwrap();
        (dir, description_path)
    }

    #[test]
    fn check_description___default_template___passes() {
        let (_dir, description_path) = project(DEFAULT_TEMPLATE);

        let (description, report) = check_description(&description_path).unwrap();

        assert_eq!(description.classes.len(), 1);
        assert!(report.unused_placeholders().is_empty());
    }

    #[test]
    fn check_description___template_without_link_marker___fails() {
        let (_dir, description_path) = project("// SERIALIZATIION_DEFINITIONS\n");

        let err = check_description(&description_path).unwrap_err();

        assert!(err.to_string().contains("malformed"));
        assert!(err.to_string().contains("NAMESPACE_LINK"));
    }

    #[test]
    fn check_description___missing_template___fails() {
        let dir = TempDir::new().unwrap();
        let description_path = dir.path().join("sergen.toml");
        fs::write(&description_path, "").unwrap();

        assert!(check_description(&description_path).is_err());
    }
}
