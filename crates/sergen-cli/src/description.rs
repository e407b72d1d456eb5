//! Class description file parsing and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sergen_core::{ClassDescription, Flavor, GeneratorConfig, HeaderRewrite, HeaderSpec};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Description file structure (`sergen.toml` or JSON equivalent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub generator: GeneratorSection,

    #[serde(default)]
    pub headers: HeadersSection,

    /// Classes in emission order
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDescription>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Naming preset (default: boost)
    #[serde(default)]
    pub flavor: Option<Flavor>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub macro_guard: Option<String>,

    #[serde(default)]
    pub config_header: Option<String>,

    /// Relative paths are resolved against the description file's directory
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    #[serde(default)]
    pub strict_markers: bool,

    #[serde(default)]
    pub serialization_class_name: Option<String>,

    #[serde(default)]
    pub serialization_namespace: Option<String>,

    #[serde(default)]
    pub base_object_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadersSection {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub replacement: Option<String>,
}

impl Description {
    /// Load a description file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read description: {}", path.display()))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        parsed.with_context(|| format!("Invalid description file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML description")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON description")
    }

    /// Validate the description
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for class in &self.classes {
            if class.name.trim().is_empty() {
                anyhow::bail!("Class name cannot be empty");
            }

            if !seen.insert(class.name.as_str()) {
                anyhow::bail!("Class '{}' is described more than once", class.name);
            }

            for param in &class.template_parameters {
                if param.kind.trim().is_empty() || param.name.trim().is_empty() {
                    anyhow::bail!(
                        "Template parameters of class '{}' need both a kind and a name",
                        class.name
                    );
                }
            }
        }

        match (&self.headers.pattern, &self.headers.replacement) {
            (Some(_), None) => anyhow::bail!("Header pattern given without a replacement"),
            (None, Some(_)) => anyhow::bail!("Header replacement given without a pattern"),
            _ => {}
        }

        Ok(())
    }

    /// Build the generator configuration. `base_dir` is the directory the
    /// description was loaded from.
    pub fn generator_config(&self, base_dir: &Path) -> GeneratorConfig {
        let section = &self.generator;
        let mut config = GeneratorConfig::for_flavor(section.flavor.unwrap_or(Flavor::Boost));

        if let Some(name) = &section.serialization_class_name {
            config.serialization_class_name = name.clone();
        }
        if let Some(namespace) = &section.serialization_namespace {
            config.serialization_namespace = namespace.clone();
        }
        if let Some(base_object) = &section.base_object_name {
            config.base_object_name = base_object.clone();
        }
        if let Some(namespace) = &section.namespace {
            config = config.with_namespace(namespace);
        }
        if let Some(macro_guard) = &section.macro_guard {
            config = config.with_macro_guard(macro_guard);
        }
        if let Some(header) = &section.config_header {
            config = config.with_config_header(header);
        }

        let template_dir = match &section.template_dir {
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        };

        config
            .with_template_dir(template_dir)
            .with_strict_markers(section.strict_markers)
    }

    /// Build the include list, compiling the rewrite pattern if present
    pub fn header_spec(&self) -> Result<HeaderSpec> {
        let spec = HeaderSpec::new(self.headers.include.iter().cloned());

        match (&self.headers.pattern, &self.headers.replacement) {
            (Some(pattern), Some(replacement)) => {
                let rewrite = HeaderRewrite::new(pattern, replacement.as_str())?;
                Ok(spec.with_rewrite(rewrite))
            }
            _ => Ok(spec),
        }
    }
}
