//! Generator configuration types

use crate::error::{GeneratorError, GeneratorResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Archive-based serialization frameworks with known naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Boost,
    Hpx,
}

impl Flavor {
    /// Name of the generated class holding the static `serialize` functions
    pub fn serialization_class_name(self) -> &'static str {
        match self {
            Flavor::Boost => "BoostSerialization",
            Flavor::Hpx => "HPXSerialization",
        }
    }

    /// Namespace the framework searches for free `serialize` overloads
    pub fn serialization_namespace(self) -> &'static str {
        match self {
            Flavor::Boost => "boost",
            Flavor::Hpx => "hpx",
        }
    }

    /// Accessor used to view a derived object as its base class
    pub fn base_object_name(self) -> &'static str {
        match self {
            Flavor::Boost => "boost::serialization::base_object",
            Flavor::Hpx => "hpx::serialization::base_object",
        }
    }
}

/// Configuration passed to [`crate::HeaderGenerator::new`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory containing `template_serialization.h`
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Namespace wrapping the generated class
    #[serde(default)]
    pub namespace: Option<String>,

    /// Preprocessor symbol that must be defined for the header to compile
    #[serde(default)]
    pub macro_guard: Option<String>,

    /// Header included ahead of the macro guard check
    #[serde(default = "default_config_header")]
    pub config_header: String,

    pub serialization_class_name: String,

    pub serialization_namespace: String,

    pub base_object_name: String,

    /// Fail on missing or repeated sentinel markers instead of leaving the
    /// template text untouched
    #[serde(default)]
    pub strict_markers: bool,
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("./")
}

fn default_config_header() -> String {
    "config.h".to_string()
}

impl GeneratorConfig {
    /// Create a configuration with explicit serialization names
    pub fn new(
        serialization_class_name: impl Into<String>,
        serialization_namespace: impl Into<String>,
        base_object_name: impl Into<String>,
    ) -> Self {
        Self {
            template_dir: default_template_dir(),
            namespace: None,
            macro_guard: None,
            config_header: default_config_header(),
            serialization_class_name: serialization_class_name.into(),
            serialization_namespace: serialization_namespace.into(),
            base_object_name: base_object_name.into(),
            strict_markers: false,
        }
    }

    /// Create a configuration using a framework's naming preset
    pub fn for_flavor(flavor: Flavor) -> Self {
        Self::new(
            flavor.serialization_class_name(),
            flavor.serialization_namespace(),
            flavor.base_object_name(),
        )
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_macro_guard(mut self, macro_guard: impl Into<String>) -> Self {
        self.macro_guard = Some(macro_guard.into());
        self
    }

    pub fn with_config_header(mut self, header: impl Into<String>) -> Self {
        self.config_header = header.into();
        self
    }

    pub fn with_strict_markers(mut self, strict: bool) -> Self {
        self.strict_markers = strict;
        self
    }
}

/// Regex rewrite applied to every header path before it is included
#[derive(Debug, Clone)]
pub struct HeaderRewrite {
    pattern: Regex,
    replacement: String,
}

impl HeaderRewrite {
    /// Compile a rewrite. The replacement may reference capture groups
    /// (`$1`, `${name}`).
    pub fn new(pattern: &str, replacement: impl Into<String>) -> GeneratorResult<Self> {
        let compiled = Regex::new(pattern).map_err(|source| GeneratorError::InvalidHeaderPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// Rewrite every match in `header`. Headers without a match pass through.
    pub fn apply(&self, header: &str) -> String {
        self.pattern
            .replace_all(header, self.replacement.as_str())
            .into_owned()
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Headers the generated file includes
#[derive(Debug, Clone, Default)]
pub struct HeaderSpec {
    pub headers: Vec<String>,
    pub rewrite: Option<HeaderRewrite>,
}

impl HeaderSpec {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rewrite: None,
        }
    }

    pub fn with_rewrite(mut self, rewrite: HeaderRewrite) -> Self {
        self.rewrite = Some(rewrite);
        self
    }

    /// One `#include <...>` line per header, joined by newlines
    pub fn render_includes(&self) -> String {
        let lines: Vec<String> = self
            .headers
            .iter()
            .map(|header| {
                let name = match &self.rewrite {
                    Some(rewrite) => rewrite.apply(header),
                    None => header.clone(),
                };
                format!("#include <{name}>")
            })
            .collect();

        lines.join("\n")
    }
}
