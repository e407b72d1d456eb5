//! Template file contract.
//!
//! The generator fills a C++ skeleton (`template_serialization.h`) that
//! contains two kinds of tokens:
//!
//! - **Placeholders** such as [`HEADERS`] or [`NAMESPACE_GUARD`]. Each may
//!   occur any number of times, including zero; every occurrence is replaced.
//! - **Sentinel markers** ([`SERIALIZATION_DEFINITIONS`], [`NAMESPACE_LINK`]).
//!   A marker is expected on its own line exactly once. The marker and
//!   everything before it on that line (typically `// `) is replaced with
//!   generated code.
//!
//! ```text
//! NAMESPACE_BEGIN
//! class SERIALIZATION_CLASS_NAME
//! {
//! public:
//!     // SERIALIZATIION_DEFINITIONS
//! };
//! NAMESPACE_END
//! ```

use crate::error::{GeneratorError, GeneratorResult};

/// Name of the template file inside the template directory.
pub const TEMPLATE_FILE_NAME: &str = "template_serialization.h";

/// Default template shipped with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/template_serialization.h");

pub const HEADERS: &str = "HEADERS";
pub const NAMESPACE_GUARD: &str = "NAMESPACE_GUARD";
pub const NAMESPACE_BEGIN: &str = "NAMESPACE_BEGIN";
pub const NAMESPACE_END: &str = "NAMESPACE_END";
pub const SERIALIZATION_CLASS_NAME: &str = "SERIALIZATION_CLASS_NAME";
pub const SERIALIZATION_NAMESPACE: &str = "SERIALIZATION_NAMESPACE";

/// Marks where the per-class `serialize` functions go.
///
/// The doubled `I` matches the marker used by existing template files.
pub const SERIALIZATION_DEFINITIONS: &str = "SERIALIZATIION_DEFINITIONS";

/// Marks where the free `serialize` overloads go.
pub const NAMESPACE_LINK: &str = "NAMESPACE_LINK";

pub const PLACEHOLDERS: [&str; 6] = [
    HEADERS,
    NAMESPACE_GUARD,
    NAMESPACE_BEGIN,
    NAMESPACE_END,
    SERIALIZATION_CLASS_NAME,
    SERIALIZATION_NAMESPACE,
];

pub const MARKERS: [&str; 2] = [SERIALIZATION_DEFINITIONS, NAMESPACE_LINK];

/// Occurrence counts of the optional placeholders in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReport {
    pub placeholders: Vec<(&'static str, usize)>,
}

impl TemplateReport {
    /// Placeholders that do not occur in the template.
    pub fn unused_placeholders(&self) -> Vec<&'static str> {
        self.placeholders
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Verify that every sentinel marker occurs exactly once.
pub fn check_template(text: &str) -> GeneratorResult<TemplateReport> {
    for marker in MARKERS {
        match text.matches(marker).count() {
            0 => return Err(GeneratorError::MalformedTemplate { marker }),
            1 => {}
            count => return Err(GeneratorError::DuplicateMarker { marker, count }),
        }
    }

    let placeholders = PLACEHOLDERS
        .iter()
        .map(|name| (*name, text.matches(name).count()))
        .collect();

    Ok(TemplateReport { placeholders })
}

/// Replace the line prefix up to and including `marker` with `replacement`.
///
/// Only the first line containing the marker is touched. Text following the
/// marker on that line is kept, as is the line break. If the marker occurs
/// several times on that line, the span extends to the last occurrence.
///
/// Returns `None` if `marker` does not occur in `text`.
pub fn replace_marker_line(text: &str, marker: &str, replacement: &str) -> Option<String> {
    let first = text.find(marker)?;
    let line_start = text[..first].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[first..].find('\n').map_or(text.len(), |i| first + i);
    let last = text[line_start..line_end].rfind(marker)? + line_start;
    let span_end = last + marker.len();

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..line_start]);
    out.push_str(replacement);
    out.push_str(&text[span_end..]);
    Some(out)
}
