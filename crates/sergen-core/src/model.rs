//! Class descriptions consumed by the generator.
//!
//! A [`ClassDescription`] is the resolved view of one C++ class: its fully
//! qualified name, its members, its parents (already flattened by whoever
//! resolved the class hierarchy) and its own template parameter list.
//!
//! Members and parents live in ordered collections, so every consumer
//! iterates them lexicographically regardless of insertion order. Template
//! parameters keep their declaration order.
//!
//! # Examples
//!
//! ```
//! use sergen_core::{ClassDescription, Member};
//!
//! let class = ClassDescription::new("Grid")
//!     .with_parent("GridBase")
//!     .with_member("dimensions", Member::default())
//!     .with_template_parameter("typename", "CELL")
//!     .with_template_parameter("int", "DIM");
//!
//! assert_eq!(class.qualified_type(), "Grid<CELL, DIM>");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Metadata attached to a member.
///
/// Only the member's name takes part in generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Declared C++ type, if the resolver knows it.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl Member {
    pub fn typed(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
        }
    }
}

/// One entry of a class template parameter list, e.g. `typename T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParameter {
    /// Parameter kind as written in the declaration (`typename`, `class`, `int`, ...).
    pub kind: String,

    /// Parameter name.
    pub name: String,
}

impl TemplateParameter {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// A resolved class ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescription {
    /// Fully qualified class name.
    pub name: String,

    /// Members keyed by name.
    #[serde(default)]
    pub members: BTreeMap<String, Member>,

    /// Parent type names, including transitive ancestry.
    #[serde(default)]
    pub parents: BTreeSet<String>,

    /// Template parameters in declaration order.
    #[serde(default)]
    pub template_parameters: Vec<TemplateParameter>,
}

impl ClassDescription {
    /// Create a description without members, parents or template parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
            parents: BTreeSet::new(),
            template_parameters: Vec::new(),
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, member: Member) -> Self {
        self.members.insert(name.into(), member);
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.insert(parent.into());
        self
    }

    pub fn with_template_parameter(
        mut self,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.template_parameters
            .push(TemplateParameter::new(kind, name));
        self
    }

    /// Member names in lexicographic order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Parent type names in lexicographic order.
    pub fn parent_names(&self) -> impl Iterator<Item = &str> {
        self.parents.iter().map(String::as_str)
    }

    /// The class as referenced in a function signature.
    ///
    /// Non-template classes are referenced without angle brackets.
    pub fn qualified_type(&self) -> String {
        format!("{}{}", self.name, argument_list(&self.template_parameters))
    }
}

/// Render template parameters for a declaration that already has a leading
/// parameter, e.g. `, typename T, int DIM`.
///
/// Returns an empty string when there are no parameters.
pub fn declaration_list(parameters: &[TemplateParameter]) -> String {
    parameters
        .iter()
        .map(|p| format!(", {} {}", p.kind, p.name))
        .collect()
}

/// Render template arguments for referring to the class, e.g. `<T, DIM>`.
///
/// Returns an empty string when there are no parameters.
pub fn argument_list(parameters: &[TemplateParameter]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", names.join(", "))
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
