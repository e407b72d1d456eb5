//! sergen-core - Serialization glue generation for C++ classes
//!
//! This crate turns resolved C++ class descriptions into a header that
//! plugs those classes into an archive-based serialization framework:
//! - [`ClassDescription`] describes one class (members, parents, template parameters)
//! - [`GeneratorConfig`] carries the serialization names and output options
//! - [`HeaderSpec`] lists the headers to include, with an optional path rewrite
//! - [`HeaderGenerator`] fills the `template_serialization.h` skeleton
//!
//! # Example
//!
//! ```
//! use sergen_core::template::DEFAULT_TEMPLATE;
//! use sergen_core::{ClassDescription, Flavor, GeneratorConfig, HeaderGenerator, HeaderSpec, Member};
//!
//! let generator = HeaderGenerator::new(GeneratorConfig::for_flavor(Flavor::Boost));
//! let foo = ClassDescription::new("Foo")
//!     .with_parent("Base")
//!     .with_member("b", Member::default())
//!     .with_member("a", Member::default());
//!
//! let header = generator.render(DEFAULT_TEMPLATE, &[foo], &HeaderSpec::new(["foo.h"]))?;
//!
//! assert!(header.contains("archive & object.a;\n        archive & object.b;"));
//! # Ok::<(), sergen_core::GeneratorError>(())
//! ```

mod config;
mod error;
mod generator;
mod model;

pub mod template;

pub use config::{Flavor, GeneratorConfig, HeaderRewrite, HeaderSpec};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::HeaderGenerator;
pub use model::{ClassDescription, Member, TemplateParameter, argument_list, declaration_list};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescription, Flavor, GeneratorConfig, GeneratorError, GeneratorResult,
        HeaderGenerator, HeaderRewrite, HeaderSpec, Member, TemplateParameter,
    };
}
