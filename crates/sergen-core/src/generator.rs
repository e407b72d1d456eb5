//! Serialization header generation
//!
//! [`HeaderGenerator`] turns a list of [`ClassDescription`]s into a C++
//! header for an archive-based serialization framework (Boost or HPX
//! Serialization). For every class it emits:
//!
//! - a static `serialize(archive, object, version)` function template inside
//!   the generated serialization class, delegating to each parent through the
//!   base-object accessor and then serializing each member
//! - a free `serialize` overload in the framework's namespace forwarding to
//!   that static function, so the framework's unqualified lookup finds it
//!
//! Generation is a pure function of its inputs: members and parents are
//! emitted in lexicographic order, template parameters in declaration order,
//! and classes in the order the caller supplies them.

use crate::config::{GeneratorConfig, HeaderSpec};
use crate::error::{GeneratorError, GeneratorResult};
use crate::model::{ClassDescription, declaration_list};
use crate::template::{
    self, HEADERS, NAMESPACE_BEGIN, NAMESPACE_END, NAMESPACE_GUARD, NAMESPACE_LINK,
    SERIALIZATION_CLASS_NAME, SERIALIZATION_DEFINITIONS, SERIALIZATION_NAMESPACE,
    TEMPLATE_FILE_NAME,
};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Generates serialization headers for a fixed configuration
#[derive(Debug, Clone)]
pub struct HeaderGenerator {
    config: GeneratorConfig,
    namespace_guard: String,
    namespace_begin: String,
    namespace_end: String,
}

impl HeaderGenerator {
    /// Create a generator and derive the namespace presentation values
    pub fn new(config: GeneratorConfig) -> Self {
        let class_upper = config.serialization_class_name.to_uppercase();

        let (namespace_guard, namespace_begin, namespace_end) = match &config.namespace {
            Some(namespace) => (
                format!("{}_{}_", namespace.to_uppercase(), class_upper),
                format!("namespace {namespace} {{\n"),
                "}\n".to_string(),
            ),
            None => (class_upper, String::new(), String::new()),
        };

        Self {
            config,
            namespace_guard,
            namespace_begin,
            namespace_end,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Token substituted for `NAMESPACE_GUARD`
    pub fn namespace_guard(&self) -> &str {
        &self.namespace_guard
    }

    /// Location of the template file
    pub fn template_path(&self) -> PathBuf {
        self.config.template_dir.join(TEMPLATE_FILE_NAME)
    }

    /// Static `serialize` function template for one class
    pub fn serialize_function(&self, class: &ClassDescription) -> String {
        let params = declaration_list(&class.template_parameters);
        let object_type = class.qualified_type();
        let mut code = String::new();

        code.push_str(&format!("    template<typename ARCHIVE{params}>\n"));
        code.push_str("    inline\n");
        code.push_str(&format!(
            "    static void serialize(ARCHIVE& archive, {object_type}& object, const unsigned /*version*/)\n"
        ));
        code.push_str("    {\n");

        for parent in class.parent_names() {
            code.push_str(&format!(
                "        archive & {}<{parent} >(object);\n",
                self.config.base_object_name
            ));
        }

        for member in class.member_names() {
            code.push_str(&format!("        archive & object.{member};\n"));
        }

        code.push_str("    }\n");

        debug!(
            class = %class.name,
            parents = class.parents.len(),
            members = class.members.len(),
            "generated serialize function"
        );

        code
    }

    /// Free `serialize` overload forwarding to the static function.
    ///
    /// The framework looks up `serialize` unqualified in its own namespace,
    /// so this is what makes the static function reachable.
    pub fn namespace_link(&self, class: &ClassDescription) -> String {
        let params = declaration_list(&class.template_parameters);
        let object_type = class.qualified_type();
        let mut code = String::new();

        code.push_str(&format!("template<class ARCHIVE{params}>\n"));
        code.push_str(&format!(
            "void serialize(ARCHIVE& archive, {object_type}& object, const unsigned version)\n"
        ));
        code.push_str("{\n");
        code.push_str(&format!(
            "    {}::serialize(archive, object, version);\n",
            self.config.serialization_class_name
        ));
        code.push_str("}\n");

        code
    }

    /// Read the template file and generate the complete header
    pub fn generate_header(
        &self,
        classes: &[ClassDescription],
        headers: &HeaderSpec,
    ) -> GeneratorResult<String> {
        let path = self.template_path();
        let template =
            fs::read_to_string(&path).map_err(|source| GeneratorError::MissingTemplate {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = template.len(), "loaded template");

        self.render(&template, classes, headers)
    }

    /// Generate the complete header from already loaded template text
    pub fn render(
        &self,
        template_text: &str,
        classes: &[ClassDescription],
        headers: &HeaderSpec,
    ) -> GeneratorResult<String> {
        if self.config.strict_markers {
            template::check_template(template_text)?;
        }

        let text = template_text
            .replace(HEADERS, &headers.render_includes())
            .replace(NAMESPACE_GUARD, &self.namespace_guard)
            .replace(&format!("{NAMESPACE_BEGIN}\n"), &self.namespace_begin)
            .replace(&format!("{NAMESPACE_END}\n"), &self.namespace_end)
            .replace(SERIALIZATION_CLASS_NAME, &self.config.serialization_class_name)
            .replace(SERIALIZATION_NAMESPACE, &self.config.serialization_namespace);

        let definitions: Vec<String> = classes
            .iter()
            .map(|class| self.serialize_function(class))
            .collect();
        let text = replace_marker(text, SERIALIZATION_DEFINITIONS, &definitions.join("\n"));

        let using_namespace = match &self.config.namespace {
            Some(namespace) => format!("using namespace {namespace};\n"),
            None => String::new(),
        };
        let mut links = vec![using_namespace];
        links.extend(classes.iter().map(|class| self.namespace_link(class)));
        let text = replace_marker(text, NAMESPACE_LINK, &links.join("\n"));

        debug!(classes = classes.len(), "rendered serialization header");

        Ok(self.guard(text))
    }

    /// Wrap `text` in the configured macro guard, if any
    pub fn guard(&self, text: String) -> String {
        match &self.config.macro_guard {
            Some(macro_guard) => format!(
                "#include<{}>\n#ifdef {macro_guard}\n{text}\n#endif\n",
                self.config.config_header
            ),
            None => text,
        }
    }
}

/// Replace a sentinel marker line, leaving the text unchanged when absent
fn replace_marker(text: String, marker: &'static str, replacement: &str) -> String {
    match template::replace_marker_line(&text, marker, replacement) {
        Some(replaced) => replaced,
        None => {
            warn!(marker, "sentinel marker not found in template, leaving text unchanged");
            text
        }
    }
}


#[cfg(test)]
#[path = "generator/generator_parameterized_tests.rs"]
mod generator_parameterized_tests;
