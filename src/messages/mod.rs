//! User-facing messages
//!
//! Messages are named templates with `{placeholder}` tokens and default values.
//! Rendering substitutes placeholders and leaves style tags in place; the
//! [`style`] module turns those tags into terminal styling.

pub mod style;
pub mod template;

use std::collections::HashMap;

use log::debug;

use crate::error::CoreError;
pub use template::{MessageTemplate, RenderOptions, TemplateValue};

/// Identifiers of the built-in templates
pub mod ids {
    pub const NO_SAVED_SCRIPTS: &str = "noSavedScripts";
    pub const LIST_SCRIPTS: &str = "listScripts";
    pub const SCRIPT_DOES_NOT_EXIST: &str = "scriptDoesNotExist";
    pub const UNKNOWN_ERROR: &str = "unknownError";
    pub const EMPTY_STRING: &str = "emptyString";
    pub const LOADED_SCRIPT: &str = "loadedScript";
    pub const INVALID_YAML_FILE_NAME: &str = "invalidYamlFileName";
    pub const INVALID_JSON_FILE_NAME: &str = "invalidJsonFileName";
}

const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");
// Both links come from the package metadata in Cargo.toml
const CRATES_LINK: &str = env!("CARGO_PKG_HOMEPAGE");
const GITHUB_LINK: &str = env!("CARGO_PKG_REPOSITORY");

/// Named message templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: HashMap<String, MessageTemplate>,
}

impl MessageCatalog {
    /// The messages cbf ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = MessageCatalog::default();
        catalog.insert(
            ids::NO_SAVED_SCRIPTS,
            MessageTemplate::new(
                "You have no saved scripts.\n\nYou can save a script by using <primary>{programName} -s [path to yaml file]<primary>",
            )
            .with_default("programName", PROGRAM_NAME),
        );
        catalog.insert(
            ids::LIST_SCRIPTS,
            MessageTemplate::new("Scripts:\n\n- [scripts]")
                .with_default("scripts", Vec::<String>::new())
                .with_default("separator", "\n- "),
        );
        catalog.insert(
            ids::SCRIPT_DOES_NOT_EXIST,
            MessageTemplate::new(
                "There is currently no saved scripts with the name <primary>{scriptName}<primary>\n\nTry saving it again by using <primary>{programName} -s [path to yaml file]<primary>",
            )
            .with_default("programName", PROGRAM_NAME),
        );
        catalog.insert(
            ids::UNKNOWN_ERROR,
            MessageTemplate::new(
                "There was an unknown error; feel free to report this at <primary>{cratesLink}<primary> or <primary>{githubLink}<primary>",
            )
            .with_default("cratesLink", CRATES_LINK)
            .with_default("githubLink", GITHUB_LINK),
        );
        catalog.insert(ids::EMPTY_STRING, MessageTemplate::new(""));
        catalog.insert(
            ids::LOADED_SCRIPT,
            MessageTemplate::new(
                "Running <primary>{scriptName}<primary> script from <secondary>{yamlFileName}<secondary> file\n",
            ),
        );
        catalog.insert(
            ids::INVALID_YAML_FILE_NAME,
            MessageTemplate::new("<error>{yamlFileName}<error> is an invalid yaml filename"),
        );
        catalog.insert(
            ids::INVALID_JSON_FILE_NAME,
            MessageTemplate::new("<error>{jsonFileName}<error> is an invalid json filename"),
        );
        catalog
    }

    /// Parse a catalog from YAML: a mapping of ids to `message` and `defaultOptions`.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if `src` is not a valid catalog.
    pub fn from_yaml_str(src: &str) -> Result<Self, serde_yaml::Error> {
        Ok(MessageCatalog {
            templates: serde_yaml::from_str(src)?,
        })
    }

    pub fn insert(&mut self, id: &str, template: MessageTemplate) {
        self.templates.insert(id.to_string(), template);
    }

    /// Overlay `other` on this catalog, replacing templates with the same id.
    pub fn merge(&mut self, other: MessageCatalog) {
        for (id, template) in other.templates {
            if self.templates.contains_key(&id) {
                debug!("Overriding message template '{id}'");
            }
            self.templates.insert(id, template);
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MessageTemplate> {
        self.templates.get(id)
    }

    /// Sorted template ids
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Render the template named `id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownTemplate` if no template is named `id`, or
    /// `CoreError::MissingPlaceholder` if a placeholder cannot be resolved.
    pub fn render(&self, id: &str, options: &RenderOptions) -> Result<String, CoreError> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownTemplate(id.to_string()))?
            .render(id, options)
    }

    /// Render the template named `id` into styled spans.
    ///
    /// # Errors
    ///
    /// See [`MessageCatalog::render`].
    pub fn render_spans(
        &self,
        id: &str,
        options: &RenderOptions,
    ) -> Result<Vec<style::Span>, CoreError> {
        Ok(style::tokenize(&self.render(id, options)?))
    }
}
