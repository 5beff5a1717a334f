//! In-memory view of saved scripts
//!
//! Scripts form a tree of YAML mappings. Every key of the root names a script.
//! Below the root a node may carry data fields (`command`, `description`,
//! `directory`, `variables`, `message`); every other key names a child node.
//! Nodes are addressed by [`ScriptKey`].

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::error::CoreError;
use crate::keys::{self, ScriptKey};
use crate::messages::style::Styler;
use crate::normalize::document_choice;
use crate::variables::VariableMap;

/// Keys of a node that hold data rather than children
pub const RESERVED_FIELDS: [&str; 5] = [
    "command",
    "description",
    "directory",
    "variables",
    "message",
];

/// Errors that can occur while addressing the script tree
#[derive(Error, Debug)]
pub enum TreeError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Unable to parse YAML scripts: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unable to parse JSON scripts: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scripts must be a mapping of script names")]
    NotAMapping,
    #[error("No script found at '{0}'")]
    ScriptNotFound(String),
}

/// A node of the script tree
#[derive(Debug, Clone, Copy)]
pub struct ScriptNode<'a> {
    mapping: &'a Mapping,
    is_root: bool,
}

impl<'a> ScriptNode<'a> {
    fn field(&self, name: &str) -> Option<&'a Value> {
        if self.is_root {
            return None;
        }
        self.mapping.get(name)
    }

    fn is_child_name(&self, name: &str) -> bool {
        self.is_root || !RESERVED_FIELDS.contains(&name)
    }

    fn text_field(&self, name: &str) -> Option<&'a str> {
        self.field(name).and_then(Value::as_str)
    }

    #[must_use]
    pub fn description(&self) -> Option<&'a str> {
        self.text_field("description")
    }

    #[must_use]
    pub fn directory(&self) -> Option<&'a str> {
        self.text_field("directory")
    }

    #[must_use]
    pub fn message(&self) -> Option<&'a str> {
        self.text_field("message")
    }

    /// Shell commands of this node, in order. A single string is one command.
    #[must_use]
    pub fn command(&self) -> Option<Vec<&'a str>> {
        match self.field("command")? {
            Value::String(command) => Some(vec![command.as_str()]),
            Value::Sequence(commands) => commands.iter().map(Value::as_str).collect(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_runnable(&self) -> bool {
        self.command().is_some()
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidVariables` if `variables` is not a flat
    /// mapping of strings.
    pub fn variables(&self) -> Result<Option<VariableMap>, CoreError> {
        self.field("variables").map(VariableMap::try_from).transpose()
    }

    /// Names of child nodes in declaration order.
    #[must_use]
    pub fn children(&self) -> Vec<&'a str> {
        self.mapping
            .iter()
            .filter(|(_, value)| value.is_mapping())
            .filter_map(|(key, _)| key.as_str())
            .filter(|key| self.is_child_name(key))
            .collect()
    }

    fn child(&self, name: &str) -> Option<ScriptNode<'a>> {
        if !self.is_child_name(name) {
            return None;
        }
        self.mapping
            .get(name)
            .and_then(Value::as_mapping)
            .map(|mapping| ScriptNode {
                mapping,
                is_root: false,
            })
    }
}

/// Parsed scripts, keyed by script name at the root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptTree {
    root: Mapping,
}

impl ScriptTree {
    /// # Errors
    ///
    /// Returns `TreeError::Yaml` if `src` is not YAML, or `TreeError::NotAMapping`
    /// if the document is not a mapping.
    pub fn from_yaml_str(src: &str) -> Result<Self, TreeError> {
        Self::from_value(serde_yaml::from_str(src)?)
    }

    /// Parse JSON scripts, keeping the order keys are written in.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Json` if `src` is not JSON, or `TreeError::NotAMapping`
    /// if the document is not an object.
    pub fn from_json_str(src: &str) -> Result<Self, TreeError> {
        Self::from_value(serde_json::from_str(src)?)
    }

    fn from_value(value: Value) -> Result<Self, TreeError> {
        match value {
            Value::Mapping(root) => Ok(ScriptTree { root }),
            Value::Null => Ok(ScriptTree::default()),
            _ => Err(TreeError::NotAMapping),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    #[must_use]
    pub fn script_names(&self) -> Vec<&str> {
        self.root.keys().filter_map(Value::as_str).collect()
    }

    /// # Errors
    ///
    /// Returns `CoreError::EmptyMapping` if there are no scripts.
    pub fn first_script(&self) -> Result<&str, CoreError> {
        keys::first_key(&self.root)
    }

    /// The node at `key`; the root key addresses the whole tree.
    #[must_use]
    pub fn node(&self, key: &ScriptKey) -> Option<ScriptNode<'_>> {
        key.segments()
            .iter()
            .try_fold(
                ScriptNode {
                    mapping: &self.root,
                    is_root: true,
                },
                |node, segment| node.child(segment),
            )
    }

    /// # Errors
    ///
    /// Returns `TreeError::ScriptNotFound` if nothing exists at `key`.
    pub fn get(&self, key: &ScriptKey) -> Result<ScriptNode<'_>, TreeError> {
        self.node(key)
            .ok_or_else(|| TreeError::ScriptNotFound(key.to_string()))
    }

    /// Child names of the node at `key`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::ScriptNotFound` if nothing exists at `key`.
    pub fn children(&self, key: &ScriptKey) -> Result<Vec<&str>, TreeError> {
        Ok(self.get(key)?.children())
    }

    /// Menu labels for the children of `key`, each documented with its description.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::ScriptNotFound` if nothing exists at `key`.
    pub fn choices(&self, key: &ScriptKey, styler: &Styler) -> Result<Vec<String>, TreeError> {
        let node = self.get(key)?;
        Ok(node
            .children()
            .into_iter()
            .map(|name| {
                let description = node.child(name).and_then(|child| child.description());
                document_choice(name, description, styler)
            })
            .collect())
    }
}
