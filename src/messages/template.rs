use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Option naming the string used to join list values
pub const SEPARATOR_OPTION: &str = "separator";

/// Used when neither the caller nor the template declares a separator
pub const DEFAULT_LIST_SEPARATOR: &str = ", ";

/// `{name}` must resolve; `[name]` substitutes only when it resolves.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}]+)\}|\[([A-Za-z_][A-Za-z0-9_]*)\]")
        .expect("placeholder pattern is valid")
});

/// Value supplied for a placeholder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Text(String),
    List(Vec<String>),
}

impl TemplateValue {
    fn joined(&self, separator: &str) -> String {
        match self {
            TemplateValue::Text(text) => text.clone(),
            TemplateValue::List(items) => items.join(separator),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Text(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Text(value)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        TemplateValue::List(value)
    }
}

impl From<&[&str]> for TemplateValue {
    fn from(value: &[&str]) -> Self {
        TemplateValue::List(value.iter().map(ToString::to_string).collect())
    }
}

/// Caller-supplied placeholder values, taking precedence over template defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    values: HashMap<String, TemplateValue>,
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<TemplateValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<TemplateValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Append `item` to the list stored under `name`, turning a text value into a list.
    pub fn push(&mut self, name: &str, item: &str) {
        let items = match self.values.remove(name) {
            Some(TemplateValue::List(mut items)) => {
                items.push(item.to_string());
                items
            }
            Some(TemplateValue::Text(text)) => vec![text, item.to_string()],
            None => vec![item.to_string()],
        };
        self.values.insert(name.to_string(), TemplateValue::List(items));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.values.get(name)
    }
}

/// A message with placeholders and the defaults used when a caller omits one
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageTemplate {
    pub message: String,
    #[serde(default, rename = "defaultOptions")]
    pub defaults: HashMap<String, TemplateValue>,
}

impl MessageTemplate {
    #[must_use]
    pub fn new(message: &str) -> Self {
        MessageTemplate {
            message: message.to_string(),
            defaults: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_default(mut self, name: &str, value: impl Into<TemplateValue>) -> Self {
        self.defaults.insert(name.to_string(), value.into());
        self
    }

    fn lookup<'a>(&'a self, name: &str, options: &'a RenderOptions) -> Option<&'a TemplateValue> {
        options.get(name).or_else(|| self.defaults.get(name))
    }

    fn separator<'a>(&'a self, options: &'a RenderOptions) -> &'a str {
        match self.lookup(SEPARATOR_OPTION, options) {
            Some(TemplateValue::Text(separator)) => separator,
            _ => DEFAULT_LIST_SEPARATOR,
        }
    }

    /// Substitute placeholders. Style tags are copied through untouched, and so
    /// is a `[name]` with no value, which lets prose keep its brackets.
    ///
    /// `id` only names the template in errors.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingPlaceholder` if a `{name}` placeholder has
    /// neither a caller value nor a default.
    pub fn render(&self, id: &str, options: &RenderOptions) -> Result<String, CoreError> {
        let separator = self.separator(options);
        let mut rendered = String::with_capacity(self.message.len());
        let mut last = 0;
        for captures in PLACEHOLDER.captures_iter(&self.message) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            rendered.push_str(&self.message[last..whole.start()]);
            last = whole.end();

            if let Some(name) = captures.get(1) {
                let value = self.lookup(name.as_str(), options).ok_or_else(|| {
                    CoreError::MissingPlaceholder {
                        template: id.to_string(),
                        placeholder: name.as_str().to_string(),
                    }
                })?;
                rendered.push_str(&value.joined(separator));
            } else if let Some(name) = captures.get(2) {
                match self.lookup(name.as_str(), options) {
                    Some(value) => rendered.push_str(&value.joined(separator)),
                    None => rendered.push_str(whole.as_str()),
                }
            }
        }
        rendered.push_str(&self.message[last..]);
        Ok(rendered)
    }
}
