//! Variables declared by a saved script
//!
//! A script may declare a flat mapping of variable names to prompt strings. Raw
//! YAML or JSON values are parsed into a [`VariableMap`] once, at the boundary,
//! and the rest of the crate trusts the type.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("variable pattern is valid"));

/// Ordered mapping from variable name to its prompt text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
}

impl VariableMap {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Substitute every `{name}` of a declared variable in `command` with its answer.
    ///
    /// Braces that do not name a declared variable are left untouched, and
    /// answers are copied in as typed even when they contain braces.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingPlaceholder` if a declared variable used by
    /// `command` has no answer.
    pub fn fill(
        &self,
        command: &str,
        answers: &HashMap<String, String>,
    ) -> Result<String, CoreError> {
        let mut filled = String::with_capacity(command.len());
        let mut last = 0;
        for captures in VARIABLE.captures_iter(command) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let name = name.as_str();
            if self.get(name).is_none() {
                continue;
            }
            let answer = answers
                .get(name)
                .ok_or_else(|| CoreError::MissingPlaceholder {
                    template: command.to_string(),
                    placeholder: name.to_string(),
                })?;
            filled.push_str(&command[last..whole.start()]);
            filled.push_str(answer);
            last = whole.end();
        }
        filled.push_str(&command[last..]);
        Ok(filled)
    }

    fn insert(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

impl TryFrom<&serde_yaml::Value> for VariableMap {
    type Error = CoreError;

    fn try_from(value: &serde_yaml::Value) -> Result<Self, Self::Error> {
        let serde_yaml::Value::Mapping(mapping) = value else {
            return Err(CoreError::InvalidVariables(format!(
                "expected a mapping, got {}",
                yaml_kind(value)
            )));
        };
        let mut variables = VariableMap::default();
        for (key, value) in mapping {
            let serde_yaml::Value::String(name) = key else {
                return Err(CoreError::InvalidVariables(format!(
                    "variable names must be strings, got {}",
                    yaml_kind(key)
                )));
            };
            let serde_yaml::Value::String(prompt) = value else {
                return Err(CoreError::InvalidVariables(format!(
                    "variable '{name}' must be a string, got {}",
                    yaml_kind(value)
                )));
            };
            variables.insert(name.clone(), prompt.clone());
        }
        Ok(variables)
    }
}

impl TryFrom<&serde_json::Value> for VariableMap {
    type Error = CoreError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Object(object) = value else {
            return Err(CoreError::InvalidVariables(format!(
                "expected an object, got {}",
                json_kind(value)
            )));
        };
        let mut variables = VariableMap::default();
        for (name, value) in object {
            let serde_json::Value::String(prompt) = value else {
                return Err(CoreError::InvalidVariables(format!(
                    "variable '{name}' must be a string, got {}",
                    json_kind(value)
                )));
            };
            variables.insert(name.clone(), prompt.clone());
        }
        Ok(variables)
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> serde_yaml::Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_parse_flat_mapping_keeps_order() {
        let value = yaml("name: What is your name?\nfood: What is your favourite food?\n");
        let variables = VariableMap::try_from(&value).unwrap();
        let names: Vec<&str> = variables.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "food"]);
        assert_eq!(variables.get("food"), Some("What is your favourite food?"));
    }

    #[test]
    fn test_rejects_nested_values() {
        let value = yaml("name: x\nfoods:\n  first: a\n  second: b\n");
        match VariableMap::try_from(&value) {
            Err(CoreError::InvalidVariables(msg)) => assert!(msg.contains("foods")),
            other => panic!("Expected InvalidVariables, got: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_mapping() {
        for src in ["some string", "4", "[one, two, three]", "~"] {
            assert!(VariableMap::try_from(&yaml(src)).is_err(), "{src}");
        }
    }

    #[test]
    fn test_rejects_non_string_names() {
        assert!(VariableMap::try_from(&yaml("1: first\n")).is_err());
    }

    #[test]
    fn test_json_object() {
        let value = serde_json::json!({"name": "x", "food": "y"});
        assert_eq!(VariableMap::try_from(&value).unwrap().len(), 2);
        let nested = serde_json::json!({"name": {"first": "x"}});
        assert!(VariableMap::try_from(&nested).is_err());
        assert!(VariableMap::try_from(&serde_json::json!(["a"])).is_err());
    }

    #[test]
    fn test_fill_substitutes_answers() {
        let variables = VariableMap::try_from(&yaml("msg: Commit message?\n")).unwrap();
        let answers = HashMap::from([("msg".to_string(), "fix typo".to_string())]);
        let filled = variables
            .fill("git commit -m '{msg}' && echo {other}", &answers)
            .unwrap();
        assert_eq!(filled, "git commit -m 'fix typo' && echo {other}");
    }

    #[test]
    fn test_fill_does_not_expand_answers() {
        let variables = VariableMap::try_from(&yaml("a: First?\nb: Second?\n")).unwrap();
        let answers = HashMap::from([
            ("a".to_string(), "{b}".to_string()),
            ("b".to_string(), "X".to_string()),
        ]);
        assert_eq!(variables.fill("echo {a} {b}", &answers).unwrap(), "echo {b} X");
    }

    #[test]
    fn test_fill_repeated_variable() {
        let variables = VariableMap::try_from(&yaml("dir: Directory?\n")).unwrap();
        let answers = HashMap::from([("dir".to_string(), "src".to_string())]);
        assert_eq!(
            variables.fill("mkdir {dir} && cd {dir}", &answers).unwrap(),
            "mkdir src && cd src"
        );
    }

    #[test]
    fn test_fill_missing_answer() {
        let variables = VariableMap::try_from(&yaml("msg: Commit message?\n")).unwrap();
        let result = variables.fill("git commit -m '{msg}'", &HashMap::new());
        assert!(matches!(
            result,
            Err(CoreError::MissingPlaceholder { placeholder, .. }) if placeholder == "msg"
        ));
    }
}
