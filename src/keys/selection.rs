use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::keys::{INVOCATION_SEPARATOR, ScriptKey};

/// The literal sequence of menu choices made in one invocation, deepest last
///
/// A choice is itself a script key, so a free-text answer such as `git.remote`
/// spans several tree levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    choices: Vec<ScriptKey>,
}

impl SelectionKey {
    /// Parse a separator-joined selection. The empty string has no choices.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidKey` if any choice is empty or has an empty segment.
    pub fn parse(selection: &str) -> Result<Self, CoreError> {
        if selection.is_empty() {
            return Ok(SelectionKey::default());
        }
        let mut key = SelectionKey::default();
        for choice in selection.split(INVOCATION_SEPARATOR) {
            key.push(choice)
                .map_err(|_| CoreError::InvalidKey(selection.to_string()))?;
        }
        Ok(key)
    }

    /// Append a deeper choice.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidKey` if `choice` is empty, contains
    /// [`INVOCATION_SEPARATOR`], or has an empty segment.
    pub fn push(&mut self, choice: &str) -> Result<(), CoreError> {
        if choice.is_empty() || choice.contains(INVOCATION_SEPARATOR) {
            return Err(CoreError::InvalidKey(choice.to_string()));
        }
        self.choices.push(ScriptKey::parse(choice)?);
        Ok(())
    }

    #[must_use]
    pub fn choices(&self) -> &[ScriptKey] {
        &self.choices
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.choices.len()
    }

    /// The deepest choice
    #[must_use]
    pub fn last(&self) -> Option<&ScriptKey> {
        self.choices.last()
    }

    /// Script keys of the submenus leading to the final choice, root first.
    #[must_use]
    pub fn option_keys(&self) -> Vec<ScriptKey> {
        (1..self.choices.len())
            .map(|len| joined(&self.choices[..len]))
            .collect()
    }

    /// Script key addressed by the whole selection, `None` when nothing was chosen.
    #[must_use]
    pub fn target(&self) -> Option<ScriptKey> {
        if self.choices.is_empty() {
            return None;
        }
        Some(joined(&self.choices))
    }
}

fn joined(choices: &[ScriptKey]) -> ScriptKey {
    choices
        .iter()
        .fold(ScriptKey::root(), |key, choice| key.join(choice))
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = [0u8; 4];
        let choices: Vec<String> = self.choices.iter().map(ToString::to_string).collect();
        f.write_str(&choices.join(INVOCATION_SEPARATOR.encode_utf8(&mut separator)))
    }
}

impl FromStr for SelectionKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectionKey::parse(s)
    }
}
