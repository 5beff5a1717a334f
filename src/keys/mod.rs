//! Hierarchical addressing of the script tree
//!
//! Two key shapes exist. A [`ScriptKey`] addresses a node in the nested script
//! tree, its segments joined by [`KEY_SEPARATOR`]. A [`SelectionKey`] is the raw
//! sequence of menu choices a user made in one invocation, joined by
//! [`INVOCATION_SEPARATOR`]. Every strict prefix of a selection maps to the
//! script key of a submenu that must be resolved to reach the final choice.
//!
//! The string functions in this module are thin wrappers that parse, apply the
//! structured operation, and format again.

pub mod script;
pub mod selection;

pub use script::ScriptKey;
pub use selection::SelectionKey;

use serde_yaml::{Mapping, Value};

use crate::error::CoreError;

/// Joins the segments of a [`ScriptKey`]
pub const KEY_SEPARATOR: char = '.';

/// Joins the choices of a [`SelectionKey`]
pub const INVOCATION_SEPARATOR: char = ':';

/// First key of `mapping` in insertion order.
///
/// # Errors
///
/// Returns `CoreError::EmptyMapping` if the mapping has no entries, or
/// `CoreError::InvalidKey` if the first key is not a string.
pub fn first_key(mapping: &Mapping) -> Result<&str, CoreError> {
    match mapping.keys().next() {
        Some(Value::String(key)) => Ok(key),
        Some(other) => Err(CoreError::InvalidKey(format!("{other:?}"))),
        None => Err(CoreError::EmptyMapping),
    }
}

/// Leaf-most segment of `key`.
///
/// # Errors
///
/// Returns `CoreError::InvalidKey` if `key` is empty or has an empty segment.
pub fn name_from_key(key: &str) -> Result<String, CoreError> {
    ScriptKey::parse(key)?
        .name()
        .map(str::to_string)
        .ok_or_else(|| CoreError::InvalidKey(key.to_string()))
}

/// `key` without its leaf segment, or `None` for keys of depth one or less.
///
/// # Errors
///
/// Returns `CoreError::InvalidKey` if `key` has an empty segment.
pub fn parent_key(key: &str) -> Result<Option<String>, CoreError> {
    Ok(ScriptKey::parse(key)?.parent().map(|parent| parent.to_string()))
}

/// Script keys of every submenu leading to the final choice of `selection`,
/// root first.
///
/// `"one:two:three"` gives `["one", "one.two"]` and `"git.remote:push"` gives
/// `["git.remote"]`; a selection of one choice or none gives an empty list.
///
/// # Errors
///
/// Returns `CoreError::InvalidKey` if `selection` has an empty choice or an
/// empty segment inside a choice.
pub fn options_keys_from_key(selection: &str) -> Result<Vec<String>, CoreError> {
    Ok(SelectionKey::parse(selection)?
        .option_keys()
        .iter()
        .map(ToString::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_key() {
        let mapping: Mapping = serde_yaml::from_str("first: 1\nsecond: 2\nthird: 3\n").unwrap();
        assert_eq!(first_key(&mapping).unwrap(), "first");
    }

    #[test]
    fn test_first_key_empty() {
        assert_eq!(first_key(&Mapping::new()), Err(CoreError::EmptyMapping));
    }

    #[test]
    fn test_first_key_not_a_string() {
        let mapping: Mapping = serde_yaml::from_str("1: one\n").unwrap();
        assert!(matches!(first_key(&mapping), Err(CoreError::InvalidKey(_))));
    }

    #[test]
    fn test_name_from_key() {
        assert_eq!(name_from_key("one.two.three.four.five").unwrap(), "five");
        assert_eq!(name_from_key("one").unwrap(), "one");
        assert_eq!(
            name_from_key(""),
            Err(CoreError::InvalidKey(String::new()))
        );
    }

    #[test]
    fn test_parent_key() {
        assert_eq!(
            parent_key("one.two.three.four.five").unwrap().as_deref(),
            Some("one.two.three.four")
        );
        assert_eq!(parent_key("one").unwrap(), None);
        assert_eq!(parent_key("").unwrap(), None);
        assert!(parent_key("one..two").is_err());
    }

    #[test]
    fn test_parent_and_name_reconstruct_key() {
        for key in ["a.b", "one.two.three", "x.y.z.w"] {
            let parent = parent_key(key).unwrap().unwrap();
            let name = name_from_key(key).unwrap();
            assert_eq!(format!("{parent}{KEY_SEPARATOR}{name}"), key);
        }
    }

    #[test]
    fn test_options_keys_from_key() {
        assert_eq!(
            options_keys_from_key("one:two:three").unwrap(),
            vec!["one", "one.two"]
        );
        assert!(options_keys_from_key("one").unwrap().is_empty());
        assert!(options_keys_from_key("").unwrap().is_empty());
    }

    #[test]
    fn test_options_keys_with_dotted_choice() {
        assert_eq!(
            options_keys_from_key("git.remote:push").unwrap(),
            vec!["git.remote"]
        );
        assert_eq!(
            options_keys_from_key("git:remote.origin:push").unwrap(),
            vec!["git", "git.remote.origin"]
        );
    }

    #[test]
    fn test_options_keys_rejects_empty_choice() {
        assert!(options_keys_from_key("one::three").is_err());
        assert!(options_keys_from_key("one:").is_err());
    }
}
