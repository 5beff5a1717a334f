//! Key resolution and message templating for cbf
//!
//! cbf bundles multi-step shell command sequences into hierarchical scripts that
//! users walk through nested menus. This crate is the deterministic core of the
//! tool: it turns a user's menu selections into keys that address the script
//! tree, validates user-supplied data, and renders tag-styled messages. It does
//! no file I/O and spawns no processes.

use log::debug;

use crate::keys::{ScriptKey, SelectionKey};
use crate::tree::{ScriptTree, TreeError};

pub mod error;
pub mod keys;
pub mod logger;
pub mod messages;
pub mod normalize;
pub mod predicates;
pub mod theme;
pub mod tree;
pub mod variables;

/// A submenu that was passed through on the way to the selected script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub key: ScriptKey,
    pub choices: Vec<String>,
}

/// Outcome of walking a selection down the script tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Submenus from the root-most to the parent of the target
    pub menus: Vec<Menu>,
    pub target: ScriptKey,
}

/// Resolve every submenu of `selection` in root-to-leaf order and check that
/// each deeper choice exists under the previous one.
///
/// # Errors
///
/// Returns `TreeError::Core` if `selection` is malformed or empty, or
/// `TreeError::ScriptNotFound` naming the first key that does not resolve.
pub fn resolve_selection(tree: &ScriptTree, selection: &str) -> Result<Resolution, TreeError> {
    let selection = SelectionKey::parse(selection)?;
    let target = selection
        .target()
        .ok_or_else(|| error::CoreError::InvalidKey(selection.to_string()))?;
    debug!("Resolving selection '{selection}' to '{target}'");

    let mut menus = Vec::new();
    for key in selection.option_keys() {
        let choices = tree
            .children(&key)?
            .into_iter()
            .map(str::to_string)
            .collect();
        debug!("Submenu '{key}' resolved");
        menus.push(Menu { key, choices });
    }

    tree.get(&target)?;

    Ok(Resolution { menus, target })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPTS: &str = "
git:
  remote:
    push:
      command: git push
    pull:
      command: git pull
  status:
    command: git status
";

    #[test]
    fn test_resolve_nested_selection() {
        let tree = ScriptTree::from_yaml_str(SCRIPTS).unwrap();
        let resolution = resolve_selection(&tree, "git:remote:push").unwrap();
        assert_eq!(resolution.target.to_string(), "git.remote.push");
        let keys: Vec<String> = resolution.menus.iter().map(|m| m.key.to_string()).collect();
        assert_eq!(keys, vec!["git", "git.remote"]);
        assert_eq!(resolution.menus[0].choices, vec!["remote", "status"]);
        assert_eq!(resolution.menus[1].choices, vec!["push", "pull"]);
    }

    #[test]
    fn test_resolve_top_level_selection() {
        let tree = ScriptTree::from_yaml_str(SCRIPTS).unwrap();
        let resolution = resolve_selection(&tree, "git").unwrap();
        assert!(resolution.menus.is_empty());
        assert_eq!(resolution.target.to_string(), "git");
    }

    #[test]
    fn test_resolve_missing_ancestor() {
        let tree = ScriptTree::from_yaml_str(SCRIPTS).unwrap();
        match resolve_selection(&tree, "git:nope:push") {
            Err(TreeError::ScriptNotFound(key)) => assert_eq!(key, "git.nope"),
            other => panic!("Expected ScriptNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_missing_leaf() {
        let tree = ScriptTree::from_yaml_str(SCRIPTS).unwrap();
        match resolve_selection(&tree, "git:remote:fetch") {
            Err(TreeError::ScriptNotFound(key)) => assert_eq!(key, "git.remote.fetch"),
            other => panic!("Expected ScriptNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_dotted_choice() {
        let tree = ScriptTree::from_yaml_str(SCRIPTS).unwrap();
        let resolution = resolve_selection(&tree, "git.remote:push").unwrap();
        assert_eq!(resolution.target.to_string(), "git.remote.push");
        assert_eq!(resolution.menus.len(), 1);
        assert_eq!(resolution.menus[0].key.to_string(), "git.remote");
        assert_eq!(resolution.menus[0].choices, vec!["push", "pull"]);
    }

    #[test]
    fn test_resolve_root_script_named_like_a_field() {
        let tree = ScriptTree::from_yaml_str("message:\n  command: echo hi\n").unwrap();
        let first = tree.first_script().unwrap();
        let resolution = resolve_selection(&tree, first).unwrap();
        assert_eq!(resolution.target.to_string(), "message");
    }

    #[test]
    fn test_resolve_empty_selection() {
        let tree = ScriptTree::from_yaml_str(SCRIPTS).unwrap();
        assert!(matches!(
            resolve_selection(&tree, ""),
            Err(TreeError::Core(error::CoreError::InvalidKey(_)))
        ));
    }
}
