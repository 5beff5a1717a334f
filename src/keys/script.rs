use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::keys::KEY_SEPARATOR;

/// Address of a node in the script tree
///
/// The root has no segments and formats as the empty string. No segment is
/// ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptKey {
    segments: Vec<String>,
}

impl ScriptKey {
    #[must_use]
    pub fn root() -> Self {
        ScriptKey::default()
    }

    /// Parse a separator-joined key. The empty string is the root.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidKey` if any segment is empty.
    pub fn parse(key: &str) -> Result<Self, CoreError> {
        if key.is_empty() {
            return Ok(ScriptKey::root());
        }
        Self::from_segments(key.split(KEY_SEPARATOR))
            .map_err(|_| CoreError::InvalidKey(key.to_string()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidKey` if any segment is empty or contains
    /// [`KEY_SEPARATOR`].
    pub fn from_segments<I, S>(segments: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .map(|segment: String| {
                if segment.is_empty() || segment.contains(KEY_SEPARATOR) {
                    Err(CoreError::InvalidKey(segment))
                } else {
                    Ok(segment)
                }
            })
            .collect::<Result<Vec<String>, CoreError>>()?;
        Ok(ScriptKey { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Root-most segment
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Leaf-most segment
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// All but the leaf segment; `None` for keys of depth one or less.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.segments.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(ScriptKey {
                segments: rest.to_vec(),
            }),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidKey` if `segment` is empty or contains
    /// [`KEY_SEPARATOR`].
    pub fn child(&self, segment: &str) -> Result<Self, CoreError> {
        if segment.is_empty() || segment.contains(KEY_SEPARATOR) {
            return Err(CoreError::InvalidKey(segment.to_string()));
        }
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Ok(ScriptKey { segments })
    }

    /// This key followed by every segment of `other`.
    #[must_use]
    pub fn join(&self, other: &ScriptKey) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        ScriptKey { segments }
    }

    /// Every non-empty prefix of this key, shortest first, including the key itself.
    pub fn prefixes(&self) -> impl Iterator<Item = ScriptKey> + '_ {
        (1..=self.segments.len()).map(|len| ScriptKey {
            segments: self.segments[..len].to_vec(),
        })
    }
}

impl fmt::Display for ScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = [0u8; 4];
        f.write_str(&self.segments.join(KEY_SEPARATOR.encode_utf8(&mut separator)))
    }
}

impl FromStr for ScriptKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptKey::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let key = ScriptKey::parse("one.two.three").unwrap();
        assert_eq!(key.depth(), 3);
        assert_eq!(key.first(), Some("one"));
        assert_eq!(key.name(), Some("three"));
        assert_eq!(key.to_string(), "one.two.three");
    }

    #[test]
    fn test_root() {
        let root = ScriptKey::parse("").unwrap();
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.name(), None);
        assert_eq!(root.parent(), None);
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn test_empty_segment_is_invalid() {
        for key in [".", "one.", ".one", "one..two"] {
            assert_eq!(
                ScriptKey::parse(key),
                Err(CoreError::InvalidKey(key.to_string())),
                "{key}"
            );
        }
    }

    #[test]
    fn test_parent() {
        let key: ScriptKey = "one.two.three".parse().unwrap();
        assert_eq!(key.parent().unwrap().to_string(), "one.two");
        assert_eq!(ScriptKey::parse("one").unwrap().parent(), None);
    }

    #[test]
    fn test_child() {
        let key = ScriptKey::parse("git").unwrap().child("commit").unwrap();
        assert_eq!(key.to_string(), "git.commit");
        assert!(key.child("").is_err());
        assert!(key.child("a.b").is_err());
        assert_eq!(ScriptKey::root().child("git").unwrap().to_string(), "git");
    }

    #[test]
    fn test_join() {
        let key = ScriptKey::parse("git").unwrap();
        let joined = key.join(&ScriptKey::parse("remote.push").unwrap());
        assert_eq!(joined.to_string(), "git.remote.push");
        assert_eq!(ScriptKey::root().join(&key), key);
    }

    #[test]
    fn test_prefixes() {
        let key = ScriptKey::parse("a.b.c").unwrap();
        let prefixes: Vec<String> = key.prefixes().map(|k| k.to_string()).collect();
        assert_eq!(prefixes, vec!["a", "a.b", "a.b.c"]);
        assert_eq!(ScriptKey::root().prefixes().count(), 0);
    }
}
