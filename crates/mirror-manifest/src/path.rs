//! Resolved file paths

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `/`-joined relative path for one manifest file
///
/// The same string is appended to the base URL and mapped under the output
/// directory, so the remote and local layouts always match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn from_segments<'s, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut path = String::new();
        for segment in segments {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment);
        }
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// True when every segment is a plain name, so the path cannot climb
    /// out of the directory it is joined onto
    pub fn is_plain_relative(&self) -> bool {
        !self.0.is_empty()
            && self.segments().all(|segment| {
                !segment.is_empty() && segment != "." && segment != ".." && !segment.contains('\\')
            })
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResolvedPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for ResolvedPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments() {
        let path = ResolvedPath::from_segments(["unit1", "lesson2", "notes.txt"]);
        assert_eq!(path.as_str(), "unit1/lesson2/notes.txt");

        let bare = ResolvedPath::from_segments(["notes.txt"]);
        assert_eq!(bare.as_str(), "notes.txt");
    }

    #[test]
    fn test_plain_relative() {
        assert!(ResolvedPath::from("unit1/a.txt").is_plain_relative());
        assert!(ResolvedPath::from("a.txt").is_plain_relative());

        assert!(!ResolvedPath::from("").is_plain_relative());
        assert!(!ResolvedPath::from("/etc/passwd").is_plain_relative());
        assert!(!ResolvedPath::from("unit1/../../escape.txt").is_plain_relative());
        assert!(!ResolvedPath::from("unit1//a.txt").is_plain_relative());
        assert!(!ResolvedPath::from("./a.txt").is_plain_relative());
        assert!(!ResolvedPath::from("unit1\\a.txt").is_plain_relative());
    }
}
