//! Manifest node model
//!
//! Raw JSON is converted once, at load time, into [`ManifestNode`]. What
//! happens to shapes the walker cannot use is decided by [`Validation`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ManifestError;
use crate::Result;

/// Reserved key listing the filenames of a directory level
pub const FILES_KEY: &str = "files";

/// How malformed nodes are treated while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Skip malformed nodes, reporting each one as a warning
    #[default]
    Permissive,
    /// Reject the manifest on the first malformed node
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestNode {
    /// A directory level
    Container {
        /// Filenames under the reserved `files` key, in document order
        files: Vec<String>,
        /// Subdirectories, in document order
        entries: Vec<(String, ManifestNode)>,
    },
    /// Groupings that share the parent's directory
    List(Vec<ManifestNode>),
    /// A scalar outside a `files` list; contributes nothing
    Leaf,
}

impl ManifestNode {
    /// Convert a parsed JSON value into a node tree
    pub fn from_value(value: &Value, validation: Validation) -> Result<Self> {
        convert(value, validation, "")
    }

    /// Number of filenames reachable from this node
    pub fn file_count(&self) -> usize {
        match self {
            ManifestNode::Container { files, entries } => {
                files.len()
                    + entries
                        .iter()
                        .map(|(_, child)| child.file_count())
                        .sum::<usize>()
            }
            ManifestNode::List(items) => items.iter().map(ManifestNode::file_count).sum(),
            ManifestNode::Leaf => 0,
        }
    }
}

fn convert(value: &Value, validation: Validation, location: &str) -> Result<ManifestNode> {
    match value {
        Value::Object(map) => {
            let mut files = Vec::new();
            let mut entries = Vec::with_capacity(map.len());

            for (key, child) in map {
                let child_location = format!("{}/{}", location, escape_pointer(key));

                if key == FILES_KEY {
                    collect_files(child, validation, &child_location, &mut files)?;
                } else {
                    entries.push((key.clone(), convert(child, validation, &child_location)?));
                }
            }

            Ok(ManifestNode::Container { files, entries })
        }
        Value::Array(items) => {
            let items = items
                .iter()
                .enumerate()
                .map(|(i, item)| convert(item, validation, &format!("{}/{}", location, i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(ManifestNode::List(items))
        }
        scalar => {
            flag(
                validation,
                location,
                format!("expected an object or array, found {}", kind(scalar)),
            )?;
            Ok(ManifestNode::Leaf)
        }
    }
}

fn collect_files(
    value: &Value,
    validation: Validation,
    location: &str,
    files: &mut Vec<String>,
) -> Result<()> {
    let Value::Array(items) = value else {
        return flag(
            validation,
            location,
            format!("`{}` must be an array, found {}", FILES_KEY, kind(value)),
        );
    };

    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(name) => files.push(name.clone()),
            other => flag(
                validation,
                &format!("{}/{}", location, i),
                format!("file entry must be a string, found {}", kind(other)),
            )?,
        }
    }

    Ok(())
}

fn flag(validation: Validation, location: &str, reason: String) -> Result<()> {
    let location = if location.is_empty() { "/" } else { location };

    match validation {
        Validation::Strict => Err(ManifestError::Malformed {
            location: location.to_string(),
            reason,
        }),
        Validation::Permissive => {
            tracing::warn!(location = %location, reason = %reason, "Skipping malformed manifest node");
            Ok(())
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// RFC 6901 escaping so locations stay unambiguous for keys containing `/`
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_container_splits_files_from_entries() {
        let value = json!({
            "lesson1": { "files": ["a.txt"] },
            "files": ["intro.txt", "outro.txt"]
        });

        let node = ManifestNode::from_value(&value, Validation::Strict).unwrap();
        match node {
            ManifestNode::Container { files, entries } => {
                assert_eq!(files, vec!["intro.txt", "outro.txt"]);
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].0, "lesson1");
            }
            other => panic!("Expected Container, got {:?}", other),
        }
    }

    #[test]
    fn test_entries_keep_document_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": {}, "alpha": {}, "mid": {}}"#).unwrap();

        let node = ManifestNode::from_value(&value, Validation::Strict).unwrap();
        let ManifestNode::Container { entries, .. } = node else {
            panic!("Expected Container");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_permissive_skips_malformed_shapes() {
        let value = json!({
            "files": ["ok.txt", 7, null, "also-ok.txt"],
            "broken": "not a directory",
            "nested": { "files": "single.txt" }
        });

        let node = ManifestNode::from_value(&value, Validation::Permissive).unwrap();
        let ManifestNode::Container { files, entries } = node else {
            panic!("Expected Container");
        };
        assert_eq!(files, vec!["ok.txt", "also-ok.txt"]);
        assert_eq!(entries[0], ("broken".to_string(), ManifestNode::Leaf));
        assert_eq!(
            entries[1].1,
            ManifestNode::Container {
                files: vec![],
                entries: vec![]
            }
        );
    }

    #[test]
    fn test_strict_reports_location() {
        let value = json!({ "unit1": [{ "files": ["a.txt", 3] }] });

        let err = ManifestNode::from_value(&value, Validation::Strict).unwrap_err();
        match err {
            ManifestError::Malformed { location, reason } => {
                assert_eq!(location, "/unit1/0/files/1");
                assert!(reason.contains("a number"));
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_rejects_scalar_root() {
        let err = ManifestNode::from_value(&json!("just a string"), Validation::Strict).unwrap_err();
        assert!(matches!(err, ManifestError::Malformed { ref location, .. } if location == "/"));
    }

    #[test]
    fn test_pointer_escaping() {
        let value = json!({ "a/b": 1 });
        let err = ManifestNode::from_value(&value, Validation::Strict).unwrap_err();
        assert!(matches!(err, ManifestError::Malformed { ref location, .. } if location == "/a~1b"));
    }

    #[test]
    fn test_file_count() {
        let value = json!({
            "files": ["root.txt"],
            "unit1": [
                { "files": ["a.txt", "b.txt"] },
                { "deep": { "files": ["c.txt"] } }
            ]
        });

        let node = ManifestNode::from_value(&value, Validation::Strict).unwrap();
        assert_eq!(node.file_count(), 4);
    }
}
