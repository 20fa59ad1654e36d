//! Variable file loading.
//!
//! The rendering context is a single YAML document, conventionally
//! `group_vars/opnsense.yml`. It is read once at startup and held immutable
//! for the rest of the run. The only structural requirement is that the top
//! level parses to a mapping; everything below is an arbitrary tree of
//! scalars, sequences, and nested mappings. No schema is enforced — a
//! template referencing a key the file does not define fails at render time,
//! not here.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::error::{OpnRenderError, Result};

/// Parsed variable file used as the rendering context.
#[derive(Debug, Clone)]
pub struct VarFile {
    path: PathBuf,
    value: Value,
}

impl VarFile {
    /// Load and parse the variable file at `path`.
    ///
    /// All failure modes here are fatal for the run: missing/unreadable file,
    /// invalid YAML, or a document whose top level is not a mapping.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading variables from {}", path.display());

        let contents =
            std::fs::read_to_string(path).map_err(|e| OpnRenderError::VarsNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;

        let value: Value =
            serde_yaml::from_str(&contents).map_err(|e| OpnRenderError::VarsParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if value.as_mapping().is_none() {
            return Err(OpnRenderError::VarsNotMapping {
                path: path.to_path_buf(),
                found: value_kind(&value),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            value,
        })
    }

    /// The parsed document; always a mapping at the top level.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Path the variables were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level keys with a short description of each value's shape,
    /// in document order.
    pub fn summary(&self) -> Vec<(String, String)> {
        let Some(map) = self.value.as_mapping() else {
            return Vec::new();
        };

        map.iter()
            .map(|(key, value)| {
                let key = match key {
                    Value::String(s) => s.clone(),
                    other => format!("{other:?}"),
                };
                (key, describe(value))
            })
            .collect()
    }
}

/// YAML value kind name used in diagnostics.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Sequence(items) => format!("sequence ({} items)", items.len()),
        Value::Mapping(map) => format!("mapping ({} keys)", map.len()),
        other => value_kind(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_valid_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opnsense.yml");
        fs::write(
            &path,
            "domain: lan.example\ndhcp:\n  enabled: true\n  range:\n    from: 10.0.0.100\n    to: 10.0.0.199\nvlans:\n  - id: 10\n    name: mgmt\n",
        )
        .unwrap();

        let vars = VarFile::load(&path).unwrap();
        assert!(vars.value().as_mapping().is_some());
        assert_eq!(vars.path(), path);
    }

    #[test]
    fn test_load_rejects_top_level_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opnsense.yml");
        fs::write(&path, "- one\n- two\n").unwrap();

        let err = VarFile::load(&path).unwrap_err();
        match err {
            OpnRenderError::VarsNotMapping { found, .. } => assert_eq!(found, "sequence"),
            other => panic!("expected VarsNotMapping, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_top_level_scalar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opnsense.yml");
        fs::write(&path, "just a string\n").unwrap();

        let err = VarFile::load(&path).unwrap_err();
        assert!(matches!(err, OpnRenderError::VarsNotMapping { found: "string", .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = VarFile::load(&dir.path().join("nonexistent.yml")).unwrap_err();
        assert!(matches!(err, OpnRenderError::VarsNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_syntax() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opnsense.yml");
        fs::write(&path, "dhcp: [unclosed\n").unwrap();

        let err = VarFile::load(&path).unwrap_err();
        assert!(matches!(err, OpnRenderError::VarsParse { .. }));
    }

    #[test]
    fn test_summary_describes_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opnsense.yml");
        fs::write(
            &path,
            "domain: lan.example\nntp_servers:\n  - 0.pool.ntp.org\n  - 1.pool.ntp.org\nnat:\n  outbound: automatic\n",
        )
        .unwrap();

        let vars = VarFile::load(&path).unwrap();
        let summary = vars.summary();
        assert_eq!(
            summary,
            vec![
                ("domain".to_string(), "string".to_string()),
                ("ntp_servers".to_string(), "sequence (2 items)".to_string()),
                ("nat".to_string(), "mapping (1 keys)".to_string()),
            ]
        );
    }
}
