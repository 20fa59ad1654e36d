//! The render-and-report loop.
//!
//! Per-template failures are values, not exceptions: each identifier in the
//! run set yields exactly one [`RenderOutcome`], and a failed item never
//! stops the loop. Output order equals input order, so callers can print as
//! they iterate and the report stays deterministic.

use serde::Serialize;
use tracing::debug;

use crate::templates::engine::TemplateEngine;

/// Result of one template attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The template rendered cleanly; `text` is the full output.
    Rendered { name: String, text: String },
    /// Lookup or render failed; `message` carries the underlying error text.
    Failed { name: String, message: String },
}

impl RenderOutcome {
    /// Template identifier this outcome belongs to.
    pub fn name(&self) -> &str {
        match self {
            Self::Rendered { name, .. } | Self::Failed { name, .. } => name,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Attempt one load+render per identifier, in the given order.
///
/// A failure on identifier *i* never prevents the attempts on *i+1..n*; the
/// returned vector has one entry per input name, in input order.
pub fn render_all<T: Serialize>(
    engine: &TemplateEngine,
    vars: &T,
    names: &[&str],
) -> Vec<RenderOutcome> {
    names
        .iter()
        .map(|name| match engine.render(name, vars) {
            Ok(text) => {
                debug!("rendered {name}");
                RenderOutcome::Rendered {
                    name: name.to_string(),
                    text,
                }
            }
            Err(failure) => {
                debug!("failed {name}: {failure}");
                RenderOutcome::Failed {
                    name: name.to_string(),
                    message: failure.to_string(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SET: [&str; 3] = ["dhcp.xml", "nat.xml", "ntp.xml"];

    fn setup_template_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("dhcp.xml.hbs"),
            "<dhcpd><domain>{{domain}}</domain></dhcpd>\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("nat.xml.hbs"),
            "<nat><mode>{{nat.mode}}</mode></nat>\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("ntp.xml.hbs"),
            "<ntpd><server>{{ntp_server}}</server></ntpd>\n",
        )
        .unwrap();
        dir
    }

    fn full_vars() -> serde_json::Value {
        serde_json::json!({
            "domain": "lan.example",
            "nat": { "mode": "automatic" },
            "ntp_server": "0.pool.ntp.org",
        })
    }

    #[test]
    fn test_all_render_in_declared_order() {
        let dir = setup_template_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        let outcomes = render_all(&engine, &full_vars(), &SET);
        assert_eq!(outcomes.len(), SET.len());
        let order: Vec<&str> = outcomes.iter().map(RenderOutcome::name).collect();
        assert_eq!(order, SET);
        assert!(outcomes.iter().all(RenderOutcome::is_rendered));
    }

    #[test]
    fn test_clean_render_has_no_error_text() {
        let dir = setup_template_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        for outcome in render_all(&engine, &full_vars(), &SET) {
            match outcome {
                RenderOutcome::Rendered { text, .. } => {
                    assert!(!text.contains("Error"));
                }
                RenderOutcome::Failed { name, message } => {
                    panic!("{name} unexpectedly failed: {message}");
                }
            }
        }
    }

    #[test]
    fn test_missing_key_fails_only_its_template() {
        let dir = setup_template_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        // No `nat` key: nat.xml must fail, its siblings must not.
        let vars = serde_json::json!({
            "domain": "lan.example",
            "ntp_server": "0.pool.ntp.org",
        });

        let outcomes = render_all(&engine, &vars, &SET);
        assert!(outcomes[0].is_rendered());
        assert!(!outcomes[1].is_rendered());
        assert!(outcomes[2].is_rendered());

        match &outcomes[1] {
            RenderOutcome::Failed { name, message } => {
                assert_eq!(name, "nat.xml");
                assert!(!message.is_empty());
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_identifier_isolated() {
        let dir = setup_template_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        let set = ["dhcp.xml", "bogus.xml", "ntp.xml"];
        let outcomes = render_all(&engine, &full_vars(), &set);

        assert!(outcomes[0].is_rendered());
        assert!(outcomes[2].is_rendered());
        match &outcomes[1] {
            RenderOutcome::Failed { message, .. } => {
                assert!(message.contains("not found"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = setup_template_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        let first = render_all(&engine, &full_vars(), &SET);
        let second = render_all(&engine, &full_vars(), &SET);
        assert_eq!(first, second);
    }
}
