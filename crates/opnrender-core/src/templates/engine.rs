//! Handlebars-based template engine with directory lookup.
//!
//! Wraps [`handlebars::Handlebars`] with strict mode enabled and every
//! template from the search directory registered up front. Setup problems
//! (missing directory, compile defect) are fatal; anything that goes wrong
//! for a single template afterwards is a [`RenderFailure`] scoped to that
//! template alone.

use std::path::Path;

use handlebars::{DirectorySourceOptions, Handlebars};
use serde::Serialize;
use tracing::debug;

use crate::error::{OpnRenderError, Result};

/// Per-template failure: the recoverable error tier.
///
/// One of these never aborts a run; it becomes the `Error rendering` line for
/// its template while the remaining templates proceed.
#[derive(Debug, thiserror::Error)]
pub enum RenderFailure {
    /// The identifier resolves to no template in the search directory.
    #[error("template '{0}' not found in search directory")]
    NotFound(String),

    /// Rendering failed: undefined variable (strict mode), an expression
    /// error, or a syntax defect that survived registration.
    #[error("{0}")]
    Render(String),
}

/// Template engine: a strict Handlebars registry loaded from one directory.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Load every `.hbs` template under `dir` into a strict-mode registry.
    ///
    /// The directory must exist and every template must compile; both checks
    /// happen here so that setup failures abort the run before any render
    /// attempt.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(OpnRenderError::TemplateDirMissing {
                path: dir.to_path_buf(),
            });
        }

        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry
            .register_templates_directory(dir, DirectorySourceOptions::default())
            .map_err(|e| OpnRenderError::TemplateCompile {
                path: dir.to_path_buf(),
                source: Box::new(e),
            })?;

        debug!(
            "registered {} template(s) from {}",
            registry.get_templates().len(),
            dir.display()
        );

        Ok(Self { registry })
    }

    /// Render the template registered as `name` against `vars`.
    ///
    /// `vars` is any serializable value; in practice the parsed variable
    /// mapping from [`crate::vars::VarFile`].
    pub fn render<T: Serialize>(
        &self,
        name: &str,
        vars: &T,
    ) -> std::result::Result<String, RenderFailure> {
        if !self.registry.has_template(name) {
            return Err(RenderFailure::NotFound(name.to_string()));
        }

        self.registry
            .render(name, vars)
            .map_err(|e| RenderFailure::Render(e.to_string()))
    }

    /// Identifiers of all registered templates, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .registry
            .get_templates()
            .keys()
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }
}
