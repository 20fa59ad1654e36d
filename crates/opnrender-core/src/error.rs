//! Unified error types for opnrender.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run during setup, before any template output.
///
/// Per-template failures are deliberately absent here: they are the
/// recoverable tier, modeled as [`crate::templates::engine::RenderFailure`]
/// and reported inline without stopping the loop.
#[derive(Error, Debug)]
pub enum OpnRenderError {
    // --- Variable file ---

    /// The variable file was not found or could not be read.
    #[error("variable file not found at {path}")]
    VarsNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The variable file exists but is not valid YAML.
    #[error("failed to parse variable file at {path}")]
    VarsParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed, but its top level is not a mapping.
    #[error("variable file at {path} must be a mapping, found {found}")]
    VarsNotMapping { path: PathBuf, found: &'static str },

    // --- Template directory ---

    /// The template search directory is missing or is not a directory.
    #[error("template directory not found at {path}")]
    TemplateDirMissing { path: PathBuf },

    /// A template in the search directory failed to compile at registration.
    #[error("failed to compile templates in {path}")]
    TemplateCompile {
        path: PathBuf,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, OpnRenderError>`.
pub type Result<T> = std::result::Result<T, OpnRenderError>;
