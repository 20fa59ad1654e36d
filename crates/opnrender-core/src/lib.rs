//! Core library for opnrender.
//!
//! Provides the three pieces the CLI wires together: the variable file loader
//! ([`vars::VarFile`]), the strict template engine
//! ([`templates::engine::TemplateEngine`]), and the render-and-report loop
//! ([`report::render_all`]) that turns per-template failures into values
//! instead of aborting the run.
//!
//! Setup errors (bad variable file, missing template directory) are the fatal
//! tier and live in [`error::OpnRenderError`]; per-template failures are the
//! recoverable tier, carried as [`templates::engine::RenderFailure`].

pub mod error;
pub mod report;
pub mod templates;
pub mod vars;
