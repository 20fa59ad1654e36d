use std::path::Path;

use anyhow::Result;

use opnrender_core::templates::engine::TemplateEngine;
use opnrender_core::vars::VarFile;

/// Render a single template and print the body alone to stdout.
///
/// Useful for piping one fragment into a file or a diff. Failures use the
/// same per-template error line as `check`, then exit nonzero.
pub fn run(vars_path: &Path, template_dir: &Path, name: &str) -> Result<()> {
    let vars = VarFile::load(vars_path)?;
    let engine = TemplateEngine::load(template_dir)?;

    match engine.render(name, vars.value()) {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(failure) => {
            println!("Error rendering {name}: {failure}");
            anyhow::bail!("template '{name}' did not render");
        }
    }
}
