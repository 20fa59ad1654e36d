use std::path::Path;

use anyhow::Result;

use opnrender_core::report::{render_all, RenderOutcome};
use opnrender_core::templates::engine::TemplateEngine;
use opnrender_core::templates::DEFAULT_SET;
use opnrender_core::vars::VarFile;

use crate::output;

/// Render every template in the fixed check set and print one result per item.
///
/// Variable-file and engine-setup problems abort the run before the first
/// header. A per-template failure prints its error line and the loop keeps
/// going; with `strict`, any failure makes the command exit nonzero after the
/// full report has been printed.
pub fn run(vars_path: &Path, template_dir: &Path, strict: bool) -> Result<()> {
    let vars = VarFile::load(vars_path)?;
    let engine = TemplateEngine::load(template_dir)?;

    let outcomes = render_all(&engine, vars.value(), &DEFAULT_SET);

    for outcome in &outcomes {
        match outcome {
            RenderOutcome::Rendered { name, text } => {
                println!("\n=== Rendered {name} ===");
                println!("{text}");
            }
            RenderOutcome::Failed { name, message } => {
                println!("Error rendering {name}: {message}");
            }
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_rendered()).count();
    let rendered = outcomes.len() - failed;

    println!();
    if failed == 0 {
        output::print_success(&format!("{rendered}/{} templates rendered", outcomes.len()));
    } else {
        output::print_error(&format!(
            "{failed}/{} templates failed to render",
            outcomes.len()
        ));
        if strict {
            anyhow::bail!("{failed} template(s) failed to render");
        }
    }

    Ok(())
}
