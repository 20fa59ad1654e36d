use std::path::Path;

use anyhow::Result;

use opnrender_core::templates::engine::TemplateEngine;
use opnrender_core::templates::DEFAULT_SET;

use crate::output;

/// List the template identifiers registered in the search directory,
/// marking the ones in the default check set.
pub fn run(template_dir: &Path) -> Result<()> {
    let engine = TemplateEngine::load(template_dir)?;

    output::print_header(&format!("Templates in {}", template_dir.display()));
    for name in engine.names() {
        let marker = if DEFAULT_SET.contains(&name) { "*" } else { " " };
        println!("  {marker} {name}");
    }
    println!();
    println!("  * = in the default check set");

    Ok(())
}
