use std::path::Path;

use anyhow::Result;

use opnrender_core::vars::VarFile;

use crate::output;

/// Show the top-level keys of the variable file with the shape of each value,
/// so a user can see what context the templates receive.
pub fn run(vars_path: &Path) -> Result<()> {
    let vars = VarFile::load(vars_path)?;

    output::print_header(&format!("Variables in {}", vars.path().display()));
    for (key, shape) in vars.summary() {
        output::print_key_value(&key, &shape);
    }

    Ok(())
}
