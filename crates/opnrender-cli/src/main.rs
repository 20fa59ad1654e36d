//! opnrender CLI — render checker for OPNsense configuration templates.
//!
//! Renders each firewall configuration fragment (DHCP, DNS blocklist, NAT,
//! NTP, Suricata, VLANs) against the YAML variable file and reports the
//! result per template, so a broken variable or template is caught before the
//! fragments go anywhere near a firewall.
//!
//! `check` is the default command when none is given; `render`, `list`, and
//! `vars` cover single-template and inspection workflows.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "opnrender",
    about = "Render OPNsense configuration templates against a YAML variable file",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the YAML variable file
    #[arg(long, global = true, default_value = "group_vars/opnsense.yml")]
    vars: PathBuf,

    /// Directory containing the .hbs templates
    #[arg(long, global = true, default_value = "templates")]
    templates: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every template in the fixed check set and report each result
    Check {
        /// Exit nonzero if any template fails to render
        #[arg(long)]
        strict: bool,
    },

    /// Render a single template and print its output
    Render {
        /// Template identifier (e.g. dhcp.xml)
        name: String,
    },

    /// List the templates registered in the template directory
    List,

    /// Show the top-level keys of the variable file
    Vars,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command.unwrap_or(Commands::Check { strict: false }) {
        Commands::Check { strict } => commands::check::run(&cli.vars, &cli.templates, strict),
        Commands::Render { name } => commands::render::run(&cli.vars, &cli.templates, &name),
        Commands::List => commands::list::run(&cli.templates),
        Commands::Vars => commands::vars::run(&cli.vars),
    }
}
