#![deny(missing_docs)]

//! # Generate Command
//!
//! Implements the pipeline: fetch document -> translate root type ->
//! render entries -> write file -> gofmt.
//!
//! Skipped-field diagnostics are printed to stderr and do not abort the
//! run; an unresolvable root type or a rendering failure does.

use crate::emit::{format_file, render_document, resource_file_name, CommandExecutor};
use crate::error::CliResult;
use crate::fetch::load_or_fetch;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tfgen_core::translate;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// API identifier (e.g. "compute").
    #[clap(long)]
    pub api: String,

    /// API version (e.g. "v1").
    #[clap(long, default_value = "v1")]
    pub api_version: String,

    /// Name of the root type to translate (e.g. "Instance").
    #[clap(long)]
    pub resource: String,

    /// Read the discovery document from a local JSON file instead of
    /// fetching it over the network.
    #[clap(long)]
    pub input: Option<PathBuf>,

    /// Directory the generated file is written into.
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip the gofmt pass on the emitted file.
    #[clap(long)]
    pub no_fmt: bool,
}

/// Executes the generation pipeline.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `executor` - The command runner for the formatter (use `ShellExecutor`
///   for real execution).
pub fn execute<E: CommandExecutor>(args: &GenerateArgs, executor: &E) -> CliResult<()> {
    let document = load_or_fetch(args.input.as_deref(), &args.api, &args.api_version)?;
    println!(
        "Translating {} from {}/{}...",
        args.resource, document.name, document.version
    );

    let translation = translate(&document.schemas, &args.resource)?;
    for skipped in &translation.skipped {
        eprintln!(
            "{} {}",
            "warning:".yellow().bold(),
            format!("skipped field '{}': {}", skipped.field, skipped.reason).yellow()
        );
    }

    let source = render_document(&args.api, &args.resource, &translation)?;
    let path = args.output_dir.join(resource_file_name(&args.api, &args.resource));
    fs::write(&path, source)?;

    if !args.no_fmt {
        format_file(&path, executor)?;
    }

    println!(
        "Generated {} ({} fields, {} skipped)",
        path.display(),
        translation.fields.len(),
        translation.skipped.len()
    );
    Ok(())
}
