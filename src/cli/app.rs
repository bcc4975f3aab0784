//! Main CLI application structure

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use super::output::{Output, OutputFormat};
use crate::convert::{ConvertError, Converter};
use crate::storage::{self, ConvertConfig};

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(author, version, about = "Convert project proposals into structured task graphs")]
pub struct Cli {
    /// Input proposal document
    pub input: PathBuf,

    /// Output path (defaults to the input path with a .yaml extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Converter configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Blueprint CLI starting");

    let config = match &cli.config {
        Some(path) => ConvertConfig::from_file(path)?,
        None => ConvertConfig::load()?,
    };

    let text = match storage::read_document(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            output.errors(&[format!("Error reading file: {:#}", e)]);
            return Ok(ExitCode::FAILURE);
        }
    };

    output.verbose_ctx(
        "convert",
        &format!("Read {} bytes from {}", text.len(), cli.input.display()),
    );

    let converter = Converter::new(config);
    let conversion = match converter.convert(&text) {
        Ok(conversion) => conversion,
        Err(ConvertError::Validation(errors)) => {
            output.errors(&errors);
            return Ok(ExitCode::FAILURE);
        }
    };

    output.verbose_ctx(
        "convert",
        &format!("Extracted {} task(s)", conversion.graph.tasks.len()),
    );

    if conversion.orphaned_sub_features > 0 {
        output.verbose_ctx(
            "convert",
            &format!(
                "Dropped {} sub-feature line(s) with no parent feature",
                conversion.orphaned_sub_features
            ),
        );
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| storage::default_output_path(&cli.input));

    if let Err(e) = storage::write_graph(&output_path, &conversion.graph) {
        output.errors(&[format!("Error writing YAML file: {:#}", e)]);
        return Ok(ExitCode::FAILURE);
    }

    output.success(&format!(
        "Successfully converted to {}",
        output_path.display()
    ));

    Ok(ExitCode::SUCCESS)
}
