#![allow(clippy::print_stdout, reason = "the CLI writes its result to stdout")]

use crate::cli::{Args, Command};
use anyhow::{bail, Context};
use clap::Parser;
use rdf_transform::io::{read_resource, RdfFormat};
use rdf_transform::model::NamedNode;
use rdf_transform::storage::MemProgramStore;
use rdf_transform::TransformService;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::stdin;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    match args.command {
        Command::Apply {
            resource,
            format,
            subject,
            program,
            content_type,
        } => {
            let format = if let Some(format) = format {
                rdf_format_from_name(&format)?
            } else if let Some(file) = &resource {
                rdf_format_from_path(file)?
            } else {
                bail!("The --format option must be set when reading from stdin")
            };
            let subject = NamedNode::new(&subject)
                .with_context(|| format!("The subject IRI {subject} is invalid"))?;

            let resource = match resource {
                Some(file) => read_resource(
                    File::open(&file)
                        .with_context(|| format!("Failed to open {}", file.display()))?,
                    format,
                    subject.as_ref(),
                )?,
                None => read_resource(stdin().lock(), format, subject.as_ref())?,
            };
            let source = fs::read(&program)
                .with_context(|| format!("Failed to read {}", program.display()))?;

            let service = TransformService::new(MemProgramStore::new());
            let results = service.apply_program(&content_type, source, &resource)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        RdfFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(format) = RdfFormat::from_extension(name) {
        return Ok(format);
    }
    if let Some(format) = RdfFormat::from_media_type(name) {
        return Ok(format);
    }
    bail!("The file format '{name}' is unknown")
}
