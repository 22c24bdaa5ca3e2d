use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "rdf-transform")]
/// Run transformation programs against RDF resources
pub struct Args {
    /// Log resolution and evaluation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a program to a resource and print the result as JSON
    Apply {
        /// File holding the resource's RDF document
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        resource: Option<PathBuf>,
        /// The format of the resource document
        ///
        /// It can be an extension like "ttl" or a MIME type like "text/turtle".
        ///
        /// By default the format is guessed from the resource file extension.
        #[arg(long, required_unless_present = "resource")]
        format: Option<String>,
        /// IRI of the subject to transform
        #[arg(short, long, value_hint = ValueHint::Url)]
        subject: String,
        /// File holding the program source
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        program: PathBuf,
        /// Content type of the program
        ///
        /// By default "application/rdf+ldpath"; SPARQL programs need
        /// "application/sparql-query".
        #[arg(long, default_value = rdf_transform::CONTENT_TYPE_LDPATH)]
        content_type: String,
    },
}
