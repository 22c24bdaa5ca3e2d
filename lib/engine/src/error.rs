use rdf_transform_common::error::StorageError;
use rdf_transform_ldpath::{LdPathEvaluationError, LdPathParseError};
use std::str::Utf8Error;

/// An error raised while resolving or executing a transformation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// No stored program matches: either the transform key has no
    /// configuration node, or none of the resource's declared types has a
    /// program under that key. Recoverable by the caller (different key,
    /// or a direct-run request).
    #[error("no transformation found for {resource} and transformation key '{key}'")]
    NotFound { resource: String, key: String },
    /// The inbound program's content type has no registered transformation
    /// variant.
    #[error("unsupported transform content type '{0}'")]
    UnsupportedContentType(String),
    /// The stored or supplied program itself is bad. Distinct from
    /// resolution failures so a misconfigured program can be told apart
    /// from a missing one.
    #[error(transparent)]
    Program(#[from] ProgramError),
    /// An opaque fault of the underlying program store.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A parse or evaluation failure of a transformation program.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProgramError {
    /// The path-query program does not parse.
    #[error(transparent)]
    LdPathParse(#[from] LdPathParseError),
    /// The path-query program failed against the resource's data.
    #[error(transparent)]
    LdPathEvaluation(#[from] LdPathEvaluationError),
    /// The SPARQL program does not parse.
    #[error("invalid SPARQL program: {0}")]
    SparqlParse(#[from] spargebra::SparqlSyntaxError),
    /// The SPARQL program parses but uses features this engine does not
    /// evaluate.
    #[error("unsupported SPARQL feature: {0}")]
    SparqlUnsupported(String),
    /// Program bytes are not valid UTF-8.
    #[error("program source is not valid UTF-8")]
    Encoding(#[from] Utf8Error),
}

/// How a boundary layer should classify a [`TransformError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request named something the deployment does not provide:
    /// an unknown key/type combination or an unregistered content type.
    BadInput,
    /// The program itself failed to parse or evaluate.
    Execution,
    /// A fault below this engine, e.g. the program store.
    Internal,
}

impl TransformError {
    /// The boundary classification of this error.
    ///
    /// `NotFound` is classified as bad input, following the original
    /// service's final revision; boundary layers preferring an
    /// absence-class response can match the variant directly.
    pub fn class(&self) -> ErrorClass {
        match self {
            TransformError::NotFound { .. } | TransformError::UnsupportedContentType(_) => {
                ErrorClass::BadInput
            }
            TransformError::Program(_) => ErrorClass::Execution,
            TransformError::Storage(_) => ErrorClass::Internal,
        }
    }
}
