use oxrdf::{IriParseError, NamedNode};

/// An error raised while parsing a path-query program.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LdPathParseError {
    /// The program text does not match the grammar.
    #[error("syntax error in path-query program: {0}")]
    Syntax(String),
    /// A qualified name used a prefix that is neither built in nor declared.
    #[error("unknown namespace prefix '{0}'")]
    UnknownPrefix(String),
    /// A resolved IRI is not a valid IRI.
    #[error("invalid IRI '{iri}': {error}")]
    InvalidIri {
        iri: String,
        #[source]
        error: IriParseError,
    },
    /// The field's target datatype is not one the evaluator can coerce to.
    #[error("unsupported datatype {0}")]
    UnsupportedDatatype(NamedNode),
}

/// An error raised while evaluating a parsed program against a graph.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LdPathEvaluationError {
    /// A selected value does not conform to the field's declared datatype.
    #[error("cannot coerce '{value}' to {datatype}")]
    Coercion { value: String, datatype: String },
}
