mod resource;
mod results;
pub mod vocab;

pub use resource::*;
pub use results::*;

// Re-export some oxrdf types.
pub use oxiri::Iri;
pub use oxrdf::{
    BlankNode, BlankNodeRef, Graph, IriParseError, Literal, LiteralRef, NamedNode,
    NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Subject, SubjectRef, Term,
    TermRef, Triple, TripleRef,
};
pub use oxsdatatypes::{DateTime, Decimal, TimezoneOffset};
