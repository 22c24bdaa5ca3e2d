pub mod error;
mod namespaces;
mod resolver;
mod transformation;

pub use namespaces::resolve_type_token;
pub use resolver::{resolve_program, DEFAULT_CONFIGURATION_ROOT};
pub use transformation::{
    LdPathTransformation, SparqlTransformation, Transformation, TransformationFactory,
    CONTENT_TYPE_LDPATH, CONTENT_TYPE_SPARQL_QUERY,
};
