mod ldpath;
mod sparql;

pub use ldpath::LdPathTransformation;
pub use sparql::SparqlTransformation;

use crate::error::TransformError;
use rdf_transform_model::{Resource, ResultSequence};

/// Content type of path-query program bodies.
pub const CONTENT_TYPE_LDPATH: &str = "application/rdf+ldpath";
/// Content type of SPARQL program bodies.
pub const CONTENT_TYPE_SPARQL_QUERY: &str = "application/sparql-query";

/// A program bound to its source, ready to run against resources.
///
/// A transformation is selected once, at construction time, and is
/// immutable afterwards; `apply` can be called any number of times.
pub trait Transformation {
    /// Executes the program against the resource's graph, with the
    /// resource IRI as the context node.
    fn apply(&self, resource: &Resource) -> Result<ResultSequence, TransformError>;
}

/// Maps inbound program content types to transformation variants.
///
/// Adding a variant means adding an arm here; callers stay untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformationFactory;

impl TransformationFactory {
    pub fn new() -> Self {
        Self
    }

    /// Selects the transformation variant for `content_type`.
    ///
    /// Media-type parameters (`; charset=...`) are ignored for dispatch.
    /// An unrecognized content type is an error, never a silent default.
    pub fn select(
        &self,
        content_type: &str,
        source: impl Into<Vec<u8>>,
    ) -> Result<Box<dyn Transformation>, TransformError> {
        let token = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();
        if token.eq_ignore_ascii_case(CONTENT_TYPE_LDPATH) {
            Ok(Box::new(LdPathTransformation::new(source)))
        } else if token.eq_ignore_ascii_case(CONTENT_TYPE_SPARQL_QUERY) {
            Ok(Box::new(SparqlTransformation::new(source)))
        } else {
            Err(TransformError::UnsupportedContentType(
                content_type.to_owned(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Graph, LiteralRef, NamedNodeRef, TripleRef};
    use rdf_transform_model::vocab::dc;

    fn resource() -> Resource {
        let iri = NamedNodeRef::new_unchecked("http://example.org/object/1");
        let mut graph = Graph::new();
        graph.insert(TripleRef::new(
            iri,
            dc::TITLE,
            LiteralRef::new_simple_literal("some-title"),
        ));
        Resource::new(iri.into_owned(), Vec::new(), graph)
    }

    #[test]
    fn dispatches_on_the_content_type_token() {
        let factory = TransformationFactory::new();
        let transform = factory
            .select(CONTENT_TYPE_LDPATH, "title = dc:title ;".as_bytes())
            .unwrap();
        let results = transform.apply(&resource()).unwrap();
        assert!(results.records()[0].get("title").unwrap().contains_str("some-title"));
    }

    #[test]
    fn ignores_media_type_parameters() {
        let factory = TransformationFactory::new();
        assert!(factory
            .select(
                "application/sparql-query; charset=UTF-8",
                "SELECT ?s WHERE { ?s ?p ?o }".as_bytes()
            )
            .is_ok());
    }

    #[test]
    fn unknown_content_type_is_rejected() {
        let factory = TransformationFactory::new();
        let error = factory
            .select("text/plain", "title = dc:title ;".as_bytes())
            .err()
            .unwrap();
        assert!(matches!(
            error,
            TransformError::UnsupportedContentType(ref token) if token == "text/plain"
        ));
    }
}
