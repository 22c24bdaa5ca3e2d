use crate::error::{ProgramError, TransformError};
use crate::transformation::Transformation;
use rdf_transform_ldpath::LdPathProgram;
use rdf_transform_model::{Resource, ResultSequence};
use tracing::debug;

/// A path-query program over a resource's graph.
///
/// Owns its program source; two transformations are equal iff their source
/// bytes are equal. The source is parsed on every `apply`, so a bad stored
/// program surfaces as a program error of that request, not at resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LdPathTransformation {
    source: Vec<u8>,
}

impl LdPathTransformation {
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }
}

impl Transformation for LdPathTransformation {
    fn apply(&self, resource: &Resource) -> Result<ResultSequence, TransformError> {
        let source = std::str::from_utf8(&self.source).map_err(ProgramError::from)?;
        let program = LdPathProgram::parse(source).map_err(ProgramError::from)?;
        debug!("applying path-query program to {}", resource.iri());
        let record = program
            .evaluate(resource.graph(), resource.iri())
            .map_err(ProgramError::from)?;
        Ok(ResultSequence::single(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Graph, LiteralRef, NamedNodeRef, TripleRef};
    use rdf_transform_model::vocab::dc;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

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

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn applies_a_program_to_the_resource_graph() {
        let transform = LdPathTransformation::new(
            "title = <http://purl.org/dc/elements/1.1/title> :: xsd:string ;".as_bytes(),
        );
        let results = transform.apply(&resource()).unwrap();

        assert_eq!(results.len(), 1);
        let record = &results.records()[0];
        assert_eq!(record.len(), 1);
        let values = record.get("title").unwrap();
        assert_eq!(values.len(), 1);
        assert!(values.contains_str("some-title"));
    }

    #[test]
    fn byte_identical_sources_are_equal_and_hash_equal() {
        let a = LdPathTransformation::new("title = dc:title ;".as_bytes());
        let b = LdPathTransformation::new("title = dc:title ;".as_bytes());
        let c = LdPathTransformation::new("label = rdfs:label ;".as_bytes());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn malformed_program_is_a_program_error() {
        let transform = LdPathTransformation::new("title = ".as_bytes());
        let error = transform.apply(&resource()).unwrap_err();
        assert!(matches!(error, TransformError::Program(_)));
    }
}
