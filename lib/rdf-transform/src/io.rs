//! Reading resources from serialized RDF documents.

use crate::error::LoaderError;
use oxrdfio::RdfParser;
use rdf_transform_model::vocab::rdf;
use rdf_transform_model::{Graph, NamedNode, NamedNodeRef, Resource, Subject, Term, Triple};
use std::io::Read;

pub use oxrdfio::{RdfFormat, RdfParseError};

/// Reads a [`Resource`] out of a serialized RDF document.
///
/// The whole document becomes the resource's graph (named graphs collapse
/// into it). The subject's `rdf:type` objects become the type list, kept
/// in document order, so the document's type ordering is the resolution
/// priority.
pub fn read_resource(
    reader: impl Read,
    format: RdfFormat,
    subject: NamedNodeRef<'_>,
) -> Result<Resource, LoaderError> {
    let mut graph = Graph::new();
    let mut types: Vec<NamedNode> = Vec::new();
    let subject_node = Subject::from(subject.into_owned());
    for quad in RdfParser::from_format(format).for_reader(reader) {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        if triple.subject == subject_node && triple.predicate == rdf::TYPE {
            if let Term::NamedNode(rdf_type) = &triple.object {
                if !types.contains(rdf_type) {
                    types.push(rdf_type.clone());
                }
            }
        }
        graph.insert(triple.as_ref());
    }
    Ok(Resource::new(subject.into_owned(), types, graph))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"
@prefix dc: <http://purl.org/dc/elements/1.1/> .
@prefix ex: <http://example.org/model#> .

<http://example.org/object/1> a ex:Work , ex:Item ;
    dc:title "some-title" ;
    dc:creator <http://example.org/author/a> .

<http://example.org/author/a> a ex:Person .
"#;

    #[test]
    fn collects_graph_and_types_in_document_order() {
        let subject = NamedNodeRef::new_unchecked("http://example.org/object/1");
        let resource =
            read_resource(DATA.as_bytes(), RdfFormat::Turtle, subject).unwrap();

        assert_eq!(
            resource
                .types()
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>(),
            vec![
                "http://example.org/model#Work",
                "http://example.org/model#Item",
            ]
        );
        assert_eq!(resource.graph().len(), 5);
    }

    #[test]
    fn malformed_document_is_a_loader_error() {
        let subject = NamedNodeRef::new_unchecked("http://example.org/object/1");
        let error =
            read_resource(b"<#broken> .".as_slice(), RdfFormat::Turtle, subject)
                .unwrap_err();
        assert!(matches!(error, LoaderError::Parsing(_)));
    }
}
