use oxrdf::{Graph, NamedNode, NamedNodeRef};

/// A described resource: the subject of a transformation.
///
/// A resource bundles the subject IRI, the subject's declared RDF types and
/// the graph of triples describing the subject (and any related nodes a
/// program may traverse into).
///
/// The `types` list is an explicit priority order. Program resolution walks
/// it front to back and picks the stored program of the first type that has
/// one, so callers control transform selection by ordering this list when
/// they construct the resource.
#[derive(Debug, Clone)]
pub struct Resource {
    iri: NamedNode,
    types: Vec<NamedNode>,
    graph: Graph,
}

impl Resource {
    /// Creates a resource from its subject IRI, declared types and graph.
    ///
    /// `types` is kept in the given order; see the type-level documentation
    /// for why that order matters.
    pub fn new(iri: NamedNode, types: Vec<NamedNode>, graph: Graph) -> Self {
        Self { iri, types, graph }
    }

    /// The subject IRI. Programs are evaluated with this node as context.
    pub fn iri(&self) -> NamedNodeRef<'_> {
        self.iri.as_ref()
    }

    /// The declared RDF types, in priority order.
    pub fn types(&self) -> &[NamedNode] {
        &self.types
    }

    /// The triples describing this resource.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}
