//! Ready-to-use [`NamedNodeRef`](oxrdf::NamedNodeRef)s for the vocabularies
//! this crate works with.

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// [Dublin Core Metadata Element Set](http://purl.org/dc/elements/1.1/) vocabulary.
pub mod dc {
    use oxrdf::NamedNodeRef;

    /// A name given to the resource.
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/title");
    /// An entity primarily responsible for making the resource.
    pub const CREATOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/creator");
    /// A point or period of time associated with an event in the lifecycle of the resource.
    pub const DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/date");
    /// An unambiguous reference to the resource within a given context.
    pub const IDENTIFIER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/identifier");
}
