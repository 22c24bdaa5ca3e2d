//! Type-directed transformation programs over RDF resources.
//!
//! Stored or inline path-query programs are located by resource type,
//! executed against the resource's in-memory graph, and projected into
//! ordered, multi-valued field maps.
//!
//! Usage example:
//! ```
//! use rdf_transform::io::read_resource;
//! use rdf_transform::model::NamedNodeRef;
//! use rdf_transform::storage::MemProgramStore;
//! use rdf_transform::{TransformService, CONTENT_TYPE_LDPATH};
//!
//! let turtle = br#"<http://example.org/object/1>
//!     <http://purl.org/dc/elements/1.1/title> "some-title" ."#;
//! let subject = NamedNodeRef::new("http://example.org/object/1")?;
//! let resource = read_resource(
//!     turtle.as_slice(),
//!     rdf_transform::io::RdfFormat::Turtle,
//!     subject,
//! )?;
//!
//! let service = TransformService::new(MemProgramStore::new());
//! let results = service.apply_program(
//!     CONTENT_TYPE_LDPATH,
//!     "title = dc:title :: xsd:string ;".as_bytes(),
//!     &resource,
//! )?;
//! assert!(results.records()[0].get("title").unwrap().contains_str("some-title"));
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod config;
pub mod error;
pub mod io;
mod service;

pub use config::TransformConfig;
pub use rdf_transform_engine::{CONTENT_TYPE_LDPATH, CONTENT_TYPE_SPARQL_QUERY};
pub use service::TransformService;

pub mod model {
    pub use rdf_transform_model::*;
}

pub mod storage {
    pub use rdf_transform_common::{NamespaceRegistry, ProgramStore, StoredNode};
    pub use rdf_transform_storage::*;
}
