use oxrdfio::RdfParseError;

pub use rdf_transform_common::error::StorageError;
pub use rdf_transform_engine::error::{ErrorClass, ProgramError, TransformError};

/// An error raised while reading a resource document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoaderError {
    /// An error raised while parsing the document.
    #[error(transparent)]
    Parsing(#[from] RdfParseError),
}
