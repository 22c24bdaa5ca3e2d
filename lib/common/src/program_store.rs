use crate::error::StorageError;
use crate::namespaces::NamespaceRegistry;

/// A handle to a node in the program store, identified by its path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoredNode {
    path: String,
}

impl StoredNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Read access to the store holding transformation programs.
///
/// This is the narrow interface the engine consumes. Stored programs are
/// provisioned externally and only ever read here; the store's own
/// consistency guarantees govern what a concurrent writer makes visible.
pub trait ProgramStore: Send + Sync {
    /// Looks up the node at `path`, if any.
    fn find_node(&self, path: &str) -> Result<Option<StoredNode>, StorageError>;

    /// Enumerates the children of `node`.
    ///
    /// The order of the returned nodes is store-specific. Callers must not
    /// assume one beyond "every child appears once".
    fn children(&self, node: &StoredNode) -> Result<Vec<StoredNode>, StorageError>;

    /// Reads the byte content stored at `node`.
    fn content(&self, node: &StoredNode) -> Result<Vec<u8>, StorageError>;

    /// The store's current namespace-to-prefix bindings.
    fn namespaces(&self) -> Result<NamespaceRegistry, StorageError>;
}
