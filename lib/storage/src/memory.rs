use rdf_transform_common::error::StorageError;
use rdf_transform_common::{NamespaceRegistry, ProgramStore, StoredNode};
use std::collections::{BTreeMap, BTreeSet};

/// An in-memory [`ProgramStore`].
///
/// Programs are provisioned through [`insert_program`](Self::insert_program)
/// before the store is handed to the engine; the engine itself only reads.
/// Intermediate nodes exist implicitly for every path segment above a
/// stored program, so inserting
/// `/system/transform/ldpath/default/ex:Thing/content` makes
/// `/system/transform/ldpath/default` findable as a configuration node.
#[derive(Debug, Clone, Default)]
pub struct MemProgramStore {
    programs: BTreeMap<String, Vec<u8>>,
    nodes: BTreeSet<String>,
    namespaces: NamespaceRegistry,
}

impl MemProgramStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores program bytes at `path` (the full `.../content` path).
    pub fn insert_program(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.programs.insert(path.into(), content.into());
    }

    /// Creates a node at `path` without any content or children.
    ///
    /// Useful to represent a transform key that is configured but has no
    /// programs stored under it.
    pub fn create_node(&mut self, path: impl Into<String>) {
        self.nodes.insert(path.into());
    }

    /// Binds `namespace` to `prefix` in the store's registry.
    pub fn register_namespace(
        &mut self,
        namespace: impl Into<String>,
        prefix: impl Into<String>,
    ) {
        self.namespaces.register(namespace, prefix);
    }

    fn exists(&self, path: &str) -> bool {
        if self.programs.contains_key(path) || self.nodes.contains(path) {
            return true;
        }
        let prefix = format!("{path}/");
        self.programs.keys().any(|p| p.starts_with(&prefix))
            || self.nodes.iter().any(|p| p.starts_with(&prefix))
    }
}

impl ProgramStore for MemProgramStore {
    fn find_node(&self, path: &str) -> Result<Option<StoredNode>, StorageError> {
        Ok(self.exists(path).then(|| StoredNode::new(path)))
    }

    /// The children of a configuration node are the stored programs one
    /// token below it, reported with their full `.../content` paths.
    fn children(&self, node: &StoredNode) -> Result<Vec<StoredNode>, StorageError> {
        let prefix = format!("{}/", node.path());
        let children = self
            .programs
            .keys()
            .filter(|path| {
                let Some(rest) = path.strip_prefix(&prefix) else {
                    return false;
                };
                match rest.strip_suffix("/content") {
                    Some(token) => !token.is_empty() && !token.contains('/'),
                    None => false,
                }
            })
            .map(StoredNode::new)
            .collect();
        Ok(children)
    }

    fn content(&self, node: &StoredNode) -> Result<Vec<u8>, StorageError> {
        self.programs.get(node.path()).cloned().ok_or_else(|| {
            StorageError::other(format!("no content stored at {}", node.path()))
        })
    }

    fn namespaces(&self) -> Result<NamespaceRegistry, StorageError> {
        Ok(self.namespaces.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemProgramStore {
        let mut store = MemProgramStore::new();
        store.insert_program(
            "/system/transform/ldpath/default/ex:Thing/content",
            "title = ex:title ;",
        );
        store
    }

    #[test]
    fn intermediate_nodes_exist_implicitly() {
        let store = store();
        assert!(store
            .find_node("/system/transform/ldpath/default")
            .unwrap()
            .is_some());
        assert!(store.find_node("/system/transform").unwrap().is_some());
        assert!(store
            .find_node("/system/transform/ldpath/other")
            .unwrap()
            .is_none());
    }

    #[test]
    fn children_report_content_paths() {
        let store = store();
        let config = store
            .find_node("/system/transform/ldpath/default")
            .unwrap()
            .unwrap();
        let children = store.children(&config).unwrap();
        assert_eq!(
            children,
            vec![StoredNode::new(
                "/system/transform/ldpath/default/ex:Thing/content"
            )]
        );
    }

    #[test]
    fn children_skip_deeper_descendants() {
        let store = store();
        let root = store.find_node("/system/transform").unwrap().unwrap();
        assert!(store.children(&root).unwrap().is_empty());
    }

    #[test]
    fn explicit_node_can_be_empty() {
        let mut store = MemProgramStore::new();
        store.create_node("/system/transform/ldpath/empty-key");
        let node = store
            .find_node("/system/transform/ldpath/empty-key")
            .unwrap()
            .unwrap();
        assert!(store.children(&node).unwrap().is_empty());
    }

    #[test]
    fn content_reads_stored_bytes() {
        let store = store();
        let node = StoredNode::new("/system/transform/ldpath/default/ex:Thing/content");
        assert_eq!(store.content(&node).unwrap(), b"title = ex:title ;");
    }

    #[test]
    fn content_of_missing_node_is_a_storage_error() {
        let store = store();
        let node = StoredNode::new("/system/transform/ldpath/default/ex:Other/content");
        assert!(store.content(&node).is_err());
    }
}
