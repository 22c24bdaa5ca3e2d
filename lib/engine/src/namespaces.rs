use oxrdf::NamedNodeRef;
use rdf_transform_common::NamespaceRegistry;

/// Rewrites a type URI into its namespace-prefixed short form.
///
/// Non-empty namespaces are tried first, in registration order; the first
/// one that is a string prefix of the URI wins and the URI becomes
/// `{prefix}:{suffix}`. An empty namespace binding matches every URI, so it
/// is only consulted after all non-empty bindings have failed, wherever it
/// sits in the registry. A URI no binding matches is returned unchanged.
pub fn resolve_type_token(type_iri: NamedNodeRef<'_>, registry: &NamespaceRegistry) -> String {
    let iri = type_iri.as_str();
    for (namespace, prefix) in registry.iter().filter(|(ns, _)| !ns.is_empty()) {
        if let Some(suffix) = iri.strip_prefix(namespace) {
            return format!("{prefix}:{suffix}");
        }
    }
    if let Some((_, prefix)) = registry.iter().find(|(ns, _)| ns.is_empty()) {
        return format!("{prefix}:{iri}");
    }
    iri.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNodeRef;

    const RESOURCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/ns#Resource");

    #[test]
    fn registered_namespace_is_shortened() {
        let mut registry = NamespaceRegistry::new();
        registry.register("http://example.org/ns#", "ex");
        assert_eq!(resolve_type_token(RESOURCE, &registry), "ex:Resource");
    }

    #[test]
    fn first_registered_match_wins() {
        let mut registry = NamespaceRegistry::new();
        registry.register("http://example.org/", "root");
        registry.register("http://example.org/ns#", "ex");
        assert_eq!(resolve_type_token(RESOURCE, &registry), "root:ns#Resource");
    }

    #[test]
    fn unmatched_uri_is_returned_unchanged() {
        let mut registry = NamespaceRegistry::new();
        registry.register("http://other.example/", "other");
        assert_eq!(
            resolve_type_token(RESOURCE, &registry),
            "http://example.org/ns#Resource"
        );
    }

    #[test]
    fn empty_namespace_matches_everything_as_last_resort() {
        let mut registry = NamespaceRegistry::new();
        registry.register("", "any");
        assert_eq!(
            resolve_type_token(RESOURCE, &registry),
            "any:http://example.org/ns#Resource"
        );
    }

    #[test]
    fn nonempty_namespace_beats_empty_one_regardless_of_order() {
        let mut registry = NamespaceRegistry::new();
        registry.register("", "any");
        registry.register("http://example.org/ns#", "ex");
        assert_eq!(resolve_type_token(RESOURCE, &registry), "ex:Resource");
    }
}
