/// A snapshot of the store's namespace-to-prefix bindings.
///
/// Bindings keep their registration order. The engine's token resolution
/// scans them in that order, except that an empty-namespace binding (which
/// matches every URI) is always tried after all non-empty ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRegistry {
    bindings: Vec<(String, String)>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `namespace` to `prefix`.
    ///
    /// A namespace has at most one prefix: re-registering replaces the
    /// prefix but keeps the binding's original position.
    pub fn register(&mut self, namespace: impl Into<String>, prefix: impl Into<String>) {
        let namespace = namespace.into();
        let prefix = prefix.into();
        match self.bindings.iter_mut().find(|(ns, _)| *ns == namespace) {
            Some((_, existing)) => *existing = prefix,
            None => self.bindings.push((namespace, prefix)),
        }
    }

    /// The bindings as `(namespace, prefix)` pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(ns, prefix)| (ns.as_str(), prefix.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(String, String)> for NamespaceRegistry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (namespace, prefix) in iter {
            registry.register(namespace, prefix);
        }
        registry
    }
}
