use rdf_transform_engine::DEFAULT_CONFIGURATION_ROOT;

/// Holds the configuration for a [`TransformService`](crate::TransformService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    /// The store path under which stored programs are organized, as
    /// `{configuration_root}/{transform-key}/{type-token}/content`.
    pub configuration_root: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            configuration_root: DEFAULT_CONFIGURATION_ROOT.to_owned(),
        }
    }
}
