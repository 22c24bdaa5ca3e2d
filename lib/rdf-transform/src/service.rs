use crate::config::TransformConfig;
use rdf_transform_common::ProgramStore;
use rdf_transform_engine::error::TransformError;
use rdf_transform_engine::{resolve_program, Transformation, TransformationFactory};
use rdf_transform_model::{Resource, ResultSequence};

/// The entry point for running transformations against resources.
///
/// A service owns its (read-only) program store and configuration. Every
/// request is one of two shapes: a stored-program key to resolve and run,
/// or an inline program body with a declared content type to run directly.
pub struct TransformService<S> {
    store: S,
    config: TransformConfig,
    factory: TransformationFactory,
}

impl<S: ProgramStore> TransformService<S> {
    /// Creates a service with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, TransformConfig::default())
    }

    pub fn with_config(store: S, config: TransformConfig) -> Self {
        Self {
            store,
            config,
            factory: TransformationFactory::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves the stored program for `key` and the resource's types, then
    /// runs it against the resource.
    pub fn resolve_and_apply(
        &self,
        resource: &Resource,
        key: &str,
    ) -> Result<ResultSequence, TransformError> {
        let transformation = resolve_program(
            &self.store,
            &self.config.configuration_root,
            resource,
            key,
        )?;
        transformation.apply(resource)
    }

    /// Runs an inline program of the given content type against the
    /// resource, without touching the store.
    pub fn apply_program(
        &self,
        content_type: &str,
        program: impl Into<Vec<u8>>,
        resource: &Resource,
    ) -> Result<ResultSequence, TransformError> {
        self.factory
            .select(content_type, program)?
            .apply(resource)
    }
}
