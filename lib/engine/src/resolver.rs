use crate::error::TransformError;
use crate::namespaces::resolve_type_token;
use crate::transformation::LdPathTransformation;
use rdf_transform_common::ProgramStore;
use rdf_transform_model::Resource;
use tracing::debug;

/// Where stored programs live unless the host configures another root.
pub const DEFAULT_CONFIGURATION_ROOT: &str = "/system/transform/ldpath";

/// Locates the stored program for `resource` under the given transform key.
///
/// Candidate paths are built per declared type, in the resource's priority
/// order, as `{root}/{key}/{type-token}/content`; the first candidate that
/// exists among the configuration node's children wins. The enumeration
/// order of the children themselves carries no meaning.
///
/// Absence of a match is always [`TransformError::NotFound`], never a
/// fallback to some default program.
pub fn resolve_program(
    store: &dyn ProgramStore,
    configuration_root: &str,
    resource: &Resource,
    key: &str,
) -> Result<LdPathTransformation, TransformError> {
    let not_found = || TransformError::NotFound {
        resource: resource.iri().as_str().to_owned(),
        key: key.to_owned(),
    };

    let config_path = format!("{configuration_root}/{key}");
    let config_node = store.find_node(&config_path)?.ok_or_else(not_found)?;
    debug!("found transform configuration node: {}", config_node.path());

    let registry = store.namespaces()?;
    let candidates: Vec<String> = resource
        .types()
        .iter()
        .map(|rdf_type| {
            let token = resolve_type_token(rdf_type.as_ref(), &registry);
            format!("{}/{token}/content", config_node.path())
        })
        .collect();
    debug!("candidate program paths: {candidates:?}");

    let children = store.children(&config_node)?;
    let program_node = candidates
        .iter()
        .find_map(|candidate| children.iter().find(|child| child.path() == candidate))
        .ok_or_else(not_found)?;
    debug!("resolved stored program: {}", program_node.path());

    Ok(LdPathTransformation::new(store.content(program_node)?))
}
