pub mod error;
mod namespaces;
mod program_store;

pub use namespaces::NamespaceRegistry;
pub use program_store::{ProgramStore, StoredNode};
