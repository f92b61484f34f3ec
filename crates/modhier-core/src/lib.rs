//! Converts an Lmod spider JSON inventory into visible and hidden module hierarchies.
//!
//! The pipeline is a fixed sequence of passes over two [`Hierarchy`] values:
//! - classify records by their `hidden` flag
//! - re-hide allow-listed parent directories
//! - clean up version lists (placeholder removal, dedup, singleton collapse)
//! - order parent directories and module names
//!
//! [`pipeline::run`] wires the passes to stdin and the two output files.

pub mod classify;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod order;
pub mod output;
pub mod pipeline;
pub mod rehide;

pub use config::{RunConfig, HIDDEN_PARENT_DIRS};
pub use error::HierarchyError;
pub use model::{Hierarchy, KeyedMap, ModuleVersions, ParentDirs, Versions};
pub use pipeline::{run, transform, Hierarchies};
