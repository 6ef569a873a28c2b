// error module
mod error;
// graph module
#[allow(clippy::module_inception)]
mod graph;

pub use error::GraphError;
pub use graph::{Graph, NodeId};
