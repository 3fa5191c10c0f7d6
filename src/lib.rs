//! Ranks the K loopless shortest paths from any source to a fixed target,
//! via the Martins-Pascoal-Santos deviation-path algorithm, falling back to
//! Yen's algorithm once a configurable cycle budget is exhausted.
//!
//! Build an [`Engine`] once per target with [`Engine::from_graph`] (or
//! [`Engine::new`] if you already have the reverse graph handy), then call
//! [`Engine::shortest_simple_paths`] per source. The returned iterator is
//! lazy: paths are generated on demand, in non-decreasing weight order.

mod arcs;
mod buffer;
mod config;
mod deviation;
mod dijkstra;
mod engine;
mod error;
mod graph;
mod helpers;
mod node;
mod oracle;
mod yen;

pub use config::{CycleBudget, EngineConfig};
pub use engine::{Engine, PathIter};
pub use error::Error;
pub use graph::{Graph, GraphBuilder};
pub use node::NodeIdx;
