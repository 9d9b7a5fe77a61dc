//! Fund-flow graph construction and layout.
//!
//! This module turns raw wallet transactions into a directed graph of
//! addresses and transactions and places it on screen.
//!
//! # Module Structure
//!
//! - [`types`]: Node, edge and record types, edge id scheme, node roles
//! - [`flow_graph`]: Transaction-to-graph transformation
//! - [`layout`]: Connectivity classification and column placement
//! - [`viewport`]: Zoom and pan over the placed graph
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::graph::{FlowGraph, GraphLayout, Viewport};
//!
//! let mut graph = FlowGraph::from_transactions(&transactions);
//! graph.mark_target(&address);
//! let layout = GraphLayout::compute(&graph);
//! let viewport = Viewport::fitted(layout.fit_bounds());
//! ```

pub mod flow_graph;
pub mod layout;
pub mod types;
pub mod viewport;


pub use flow_graph::FlowGraph;
pub use layout::{Bounds, GraphLayout};
pub use types::{FlowEdge, GraphNode, HumanReadableTransaction, NodeKind, format_btc, format_usd};
pub use viewport::{PanDirection, Viewport};
