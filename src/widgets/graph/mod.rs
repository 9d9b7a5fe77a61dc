//! Fund-flow graph widget.
//!
//! Edges are drawn on a braille [`Canvas`](ratatui::widgets::canvas::Canvas);
//! node labels and arrow heads are written on top, cell-aligned through the
//! same [`Projection`] that mouse hit-testing uses.
//!
//! # Module Structure
//!
//! - [`projection`]: Layout-to-cell mapping and click hit-testing
//! - [`flow_graph`]: The [`FlowGraphWidget`] itself
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::widgets::graph::{FlowGraphWidget, HitTarget, hit_test};
//!
//! frame.render_widget(FlowGraphWidget::new(&view), inner);
//!
//! match hit_test(&view, inner, column - inner.x, row - inner.y) {
//!     HitTarget::Node(id) => view.tap_node(&id),
//!     HitTarget::Edge(id) => { view.tap_edge(&id); }
//!     HitTarget::Background => view.tap_background(),
//! }
//! ```

pub mod flow_graph;
pub mod projection;

#[cfg(test)]
mod tests;

pub use flow_graph::FlowGraphWidget;
pub use projection::{HitTarget, hit_test};
