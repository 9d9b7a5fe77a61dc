//! Widget components for the lazyflow TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: Label truncation shared by the widgets
//! - [`graph`]: Fund-flow graph drawing and click hit-testing
//! - [`list`]: Transaction record list with a centered highlight
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::widgets::{FlowGraphWidget, TxnListWidget};
//!
//! frame.render_widget(FlowGraphWidget::new(&view), inner);
//! frame.render_widget(TxnListWidget::new(view.graph.records()), inner);
//! ```

pub mod graph;
pub mod helpers;
pub mod list;

pub use graph::{FlowGraphWidget, HitTarget, hit_test};
pub use list::{TxnListWidget, centered_offset};
