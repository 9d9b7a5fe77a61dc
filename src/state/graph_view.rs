//! One rendered wallet: graph, layout, viewport and selection together.

use crate::constants::{EXPLORER_ADDRESS_URL, EXPLORER_TX_URL};
use crate::domain::Transaction;
use crate::graph::{FlowGraph, GraphLayout, NodeKind, Viewport};

use super::selection::SelectionState;

/// Everything needed to draw and interact with one wallet's fund flow.
///
/// A fresh `GraphView` is built for every search, so no selection or zoom
/// state leaks between wallets.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// The searched address.
    pub address: String,
    pub graph: FlowGraph,
    pub layout: GraphLayout,
    pub selection: SelectionState,
    pub viewport: Viewport,
}

impl GraphView {
    /// Transform `transactions`, flag `address` as target, and lay out.
    #[must_use]
    pub fn build(address: &str, transactions: &[Transaction]) -> Self {
        let mut graph = FlowGraph::from_transactions(transactions);
        if !graph.mark_target(address) {
            tracing::debug!(address, "searched address does not appear in its own graph");
        }
        let layout = GraphLayout::compute(&graph);
        let viewport = Viewport::fitted(layout.fit_bounds());

        Self {
            address: address.to_string(),
            graph,
            layout,
            selection: SelectionState::new(),
            viewport,
        }
    }

    // ========================================================================
    // Taps
    // ========================================================================

    pub fn tap_node(&mut self, id: &str) {
        self.selection.tap_node(id);
    }

    pub fn tap_edge(&mut self, edge_id: &str) -> bool {
        self.selection.tap_edge(&self.graph, edge_id)
    }

    pub fn tap_background(&mut self) {
        self.selection.tap_background();
    }

    // ========================================================================
    // Keyboard Cycling
    // ========================================================================

    /// Select the next (or previous) node in node order.
    pub fn cycle_node(&mut self, forward: bool) {
        let nodes = self.graph.nodes();
        let current = self
            .selection
            .selected_node()
            .and_then(|id| self.graph.node_position(id));
        if let Some(index) = step(current, nodes.len(), forward) {
            let id = nodes[index].id.clone();
            self.selection.tap_node(&id);
        }
    }

    /// Select the next (or previous) record, highlighting its edge.
    pub fn cycle_record(&mut self, forward: bool) {
        let current = self.selection.highlighted_record();
        if let Some(index) = step(current, self.graph.records().len(), forward) {
            self.selection.select_record(&self.graph, index);
        }
    }

    // ========================================================================
    // Selected Item
    // ========================================================================

    /// Id of the selected node or edge, falling back to the searched address.
    #[must_use]
    pub fn selected_id(&self) -> &str {
        self.selection.selection().id().unwrap_or(&self.address)
    }

    /// What [`Self::selected_id`] names, for user-facing messages.
    #[must_use]
    pub fn selected_description(&self) -> &'static str {
        if self.selection.selected_edge().is_some() {
            return "Edge id";
        }
        self.graph
            .node(self.selected_id())
            .map_or(NodeKind::Address, |node| node.kind)
            .label()
    }

    /// Block explorer URL for the current selection.
    ///
    /// Nodes link to their address or transaction page; edges link to the
    /// transaction they belong to. With nothing selected the searched address
    /// is used.
    #[must_use]
    pub fn explorer_url(&self) -> Option<String> {
        if let Some(edge_id) = self.selection.selected_edge() {
            let edge = self.graph.edge(edge_id)?;
            let txn = [&edge.source, &edge.target].into_iter().find(|id| {
                self.graph
                    .node(id)
                    .is_some_and(|node| node.kind == NodeKind::Transaction)
            })?;
            return Some(format!("{EXPLORER_TX_URL}{txn}"));
        }

        let id = self.selection.selected_node().unwrap_or(&self.address);
        match self.graph.node(id).map(|node| node.kind) {
            Some(NodeKind::Transaction) => Some(format!("{EXPLORER_TX_URL}{id}")),
            _ => Some(format!("{EXPLORER_ADDRESS_URL}{id}")),
        }
    }
}

/// Wrapping step through `0..len`, starting at either end when nothing is
/// selected yet.
fn step(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::Selection;
    use crate::test_utils::TransactionMother;
    use rstest::rstest;

    fn view() -> GraphView {
        GraphView::build("W", &TransactionMother::history())
    }

    #[rstest]
    #[case(None, 3, true, Some(0))]
    #[case(None, 3, false, Some(2))]
    #[case(Some(2), 3, true, Some(0))]
    #[case(Some(0), 3, false, Some(2))]
    #[case(Some(1), 3, true, Some(2))]
    #[case(None, 0, true, None)]
    fn test_step(
        #[case] current: Option<usize>,
        #[case] len: usize,
        #[case] forward: bool,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(step(current, len, forward), expected);
    }

    #[test]
    fn test_build_marks_target() {
        let view = view();
        assert_eq!(view.graph.target().unwrap().id, "W");
        assert_eq!(view.viewport.zoom(), 1.0);
        assert_eq!(view.selection.selection(), &Selection::Idle);
    }

    #[test]
    fn test_cycle_node_wraps() {
        let mut view = view();
        view.cycle_node(false);
        assert_eq!(view.selection.selected_node(), Some("C"));
        view.cycle_node(true);
        assert_eq!(view.selection.selected_node(), Some("A"));
        view.cycle_node(true);
        assert_eq!(view.selection.selected_node(), Some("T1"));
    }

    #[test]
    fn test_cycle_record_syncs_summary() {
        let mut view = view();
        view.cycle_record(true);
        view.cycle_record(true);
        assert_eq!(view.selection.highlighted_record(), Some(1));
        assert_eq!(view.selection.selected_edge(), Some("edge-T1-W"));
        assert_eq!(view.selection.summary().unwrap().usd, "30000.00");
    }

    #[test]
    fn test_explorer_url_for_selection() {
        let mut view = view();
        assert_eq!(
            view.explorer_url().unwrap(),
            format!("{EXPLORER_ADDRESS_URL}W")
        );

        view.tap_node("T2");
        assert_eq!(view.explorer_url().unwrap(), format!("{EXPLORER_TX_URL}T2"));

        view.tap_edge("edge-A-T1");
        assert_eq!(view.explorer_url().unwrap(), format!("{EXPLORER_TX_URL}T1"));
        assert_eq!(view.selected_id(), "edge-A-T1");
    }

    #[test]
    fn test_selected_id_falls_back_to_address() {
        let view = view();
        assert_eq!(view.selected_id(), "W");
        assert_eq!(view.selected_description(), "Address");
    }

    #[test]
    fn test_selected_description() {
        let mut view = view();
        view.tap_node("T1");
        assert_eq!(view.selected_description(), "Transaction hash");
        view.tap_edge("edge-T1-W");
        assert_eq!(view.selected_description(), "Edge id");
    }
}
