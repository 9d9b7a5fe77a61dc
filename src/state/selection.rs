//! Selection and highlight coordination between the graph and the list.
//!
//! A single [`SelectionState`] tracks what is selected in the graph, which
//! list entry is highlighted, and what the summary panel shows. Tapping an
//! edge drives all three; tapping a node or the background only changes the
//! graph selection.

use crate::graph::{FlowGraph, HumanReadableTransaction};

// ============================================================================
// Selection
// ============================================================================

/// What is currently selected in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A node is selected (highlight only).
    NodeSelected(String),
    /// An edge is selected.
    EdgeSelected(String),
}

impl Selection {
    /// Id of the selected node or edge.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::NodeSelected(id) | Self::EdgeSelected(id) => Some(id),
        }
    }
}

// ============================================================================
// Edge Summary
// ============================================================================

/// Summary panel content for a selected edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSummary {
    /// Edge id.
    pub edge_id: String,
    /// USD amount, two decimals.
    pub usd: String,
    /// BTC amount.
    pub btc: String,
}

impl EdgeSummary {
    fn from_record(record: &HumanReadableTransaction) -> Self {
        Self {
            edge_id: record.id.clone(),
            usd: record.usd_display(),
            btc: record.btc_display(),
        }
    }

    /// Lines shown in the summary panel.
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Transaction {}", self.edge_id),
            format!("USD Amount: ${}", self.usd),
            format!("BTC Amount: {}", self.btc),
        ]
    }
}

// ============================================================================
// Selection State
// ============================================================================

/// Graph selection, list highlight and summary panel for one graph view.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selection: Selection,
    /// Index into the record list of the highlighted entry.
    highlighted_record: Option<usize>,
    summary: Option<EdgeSummary>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn highlighted_record(&self) -> Option<usize> {
        self.highlighted_record
    }

    #[must_use]
    pub fn summary(&self) -> Option<&EdgeSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn selected_node(&self) -> Option<&str> {
        match &self.selection {
            Selection::NodeSelected(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_edge(&self) -> Option<&str> {
        match &self.selection {
            Selection::EdgeSelected(id) => Some(id),
            _ => None,
        }
    }

    /// Select a node. The list highlight and summary are left alone.
    pub fn tap_node(&mut self, id: &str) {
        self.selection = Selection::NodeSelected(id.to_string());
    }

    /// Clear the graph selection. The list highlight and summary stay.
    pub fn tap_background(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Select an edge and sync the list and summary to its first record.
    ///
    /// Returns `false` when no record carries the edge id; the summary is then
    /// left unchanged and the list highlight stays cleared.
    pub fn tap_edge(&mut self, graph: &FlowGraph, edge_id: &str) -> bool {
        self.selection = Selection::EdgeSelected(edge_id.to_string());
        self.highlighted_record = None;

        match graph.find_record(edge_id) {
            Some((index, record)) => {
                self.highlighted_record = Some(index);
                self.summary = Some(EdgeSummary::from_record(record));
                true
            }
            None => {
                tracing::debug!(edge_id, "no transaction record for edge");
                false
            }
        }
    }

    /// Select the record at `index` in the list, and its edge in the graph.
    ///
    /// Parallel edges share an id, so records are addressed by position.
    pub fn select_record(&mut self, graph: &FlowGraph, index: usize) -> bool {
        let Some(record) = graph.records().get(index) else {
            return false;
        };
        self.selection = Selection::EdgeSelected(record.id.clone());
        self.highlighted_record = Some(index);
        self.summary = Some(EdgeSummary::from_record(record));
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TransactionMother;

    fn history_graph() -> FlowGraph {
        FlowGraph::from_transactions(&TransactionMother::history())
    }

    #[test]
    fn test_starts_idle() {
        let state = SelectionState::new();
        assert_eq!(state.selection(), &Selection::Idle);
        assert!(state.summary().is_none());
        assert!(state.highlighted_record().is_none());
    }

    #[test]
    fn test_tap_edge_highlights_record_and_fills_summary() {
        let graph = history_graph();
        let mut state = SelectionState::new();

        assert!(state.tap_edge(&graph, "edge-W-T2"));
        assert_eq!(state.selected_edge(), Some("edge-W-T2"));
        assert_eq!(state.highlighted_record(), Some(3));
        let summary = state.summary().unwrap();
        assert_eq!(
            summary.lines(),
            [
                "Transaction edge-W-T2".to_string(),
                "USD Amount: $45000.00".to_string(),
                "BTC Amount: 1.5".to_string(),
            ]
        );
    }

    #[test]
    fn test_tap_edge_miss_keeps_summary() {
        let graph = history_graph();
        let mut state = SelectionState::new();
        state.tap_edge(&graph, "edge-A-T1");

        assert!(!state.tap_edge(&graph, "edge-NOPE-X"));
        assert_eq!(state.selected_edge(), Some("edge-NOPE-X"));
        assert_eq!(state.highlighted_record(), None);
        assert_eq!(state.summary().unwrap().edge_id, "edge-A-T1");
    }

    #[test]
    fn test_node_and_background_taps_leave_list_alone() {
        let graph = history_graph();
        let mut state = SelectionState::new();
        state.tap_edge(&graph, "edge-T1-W");

        state.tap_node("W");
        assert_eq!(state.selected_node(), Some("W"));
        assert_eq!(state.highlighted_record(), Some(1));

        state.tap_background();
        assert_eq!(state.selection(), &Selection::Idle);
        assert_eq!(state.highlighted_record(), Some(1));
        assert_eq!(state.summary().unwrap().edge_id, "edge-T1-W");
    }

    #[test]
    fn test_select_record_reaches_parallel_edges() {
        let txn = TransactionMother::new("T1", &[("A", 100_000_000), ("A", 50_000_000)], &[], 2.0);
        let graph = FlowGraph::from_transactions(&[txn]);
        let mut state = SelectionState::new();

        assert!(state.select_record(&graph, 1));
        assert_eq!(state.highlighted_record(), Some(1));
        assert_eq!(state.summary().unwrap().btc, "0.5");
        assert_eq!(state.selected_edge(), Some("edge-A-T1"));

        // Tapping the shared id always lands on the first record.
        state.tap_edge(&graph, "edge-A-T1");
        assert_eq!(state.highlighted_record(), Some(0));
    }

    #[test]
    fn test_select_record_out_of_range() {
        let graph = history_graph();
        let mut state = SelectionState::new();
        assert!(!state.select_record(&graph, 99));
        assert_eq!(state.selection(), &Selection::Idle);
    }

    #[test]
    fn test_selection_id() {
        assert_eq!(Selection::Idle.id(), None);
        assert_eq!(Selection::NodeSelected("A".into()).id(), Some("A"));
        assert_eq!(Selection::EdgeSelected("edge-A-B".into()).id(), Some("edge-A-B"));
    }
}
