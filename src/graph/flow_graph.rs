//! Fund-flow graph data structure and construction logic.
//!
//! `FlowGraph` turns a wallet's transaction history into an ordered node
//! set, a directed edge list, and a parallel list of human-readable records.
//! Nodes are kept in first-insertion order; edges and records follow the
//! transaction order, inputs before outputs.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{Transaction, satoshis_to_btc};

use super::types::{FlowEdge, GraphNode, HumanReadableTransaction, NodeKind, NodeMark, edge_id};

// ============================================================================
// FlowGraph
// ============================================================================

/// Complete fund-flow graph for one wallet history.
///
/// # Example
///
/// ```ignore
/// use crate::graph::FlowGraph;
///
/// let graph = FlowGraph::from_transactions(&transactions);
/// for edge in graph.edges() {
///     println!("{} -> {}", edge.source, edge.target);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    /// Nodes in first-insertion order.
    nodes: Vec<GraphNode>,
    /// Position of each node id in `nodes`.
    node_index: HashMap<String, usize>,
    /// Edges in emission order.
    edges: Vec<FlowEdge>,
    /// One record per edge, same order as `edges`.
    records: Vec<HumanReadableTransaction>,
}

impl FlowGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a wallet's transactions.
    ///
    /// Inputs and outputs without a resolved address contribute nothing. The
    /// transaction hash itself is always present as a node.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut graph = Self::new();
        for txn in transactions {
            graph.add_transaction(txn);
        }
        graph
    }

    /// Add one transaction's inputs, outputs and hash to the graph.
    pub fn add_transaction(&mut self, txn: &Transaction) {
        let rate = txn.btc_to_usd_rate;

        for (address, value) in txn.inputs.iter().filter_map(|input| input.resolved()) {
            self.insert_node(address, NodeKind::Address);
            self.insert_node(&txn.hash, NodeKind::Transaction);
            self.push_flow(address, &txn.hash, value, rate);
        }

        for (address, value) in txn.out.iter().filter_map(|output| output.resolved()) {
            self.insert_node(address, NodeKind::Address);
            self.push_flow(&txn.hash, address, value, rate);
        }

        self.insert_node(&txn.hash, NodeKind::Transaction);
    }

    /// Insert a node unless the id is already known. Returns its position.
    fn insert_node(&mut self, id: &str, kind: NodeKind) -> usize {
        if let Some(&index) = self.node_index.get(id) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(GraphNode::new(id, kind));
        self.node_index.insert(id.to_string(), index);
        index
    }

    fn push_flow(&mut self, from: &str, to: &str, value: u64, rate: f64) {
        let id = edge_id(from, to);
        let btc_amount = satoshis_to_btc(value);
        let usd_amount = btc_amount * rate;

        self.edges.push(FlowEdge {
            id: id.clone(),
            source: from.to_string(),
            target: to.to_string(),
            btc_amount,
            usd_amount,
        });
        self.records.push(HumanReadableTransaction {
            id,
            from: from.to_string(),
            to: to.to_string(),
            btc_amount,
            usd_amount,
        });
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    #[must_use]
    pub fn records(&self) -> &[HumanReadableTransaction] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|&index| &self.nodes[index])
    }

    /// Position of a node in insertion order.
    #[must_use]
    pub fn node_position(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    #[cfg(test)]
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// First edge with the given id.
    #[must_use]
    pub fn edge(&self, id: &str) -> Option<&FlowEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// First record with the given edge id, with its position in the list.
    #[must_use]
    pub fn find_record(&self, edge_id: &str) -> Option<(usize, &HumanReadableTransaction)> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, record)| record.id == edge_id)
    }

    /// Incoming and outgoing edge counts per node id.
    #[must_use]
    pub fn degrees(&self) -> HashMap<&str, (usize, usize)> {
        let mut degrees: HashMap<&str, (usize, usize)> = HashMap::with_capacity(self.nodes.len());
        for edge in &self.edges {
            degrees.entry(edge.target.as_str()).or_default().0 += 1;
            degrees.entry(edge.source.as_str()).or_default().1 += 1;
        }
        degrees
    }

    // ========================================================================
    // Target Marking
    // ========================================================================

    /// Flag `id` as the target node, clearing any previous target.
    ///
    /// Returns `false` (and leaves no target) when the id is not in the graph.
    pub fn mark_target(&mut self, id: &str) -> bool {
        for node in &mut self.nodes {
            node.mark = NodeMark::Normal;
        }
        match self.node_index.get(id) {
            Some(&index) => {
                self.nodes[index].mark = NodeMark::Target;
                true
            }
            None => false,
        }
    }

    /// The node currently flagged as target, if any.
    #[cfg(test)]
    #[must_use]
    pub fn target(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.is_target())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Serializable view with the backend-facing field names.
    #[must_use]
    pub fn export(&self) -> GraphExport<'_> {
        GraphExport {
            nodes: self.nodes.iter().map(|node| node.id.as_str()).collect(),
            edges: &self.edges,
            human_readable_transactions: &self.records,
        }
    }
}

// ============================================================================
// GraphExport
// ============================================================================

/// JSON shape of a transformed graph: `{nodes, edges, humanReadableTransactions}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphExport<'a> {
    pub nodes: Vec<&'a str>,
    pub edges: &'a [FlowEdge],
    pub human_readable_transactions: &'a [HumanReadableTransaction],
}
