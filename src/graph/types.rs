//! Graph type definitions for fund-flow visualization.
//!
//! Nodes are addresses and transactions sharing a single id namespace. Edges
//! run from an input address to a transaction, or from a transaction to an
//! output address, and each edge has a human-readable twin used by the
//! transaction list.

use ratatui::style::Color;
use serde::{Serialize, Serializer};

use crate::theme::{NODE_COLOR, TARGET_NODE_COLOR};

// ============================================================================
// Edge Ids
// ============================================================================

/// Build the id of the edge running from `from` to `to`.
///
/// The id depends only on the ordered pair, so graph edges and list entries
/// can be correlated in both directions.
#[must_use]
pub fn edge_id(from: &str, to: &str) -> String {
    format!("edge-{from}-{to}")
}

// ============================================================================
// NodeKind
// ============================================================================

/// What a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A wallet address.
    Address,
    /// A transaction hash.
    Transaction,
}

impl NodeKind {
    /// What a node id is called in user-facing messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Transaction => "Transaction hash",
        }
    }
}

// ============================================================================
// NodeMark
// ============================================================================

/// Presentation mark of a node, independent of its layout role and of
/// the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMark {
    /// Regular node.
    #[default]
    Normal,
    /// The searched address.
    Target,
}

impl NodeMark {
    /// Fill color for nodes carrying this mark.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Normal => NODE_COLOR,
            Self::Target => TARGET_NODE_COLOR,
        }
    }
}

// ============================================================================
// GraphNode
// ============================================================================

/// A node of the fund-flow graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Address string or transaction hash.
    pub id: String,
    /// Kind recorded at first encounter.
    pub kind: NodeKind,
    /// Presentation mark.
    pub mark: NodeMark,
}

impl GraphNode {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            mark: NodeMark::Normal,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_target(&self) -> bool {
        self.mark == NodeMark::Target
    }
}

// ============================================================================
// FlowEdge
// ============================================================================

/// A directed edge carrying the amount that moved along it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowEdge {
    /// Deterministic id, see [`edge_id`].
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Amount in BTC.
    #[serde(skip)]
    pub btc_amount: f64,
    /// Amount in USD at the transaction's rate.
    #[serde(skip)]
    pub usd_amount: f64,
}

// ============================================================================
// HumanReadableTransaction
// ============================================================================

/// Denormalized view of one edge for the transaction list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanReadableTransaction {
    /// Same id as the edge it mirrors.
    pub id: String,
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Amount in BTC.
    pub btc_amount: f64,
    /// Amount in USD, full precision. Serialized rounded to two decimals.
    #[serde(serialize_with = "serialize_usd")]
    pub usd_amount: f64,
}

impl HumanReadableTransaction {
    /// USD amount rounded to two decimals.
    #[must_use]
    pub fn usd_display(&self) -> String {
        format_usd(self.usd_amount)
    }

    /// BTC amount as shown in the list and summary.
    #[must_use]
    pub fn btc_display(&self) -> String {
        format_btc(self.btc_amount)
    }
}

/// Format a USD amount with exactly two decimals.
///
/// Values exactly halfway between two cents round away from zero. Such a
/// midpoint is always an odd multiple of 1/8, which `amount * 8.0` detects
/// without loss; every other value is already rounded correctly by `{:.2}`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let cents = (amount * 100.0).round();
        return format!("{:.2}", cents / 100.0);
    }
    format!("{amount:.2}")
}

/// Format a BTC amount with the shortest representation that round-trips.
#[must_use]
pub fn format_btc(amount: f64) -> String {
    format!("{amount}")
}

fn serialize_usd<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_usd(*amount))
}

// ============================================================================
// NodeRole
// ============================================================================

/// Layout role of a node, derived from its connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Only outgoing edges.
    SourceOnly,
    /// Both incoming and outgoing edges.
    PassThrough,
    /// Only incoming edges.
    SinkOnly,
    /// No edges at all.
    Isolated,
}

impl NodeRole {
    /// Classify a node from its edge counts.
    #[must_use]
    pub const fn from_degrees(incoming: usize, outgoing: usize) -> Self {
        match (incoming > 0, outgoing > 0) {
            (false, true) => Self::SourceOnly,
            (true, false) => Self::SinkOnly,
            (true, true) => Self::PassThrough,
            (false, false) => Self::Isolated,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
