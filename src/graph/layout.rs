//! Column layout for fund-flow graphs.
//!
//! Nodes are classified by connectivity and stacked in three columns:
//! source-only on the left, pass-through in the middle, sink-only on the
//! right. Nodes without any edge go to the middle column below the
//! pass-through nodes.

use std::collections::HashMap;

use crate::constants::{
    FIT_PADDING, MIDDLE_COLUMN_X, NODE_SPACING_Y, SINK_COLUMN_X, SOURCE_COLUMN_X,
};

use super::flow_graph::FlowGraph;
use super::types::NodeRole;

// ============================================================================
// NodePosition
// ============================================================================

/// Placement of a single node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePosition {
    /// Node id.
    pub id: String,
    /// Connectivity role.
    pub role: NodeRole,
    /// Horizontal coordinate (column).
    pub x: f64,
    /// Vertical coordinate, growing downwards.
    pub y: f64,
}

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned rectangle in layout coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grow the rectangle by `padding` on every side.
    #[must_use]
    pub fn padded(&self, padding: f64) -> Self {
        Self {
            min_x: self.min_x - padding,
            max_x: self.max_x + padding,
            min_y: self.min_y - padding,
            max_y: self.max_y + padding,
        }
    }
}

impl Default for Bounds {
    /// Span of the three columns with a single row.
    fn default() -> Self {
        Self {
            min_x: SOURCE_COLUMN_X,
            max_x: SINK_COLUMN_X,
            min_y: 0.0,
            max_y: 0.0,
        }
    }
}

// ============================================================================
// GraphLayout
// ============================================================================

/// Positions for every node of a graph, in node order.
#[derive(Debug, Clone, Default)]
pub struct GraphLayout {
    positions: Vec<NodePosition>,
    index: HashMap<String, usize>,
}

impl GraphLayout {
    /// Classify and place every node of `graph`.
    #[must_use]
    pub fn compute(graph: &FlowGraph) -> Self {
        let roles = classify(graph);

        let mut source_row = 0usize;
        let mut sink_row = 0usize;
        let mut middle_row = 0usize;

        let mut positions: Vec<Option<NodePosition>> = vec![None; roles.len()];

        // Pass-through nodes claim the middle column before isolated ones.
        let placement_order = [
            NodeRole::SourceOnly,
            NodeRole::PassThrough,
            NodeRole::SinkOnly,
            NodeRole::Isolated,
        ];
        for order in placement_order {
            for (i, (id, role)) in roles.iter().enumerate() {
                if *role != order {
                    continue;
                }
                let (x, row) = match role {
                    NodeRole::SourceOnly => (SOURCE_COLUMN_X, &mut source_row),
                    NodeRole::SinkOnly => (SINK_COLUMN_X, &mut sink_row),
                    NodeRole::PassThrough | NodeRole::Isolated => {
                        (MIDDLE_COLUMN_X, &mut middle_row)
                    }
                };
                positions[i] = Some(NodePosition {
                    id: (*id).to_string(),
                    role: *role,
                    x,
                    y: *row as f64 * NODE_SPACING_Y,
                });
                *row += 1;
            }
        }

        let positions: Vec<NodePosition> = positions.into_iter().flatten().collect();
        let index = positions
            .iter()
            .enumerate()
            .map(|(i, position)| (position.id.clone(), i))
            .collect();

        Self { positions, index }
    }

    #[cfg(test)]
    #[must_use]
    pub fn positions(&self) -> &[NodePosition] {
        &self.positions
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<&NodePosition> {
        self.index.get(id).map(|&i| &self.positions[i])
    }

    #[cfg(test)]
    #[must_use]
    pub fn role(&self, id: &str) -> Option<NodeRole> {
        self.position(id).map(|position| position.role)
    }

    /// Ids of the nodes placed with `role`, top to bottom.
    #[cfg(test)]
    #[must_use]
    pub fn column(&self, role: NodeRole) -> Vec<&str> {
        let mut column: Vec<&NodePosition> = self
            .positions
            .iter()
            .filter(|position| position.role == role)
            .collect();
        column.sort_by(|a, b| a.y.total_cmp(&b.y));
        column.into_iter().map(|position| position.id.as_str()).collect()
    }

    /// Tight bounds of all node positions.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let Some(first) = self.positions.first() else {
            return Bounds::default();
        };
        let mut bounds = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for position in &self.positions[1..] {
            bounds.min_x = bounds.min_x.min(position.x);
            bounds.max_x = bounds.max_x.max(position.x);
            bounds.min_y = bounds.min_y.min(position.y);
            bounds.max_y = bounds.max_y.max(position.y);
        }
        bounds
    }

    /// Bounds the view should fit to.
    #[must_use]
    pub fn fit_bounds(&self) -> Bounds {
        self.bounds().padded(FIT_PADDING)
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Role of every node of `graph`, in node order.
#[must_use]
pub fn classify(graph: &FlowGraph) -> Vec<(&str, NodeRole)> {
    let degrees = graph.degrees();
    graph
        .nodes()
        .iter()
        .map(|node| {
            let (incoming, outgoing) = degrees
                .get(node.id.as_str())
                .copied()
                .unwrap_or_default();
            (node.id.as_str(), NodeRole::from_degrees(incoming, outgoing))
        })
        .collect()
}
