//! Mapping from layout coordinates to terminal cells.

use ratatui::layout::Rect;

use crate::constants::NODE_LABEL_WIDTH;
use crate::graph::{Bounds, GraphNode, NodeKind};
use crate::state::GraphView;
use crate::widgets::helpers::truncate_address;

/// Largest distance, in cells, between a click and an edge it selects.
const EDGE_HIT_DISTANCE: f64 = 1.0;

// ============================================================================
// Projection
// ============================================================================

/// Maps the visible window of a viewport onto a `width` x `height` cell grid.
///
/// Column `0` is the left edge of the window and row `0` its top (layout `y`
/// grows downwards, like terminal rows).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    visible: Bounds,
    width: u16,
    height: u16,
}

impl Projection {
    #[must_use]
    pub const fn new(visible: Bounds, area: Rect) -> Self {
        Self {
            visible,
            width: area.width,
            height: area.height,
        }
    }

    /// Fractional cell position of a layout point. May lie outside the grid.
    #[must_use]
    pub fn cell_f(&self, x: f64, y: f64) -> (f64, f64) {
        let span_x = self.visible.width();
        let span_y = self.visible.height();
        let col = if span_x > 0.0 {
            (x - self.visible.min_x) * (f64::from(self.width) - 1.0) / span_x
        } else {
            0.0
        };
        let row = if span_y > 0.0 {
            (y - self.visible.min_y) * (f64::from(self.height) - 1.0) / span_y
        } else {
            0.0
        };
        (col, row)
    }

    /// Cell containing a layout point, or `None` when it is out of view.
    #[must_use]
    pub fn cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let visible = &self.visible;
        if x < visible.min_x || x > visible.max_x || y < visible.min_y || y > visible.max_y {
            return None;
        }
        let (col, row) = self.cell_f(x, y);
        Some((col as u16, row as u16))
    }
}

// ============================================================================
// Node Labels
// ============================================================================

/// Text drawn for a node: a kind marker followed by the shortened id.
#[must_use]
pub fn node_label(node: &GraphNode) -> String {
    let marker = match node.kind {
        NodeKind::Address => '●',
        NodeKind::Transaction => '◆',
    };
    format!("{marker} {}", truncate_address(&node.id, NODE_LABEL_WIDTH))
}

// ============================================================================
// Hit Testing
// ============================================================================

/// What a click in the graph area landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Node(String),
    Edge(String),
    Background,
}

/// Resolve a click at (`column`, `row`), relative to `area`, to a node, an
/// edge, or the background.
///
/// A node label (plus one cell either side) wins over any edge passing
/// through it. Otherwise the nearest edge within one cell is taken.
#[must_use]
pub fn hit_test(view: &GraphView, area: Rect, column: u16, row: u16) -> HitTarget {
    let projection = Projection::new(view.viewport.visible(), area);

    for node in view.graph.nodes() {
        let Some(position) = view.layout.position(&node.id) else {
            continue;
        };
        let Some((node_col, node_row)) = projection.cell(position.x, position.y) else {
            continue;
        };
        let label_len = u16::try_from(node_label(node).chars().count()).unwrap_or(u16::MAX);
        if row == node_row
            && column >= node_col.saturating_sub(1)
            && column <= node_col.saturating_add(label_len)
        {
            return HitTarget::Node(node.id.clone());
        }
    }

    let click = (f64::from(column) + 0.5, f64::from(row) + 0.5);
    let nearest = view
        .graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let from = view.layout.position(&edge.source)?;
            let to = view.layout.position(&edge.target)?;
            let start = projection.cell_f(from.x, from.y);
            let end = projection.cell_f(to.x, to.y);
            Some((segment_distance(click, start, end), edge))
        })
        .filter(|(distance, _)| *distance <= EDGE_HIT_DISTANCE)
        .min_by(|a, b| a.0.total_cmp(&b.0));

    match nearest {
        Some((_, edge)) => HitTarget::Edge(edge.id.clone()),
        None => HitTarget::Background,
    }
}

/// Distance from `point` to the segment `start`-`end`.
fn segment_distance(point: (f64, f64), start: (f64, f64), end: (f64, f64)) -> f64 {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq > 0.0 {
        (((point.0 - start.0) * dx + (point.1 - start.1) * dy) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (nearest_x, nearest_y) = (start.0 + t * dx, start.1 + t * dy);
    (point.0 - nearest_x).hypot(point.1 - nearest_y)
}
