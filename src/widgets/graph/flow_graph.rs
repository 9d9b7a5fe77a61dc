//! Renderer for fund-flow graphs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::graph::FlowEdge;
use crate::state::GraphView;
use crate::theme::{EDGE_COLOR, GRAPH_SELECTION_COLOR};

use super::projection::{Projection, node_label};

/// Position of the arrow head along an edge, from its source.
const ARROW_POSITION: f64 = 0.7;

/// Widget that draws a [`GraphView`] inside the given area.
///
/// The area should already exclude the panel border; hit-testing assumes the
/// same area.
#[derive(Debug, Clone, Copy)]
pub struct FlowGraphWidget<'a> {
    view: &'a GraphView,
}

impl<'a> FlowGraphWidget<'a> {
    #[must_use]
    pub const fn new(view: &'a GraphView) -> Self {
        Self { view }
    }

    fn is_selected_edge(&self, edge: &FlowEdge) -> bool {
        self.view.selection.selected_edge() == Some(edge.id.as_str())
    }

    /// Layout endpoints of an edge, if both nodes are placed.
    fn endpoints(&self, edge: &FlowEdge) -> Option<((f64, f64), (f64, f64))> {
        let from = self.view.layout.position(&edge.source)?;
        let to = self.view.layout.position(&edge.target)?;
        Some(((from.x, from.y), (to.x, to.y)))
    }

    fn render_edges(&self, area: Rect, buf: &mut Buffer) {
        let visible = self.view.viewport.visible();
        let edges: Vec<_> = self
            .view
            .graph
            .edges()
            .iter()
            .filter_map(|edge| Some((self.endpoints(edge)?, self.is_selected_edge(edge))))
            .collect();

        // Terminal rows grow downwards, canvas y grows upwards.
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([visible.min_x, visible.max_x])
            .y_bounds([-visible.max_y, -visible.min_y])
            .paint(|ctx| {
                for (((x1, y1), (x2, y2)), _) in edges.iter().filter(|(_, selected)| !selected) {
                    ctx.draw(&CanvasLine::new(*x1, -y1, *x2, -y2, EDGE_COLOR));
                }
                ctx.layer();
                for (((x1, y1), (x2, y2)), _) in edges.iter().filter(|(_, selected)| *selected) {
                    ctx.draw(&CanvasLine::new(*x1, -y1, *x2, -y2, GRAPH_SELECTION_COLOR));
                }
            })
            .render(area, buf);
    }

    fn render_arrows(&self, projection: &Projection, area: Rect, buf: &mut Buffer) {
        for edge in self.view.graph.edges() {
            let Some(((x1, y1), (x2, y2))) = self.endpoints(edge) else {
                continue;
            };
            let x = x1 + (x2 - x1) * ARROW_POSITION;
            let y = y1 + (y2 - y1) * ARROW_POSITION;
            let Some((col, row)) = projection.cell(x, y) else {
                continue;
            };
            let (start, end) = (projection.cell_f(x1, y1), projection.cell_f(x2, y2));
            let color = if self.is_selected_edge(edge) {
                GRAPH_SELECTION_COLOR
            } else {
                EDGE_COLOR
            };
            buf.set_string(
                area.x + col,
                area.y + row,
                arrow_glyph(end.0 - start.0, end.1 - start.1).to_string(),
                Style::default().fg(color),
            );
        }
    }

    fn render_nodes(&self, projection: &Projection, area: Rect, buf: &mut Buffer) {
        let selected_node = self.view.selection.selected_node();

        for node in self.view.graph.nodes() {
            let Some(position) = self.view.layout.position(&node.id) else {
                continue;
            };
            let Some((col, row)) = projection.cell(position.x, position.y) else {
                continue;
            };

            let style = if selected_node == Some(node.id.as_str()) {
                Style::default()
                    .fg(GRAPH_SELECTION_COLOR)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
                    .fg(node.mark.color())
                    .add_modifier(Modifier::BOLD)
            };

            let x = area.x + col;
            let max_width = usize::from(area.right().saturating_sub(x));
            buf.set_stringn(x, area.y + row, node_label(node), max_width, style);
        }
    }
}

impl Widget for FlowGraphWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        if self.view.graph.is_empty() {
            let message = "No transactions for this wallet";
            let x = area.x + area.width.saturating_sub(message.len() as u16) / 2;
            let y = area.y + area.height / 2;
            buf.set_stringn(
                x,
                y,
                message,
                usize::from(area.width),
                Style::default().fg(Color::Gray),
            );
            return;
        }

        let projection = Projection::new(self.view.viewport.visible(), area);
        self.render_edges(area, buf);
        self.render_arrows(&projection, area, buf);
        self.render_nodes(&projection, area, buf);
    }
}

/// Arrow glyph pointing along the cell direction (`dx`, `dy`).
fn arrow_glyph(dx: f64, dy: f64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax >= 2.0 * ay {
        if dx >= 0.0 { '→' } else { '←' }
    } else if ay >= 2.0 * ax {
        if dy >= 0.0 { '↓' } else { '↑' }
    } else {
        match (dx >= 0.0, dy >= 0.0) {
            (true, true) => '↘',
            (true, false) => '↗',
            (false, true) => '↙',
            (false, false) => '↖',
        }
    }
}
