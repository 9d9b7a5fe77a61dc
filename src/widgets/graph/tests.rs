//! Rendering and hit-testing tests for the fund-flow graph widget.
//!
//! The simple `A -> T1 -> B` view is drawn into a 63x13 area. Its fitted
//! window spans x 40..660 and y -60..60, so the nodes land on row 6 at
//! columns 6, 31 and 56.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};

use super::projection::Projection;
use super::{FlowGraphWidget, HitTarget, hit_test};
use crate::state::GraphView;
use crate::test_utils::TransactionMother;

const AREA: Rect = Rect::new(0, 0, 63, 13);

fn simple_view() -> GraphView {
    GraphView::build("B", &[TransactionMother::simple()])
}

fn render(view: &GraphView) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal
        .draw(|frame| frame.render_widget(FlowGraphWidget::new(view), frame.area()))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buf: &Buffer, row: u16) -> String {
    (0..buf.area.width)
        .filter_map(|x| buf.cell((x, row)).map(|cell| cell.symbol().to_string()))
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_nodes_drawn_on_their_cells() {
    let buf = render(&simple_view());
    let row = row_text(&buf, 6);

    assert_eq!(row.chars().skip(6).take(3).collect::<String>(), "● A");
    assert_eq!(row.chars().skip(31).take(4).collect::<String>(), "◆ T1");
    assert_eq!(row.chars().skip(56).take(3).collect::<String>(), "● B");
}

#[test]
fn test_target_and_selection_colors() {
    let mut view = simple_view();
    let buf = render(&view);
    assert_eq!(buf.cell((6, 6)).unwrap().fg, Color::Blue);
    assert_eq!(buf.cell((56, 6)).unwrap().fg, Color::Yellow);

    view.tap_node("T1");
    let buf = render(&view);
    assert_eq!(buf.cell((31, 6)).unwrap().fg, Color::Green);
    assert_eq!(buf.cell((56, 6)).unwrap().fg, Color::Yellow);
}

#[test]
fn test_arrow_heads_point_along_edges() {
    let mut view = simple_view();
    let buf = render(&view);
    assert_eq!(buf.cell((23, 6)).unwrap().symbol(), "→");
    assert_eq!(buf.cell((48, 6)).unwrap().symbol(), "→");
    assert_eq!(buf.cell((23, 6)).unwrap().fg, Color::White);

    view.tap_edge("edge-A-T1");
    let buf = render(&view);
    assert_eq!(buf.cell((23, 6)).unwrap().fg, Color::Green);
    assert_eq!(buf.cell((48, 6)).unwrap().fg, Color::White);
}

#[test]
fn test_zoom_hides_outer_columns() {
    let mut view = simple_view();
    view.viewport.zoom_in();
    let buf = render(&view);
    let content: String = (0..AREA.height).map(|row| row_text(&buf, row)).collect();

    assert!(content.contains("◆ T1"));
    assert!(!content.contains("● A"));
    assert!(!content.contains("● B"));
}

#[test]
fn test_empty_graph_message() {
    let view = GraphView::build("A", &[]);
    let buf = render(&view);
    assert!(row_text(&buf, 6).contains("No transactions for this wallet"));
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_nodes_edges_and_background() {
    let view = simple_view();
    let cases = [
        ((6, 6), HitTarget::Node("A".to_string())),
        ((5, 6), HitTarget::Node("A".to_string())),
        ((9, 6), HitTarget::Node("A".to_string())),
        ((33, 6), HitTarget::Node("T1".to_string())),
        ((20, 6), HitTarget::Edge("edge-A-T1".to_string())),
        ((20, 5), HitTarget::Edge("edge-A-T1".to_string())),
        ((45, 6), HitTarget::Edge("edge-T1-B".to_string())),
        ((20, 7), HitTarget::Background),
        ((20, 1), HitTarget::Background),
    ];

    for ((column, row), expected) in cases {
        assert_eq!(
            hit_test(&view, AREA, column, row),
            expected,
            "click at ({column}, {row})"
        );
    }
}

#[test]
fn test_every_visible_node_is_hittable_on_its_cell() {
    let view = GraphView::build("W", &TransactionMother::history());
    let area = Rect::new(0, 0, 80, 30);
    let projection = Projection::new(view.viewport.visible(), area);

    for position in view.layout.positions() {
        let (column, row) = projection.cell(position.x, position.y).unwrap();
        assert_eq!(
            hit_test(&view, area, column, row),
            HitTarget::Node(position.id.clone())
        );
    }
}

#[test]
fn test_hit_after_pan_follows_view() {
    let mut view = simple_view();
    view.viewport.pan(crate::graph::PanDirection::Right);

    // The window moved 62 units right, so every node moved ~6 cells left.
    assert_eq!(
        hit_test(&view, AREA, 25, 6),
        HitTarget::Node("T1".to_string())
    );
    assert_eq!(hit_test(&view, AREA, 56, 6), HitTarget::Background);
}
