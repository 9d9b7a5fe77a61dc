//! Panel rendering for the main content area.
//!
//! - **Fund Flow**: the graph of the searched wallet
//! - **Amount**: the amounts of the selected edge
//! - **Transactions**: one entry per edge, synced with the graph selection

use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::panel_block;
use crate::state::{App, Focus};
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR};
use crate::widgets::{FlowGraphWidget, TxnListWidget};

// ============================================================================
// Public Panel Rendering Functions
// ============================================================================

/// Renders the fund-flow graph panel.
///
/// The badge carries the zoom level. Before the first wallet arrives the
/// panel shows a hint instead.
pub fn render_graph(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::Graph;
    let zoom = app
        .data
        .view
        .as_ref()
        .map(|view| format!("{:.0}%", view.viewport.zoom() * 100.0));
    frame.render_widget(panel_block("Fund Flow", zoom.as_deref(), focused), area);

    let inner = area.inner(Margin::new(1, 1));
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match &app.data.view {
        Some(view) => frame.render_widget(FlowGraphWidget::new(view), inner),
        None => {
            let hint = if app.data.is_loading() {
                "Loading wallet..."
            } else {
                "Press f to search a wallet address"
            };
            render_centered_hint(frame, inner, hint);
        }
    }
}

/// Renders the amount summary of the selected edge.
pub fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    frame.render_widget(panel_block("Amount", None, false), area);

    let inner = area.inner(Margin::new(1, 1));
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let summary = app
        .data
        .view
        .as_ref()
        .and_then(|view| view.selection.summary());

    match summary {
        Some(summary) => {
            let [edge, usd, btc] = summary.lines();
            let lines = vec![
                Line::from(Span::styled(
                    edge,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(usd, Style::default().fg(SUCCESS_COLOR))),
                Line::from(Span::styled(btc, Style::default().fg(Color::Blue))),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
        None => render_centered_hint(frame, inner, "Select an edge to see its amounts"),
    }
}

/// Renders the transaction record list.
pub fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::List;
    let (records, highlighted) = match &app.data.view {
        Some(view) => (
            view.graph.records(),
            view.selection.highlighted_record(),
        ),
        None => (&[][..], None),
    };

    let count = records.len().to_string();
    frame.render_widget(panel_block("Transactions", Some(&count), focused), area);

    let inner = area.inner(Margin::new(1, 1));
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    frame.render_widget(
        TxnListWidget::new(records)
            .highlighted(highlighted)
            .focused(focused),
        inner,
    );
}

fn render_centered_hint(frame: &mut Frame, area: Rect, hint: &str) {
    let y = area.y + area.height.saturating_sub(1) / 2;
    let paragraph = Paragraph::new(hint.to_string())
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, Rect::new(area.x, y, area.width, 1));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WalletBalance;
    use crate::state::GraphView;
    use crate::test_utils::{TransactionMother, buffer_to_string, test_app};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, panel: fn(&App, &mut Frame, Rect), width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| panel(app, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn loaded_app() -> App {
        let mut app = test_app();
        app.data.begin_load("B");
        app.data.finish_load(
            GraphView::build("B", &[TransactionMother::simple()]),
            WalletBalance { btc: 1.0, usd: 1.0 },
        );
        app
    }

    #[test]
    fn test_graph_panel_hints() {
        let mut app = test_app();
        let content = draw(&app, render_graph, 60, 10);
        assert!(content.contains("Fund Flow"));
        assert!(content.contains("Press f to search a wallet address"));

        app.data.begin_load("B");
        let content = draw(&app, render_graph, 60, 10);
        assert!(content.contains("Loading wallet..."));
    }

    #[test]
    fn test_graph_panel_badge_shows_zoom() {
        let mut app = loaded_app();
        let content = draw(&app, render_graph, 60, 10);
        let top = content.lines().next().unwrap();
        assert!(top.starts_with("╔ ● Fund Flow ═"));
        assert!(top.ends_with("═ 100% ╗"));
        assert!(content.contains("◆ T1"));

        if let Some(view) = app.data.view.as_mut() {
            view.viewport.zoom_in();
        }
        let content = draw(&app, render_graph, 60, 10);
        assert!(content.lines().next().unwrap().ends_with("═ 125% ╗"));
    }

    #[test]
    fn test_summary_follows_selected_edge() {
        let mut app = loaded_app();
        let content = draw(&app, render_summary, 40, 5);
        assert!(content.contains("Select an edge to see its amounts"));

        if let Some(view) = app.data.view.as_mut() {
            view.tap_edge("edge-A-T1");
        }
        let content = draw(&app, render_summary, 40, 5);
        assert!(content.contains("Transaction edge-A-T1"));
        assert!(content.contains("USD Amount: $"));
        assert!(content.contains("BTC Amount: "));
    }

    #[test]
    fn test_list_panel_badge_counts_records() {
        let app = loaded_app();
        let content = draw(&app, render_list, 40, 12);
        let top = content.lines().next().unwrap();
        assert!(top.starts_with("╭ Transactions ─"));
        assert!(top.ends_with("─ 2 ╮"));
        assert!(content.contains("From: A"));

        let content = draw(&test_app(), render_list, 40, 12);
        assert!(content.lines().next().unwrap().ends_with("─ 0 ╮"));
        assert!(content.contains("No transactions"));
    }

    #[test]
    fn test_panels_survive_tiny_areas() {
        let app = loaded_app();
        for (width, height) in [(1, 1), (2, 2), (3, 3)] {
            draw(&app, render_graph, width, height);
            draw(&app, render_summary, width, height);
            draw(&app, render_list, width, height);
        }
    }
}
