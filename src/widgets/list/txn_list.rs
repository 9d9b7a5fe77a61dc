//! Transaction record list widget.
//!
//! Displays one entry per graph edge, in edge creation order. The
//! highlighted entry is scrolled to the middle of the visible area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Scrollbar, ScrollbarOrientation, ScrollbarState},
    widgets::{StatefulWidget, Widget},
};

use crate::constants::RECORD_HEIGHT;
use crate::graph::HumanReadableTransaction;
use crate::theme::HIGHLIGHT_STYLE;

// ============================================================================
// Scrolling
// ============================================================================

/// Index of the first visible item so that `highlighted` sits in the middle.
///
/// Without a highlight the list starts at the top. The offset never scrolls
/// past the last full page.
#[must_use]
pub fn centered_offset(highlighted: Option<usize>, len: usize, visible_items: usize) -> usize {
    let Some(index) = highlighted else {
        return 0;
    };
    index
        .saturating_sub(visible_items / 2)
        .min(len.saturating_sub(visible_items))
}

// ============================================================================
// TxnListWidget
// ============================================================================

/// A widget that displays transaction records, four rows each.
///
/// # Example
///
/// ```text
/// ▶ From: 1A1zP...vfNa
///   To:   T1
///   BTC:  1.5
///   USD:  $30000.00
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TxnListWidget<'a> {
    records: &'a [HumanReadableTransaction],
    highlighted: Option<usize>,
    focused: bool,
}

impl<'a> TxnListWidget<'a> {
    #[must_use]
    pub const fn new(records: &'a [HumanReadableTransaction]) -> Self {
        Self {
            records,
            highlighted: None,
            focused: false,
        }
    }

    /// Sets the highlighted record index.
    #[must_use]
    pub const fn highlighted(mut self, highlighted: Option<usize>) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Sets whether this widget is focused.
    ///
    /// When focused, a scrollbar is drawn if content exceeds the viewport.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn record_item(record: &HumanReadableTransaction, is_highlighted: bool) -> ListItem<'static> {
        let indicator = if is_highlighted { "▶" } else { "→" };
        let label = Style::default().fg(Color::Gray);

        ListItem::new(vec![
            Line::from(vec![
                Span::raw(format!("{indicator} ")),
                Span::styled("From: ", label),
                Span::styled(record.from.clone(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("To:   ", label),
                Span::styled(record.to.clone(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("BTC:  ", label),
                Span::styled(
                    record.btc_display(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("USD:  ", label),
                Span::styled(
                    format!("${}", record.usd_display()),
                    Style::default().fg(Color::Green),
                ),
            ]),
        ])
    }
}

impl Widget for TxnListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.records.is_empty() {
            let empty_msg = "No transactions";
            let x = area.x + (area.width.saturating_sub(empty_msg.len() as u16)) / 2;
            let y = area.y + area.height / 2;

            if y < area.y + area.height && x < area.x + area.width {
                buf.set_string(x, y, empty_msg, Style::default().fg(Color::Gray));
            }
            return;
        }

        let items_per_page = usize::from(area.height / RECORD_HEIGHT).max(1);
        let start_index = centered_offset(self.highlighted, self.records.len(), items_per_page);
        let end_index = (start_index + items_per_page).min(self.records.len());

        let visible_items: Vec<ListItem> = self.records[start_index..end_index]
            .iter()
            .enumerate()
            .map(|(i, record)| {
                Self::record_item(record, self.highlighted == Some(start_index + i))
            })
            .collect();

        let mut list_state = ListState::default();
        if let Some(highlighted) = self.highlighted
            && (start_index..end_index).contains(&highlighted)
        {
            list_state.select(Some(highlighted - start_index));
        }

        let list = List::new(visible_items).highlight_style(HIGHLIGHT_STYLE);
        StatefulWidget::render(list, area, buf, &mut list_state);

        if self.focused && self.records.len() > items_per_page {
            let item_height = usize::from(RECORD_HEIGHT);
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(self.records.len() * item_height)
                .viewport_content_length(items_per_page * item_height)
                .position(start_index * item_height);

            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .track_symbol(None)
                .begin_symbol(None)
                .end_symbol(None)
                .style(Style::default().fg(Color::Gray))
                .track_style(Style::default().fg(Color::DarkGray))
                .render(area, buf, &mut scrollbar_state);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::FlowGraph;
    use crate::test_utils::TransactionMother;
    use rstest::rstest;

    fn buf_to_string(buf: &Buffer) -> String {
        let area = buf.area;
        let mut result = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    result.push_str(cell.symbol());
                }
            }
            result.push('\n');
        }
        result
    }

    #[rstest]
    #[case::no_highlight(None, 20, 5, 0)]
    #[case::top(Some(1), 20, 5, 0)]
    #[case::middle(Some(10), 20, 5, 8)]
    #[case::bottom(Some(19), 20, 5, 15)]
    #[case::short_list(Some(2), 3, 5, 0)]
    fn test_centered_offset(
        #[case] highlighted: Option<usize>,
        #[case] len: usize,
        #[case] visible: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(centered_offset(highlighted, len, visible), expected);
    }

    #[test]
    fn test_empty_list() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        TxnListWidget::new(&[]).render(area, &mut buf);
        assert!(buf_to_string(&buf).contains("No transactions"));
    }

    #[test]
    fn test_renders_records_with_highlight() {
        let graph = FlowGraph::from_transactions(&TransactionMother::history());
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        TxnListWidget::new(graph.records())
            .highlighted(Some(1))
            .render(area, &mut buf);
        let content = buf_to_string(&buf);

        // Two records fit; the first page is shown.
        assert!(content.contains("→ From: A"));
        assert!(content.contains("▶ From: T1"));
        assert!(content.contains("To:   W"));
        assert!(content.contains("USD:  $30000.00"));
        assert!(!content.contains("From: W"));
    }

    #[test]
    fn test_highlight_scrolls_into_view() {
        let graph = FlowGraph::from_transactions(&TransactionMother::history());
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        TxnListWidget::new(graph.records())
            .highlighted(Some(5))
            .focused(true)
            .render(area, &mut buf);
        let content = buf_to_string(&buf);

        assert!(content.contains("▶ From: T2"));
        assert!(content.contains("To:   W"));
        assert!(!content.contains("From: A"));
    }
}
