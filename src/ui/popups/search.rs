//! Address search popup.
//!
//! A single text input with a live validation hint below it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::domain::validate_address;
use crate::theme::{BORDER_STYLE, ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::{PopupTone, popup_block};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 11;

/// Validation hint for the current query, with its color.
fn validation_hint(query: &str) -> (String, Style) {
    if query.trim().is_empty() {
        return (
            "Enter a legacy (1...), script (3...) or bech32 (bc1...) address".to_string(),
            Style::default().fg(MUTED_COLOR),
        );
    }
    match validate_address(query) {
        Ok(kind) => (
            format!("Valid {} address", kind.as_str()),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Err(err) => (err.to_string(), Style::default().fg(ERROR_COLOR)),
    }
}

/// Renders the search popup for `query`.
pub fn render(frame: &mut Frame, area: Rect, query: &str) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    if popup_area.width < 8 || popup_area.height < 9 {
        // Too small for the full form; keep the title and input visible.
        frame.render_widget(Clear, popup_area);
        let block = popup_block("Search Wallet", PopupTone::Prompt);
        frame.render_widget(Paragraph::new(format!("{query}▏")).block(block), popup_area);
        return;
    }

    let block = popup_block("Search Wallet", PopupTone::Prompt);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block.clone(), popup_area);

    let inner_area = block.inner(popup_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(" Wallet address ")
        .title_alignment(Alignment::Left);

    let input_area = Rect::new(
        inner_area.x + 2,
        inner_area.y + 1,
        inner_area.width.saturating_sub(4),
        3,
    );
    frame.render_widget(input_block.clone(), input_area);

    // Keep the tail of long input visible next to the cursor.
    let text_area = input_block.inner(input_area);
    let input_text = format!("{query}▏");
    let visible = usize::from(text_area.width);
    let skip = input_text.chars().count().saturating_sub(visible);
    let input_text: String = input_text.chars().skip(skip).collect();
    frame.render_widget(Paragraph::new(input_text), text_area);

    let (hint, hint_style) = validation_hint(query);
    let hint_area = Rect::new(
        inner_area.x + 2,
        input_area.bottom() + 1,
        inner_area.width.saturating_sub(4),
        2,
    );
    frame.render_widget(
        Paragraph::new(hint)
            .style(hint_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        hint_area,
    );

    let help_area = Rect::new(
        popup_area.x,
        popup_area.bottom().saturating_sub(2),
        popup_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new("Enter:Search  Esc:Cancel")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(query: &str, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), query))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_validation_hint_states() {
        let (hint, style) = validation_hint("   ");
        assert!(hint.starts_with("Enter a legacy"));
        assert_eq!(style.fg, Some(MUTED_COLOR));

        let (hint, style) = validation_hint("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert_eq!(hint, "Valid legacy address");
        assert_eq!(style.fg, Some(SUCCESS_COLOR));

        let (hint, style) = validation_hint("xyz");
        assert!(hint.starts_with("Invalid input"));
        assert_eq!(style.fg, Some(ERROR_COLOR));
    }

    #[test]
    fn test_search_popup_renders_query_and_help() {
        let content = draw("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 80, 24);
        assert!(content.contains("Search Wallet"));
        assert!(content.contains("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa▏"));
        assert!(content.contains("Valid legacy address"));
        assert!(content.contains("Enter:Search  Esc:Cancel"));
    }

    #[test]
    fn test_search_popup_small_terminals() {
        draw("bc1q", 12, 8);
        draw("bc1q", 1, 1);
        let content = draw("", 40, 16);
        assert!(content.contains("Search Wallet"));
    }
}
