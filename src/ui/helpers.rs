//! Block builders shared by the panels and popups.
//!
//! Panels carry their name on the left of the top border and an optional
//! badge (zoom level, record count) on the right. Popups pick a border
//! color from their tone, so failures stand out from the search prompt.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, ERROR_COLOR, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Panel Blocks
// ============================================================================

/// Creates the block around a main panel.
///
/// Focused panels get a double border and a `●` marker before the title.
/// The badge sits right-aligned in the top border and follows the title's
/// focus styling.
#[must_use]
pub fn panel_block(title: &str, badge: Option<&str>, focused: bool) -> Block<'static> {
    let (border_style, border_set, title_style, marker) = if focused {
        (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE, "● ")
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            "",
        )
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(border_style)
        .title_style(title_style);

    if !title.is_empty() {
        block = block.title_top(Line::from(format!(" {marker}{title} ")));
    }
    if let Some(badge) = badge {
        block = block.title_top(Line::from(format!(" {badge} ")).right_aligned());
    }
    block
}

// ============================================================================
// Popup Blocks
// ============================================================================

/// How a popup presents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTone {
    /// Waiting for user input.
    Prompt,
    /// Reporting a rejected input or a failed load.
    Alert,
}

impl PopupTone {
    const fn border_style(self) -> Style {
        match self {
            Self::Prompt => FOCUSED_BORDER_STYLE,
            Self::Alert => Style::new().fg(ERROR_COLOR),
        }
    }
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn popup_block(title: &str, tone: PopupTone) -> Block<'static> {
    let border_style = tone.border_style();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(border_style.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::Buffer,
        layout::{Constraint, Direction, Layout},
    };

    fn draw(blocks: [Block<'static>; 3]) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(30, 9)).unwrap();
        terminal
            .draw(|frame| {
                let areas = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3); 3])
                    .split(frame.area());
                for (block, area) in blocks.into_iter().zip(areas.iter()) {
                    frame.render_widget(block, *area);
                }
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_panel_titles_and_badges() {
        let buffer = draw([
            panel_block("Transactions", Some("2"), false),
            panel_block("Fund Flow", Some("125%"), true),
            panel_block("", None, false),
        ]);
        let content = buffer_to_string(&buffer);
        let lines: Vec<&str> = content.lines().collect();

        assert!(lines[0].starts_with("╭ Transactions ─"));
        assert!(lines[0].ends_with("─ 2 ╮"));
        assert!(lines[3].starts_with("╔ ● Fund Flow ═"));
        assert!(lines[3].ends_with("═ 125% ╗"));
        assert_eq!(lines[6], format!("╭{}╮", "─".repeat(28)));
    }

    #[test]
    fn test_popup_tone_sets_border_color() {
        let buffer = draw([
            popup_block("Search Wallet", PopupTone::Prompt),
            popup_block("Message", PopupTone::Alert),
            panel_block("Amount", None, false),
        ]);
        let content = buffer_to_string(&buffer);
        let lines: Vec<&str> = content.lines().collect();

        assert!(lines[0].contains(" Search Wallet "));
        assert!(lines[0].starts_with('╭'));
        assert_eq!(buffer.cell((0, 0)).unwrap().fg, Color::Cyan);
        assert!(lines[3].contains(" Message "));
        assert_eq!(buffer.cell((0, 3)).unwrap().fg, ERROR_COLOR);
    }
}
