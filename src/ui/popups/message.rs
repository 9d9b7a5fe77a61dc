//! Message popup rendering.
//!
//! Used for invalid search input and failed wallet loads.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::{PopupTone, popup_block};
use crate::ui::layout::centered_popup_area;

/// Renders a message popup sized to its text.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let message_lines = u16::try_from(message.lines().count().max(1)).unwrap_or(u16::MAX);
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest_line = u16::try_from(longest_line).unwrap_or(u16::MAX);

    let popup_width = 40_u16
        .max(longest_line.saturating_add(6))
        .min(area.width.saturating_mul(8) / 10);
    let popup_height = 6_u16.max(message_lines.saturating_add(4));

    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let block = popup_block("Message", PopupTone::Alert);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block.clone(), popup_area);

    let inner_area = block.inner(popup_area);
    if popup_area.height < 4 || inner_area.width == 0 {
        return;
    }

    let message_area = Rect::new(
        inner_area.x,
        inner_area.y,
        inner_area.width,
        inner_area.height.saturating_sub(2),
    );

    let prompt = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(prompt, message_area);

    let separator = "─".repeat(usize::from(inner_area.width));
    let separator_area = Rect::new(
        inner_area.x,
        popup_area.bottom() - 3,
        inner_area.width,
        1,
    );

    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(popup_area.x, popup_area.bottom() - 2, popup_area.width, 1);

    frame.render_widget(
        Paragraph::new("Esc:Close  Enter:Close  q:Quit")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
