//! Footer rendering for the lazyflow TUI.
//!
//! Shows the keyboard shortcuts that apply to the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Keyboard hints for an input context.
#[must_use]
pub const fn footer_hints(context: InputContext) -> &'static str {
    match context {
        InputContext::GraphPanel => {
            "q:Quit  f:Search  r:Reload  ↑↓:Nodes  ←→:Edges  +/-:Zoom  Shift+←→↑↓:Pan  0:Fit  c:Copy  o:Open  Tab:List"
        }
        InputContext::ListPanel => "q:Quit  f:Search  r:Reload  ↑↓:Transfers  c:Copy  o:Open  Tab:Graph",
        InputContext::SearchInput => "Enter:Search  Esc:Cancel",
        InputContext::MessagePopup => "Esc:Close  q:Quit",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(footer_hints(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use crate::test_utils::{buffer_to_string, test_app};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::graph(InputContext::GraphPanel, "Shift+←→↑↓:Pan")]
    #[case::list(InputContext::ListPanel, "↑↓:Transfers")]
    #[case::search(InputContext::SearchInput, "Enter:Search")]
    #[case::message(InputContext::MessagePopup, "Esc:Close")]
    fn test_footer_hints_per_context(#[case] context: InputContext, #[case] expected: &str) {
        assert!(footer_hints(context).contains(expected));
    }

    #[test]
    fn test_footer_follows_focus() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();

        terminal.draw(|frame| render(frame, frame.area(), &app)).unwrap();
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Tab:List"));

        app.ui.set_focus(Focus::List);
        terminal.draw(|frame| render(frame, frame.area(), &app)).unwrap();
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Tab:Graph"));
        assert!(content.contains("q:Quit"));
    }

    #[test]
    fn test_footer_is_centered() {
        let mut app = test_app();
        app.ui.show_message("boom");
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|frame| render(frame, frame.area(), &app)).unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!(leading.abs_diff(trailing) <= 1);
    }
}
