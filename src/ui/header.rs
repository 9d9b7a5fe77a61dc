//! Header rendering for the lazyflow TUI.
//!
//! Left side: logo, searched address and exchange rate. Right side: the
//! balance of the searched wallet.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::panel_block;

/// Width of the balance column on the right.
const BALANCE_WIDTH: u16 = 34;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = panel_block("", None, false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(BALANCE_WIDTH)])
        .split(inner);

    let logo = if app.data.is_loading() {
        create_animated_logo(app.animation_tick)
    } else {
        create_static_logo()
    };

    let lines = vec![logo, address_line(app), rate_line(app)];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left),
        columns[0].inner(Margin::new(1, 0)),
    );

    if let Some(balance) = app.data.balance_lines() {
        let [title, usd, btc] = balance;
        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(MUTED_COLOR).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(usd, Style::default().fg(SUCCESS_COLOR))),
            Line::from(Span::styled(btc, Style::default().fg(Color::Blue))),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Right),
            columns[1].inner(Margin::new(1, 0)),
        );
    }
}

/// Searched address, with a loading marker while a render is in flight.
fn address_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled("Wallet: ", Style::default().fg(MUTED_COLOR))];
    match app.current_address() {
        Some(address) => spans.push(Span::styled(
            address.to_string(),
            Style::default().fg(WARNING_COLOR),
        )),
        None => spans.push(Span::styled("none", Style::default().fg(MUTED_COLOR))),
    }
    if app.data.is_loading() {
        spans.push(Span::styled(
            "  loading...",
            Style::default().fg(MUTED_COLOR).add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

/// Exchange rate, red when the last fetch failed.
fn rate_line(app: &App) -> Line<'static> {
    let style = if app.data.rate.is_error() {
        Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SUCCESS_COLOR)
    };
    let mut spans = vec![Span::styled(app.data.rate.display_text(), style)];
    if let Some(updated) = app.data.rate_updated_text() {
        spans.push(Span::styled(
            format!("  (updated {updated})"),
            Style::default().fg(MUTED_COLOR),
        ));
    }
    Line::from(spans)
}

/// Create the animated logo shown while a wallet is loading
fn create_animated_logo(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;

    let bracket_glow = ((time * 0.8).sin() + 1.0) / 2.0;
    let lazy_glow = ((time * 0.8 + 0.5).sin() + 1.0) / 2.0;
    let flow_glow = ((time * 0.8 + 1.0).sin() + 1.0) / 2.0;

    let lazy_color = Color::Rgb(
        (50.0 * lazy_glow) as u8,
        (120.0 + lazy_glow * 135.0) as u8,
        (80.0 * lazy_glow) as u8,
    );
    let flow_color = Color::Rgb(
        (200.0 + flow_glow * 55.0) as u8,
        (140.0 + flow_glow * 80.0) as u8,
        (30.0 * flow_glow) as u8,
    );

    let bracket_intensity = (100.0 + bracket_glow * 155.0) as u8;
    let bracket_color = Color::Rgb(bracket_intensity, bracket_intensity, bracket_intensity);

    Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(
            "lazy",
            Style::default().fg(lazy_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "flow",
            Style::default().fg(flow_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(bracket_color)),
    ])
}

/// Create the static logo
fn create_static_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "flow".yellow().bold(),
        "]".into(),
        "  Bitcoin wallet fund flows".dark_gray(),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WalletBalance;
    use crate::test_utils::{buffer_to_string, test_app};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> (String, ratatui::buffer::Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(100, 5)).unwrap();
        terminal.draw(|frame| render(frame, frame.area(), app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (buffer_to_string(&buffer), buffer)
    }

    #[test]
    fn test_logo_variants() {
        assert_eq!(create_static_logo().spans.len(), 5);
        assert_eq!(create_animated_logo(0).spans.len(), 4);
        assert_eq!(create_animated_logo(100).spans.len(), 4);
    }

    #[test]
    fn test_header_shows_rate_error_in_red() {
        let mut app = test_app();
        app.data.apply_rate(Err("HTTP 500".to_string()));
        let (content, buffer) = draw(&app);

        assert!(content.contains("Error fetching exchange rate"));
        // Border, one column of padding, then the rate on the third inner row.
        assert_eq!(buffer.cell((2, 3)).unwrap().symbol(), "E");
        assert_eq!(buffer.cell((2, 3)).unwrap().fg, ERROR_COLOR);
    }

    #[test]
    fn test_header_shows_address_and_balance() {
        let mut app = test_app();
        app.data.begin_load("1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        let (content, _) = draw(&app);
        assert!(content.contains("Wallet: 1BoatSLRHtKNngkdXEeobR76b53LETtpyT  loading..."));
        assert!(!content.contains("Target Wallet Balance"));

        app.data.balance = Some(WalletBalance { btc: 2.0, usd: 130_000.0 });
        app.data.fail_load();
        let (content, _) = draw(&app);
        assert!(content.contains("Target Wallet Balance"));
        assert!(content.contains("USD Amount: $130000.00"));
        assert!(content.contains("BTC Amount: 2"));
        assert!(content.contains("Wallet: none"));
    }
}
