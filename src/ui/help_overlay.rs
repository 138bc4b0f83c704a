//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts, in the active theme.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Palette;
use crate::prefs::Theme;

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame, theme: Theme) {
    let palette = Palette::for_theme(theme);
    let area = frame.area();

    // Calculate centered overlay area
    let overlay_width = 50;
    let overlay_height = 21;
    let overlay_area = centered_rect(overlay_width, overlay_height, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
    };

    let lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", palette.title())),
        Line::from(""),
        section("Browsing"),
        help_line("↑/k, ↓/j", "Move selection up/down", &palette),
        help_line("Enter", "Show/hide product details", &palette),
        help_line("c", "Next category", &palette),
        help_line("r", "Clear cache and reload", &palette),
        Line::from(""),
        section("Store"),
        help_line("a", "Add selected product to cart", &palette),
        help_line("x", "Empty cart", &palette),
        help_line("t", "Toggle dark/light theme", &palette),
        Line::from(""),
        section("Other"),
        help_line("/", "Search games", &palette),
        help_line("m", "Contact us", &palette),
        help_line("q, Ctrl-C", "Quit application", &palette),
        Line::from(""),
        Line::from(Span::styled("Press Esc or ? to close", palette.muted())),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(palette.base())
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, overlay_area);
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(palette.highlight)),
        Span::raw(description.to_string()),
    ])
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
