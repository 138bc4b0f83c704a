//! Game search screen

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Palette;
use crate::app::App;

/// Renders the search box and the matching titles
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(palette.accent)),
        Span::styled(app.search_query.clone(), Style::default().fg(palette.text)),
        Span::styled("_", Style::default().fg(palette.highlight)),
    ]))
    .block(
        Block::default()
            .title(" Search games ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(input, chunks[0]);

    let results = app.search_results();
    let lines: Vec<Line> = if app.search_query.trim().is_empty() {
        vec![Line::from(Span::styled("Start typing a game title", palette.muted()))]
    } else if results.is_empty() {
        vec![Line::from(Span::styled(
            format!("No games match \"{}\"", app.search_query.trim()),
            palette.muted(),
        ))]
    } else {
        results
            .into_iter()
            .map(|title| {
                Line::from(Span::styled(
                    format!("  {}", title),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect()
    };

    let list = Paragraph::new(lines).block(
        Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    frame.render_widget(list, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled("Type to search  Backspace delete  Esc back", palette.muted())),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::loaded_app;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_prompt_when_empty() {
        let app = loaded_app();
        assert!(rendered(&app).contains("Start typing a game title"));
    }

    #[test]
    fn test_shows_matches() {
        let mut app = loaded_app();
        app.search_query = "hollow".to_string();
        assert!(rendered(&app).contains("Hollow Knight"));
    }

    #[test]
    fn test_shows_no_match_message() {
        let mut app = loaded_app();
        app.search_query = "tetris".to_string();
        assert!(rendered(&app).contains("No games match"));
    }
}
