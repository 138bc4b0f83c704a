//! Contact form screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Palette;
use crate::app::{App, ContactStatus};
use crate::contact::Field;

/// Renders the three inputs and the outcome of the last submit
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(5), // Message
            Constraint::Min(2),    // Feedback
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let form = &app.contact;
    render_input(frame, &palette, chunks[0], "Name", &form.name, form.focus == Field::Name);
    render_input(frame, &palette, chunks[1], "Email", &form.email, form.focus == Field::Email);
    render_input(
        frame,
        &palette,
        chunks[2],
        "Message",
        &form.message,
        form.focus == Field::Message,
    );

    let feedback: Vec<Line> = match &app.contact_status {
        Some(ContactStatus::Sent(name)) => vec![Line::from(Span::styled(
            format!("Thanks, {}! We'll get back to you soon.", name),
            Style::default().fg(palette.success),
        ))],
        Some(ContactStatus::Invalid(errors)) => errors
            .iter()
            .map(|e| Line::from(Span::styled(format!("• {}", e), Style::default().fg(palette.error))))
            .collect(),
        None => Vec::new(),
    };
    frame.render_widget(Paragraph::new(feedback), chunks[3]);

    frame.render_widget(
        Paragraph::new(Span::styled("Tab next field  Enter send  Esc back", palette.muted())),
        chunks[4],
    );
}

fn render_input(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
) {
    let border = if focused {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.muted()
    };
    let cursor = if focused { "_" } else { "" };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(value.to_string(), Style::default().fg(palette.text)),
        Span::styled(cursor, Style::default().fg(palette.highlight)),
    ]))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(paragraph, area);
}
