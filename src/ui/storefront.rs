//! Storefront screen rendering
//!
//! Renders the header (cart counter, theme, category filter), product cards
//! with expandable detail panels, and the community member cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Palette;
use crate::app::{App, Section};
use crate::data::{Product, User};

/// Renders the storefront screen
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Help text
        ])
        .split(area);

    render_header(frame, app, &palette, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_products(frame, app, &palette, columns[0]);
    render_users(frame, app, &palette, columns[1]);
    render_help(frame, app, &palette, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let category = app.current_category().unwrap_or("all products");

    let lines = vec![
        Line::from(vec![
            Span::styled("GAMESTORE", palette.title()),
            Span::raw("  "),
            Span::styled(
                format!("Cart: {}", app.cart_count()),
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("theme: {}", app.theme().label()), palette.muted()),
            Span::raw("  "),
            Span::styled(format!("category: {}", category), palette.muted()),
        ]),
        Line::from(Span::styled(
            "─".repeat(area.width.saturating_sub(1) as usize),
            palette.muted(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Lines for one product card, plus its detail panel when expanded
fn product_card(
    product: &Product,
    selected: bool,
    expanded: bool,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker.to_string(), title_style),
        Span::styled(product.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(product.price_label(), Style::default().fg(palette.price)),
    ])];

    let mut meta = vec![
        Span::raw("    "),
        Span::styled(product.category.clone(), palette.muted()),
    ];
    if let Some(rating) = product.rating {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(product.stars(), Style::default().fg(palette.highlight)));
        meta.push(Span::styled(format!(" ({})", rating.count), palette.muted()));
    }
    lines.push(Line::from(meta));

    if expanded {
        let description = if product.description.is_empty() {
            "No description available."
        } else {
            product.description.as_str()
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(description.to_string(), Style::default().fg(palette.text)),
        ]));
        if !product.image.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(product.image.clone(), palette.muted()),
            ]));
        }
    }

    lines
}

fn render_products(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Products ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let mut scroll = 0;

    let lines: Vec<Line> = match &app.products {
        Section::Loading => vec![Line::from(Span::styled("Loading products...", palette.muted()))],
        Section::Failed(reason) => vec![
            Line::from(Span::styled(
                "Couldn't load products.",
                Style::default().fg(palette.error),
            )),
            Line::from(Span::styled(reason.clone(), palette.muted())),
            Line::from(Span::styled("Press r to try again.", palette.muted())),
        ],
        Section::Loaded(products) if products.is_empty() => {
            vec![Line::from(Span::styled("No products found.", palette.muted()))]
        }
        Section::Loaded(products) => {
            let cards: Vec<Vec<Line>> = products
                .iter()
                .enumerate()
                .map(|(i, product)| {
                    product_card(
                        product,
                        i == app.selected_index,
                        app.is_expanded(product.id),
                        palette,
                    )
                })
                .collect();
            scroll = scroll_to_card(&cards, app.selected_index, inner_width, inner_height);
            cards.into_iter().flatten().collect()
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Rows a line takes up once wrapped to `width` columns
fn wrapped_height(line: &Line, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    line.width().div_ceil(width).max(1) as u16
}

/// Scroll offset that brings the bottom of the selected card into view
///
/// A card taller than the viewport is aligned to its top instead.
fn scroll_to_card(cards: &[Vec<Line>], selected: usize, width: u16, height: u16) -> u16 {
    let card_height =
        |card: &Vec<Line>| card.iter().map(|line| wrapped_height(line, width)).sum::<u16>();

    let top: u16 = cards.iter().take(selected).map(card_height).sum();
    let bottom = top + cards.get(selected).map(card_height).unwrap_or(0);
    bottom.saturating_sub(height).min(top)
}

fn user_card(user: &User, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            user.full_name(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(user.email.clone(), Style::default().fg(palette.accent))),
        Line::from(Span::styled(user.place(), palette.muted())),
        Line::from(""),
    ]
}

fn render_users(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Community ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let lines: Vec<Line> = match &app.users {
        Section::Loading => vec![Line::from(Span::styled("Loading...", palette.muted()))],
        Section::Failed(_) => vec![Line::from(Span::styled(
            "Couldn't load community members.",
            Style::default().fg(palette.error),
        ))],
        Section::Loaded(users) if users.is_empty() => {
            vec![Line::from(Span::styled("No members yet.", palette.muted()))]
        }
        Section::Loaded(users) => users.iter().flat_map(|u| user_card(u, palette)).collect(),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let refreshed = app
        .last_refresh
        .map(|t| format!("Updated {}", t.format("%H:%M")))
        .unwrap_or_default();

    let help = format!(
        "↑↓ move  Enter details  a add  t theme  c category  / search  m contact  ? help  q quit   {}",
        refreshed
    );
    frame.render_widget(Paragraph::new(Span::styled(help, palette.muted())), area);
}
