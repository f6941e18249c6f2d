use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use ratatui::Frame;

use crate::app::{App, InputState};
use crate::ui::widgets::cards::card_lines;

/// Rows eaten by chrome around the card viewport: search bar (3), gallery
/// borders (2), status (3), shortcuts hint (1).
const CHROME_ROWS: u16 = 9;

/// Card viewport height for a given terminal height; the event loop feeds
/// this back into the app state so scrolling can clamp correctly.
pub const fn viewport_rows(total_rows: u16) -> u16 {
    total_rows.saturating_sub(CHROME_ROWS)
}

pub fn render_gallery(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Cards
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area());

    render_search_bar(app, f, layout[0]);
    render_cards(app, f, layout[1]);
    render_status(app, f, layout[2]);
    render_shortcuts(f, layout[3]);
}

fn render_search_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let searching = app.input_state == InputState::Searching;

    let block = Block::default()
        .title(" Search ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if searching {
            Color::Green
        } else {
            Color::DarkGray
        }));

    let cursor = if searching {
        let blink = (app.animation_counter * 2.0).sin() > 0.0;
        if blink {
            "█"
        } else {
            " "
        }
    } else {
        ""
    };

    let line = TextLine::from(vec![
        Span::styled(
            format!("> {}{}", app.search_input, cursor),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   ({} cards)", app.cards.len()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    f.render_widget(paragraph, area);
}

fn render_cards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Gallery ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.cards.is_empty() {
        let paragraph = Paragraph::new("No cards to show.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let browsing = app.input_state == InputState::Browsing;
    let mut lines = Vec::new();
    for (index, card) in app.cards.iter().enumerate() {
        let (rendered_elapsed, updated_elapsed) = app.card_elapsed(card);
        lines.extend(card_lines(
            card,
            browsing && index == app.selected_card,
            inner.width.saturating_sub(1),
            rendered_elapsed,
            updated_elapsed,
        ));
        lines.push(TextLine::default());
    }

    let paragraph = Paragraph::new(Text::from(lines)).scroll((app.scroll_offset, 0));
    f.render_widget(paragraph, inner);

    let mut scrollbar_state = ScrollbarState::new(usize::from(app.content_rows()))
        .position(usize::from(app.scroll_offset))
        .viewport_content_length(usize::from(inner.height));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(Color::Cyan));
    f.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);

    if app.scroll_indicator_visible() {
        render_scroll_top_indicator(f, inner);
    }
}

/// The back-to-top affordance, only present once the gallery has scrolled
/// past the threshold.
fn render_scroll_top_indicator(f: &mut Frame<'_>, area: Rect) {
    const LABEL: &str = " ▲ top (t) ";

    let width = u16::try_from(LABEL.chars().count()).unwrap_or(11);
    if area.width <= width + 2 {
        return;
    }

    let corner = Rect {
        x: area.x + area.width - width - 2,
        y: area.y,
        width,
        height: 1,
    };

    let paragraph = Paragraph::new(LABEL).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(paragraph, corner);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from("")
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        Text::from(Span::styled(&app.status_message, style))
    };

    let paragraph = Paragraph::new(status_text)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let sep = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("/", key),
        Span::styled(": Search | ", sep),
        Span::styled("↑/↓", key),
        Span::styled(": Cards | ", sep),
        Span::styled("←/→", key),
        Span::styled(": Variations | ", sep),
        Span::styled("Enter", key),
        Span::styled(": Apply | ", sep),
        Span::styled("r", key),
        Span::styled(": Reset | ", sep),
        Span::styled("t", key),
        Span::styled(": Top | ", sep),
        Span::styled("F1", key),
        Span::styled(": Help | ", sep),
        Span::styled("q", key),
        Span::styled(": Quit", sep),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
