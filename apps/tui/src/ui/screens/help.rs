use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::widgets::popup::centered_rect;

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        TextLine::from(vec![Span::styled(
            "Card Gallery",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from("Browse the gallery, search it, and swap cards to their variations."),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(vec![
            Span::styled("  /", key),
            Span::raw(" - Search (Enter applies, Esc cancels)"),
        ]),
        TextLine::from(vec![
            Span::styled("  ↑/↓", key),
            Span::raw(" - Select the previous/next card"),
        ]),
        TextLine::from(vec![
            Span::styled("  j/k", key),
            Span::raw(" - Scroll by one row"),
        ]),
        TextLine::from(vec![
            Span::styled("  PgUp/PgDn", key),
            Span::raw(" - Scroll by a page step"),
        ]),
        TextLine::from(vec![
            Span::styled("  Home/End", key),
            Span::raw(" - Jump to the top/bottom"),
        ]),
        TextLine::from(vec![
            Span::styled("  ←/→", key),
            Span::raw(" - Highlight a variation selector on the card"),
        ]),
        TextLine::from(vec![
            Span::styled("  Enter", key),
            Span::raw(" - Apply the highlighted selector"),
        ]),
        TextLine::from(vec![
            Span::styled("  r", key),
            Span::raw(" - Reset the card to its default"),
        ]),
        TextLine::from(vec![
            Span::styled("  t", key),
            Span::raw(" - Smooth-scroll back to the top"),
        ]),
        TextLine::from(vec![
            Span::styled("  q", key),
            Span::raw(" - Quit"),
        ]),
        TextLine::from(""),
        TextLine::from("The ↲ selector restores a card; ● selectors apply its variations."),
        TextLine::from("Cards with a theme get their colors; themed variations bring bubbles."),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )]),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup);
}
