use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::app::state::{CardState, CARD_HEIGHT};
use crate::ui::widgets::card_grid::CardGrid;
use crate::view::theme::symbolic_accent;
use crate::view::{CardView, PortraitBlock, SelectorView, VariantTarget};

const PORTRAIT_ROW: u16 = 8;
const SELECTOR_ROW: u16 = 10;

/// Composes one card into `CARD_HEIGHT` styled lines. Pure with respect to
/// time: the caller passes the elapsed seconds driving the decorative
/// animations, which keeps this testable.
pub fn card_lines(
    card: &CardState,
    selected: bool,
    width: u16,
    rendered_elapsed: f64,
    updated_elapsed: Option<f64>,
) -> Vec<Line<'static>> {
    let width = width.max(8);
    let view = &card.view;
    let base = base_style(view);
    let mut grid = CardGrid::new(width, CARD_HEIGHT, base);

    draw_frame(&mut grid, view, selected, base);
    draw_body(&mut grid, view, base);
    draw_portraits(&mut grid, view, base);
    draw_selectors(
        &mut grid,
        &card.selectors,
        card.selector_index,
        selected,
        rendered_elapsed,
        base,
    );

    if let Some(elapsed) = updated_elapsed {
        overlay_bubbles(&mut grid, view, elapsed, base);
    }

    grid.into_lines()
}

fn base_style(view: &CardView) -> Style {
    let mut style = Style::default();
    if let Some(bg) = view.colors.background {
        style = style.bg(bg);
    }
    if let Some(fg) = view.colors.text {
        style = style.fg(fg);
    }
    style
}

fn border_style(view: &CardView, selected: bool, base: Style) -> Style {
    if selected {
        return base.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }

    view.marker.map_or_else(
        || base.add_modifier(Modifier::DIM),
        |marker| base.fg(symbolic_accent(marker)),
    )
}

fn draw_frame(grid: &mut CardGrid, view: &CardView, selected: bool, base: Style) {
    let width = grid.width();
    let height = grid.height();
    let border = border_style(view, selected, base);

    for col in 0..width {
        grid.put_char(0, col, '─', border);
        grid.put_char(height - 1, col, '─', border);
    }
    for row in 0..height {
        grid.put_char(row, 0, '│', border);
        grid.put_char(row, width - 1, '│', border);
    }
    grid.put_char(0, 0, '┌', border);
    grid.put_char(0, width - 1, '┐', border);
    grid.put_char(height - 1, 0, '└', border);
    grid.put_char(height - 1, width - 1, '┘', border);

    // Title lives in the top border, the derived id in the bottom one.
    grid.put_str(
        0,
        2,
        &format!(" {} ", view.title),
        border.add_modifier(Modifier::BOLD),
    );
    grid.put_str_right(
        height - 1,
        width.saturating_sub(3),
        &format!(" card-{} ", view.slug),
        border.add_modifier(Modifier::DIM),
    );

    if let Some(marker) = view.marker {
        grid.put_str_right(
            0,
            width.saturating_sub(3),
            &format!(" {} ", marker.as_str()),
            base.fg(symbolic_accent(marker)).add_modifier(Modifier::BOLD),
        );
    }
}

fn draw_body(grid: &mut CardGrid, view: &CardView, base: Style) {
    let inner = grid.width().saturating_sub(4) as usize;
    let dim = base.add_modifier(Modifier::DIM);

    grid.put_str(1, 2, &view.year, dim);

    for (offset, line) in wrap_words(&view.description, inner, 2).iter().enumerate() {
        grid.put_str(2 + offset as u16, 2, line, base);
    }

    grid.put_str(4, 2, &view.consoles, base);
    grid.put_str(
        5,
        2,
        &format!("Info: {}", view.info_link),
        base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    );

    // The secondary link keeps its line even when hidden.
    if let Some(hlb) = &view.hlb_link {
        grid.put_str(
            6,
            2,
            &format!("How long to beat: {hlb}"),
            base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        );
    }
}

fn draw_portraits(grid: &mut CardGrid, view: &CardView, base: Style) {
    let width = grid.width();

    match &view.portraits {
        // An empty block still occupies its rows, keeping card geometry
        // identical with and without art.
        PortraitBlock::Placeholder => {}
        PortraitBlock::Single(portrait) => {
            grid.put_str_centered(PORTRAIT_ROW, &boxed(portrait), base);
        }
        PortraitBlock::Pair(left, right) => {
            grid.put_str(PORTRAIT_ROW, 2, &boxed(left), base);
            grid.put_str_right(PORTRAIT_ROW, width.saturating_sub(3), &boxed(right), base);
        }
        PortraitBlock::Multi(portraits) => {
            let labels: Vec<String> = portraits
                .iter()
                .enumerate()
                .map(|(index, portrait)| format!("[{}:{}]", index + 1, portrait_label(portrait)))
                .collect();
            grid.put_str(PORTRAIT_ROW, 2, &labels.join(" "), base);
        }
    }
}

fn draw_selectors(
    grid: &mut CardGrid,
    selectors: &[SelectorView],
    highlighted: usize,
    selected: bool,
    rendered_elapsed: f64,
    base: Style,
) {
    if selectors.is_empty() {
        return;
    }

    let dim = base.add_modifier(Modifier::DIM);
    grid.put_str(SELECTOR_ROW, 2, "Variations:", dim);

    let mut col = 14;
    for (index, selector) in selectors.iter().enumerate() {
        if col >= grid.width().saturating_sub(2) {
            break;
        }

        let glyph = match selector.target {
            VariantTarget::Default => '↲',
            VariantTarget::Variation(_) => '●',
        };

        // Entrance animation: each selector pops in after its own delay.
        let arrived = rendered_elapsed >= selector.entrance_delay;
        let style = if selected && index == highlighted {
            base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else if arrived {
            base
        } else {
            dim
        };

        grid.put_char(SELECTOR_ROW, col, if arrived { glyph } else { '·' }, style);
        col += 2;
    }

    if selected {
        if let Some(current) = selectors.get(highlighted) {
            let label = if current.label.is_empty() {
                "(unnamed)".to_string()
            } else {
                current.label.clone()
            };
            grid.put_str(SELECTOR_ROW, col + 1, &label, dim);
        }
    }
}

fn overlay_bubbles(grid: &mut CardGrid, view: &CardView, elapsed: f64, base: Style) {
    let inner_width = f64::from(grid.width().saturating_sub(2));
    let inner_height = CARD_HEIGHT - 2;

    for bubble in &view.bubbles {
        if elapsed < bubble.delay {
            continue;
        }

        let active = elapsed - bubble.delay;
        let col = 1 + (bubble.x_pct / 100.0 * (inner_width - 1.0)).round() as u16;
        let base_row = (bubble.y_pct / 100.0 * f64::from(inner_height - 1)).round() as u16;

        // Bubbles drift upward, wrapping inside the card body.
        let drift = (active * 1.5).floor() as u16 % inner_height;
        let row = 1 + (base_row + inner_height - drift) % inner_height;

        let glyph = if (active * 2.0).sin() > 0.0 { '•' } else { '◦' };
        if grid.is_blank(row, col.min(grid.width() - 2)) {
            grid.put_char(row, col.min(grid.width() - 2), glyph, base.fg(bubble.color));
        }
    }
}

/// Greedy word wrap into at most `max_lines` lines of `width` chars; an
/// overflowing tail gets an ellipsis.
fn wrap_words(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            break;
        }
        current = word.chars().take(width).collect();
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
    }

    if let Some(last) = lines.last_mut() {
        if last.chars().count() >= width {
            let mut truncated: String = last.chars().take(width.saturating_sub(1)).collect();
            truncated.push('…');
            *last = truncated;
        }
    }

    lines
}

fn portrait_label(portrait: &str) -> String {
    let file = portrait.rsplit('/').next().unwrap_or(portrait);
    file.rsplit_once('.')
        .map_or_else(|| file.to_string(), |(stem, _)| stem.to_string())
}

fn boxed(portrait: &str) -> String {
    format!("[{}]", portrait_label(portrait))
}
