use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Table, Wrap,
    },
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

mod animation;

use animation::{approach_scroll_target, scroll_indicator_visible};

#[derive(serde::Deserialize, Clone)]
#[allow(dead_code)]
struct GalleryCard {
    #[serde(rename = "nome", default)]
    name: String,
    #[serde(rename = "data_criacao", default)]
    created: Option<String>,
    #[serde(rename = "descricao", default)]
    description: Option<String>,
    #[serde(rename = "Consoles", default)]
    consoles: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(rename = "hlb", default)]
    hlb_link: Option<String>,
    #[serde(default)]
    variations: Vec<GalleryVariation>,
}

#[derive(serde::Deserialize, Clone)]
#[allow(dead_code)]
struct GalleryVariation {
    #[serde(rename = "nome", default)]
    name: Option<String>,
    #[serde(default)]
    bubble_icon: Option<String>,
}

struct SearchState {
    input: String,
    applied: String,
}

fn main() -> io::Result<()> {
    let data = Rc::new(RefCell::new(None::<Vec<GalleryCard>>));
    let search = Rc::new(RefCell::new(SearchState {
        input: String::new(),
        applied: String::new(),
    }));
    let row_offset = Rc::new(RefCell::new(0_usize));
    let scroll_target = Rc::new(RefCell::new(None::<usize>));

    spawn_local(fetch_gallery(data.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let search = search.clone();
        let row_offset = row_offset.clone();
        let scroll_target = scroll_target.clone();
        move |event| match event.code {
            ratzilla::event::KeyCode::Char(c) => {
                search.borrow_mut().input.push(c);
            }
            ratzilla::event::KeyCode::Backspace => {
                search.borrow_mut().input.pop();
            }
            ratzilla::event::KeyCode::Enter => {
                let mut search = search.borrow_mut();
                search.applied = search.input.clone();
                *row_offset.borrow_mut() = 0;
                *scroll_target.borrow_mut() = None;
            }
            ratzilla::event::KeyCode::Esc => {
                let mut search = search.borrow_mut();
                search.input = search.applied.clone();
            }
            ratzilla::event::KeyCode::Up => {
                let mut offset = row_offset.borrow_mut();
                *offset = offset.saturating_sub(1);
                *scroll_target.borrow_mut() = None;
            }
            ratzilla::event::KeyCode::Down => {
                let mut offset = row_offset.borrow_mut();
                *offset = (*offset + 1).min(2000);
                *scroll_target.borrow_mut() = None;
            }
            ratzilla::event::KeyCode::Home => {
                // Smooth scroll back to the top; the draw loop eases there.
                *scroll_target.borrow_mut() = Some(0);
            }
            _ => {}
        }
    });

    terminal.draw_web(move |f| {
        // Advance the smooth-scroll easing one frame.
        let target = *scroll_target.borrow();
        if let Some(target) = target {
            let mut offset = row_offset.borrow_mut();
            *offset = approach_scroll_target(*offset, target);
            if *offset == target {
                *scroll_target.borrow_mut() = None;
            }
        }

        let area = f.area();
        let block = Block::default()
            .title("Card Gallery")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let data = data.borrow();
        if let Some(cards) = data.as_ref() {
            let search = search.borrow();
            let offset = *row_offset.borrow();
            render_gallery(cards, &search, offset, f, inner);
        } else {
            let paragraph = Paragraph::new(Text::from(TextLine::from("Loading data.json...")))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    });

    Ok(())
}

fn render_gallery(
    cards: &[GalleryCard],
    search: &SearchState,
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let filtered = filter_cards(cards, &search.applied);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    render_search_line(search, filtered.len(), cards.len(), f, main_layout[0]);
    render_gap(f, main_layout[1]);
    render_card_rows(&filtered, row_offset, f, main_layout[2]);
    render_footer(row_offset, f, main_layout[3]);
}

/// Case-insensitive substring filter over name, date, description, console
/// list, tags, and variation names. Empty query keeps everything.
fn filter_cards<'a>(cards: &'a [GalleryCard], query: &str) -> Vec<&'a GalleryCard> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return cards.iter().collect();
    }

    let contains = |value: Option<&str>| {
        value.is_some_and(|value| value.to_lowercase().contains(&needle))
    };

    cards
        .iter()
        .filter(|card| {
            contains(Some(card.name.as_str()))
                || contains(card.created.as_deref())
                || contains(card.description.as_deref())
                || contains(card.consoles.as_deref())
                || card.tags.iter().any(|tag| contains(Some(tag)))
                || card
                    .variations
                    .iter()
                    .any(|variation| contains(variation.name.as_deref()))
        })
        .collect()
}

fn render_search_line(
    search: &SearchState,
    shown: usize,
    total: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let line = TextLine::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}_", search.input),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{shown} of {total} cards"),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let block = Block::default()
        .title("Gallery")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(line))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_gap(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new("")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_card_rows(
    cards: &[&GalleryCard],
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    if cards.is_empty() {
        let paragraph = Paragraph::new("No cards to show")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let max_rows = area.height.saturating_sub(2) as usize;

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Year"),
        Cell::from("Consoles"),
        Cell::from("Tags"),
        Cell::from("Variations"),
    ])
    .style(
        Style::default()
            .fg(Color::Rgb(0, 0, 238))
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let rows = std::iter::once(Row::new(vec![
        Cell::from(" "),
        Cell::from(" "),
        Cell::from(" "),
        Cell::from(" "),
        Cell::from(" "),
    ]))
    .chain(cards.iter().skip(row_offset).take(max_rows).map(|card| {
        let variations = card
            .variations
            .iter()
            .filter_map(|variation| variation.name.clone())
            .collect::<Vec<_>>()
            .join(", ");

        Row::new(vec![
            Cell::from(card.name.clone()),
            Cell::from(card.created.clone().unwrap_or_default()),
            Cell::from(card.consoles.clone().unwrap_or_default()),
            Cell::from(card.tags.join(", ")),
            Cell::from(variations),
        ])
        .style(Style::default().fg(Color::White))
    }));

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(18),
            Constraint::Length(28),
        ],
    )
    .header(header)
    .column_spacing(1);

    f.render_widget(table, area);

    let mut scrollbar_state = ScrollbarState::new(cards.len())
        .position(row_offset)
        .viewport_content_length(max_rows.min(area.height.saturating_sub(1) as usize));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(Color::Rgb(0, 0, 238)));
    let scroll_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    f.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);

    if scroll_indicator_visible(row_offset) {
        render_scroll_top_indicator(f, area);
    }
}

fn render_scroll_top_indicator(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    const LABEL: &str = " ▲ top (Home) ";

    let width = LABEL.chars().count() as u16;
    if area.width <= width {
        return;
    }

    let corner = Rect {
        x: area.x + area.width - width,
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

fn render_footer(row_offset: usize, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let info = TextLine::from(vec![
        Span::styled("Type to search", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Enter", Style::default().fg(Color::White)),
        Span::raw(" apply  "),
        Span::styled("Arrows", Style::default().fg(Color::White)),
        Span::raw(" scroll  "),
        Span::styled("Home", Style::default().fg(Color::White)),
        Span::raw(" top  "),
        Span::styled(
            format!("row {row_offset}"),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(Text::from(info)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

async fn fetch_gallery(store: Rc<RefCell<Option<Vec<GalleryCard>>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init("data.json", &opts) else {
        return;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        web_sys::console::error_1(&"Failed to fetch data.json".into());
        return;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Failed to read response".into());
        return;
    };

    let Ok(json_promise) = response.json() else {
        web_sys::console::error_1(&"Failed to read data.json body".into());
        return;
    };

    let Ok(json) = wasm_bindgen_futures::JsFuture::from(json_promise).await else {
        web_sys::console::error_1(&"Failed to read data.json body".into());
        return;
    };

    let cards = match serde_wasm_bindgen::from_value::<Vec<GalleryCard>>(json) {
        Ok(cards) => cards,
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to parse data.json: {error}").into());
            return;
        }
    };

    *store.borrow_mut() = Some(cards);
}
