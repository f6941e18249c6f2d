use std::collections::BTreeMap;
use std::io::Stdout;

use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{handle_input, App};
use crate::domain::card_slug;
use crate::ui;

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Advance animations and smooth scrolling
        app.update();

        // Keep the clamping math in sync with the real viewport
        let size = terminal.size()?;
        app.viewport_rows = ui::screens::gallery::viewport_rows(size.height);

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Run without a UI: print gallery stats and exit.
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let stats = build_gallery_stats(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\nCard Gallery Stats");
    println!("==================");
    println!("Total cards: {}", stats.total_cards);
    println!("Total variations: {}", stats.total_variations);
    println!("Themed cards: {}", stats.themed_cards);

    println!("\nCards by Console:");
    for (console, count) in &stats.by_console {
        println!("- {console}: {count}");
    }

    println!("\nCards by Tag:");
    for (tag, count) in &stats.by_tag {
        println!("- {tag}: {count}");
    }

    println!("\nCards:");
    for card in &stats.cards {
        println!(
            "- {} | {} | {} | {} variations",
            card.name, card.created, card.consoles, card.variations
        );
    }

    Ok(())
}

fn build_gallery_stats(app: &App) -> GalleryStats {
    let records = &app.records;

    let total_variations = records.iter().map(|r| r.variations.len()).sum();
    let themed_cards = records.iter().filter(|r| r.theme.is_some()).count();

    let mut by_console: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_tag: BTreeMap<String, usize> = BTreeMap::new();

    for record in records {
        if let Some(consoles) = &record.consoles {
            for console in consoles.split(',').map(str::trim).filter(|c| !c.is_empty()) {
                *by_console.entry(console.to_string()).or_default() += 1;
            }
        }
        for tag in &record.tags {
            *by_tag.entry(tag.clone()).or_default() += 1;
        }
    }

    let cards = records
        .iter()
        .map(|record| HeadlessCard {
            name: record.name.clone(),
            slug: card_slug(&record.name),
            created: record.created.clone().unwrap_or_default(),
            consoles: record.consoles.clone().unwrap_or_default(),
            variations: record.variations.len(),
        })
        .collect();

    GalleryStats {
        total_cards: records.len(),
        total_variations,
        themed_cards,
        by_console: by_console.into_iter().collect(),
        by_tag: by_tag.into_iter().collect(),
        cards,
    }
}

#[derive(serde::Serialize)]
struct GalleryStats {
    total_cards: usize,
    total_variations: usize,
    themed_cards: usize,
    by_console: Vec<(String, usize)>,
    by_tag: Vec<(String, usize)>,
    cards: Vec<HeadlessCard>,
}

#[derive(serde::Serialize)]
struct HeadlessCard {
    name: String,
    slug: String,
    created: String,
    consoles: String,
    variations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let records = serde_json::from_str(
            r#"[
                {"nome": "Persona Q", "Consoles": "3DS", "theme": "pq",
                 "tags": ["jrpg", "dungeon-crawler"],
                 "variations": [{"nome": "Persona Q2"}]},
                {"nome": "Persona 5", "Consoles": "PS3, PS4", "tags": ["jrpg"]}
            ]"#,
        )
        .expect("test dataset parses");

        let mut app = App::new(Some(1));
        app.set_records(records);
        app
    }

    #[test]
    fn stats_count_cards_variations_and_themes() {
        let stats = build_gallery_stats(&app());

        assert_eq!(stats.total_cards, 2);
        assert_eq!(stats.total_variations, 1);
        assert_eq!(stats.themed_cards, 1);
        assert_eq!(stats.cards[0].slug, "persona-q");
    }

    #[test]
    fn console_lists_are_split_and_tallied() {
        let stats = build_gallery_stats(&app());

        assert!(stats.by_console.contains(&("PS4".to_string(), 1)));
        assert!(stats.by_console.contains(&("3DS".to_string(), 1)));
        assert!(stats.by_tag.contains(&("jrpg".to_string(), 2)));
    }

    #[test]
    fn stats_serialize_to_json() {
        let stats = build_gallery_stats(&app());
        let json = serde_json::to_string_pretty(&stats).expect("stats serialize");

        assert!(json.contains("\"total_cards\": 2"));
        assert!(json.contains("persona-q"));
    }
}
