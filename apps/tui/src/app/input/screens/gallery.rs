use crate::app::input::helpers::{wrap_decrement, wrap_increment, PAGE_ROWS};
use crate::app::state::{App, InputState};
use crossterm::event::KeyCode;

/// Browse-mode keys: card selection, selector cycling, scrolling, and the
/// entry points into search and the scroll-top affordance.
pub fn handle_browse_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.input_state = InputState::Searching;
            app.search_input = app.active_query.clone();
        }
        KeyCode::Up => {
            app.select_prev_card();
        }
        KeyCode::Down => {
            app.select_next_card();
        }
        KeyCode::Char('k') => {
            app.scroll_by(-1);
        }
        KeyCode::Char('j') => {
            app.scroll_by(1);
        }
        KeyCode::PageUp => {
            app.scroll_by(-PAGE_ROWS);
        }
        KeyCode::PageDown => {
            app.scroll_by(PAGE_ROWS);
        }
        KeyCode::Home => {
            app.scroll_by(-i32::from(u16::MAX));
        }
        KeyCode::End => {
            app.scroll_to_end();
        }
        KeyCode::Left => {
            cycle_selector(app, false);
        }
        KeyCode::Right => {
            cycle_selector(app, true);
        }
        KeyCode::Enter => {
            app.apply_selected_variant();
        }
        KeyCode::Char('r') => {
            app.reset_selected_card();
        }
        KeyCode::Char('t') => {
            app.begin_scroll_to_top();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

/// Search-mode keys: edit the query, Enter submits, Esc leaves the input
/// without touching the applied query.
pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.search_input.push(c),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Enter => {
            app.run_search();
            app.input_state = InputState::Browsing;
        }
        KeyCode::Esc => {
            app.search_input = app.active_query.clone();
            app.input_state = InputState::Browsing;
        }
        _ => {}
    }
}

fn cycle_selector(app: &mut App, forward: bool) {
    let Some(card) = app.cards.get_mut(app.selected_card) else {
        return;
    };
    if card.selectors.is_empty() {
        return;
    }

    card.selector_index = if forward {
        wrap_increment(card.selector_index, card.selectors.len())
    } else {
        wrap_decrement(card.selector_index, card.selectors.len())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::VariantTarget;

    fn app() -> App {
        let records = serde_json::from_str(
            r#"[{
                "nome": "Persona Q",
                "variations": [{"nome": "Persona Q2"}]
            }]"#,
        )
        .expect("test dataset parses");

        let mut app = App::new(Some(5));
        app.set_records(records);
        app
    }

    #[test]
    fn enter_applies_the_highlighted_selector() {
        let mut app = app();

        handle_browse_input(&mut app, KeyCode::Right);
        handle_browse_input(&mut app, KeyCode::Enter);

        assert_eq!(app.cards[0].view.title, "Persona Q2");
        assert_eq!(app.cards[0].active, VariantTarget::Variation(0));
    }

    #[test]
    fn selector_cycling_wraps_and_reset_is_first() {
        let mut app = app();

        assert_eq!(app.cards[0].selector_index, 0);
        handle_browse_input(&mut app, KeyCode::Left);
        assert_eq!(app.cards[0].selector_index, 1);
        handle_browse_input(&mut app, KeyCode::Right);
        assert_eq!(app.cards[0].selector_index, 0);
    }

    #[test]
    fn search_mode_round_trip_submits_on_enter() {
        let mut app = app();

        handle_browse_input(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_state, InputState::Searching);

        for c in "q2".chars() {
            handle_search_input(&mut app, KeyCode::Char(c));
        }
        handle_search_input(&mut app, KeyCode::Enter);

        assert_eq!(app.input_state, InputState::Browsing);
        assert_eq!(app.active_query, "q2");
        assert_eq!(app.cards.len(), 1);
    }

    #[test]
    fn escape_abandons_the_edited_query() {
        let mut app = app();
        app.search_input = "persona".to_string();
        app.run_search();

        handle_browse_input(&mut app, KeyCode::Char('/'));
        handle_search_input(&mut app, KeyCode::Backspace);
        handle_search_input(&mut app, KeyCode::Esc);

        assert_eq!(app.active_query, "persona");
        assert_eq!(app.search_input, "persona");
    }

    #[test]
    fn slash_in_search_mode_is_just_a_character() {
        let mut app = app();

        handle_browse_input(&mut app, KeyCode::Char('/'));
        handle_search_input(&mut app, KeyCode::Char('/'));

        assert_eq!(app.search_input, "/");
    }
}
