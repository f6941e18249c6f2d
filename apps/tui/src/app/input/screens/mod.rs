use crate::app::state::{App, InputState};
use crossterm::event::KeyCode;

mod gallery;
mod help;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.input_state {
        InputState::Searching => gallery::handle_search_input(app, key),
        InputState::Browsing => gallery::handle_browse_input(app, key),
    }
}
