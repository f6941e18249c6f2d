use crate::app::state::{App, InputState};
use crossterm::event::KeyCode;

pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    let toggle = key == KeyCode::F(1)
        || (app.input_state != InputState::Searching && key == KeyCode::Char('?'));

    if toggle {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}
