// App module for ratatui_card-gallery
// Handles application state and input dispatch

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, CardState, InputState};
