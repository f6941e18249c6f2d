// UI module for ratatui_card-gallery
// Binds the pure view layer to ratatui widgets

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.show_help {
        let area = f.area();
        screens::help::render_help(f, area);
        return;
    }

    screens::gallery::render_gallery(app, f);
}
