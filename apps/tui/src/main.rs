mod app;
mod cli;
mod config;
mod data;
mod domain;
mod event;
mod search;
mod terminal;
mod ui;
mod view;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let data_path = config::init_app_config();

    // Initialize application state
    let mut app = App::new(args.seed);

    // Load the dataset once; a failure leaves the gallery empty.
    match data::load_records(&data_path).await {
        Ok(records) => app.set_records(records),
        Err(e) => {
            eprintln!("Error loading {}: {e}", data_path.display());
            app.status_message = format!("Error: failed to load {}", data_path.display());
        }
    }

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
