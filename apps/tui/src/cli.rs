use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ratatui_card-gallery", version, about = "Card Gallery TUI")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override dataset path
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Seed the decorative randomness for reproducible renders
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("GALLERY_DATA", data);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
