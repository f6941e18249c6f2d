use std::env;
use std::path::PathBuf;

use dotenv::dotenv;

/// Initializes the application configuration
/// Returns the resolved dataset path
pub fn init_app_config() -> PathBuf {
    // Load environment variables from .env file
    dotenv().ok();

    get_data_path()
}

/// Gets the path of the JSON dataset loaded at startup
pub fn get_data_path() -> PathBuf {
    env::var("GALLERY_DATA").map_or_else(|_| PathBuf::from("data.json"), PathBuf::from)
}
