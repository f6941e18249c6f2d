pub mod config;

pub use config::{get_data_path, init_app_config};
