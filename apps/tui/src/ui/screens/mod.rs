pub mod gallery;
pub mod help;
