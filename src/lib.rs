// Public modules
pub mod archive;
pub mod cli;
pub mod config;
pub mod download;
pub mod install;
pub mod models;
pub mod runner;
pub mod select;
pub mod ui;

// Re-export commonly used types
pub use models::*;
