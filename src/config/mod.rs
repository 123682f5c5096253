//! Configuration loading

mod config;

pub use config::{Config, CONFIG_DIR_ENV};
