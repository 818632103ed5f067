pub mod config;
pub mod paths;

pub use config::{Config, LoggingConfig, ServiceConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use paths::{PathManager, CONFIG_DIR_ENV};
