use std::io;
use crate::config::config::{Size, Target};
use crate::models::conversion::ConversionOutput;

// Validated run configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target: Target,
    pub size: Size,
    pub no_progress: bool,
    pub show_config: bool,
}

// Source of an AppConfig
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// Executes a conversion run
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
