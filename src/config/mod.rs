//! Configuration module for Magpie-Harvest
//!
//! Configuration is optional: every value has a default matching the
//! behavior of the scraper when run bare. A TOML file can override the
//! fetch timeouts, user agent, and pipeline limits.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, FetchConfig, PipelineConfig};
pub use validation::validate;
