use rocket::figment::{providers::Env, Figment};
use serde::Deserialize;

use evaluator::DEFAULT_PRECISION;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Longest accepted expression in bytes
    pub max_expression_length: usize,
    /// Significant digits in the formatted result
    pub precision: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            max_expression_length: 1024,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

/// Rocket's configuration overlaid with `APP_` environment variables
///
/// The first underscore after the prefix separates the section, so
/// `APP_API_PRECISION` sets `api.precision`
pub fn figment() -> Figment {
    rocket::Config::figment()
        .merge(Env::prefixed("APP_").map(|s| s.as_str().replacen('_', ".", 1).into()))
}
