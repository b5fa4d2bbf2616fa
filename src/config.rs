use std::env;

use crate::modules::integrations::overpass;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub overpass_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            overpass_url: env::var("OVERPASS_URL")
                .unwrap_or_else(|_| overpass::DEFAULT_ENDPOINT.to_string()),
        }
    }
}
