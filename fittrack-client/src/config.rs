use std::env;

use dotenv::dotenv;
use log::{info, warn};
use reqwest::Url;

use crate::exercise::Error;

pub const DEFAULT_URL: &str = "https://exercisedb.p.rapidapi.com";

#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseDbConfig {
    pub url: String,
    pub host: String,
    pub api_key: String,
}

impl ExerciseDbConfig {
    /// Reads `EXERCISEDB_URL`, `EXERCISEDB_HOST` and `EXERCISEDB_API_KEY`,
    /// honouring a `.env` file if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let url = lookup("EXERCISEDB_URL").unwrap_or_else(|| {
            info!("EXERCISEDB_URL not set, using default: {}", DEFAULT_URL);
            DEFAULT_URL.to_owned()
        });
        let api_key = lookup("EXERCISEDB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                warn!("EXERCISEDB_API_KEY is not set");
                Error::ConfigError("EXERCISEDB_API_KEY must be set".to_owned())
            })?;
        let host = match lookup("EXERCISEDB_HOST") {
            Some(host) => host,
            None => Url::parse(&url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_owned))
                .ok_or_else(|| Error::ConfigError(format!("cannot derive host from {}", url)))?,
        };

        Ok(Self { url, host, api_key })
    }
}
