use async_trait::async_trait;
use fittrack_model::exercise::{filter_by_name, BodyPartFilter, Exercise};
use itertools::Itertools;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ExerciseDbConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
    #[error("configuration error: {0}")]
    ConfigError(String),
}

type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait ExerciseClient: Send + Sync {
    async fn body_parts(&self) -> Result<Vec<String>>;
    async fn exercises(&self, filter: &BodyPartFilter) -> Result<Vec<Exercise>>;
}

pub struct ExerciseDbClient {
    config: ExerciseDbConfig,
    client: reqwest::Client,
}

impl ExerciseDbClient {
    fn new(config: ExerciseDbConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.url)
            .map_err(|e| Error::ConfigError(format!("invalid url {}: {}", self.config.url, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::ConfigError(format!("url {} cannot be a base", self.config.url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);
        self.client
            .get(url)
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.host)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to exercise database failed: {}", e);
                Error::CommunicationError
            })
            .and_then(|resp| {
                if resp.status().is_client_error() {
                    Err(Error::RequestError)
                } else if resp.status().is_server_error() {
                    Err(Error::InternalServerError)
                } else {
                    Ok(resp)
                }
            })?
            .json()
            .await
            .map_err(|e| {
                warn!("Undecodable response from exercise database: {}", e);
                Error::ResponseError
            })
    }
}

pub fn create(config: ExerciseDbConfig) -> impl ExerciseClient {
    ExerciseDbClient::new(config)
}

#[async_trait]
impl ExerciseClient for ExerciseDbClient {
    async fn body_parts(&self) -> Result<Vec<String>> {
        self.get(&["exercises", "bodyPartList"]).await
    }

    async fn exercises(&self, filter: &BodyPartFilter) -> Result<Vec<Exercise>> {
        match filter {
            BodyPartFilter::All => self.get(&["exercises"]).await,
            BodyPartFilter::Only(part) => self.get(&["exercises", "bodyPart", part.as_str()]).await,
        }
    }
}

/// Fetches exercises for `filter` and keeps those whose name matches `term`.
pub async fn search_exercises(
    client: &dyn ExerciseClient,
    term: &str,
    filter: &BodyPartFilter,
) -> Result<Vec<Exercise>> {
    info!("Searching exercises for \"{}\" in {}", term, filter);
    let exercises = client.exercises(filter).await?;
    let fetched = exercises.len();
    let found = filter_by_name(exercises, term);
    info!("Fetched {} exercises, {} match", fetched, found.len());
    debug!("Matched: {}", found.iter().map(|e| &e.name).join(", "));
    Ok(found)
}
