use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::outbound::pom::parse_pom;
use crate::catalog_generation::domain::{BomCoordinates, PomModel};
use crate::ports::outbound::ModelFetcher;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Default remote repository, Maven Central.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// MavenRepositoryClient adapter for fetching POMs from a remote Maven
/// repository over HTTP.
///
/// Resolves coordinates against the standard repository layout:
/// `{base}/{group/as/path}/{artifact}/{version}/{artifact}-{version}.pom`.
///
/// # Async Support
/// Uses the async reqwest client so the walker can prefetch a whole queue
/// generation of BOMs concurrently.
pub struct MavenRepositoryClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl MavenRepositoryClient {
    /// Creates a client against the given repository base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bom-catalog/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    /// Creates a client against Maven Central.
    pub fn maven_central() -> Result<Self> {
        Self::new(MAVEN_CENTRAL_URL)
    }

    /// Builds the repository URL for a POM. Components were already
    /// validated by `BomCoordinates`, but are still encoded defensively.
    fn pom_url(&self, coordinates: &BomCoordinates) -> String {
        let group_path = coordinates
            .group_id()
            .split('.')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let artifact = urlencoding::encode(coordinates.artifact_id());
        let version = urlencoding::encode(coordinates.version());

        format!(
            "{}/{}/{}/{}/{}-{}.pom",
            self.base_url, group_path, artifact, version, artifact, version
        )
    }

    /// Fetches the raw POM text with retry logic. Retries back off
    /// linearly; an HTTP 404 is terminal and not retried.
    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url).await {
                Ok(text) => return Ok(text),
                Err(FetchAttemptError::NotFound) => {
                    anyhow::bail!("HTTP 404 for {}", url);
                }
                Err(FetchAttemptError::Other(e)) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.expect("at least one attempt ran"))
    }

    async fn fetch_once(&self, url: &str) -> std::result::Result<String, FetchAttemptError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchAttemptError::Other(e.into()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchAttemptError::NotFound);
        }
        if !response.status().is_success() {
            return Err(FetchAttemptError::Other(anyhow::anyhow!(
                "repository returned status code {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchAttemptError::Other(e.into()))
    }
}

enum FetchAttemptError {
    NotFound,
    Other(anyhow::Error),
}

#[async_trait]
impl ModelFetcher for MavenRepositoryClient {
    async fn fetch(&self, coordinates: &BomCoordinates) -> Result<PomModel> {
        let url = self.pom_url(coordinates);

        let text = self.fetch_with_retry(&url).await.map_err(|e| {
            CatalogError::ModelNotFound {
                group_id: coordinates.group_id().to_string(),
                artifact_id: coordinates.artifact_id().to_string(),
                version: coordinates.version().to_string(),
                details: e.to_string(),
            }
        })?;

        parse_pom(&text).map_err(|e| {
            CatalogError::PomParse {
                coordinates: coordinates.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
