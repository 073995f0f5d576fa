//! <https://www.footballwebpages.co.uk/api>
//!
//! Four read-only endpoints, all behind the `FWP-API-Key` header.

use super::config::Config;
use super::error::Error;
use super::Competition;
use super::Fixture;
use super::Team;
use log::debug;
use serde::de::DeserializeOwned;

// HeaderName::from_static wants lowercase
const API_KEY_HEADER: &str = "fwp-api-key";

/// One league table record as the API sends it. Renamed into a
/// [StandingsRow](super::StandingsRow) by [build_standings](super::build_standings).
pub type RawStandingsRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut api_key = reqwest::header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| Error::InvalidApiKey)?;
        api_key.set_sensitive(true);
        headers.insert(
            reqwest::header::HeaderName::from_static(API_KEY_HEADER),
            api_key,
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn competitions(&self) -> Result<Vec<Competition>, Error> {
        self.fetch("competitions", None).await
    }

    pub async fn teams(&self, competition_id: i64) -> Result<Vec<Team>, Error> {
        self.fetch("teams", Some(competition_id)).await
    }

    pub async fn fixtures(&self, competition_id: i64) -> Result<Vec<Fixture>, Error> {
        self.fetch("fixtures-results", Some(competition_id)).await
    }

    pub async fn league_table(
        &self,
        competition_id: i64,
    ) -> Result<Vec<RawStandingsRecord>, Error> {
        self.fetch("league-table", Some(competition_id)).await
    }

    /// GET `{base}/{resource}.json[?comp={id}]`, failing on any non-2xx status.
    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        competition_id: Option<i64>,
    ) -> Result<T, Error> {
        let url = resource_url(&self.base_url, resource, competition_id);
        debug!("Fetching data from {}", url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Http {
                status: resp.status().as_u16(),
                url,
            });
        }
        Ok(resp.json().await?)
    }
}

fn resource_url(base_url: &str, resource: &str, competition_id: Option<i64>) -> String {
    match competition_id {
        Some(id) => format!("{}/{}.json?comp={}", base_url, resource, id),
        None => format!("{}/{}.json", base_url, resource),
    }
}
