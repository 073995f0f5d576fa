use super::error::Error;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.footballwebpages.co.uk/v2";
pub const DEFAULT_COMPETITION: &str = "Premier League";

const API_KEY_VAR: &str = "FWP_API_KEY";
const BASE_URL_VAR: &str = "FWP_BASE_URL";
const COMPETITION_VAR: &str = "FWP_COMPETITION";

/// Everything the client and driver need, handed over explicitly.
#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    /// Substring looked for in competition names
    pub competition: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            competition: DEFAULT_COMPETITION.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_competition(mut self, competition: &str) -> Self {
        self.competition = competition.to_string();
        self
    }

    /// Reads a `.env` file if there is one, then the FWP_* variables.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingConfig(API_KEY_VAR))?;
        let mut config = Config::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&base_url);
        }
        if let Some(competition) = lookup(COMPETITION_VAR) {
            config = config.with_competition(&competition);
        }
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("competition", &self.competition)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_only_key_given() {
        let config = Config::from_lookup(lookup_in(&[("FWP_API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.competition, "Premier League");
    }

    #[test]
    fn missing_key_is_an_error() {
        let result = Config::from_lookup(lookup_in(&[("FWP_BASE_URL", "http://localhost")]));
        assert!(matches!(result, Err(Error::MissingConfig("FWP_API_KEY"))));
        let result = Config::from_lookup(lookup_in(&[("FWP_API_KEY", "")]));
        assert!(matches!(result, Err(Error::MissingConfig(_))));
    }

    #[test]
    fn overrides_and_trailing_slash() {
        let config = Config::from_lookup(lookup_in(&[
            ("FWP_API_KEY", "abc"),
            ("FWP_BASE_URL", "http://localhost:1234/v2/"),
            ("FWP_COMPETITION", "Championship"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:1234/v2");
        assert_eq!(config.competition, "Championship");
    }

    #[test]
    fn debug_hides_key() {
        let config = Config::new("super-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
