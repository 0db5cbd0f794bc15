use std::{env, path::PathBuf};

const OWNER: &str = "caarlosandree";
const REPO: &str = "dash-demo";
const TAG: &str = "v1.0.0";
const RELEASE_TITLE: &str = "Dashboard de Gráficos";

const BODY_FILE_NAME: &str = "RELEASE_BODY.md";

const DEFAULT_API_URL: &str = "https://api.github.com";
const API_URL_ENV: &str = "GITHUB_API_URL";

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub tag: String,
    pub title: String,
    pub body_path: PathBuf,
    pub api_url: String,
}

impl Config {
    /// Fixed release target, with the API base taken from `GITHUB_API_URL` when set.
    pub fn load() -> Config {
        let config = Config::default();

        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_api_url(url),
            _ => config,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim().trim_end_matches('/').to_owned();
        self
    }

    #[cfg(test)]
    pub fn with_body_path(mut self, body_path: impl Into<PathBuf>) -> Self {
        self.body_path = body_path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            owner: OWNER.to_owned(),
            repo: REPO.to_owned(),
            tag: TAG.to_owned(),
            title: RELEASE_TITLE.to_owned(),
            body_path: PathBuf::from(BODY_FILE_NAME),
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}
