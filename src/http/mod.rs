use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder, Response,
};
use std::ops::Deref;
use thiserror::Error;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT_NAME: &str = "create-release";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn json_content_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn json_content_headers(self, token: &str) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
            .header(CONTENT_TYPE, "application/json")
    }
}

pub trait ResponseHandler {
    /// Returns the body text of a 2xx response, anything else becomes an [`Error`].
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::Transport { cause })?;
        let status = response.status().as_u16();
        log::debug!("{} responded with {}", response.url(), status);

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseText { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::Api { status, body: text });
        }

        Ok(text)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request")]
    Transport {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Request failed with status {status}")]
    Api { status: u16, body: String },
    #[error("Failed to read response text")]
    ReadResponseText {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
}
