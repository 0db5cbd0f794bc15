use super::{release::Release, request::CreateReleaseRequest, response::ReleaseResponse};
use crate::{
    cli::Token,
    http::{Error, Headers, HttpClient, ResponseHandler},
};

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: Token,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: Token) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into(),
            token,
        }
    }

    fn releases_uri(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, owner, repo)
    }

    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateReleaseRequest,
    ) -> Result<Release, Error> {
        let uri = self.releases_uri(owner, repo);
        log::debug!("creating release {} at {}", request.tag_name, uri);

        let response = self
            .http
            .post(&uri)
            .json_content_headers(self.token.value())
            .json(request)
            .send()
            .await
            .handle()
            .await?;

        let release = serde_json::from_str::<ReleaseResponse>(&response)
            .map_err(|cause| Error::ParseResponse { cause })?;

        Ok(Release::new(
            release.id,
            owner,
            repo,
            release.name,
            release.html_url,
        ))
    }
}
