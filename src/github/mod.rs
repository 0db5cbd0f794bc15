mod github_client;
mod release;
mod request;
mod response;
pub mod tag;

pub use self::release::Release;
use self::{github_client::GithubClient, request::CreateReleaseRequest, tag::Tag};
use crate::{body, cli::Token, config::Config};
use anyhow::{Context, Result};

/// Loads the release body and creates the release on GitHub.
///
/// The body is read before anything goes over the wire, so a missing
/// `RELEASE_BODY.md` never reaches the API.
pub async fn publish(config: &Config, token: Token) -> Result<Release> {
    let body = body::load(&config.body_path).await?;

    let tag = Tag::new(&config.tag);
    let request = CreateReleaseRequest::published(&tag, &config.title, body);

    let client = GithubClient::new(&config.api_url, token);
    let release = client
        .create_release(&config.owner, &config.repo, &request)
        .await
        .context("Cannot create the github release")?;

    log::debug!(
        "release {:?} ({}) created on {}/{}",
        release.id,
        release.name.as_deref().unwrap_or(tag.value()),
        release.owner,
        release.repo
    );

    Ok(release)
}
