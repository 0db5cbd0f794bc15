use crate::github::tag::Tag;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl CreateReleaseRequest {
    /// Published right away: never a draft, never a prerelease.
    pub fn published(tag: &Tag, title: &str, body: impl Into<String>) -> Self {
        Self {
            tag_name: tag.value().to_owned(),
            name: tag.release_name(title),
            body: body.into(),
            draft: false,
            prerelease: false,
        }
    }
}
