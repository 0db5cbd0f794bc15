use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub html_url: Option<String>,
}
