const MISSING_URL: &str = "N/A";

#[derive(Debug, Clone)]
pub struct Release {
    pub id: Option<u64>,
    pub owner: String,
    pub repo: String,
    pub name: Option<String>,
    pub html_url: Option<String>,
}

impl Release {
    pub fn new(
        id: Option<u64>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        name: Option<String>,
        html_url: Option<String>,
    ) -> Self {
        Release {
            id,
            owner: owner.into(),
            repo: repo.into(),
            name,
            html_url,
        }
    }

    pub fn url(&self) -> &str {
        self.html_url.as_deref().unwrap_or(MISSING_URL)
    }
}
