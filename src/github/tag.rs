#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    /// Release title shown on GitHub, e.g. `Release v1.0.0 - Dashboard`
    pub fn release_name(&self, title: &str) -> String {
        if title.is_empty() {
            format!("Release {}", self.name)
        } else {
            format!("Release {} - {}", self.name, title)
        }
    }
}
