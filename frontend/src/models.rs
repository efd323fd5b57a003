//! Data contracts emitted by the site generator.

use serde::Deserialize;

/// One entry in the article manifest (`manifest.json`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleMeta {
    /// Slug naming the article and its pre-rendered fragment.
    pub slug: String,
    /// Article title.
    pub title: String,
    /// Publication date as an ISO `YYYY-MM-DD` string.
    pub date: String,
    /// Short summary for the index page.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entry_deserializes_without_description() {
        let entry: ArticleMeta = serde_json::from_str(
            r#"{"slug":"first-post","title":"First Post","date":"2024-03-01"}"#,
        )
        .expect("valid manifest entry");
        assert_eq!(entry.slug, "first-post");
        assert_eq!(entry.description, "");
    }
}
