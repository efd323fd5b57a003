//! Fetch helpers for generator-emitted artifacts.

use gloo_net::http::Request;

use crate::{config, models::ArticleMeta};

/// Fetch the article manifest the generator writes next to the site root.
pub async fn fetch_manifest() -> Result<Vec<ArticleMeta>, String> {
    let url = config::asset_path("manifest.json");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("manifest request failed: {}", response.status()));
    }
    response
        .json::<Vec<ArticleMeta>>()
        .await
        .map_err(|err| err.to_string())
}

/// Fetch the pre-rendered HTML fragment for one article.
pub async fn fetch_article_html(slug: &str) -> Result<String, String> {
    let url = config::asset_path(&format!("content/{slug}.html"));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("article request failed: {}", response.status()));
    }
    response.text().await.map_err(|err| err.to_string())
}
