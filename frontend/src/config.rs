//! Site-wide configuration.

/// Site name shown in the header and the document title.
pub const SITE_NAME: &str = "Savvy Itch";

/// Base URL for static assets.
/// - For local development: "/"
/// - Adjust when the site is hosted under a sub-path.
pub const BASE_URL: &str = "/";

/// Helper function to construct asset paths.
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_normalizes_leading_slash() {
        assert_eq!(asset_path("/public/images/check.svg"), "/public/images/check.svg");
        assert_eq!(asset_path("manifest.json"), "/manifest.json");
    }
}
