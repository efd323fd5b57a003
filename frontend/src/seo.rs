//! Document metadata updates. The generator owns meta tags; only the title
//! changes client-side as pages swap.

use web_sys::window;

use crate::config;

/// Set the document title: `"<page> · <site>"`, or just the site name.
pub fn set_document_title(page: Option<&str>) {
    let Some(doc) = window().and_then(|win| win.document()) else {
        return;
    };
    match page {
        Some(page) => doc.set_title(&format!("{} · {}", page, config::SITE_NAME)),
        None => doc.set_title(config::SITE_NAME),
    }
}
