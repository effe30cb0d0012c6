//! The embedded search-form page.

use axum::response::Html;

/// Serves the single-page search form.
///
/// The page is compiled into the binary; there is no asset pipeline to
/// deploy alongside it.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../ui/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_is_html() {
        let Html(page) = index().await;
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("Delhi High Court"));
        assert!(page.contains("/api/fetch-case"));
        assert!(page.contains("/api/download-pdf"));
    }
}
