//! API client for the header's data collaborators

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use storefront_header_core::{HeaderError, LogoDescriptor};

pub const LOGO_ENDPOINT: &str = "/api/store/logo";
pub const SEARCH_PANEL_ENDPOINT: &str = "/api/search/config";
pub const SEARCH_RESULTS_ENDPOINT: &str = "/api/search";

/// Logo response from the store config endpoint
#[derive(Debug, Clone, Deserialize)]
struct LogoResponse {
    logo: Option<LogoDescriptor>,
}

/// Configuration the search panel needs before it can render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPanelConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
}

fn default_placeholder() -> String {
    "Search".to_string()
}

fn default_min_query_length() -> usize {
    3
}

/// One product in the search results page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub name: String,
    pub url_key: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchResultsResponse {
    #[serde(default)]
    items: Vec<ProductSummary>,
}

/// Parse the logo endpoint body; a missing `logo` falls back to the default image
pub fn parse_logo_payload(body: &str) -> Result<LogoDescriptor, HeaderError> {
    let response: LogoResponse = serde_json::from_str(body)
        .map_err(|e| HeaderError::logo_fetch(format!("Parse error: {}", e)))?;
    Ok(response.logo.unwrap_or_default())
}

/// Fetch the store logo
pub async fn fetch_logo() -> Result<LogoDescriptor, HeaderError> {
    let response = Request::get(LOGO_ENDPOINT)
        .send()
        .await
        .map_err(|e| HeaderError::logo_fetch(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(HeaderError::logo_fetch(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| HeaderError::logo_fetch(format!("Network error: {}", e)))?;

    parse_logo_payload(&body)
}

/// Fetch the search panel configuration. Only called on first overlay open.
pub async fn fetch_search_panel() -> Result<SearchPanelConfig, HeaderError> {
    let response = Request::get(SEARCH_PANEL_ENDPOINT)
        .send()
        .await
        .map_err(|e| HeaderError::overlay_load(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(HeaderError::overlay_load(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    response
        .json::<SearchPanelConfig>()
        .await
        .map_err(|e| HeaderError::overlay_load(format!("Parse error: {}", e)))
}

/// Fetch products matching `query`
pub async fn fetch_search_results(query: String) -> Result<Vec<ProductSummary>, String> {
    let response = Request::get(SEARCH_RESULTS_ENDPOINT)
        .query([("query", query.as_str())])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let results = response
        .json::<SearchResultsResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(results.items)
}

/// Route for a search query
pub fn search_url(query: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(query.trim()).into();
    format!("/search?query={}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_header_core::logo::DEFAULT_LOGO_SRC;

    #[test]
    fn test_parse_logo_payload() {
        let body = r#"{"logo": {"src": "/media/brand.svg", "alt": "Acme", "height": 32}}"#;
        let logo = parse_logo_payload(body).unwrap();
        assert_eq!(logo.src, "/media/brand.svg");
        assert_eq!(logo.alt, "Acme");
        assert_eq!(logo.height, Some(32));
    }

    #[test]
    fn test_parse_logo_payload_without_logo_uses_default() {
        let logo = parse_logo_payload(r#"{"logo": null}"#).unwrap();
        assert_eq!(logo.src, DEFAULT_LOGO_SRC);
    }

    #[test]
    fn test_parse_logo_payload_rejects_garbage() {
        let err = parse_logo_payload("<html>").unwrap_err();
        assert!(matches!(err, HeaderError::LogoFetch { .. }));
        assert!(err.to_string().starts_with("Logo fetch failed: Parse error"));
    }

    #[test]
    fn test_search_panel_config_defaults() {
        let config: SearchPanelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.placeholder, "Search");
        assert!(config.suggestions.is_empty());
        assert_eq!(config.min_query_length, 3);
    }
}
