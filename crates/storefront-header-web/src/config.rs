//! Host page configuration
//!
//! The page may embed class overrides for the header as JSON:
//!
//! ```html
//! <script type="application/json" id="storefront-header-config">
//!   {"sticky": "masthead--pinned", "open": "masthead--search"}
//! </script>
//! ```
//!
//! A missing element means defaults. Unknown keys are logged and skipped; a
//! malformed document is logged and ignored.

use anyhow::{Context, Result};
use leptos::logging::warn;
use storefront_header_core::ClassOverrides;

pub const CONFIG_ELEMENT_ID: &str = "storefront-header-config";

/// Parse the embedded JSON; blank content means no overrides
pub fn parse_config(content: &str) -> Result<ClassOverrides> {
    if content.trim().is_empty() {
        return Ok(ClassOverrides::default());
    }
    ClassOverrides::from_json(content).context("Failed to parse header class overrides")
}

/// Read overrides from the current document
pub fn load_page_config() -> Result<Option<ClassOverrides>> {
    let document = web_sys::window()
        .context("No window available")?
        .document()
        .context("No document available")?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    let content = element.text_content().unwrap_or_default();
    parse_config(&content)
        .with_context(|| format!("Invalid #{} element", CONFIG_ELEMENT_ID))
        .map(Some)
}

/// Overrides for this page, falling back to defaults on any error
pub fn page_class_overrides() -> ClassOverrides {
    match load_page_config() {
        Ok(overrides) => overrides.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring header config: {:#}", e);
            ClassOverrides::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_header_core::HeaderClasses;

    #[test]
    fn test_blank_config_is_default() {
        assert!(parse_config("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_config_overrides_slots() {
        let overrides =
            parse_config(r#"{"sticky": "pinned", "logoContainer": "brand"}"#).unwrap();
        assert_eq!(overrides.sticky.as_deref(), Some("pinned"));
        assert_eq!(overrides.logo_container.as_deref(), Some("brand"));
    }

    #[test]
    fn test_unknown_key_does_not_drop_valid_slots() {
        let overrides = parse_config(r#"{"sticky": "pinned", "searchOverlay": "x"}"#).unwrap();
        let classes = HeaderClasses::with_overrides(&overrides);
        assert_eq!(classes.sticky, "pinned");
        assert_eq!(classes.open, "header-open");
    }

    #[test]
    fn test_config_error_has_context() {
        let err = parse_config(r#"{"sticky": ["red"]}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse header class overrides"));
    }
}
