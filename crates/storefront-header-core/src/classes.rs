//! Style slot configuration for the header
//!
//! The host page may override any of the named slots. Slots it leaves out
//! keep their default class name.

use crate::error::HeaderError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

static DEFAULT_CLASSES: Lazy<HeaderClasses> = Lazy::new(|| HeaderClasses {
    closed: "header-closed".to_string(),
    logo: "header-logo".to_string(),
    logo_container: "header-logoContainer".to_string(),
    open: "header-open".to_string(),
    primary_actions: "header-primaryActions".to_string(),
    secondary_actions: "header-secondaryActions".to_string(),
    toolbar: "header-toolbar".to_string(),
    switchers: "header-switchers".to_string(),
    switchers_container: "header-switchersContainer".to_string(),
    sticky: "header-sticky".to_string(),
    search_fallback: "header-searchFallback".to_string(),
    input: "header-input".to_string(),
    loader: "header-loader".to_string(),
});

/// Resolved class names for every style slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderClasses {
    pub closed: String,
    pub logo: String,
    pub logo_container: String,
    pub open: String,
    pub primary_actions: String,
    pub secondary_actions: String,
    pub toolbar: String,
    pub switchers: String,
    pub switchers_container: String,
    pub sticky: String,
    pub search_fallback: String,
    pub input: String,
    pub loader: String,
}

impl Default for HeaderClasses {
    fn default() -> Self {
        DEFAULT_CLASSES.clone()
    }
}

impl HeaderClasses {
    /// Shared default slot names
    pub fn defaults() -> &'static HeaderClasses {
        &DEFAULT_CLASSES
    }

    /// Defaults with `overrides` applied on top
    pub fn with_overrides(overrides: &ClassOverrides) -> Self {
        let mut classes = Self::default();
        classes.merge(overrides);
        classes
    }

    /// Apply overrides in place; `None` slots are left untouched
    pub fn merge(&mut self, overrides: &ClassOverrides) {
        fn apply(slot: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }

        apply(&mut self.closed, &overrides.closed);
        apply(&mut self.logo, &overrides.logo);
        apply(&mut self.logo_container, &overrides.logo_container);
        apply(&mut self.open, &overrides.open);
        apply(&mut self.primary_actions, &overrides.primary_actions);
        apply(&mut self.secondary_actions, &overrides.secondary_actions);
        apply(&mut self.toolbar, &overrides.toolbar);
        apply(&mut self.switchers, &overrides.switchers);
        apply(&mut self.switchers_container, &overrides.switchers_container);
        apply(&mut self.sticky, &overrides.sticky);
        apply(&mut self.search_fallback, &overrides.search_fallback);
        apply(&mut self.input, &overrides.input);
        apply(&mut self.loader, &overrides.loader);
    }
}

/// Partial slot configuration supplied by the host page
///
/// Keys use the camelCase names of the style slots (`primaryActions`,
/// `switchersContainer`, ...). Unknown keys are kept aside in `unknown` and
/// logged; the known slots still apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_actions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_actions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switchers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switchers_container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_fallback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
    /// Keys that name no slot
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl ClassOverrides {
    /// Parse overrides from a JSON object
    pub fn from_json(content: &str) -> Result<Self, HeaderError> {
        let overrides: Self =
            serde_json::from_str(content).map_err(|source| HeaderError::InvalidConfig {
                message: source.to_string(),
                source,
            })?;

        if !overrides.unknown.is_empty() {
            let keys: Vec<&str> = overrides.unknown.keys().map(String::as_str).collect();
            warn!(?keys, "Ignoring unknown header class slots");
        }
        Ok(overrides)
    }

    /// True when no slot is overridden; unknown keys do not count
    pub fn is_empty(&self) -> bool {
        let slots = Self {
            unknown: BTreeMap::new(),
            ..self.clone()
        };
        slots == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_slots_fall_back_to_defaults() {
        let overrides = ClassOverrides {
            open: Some("masthead--open".to_string()),
            ..Default::default()
        };

        let classes = HeaderClasses::with_overrides(&overrides);

        assert_eq!(classes.open, "masthead--open");
        assert_eq!(classes.closed, "header-closed");
        assert_eq!(classes.sticky, "header-sticky");
    }

    #[test]
    fn test_overrides_from_camel_case_json() {
        let json =
            r#"{"primaryActions": "pa", "switchersContainer": "sc", "searchFallback": "sf"}"#;
        let overrides = ClassOverrides::from_json(json).unwrap();

        let classes = HeaderClasses::with_overrides(&overrides);
        assert_eq!(classes.primary_actions, "pa");
        assert_eq!(classes.switchers_container, "sc");
        assert_eq!(classes.search_fallback, "sf");
        assert_eq!(classes.loader, "header-loader");
    }

    #[test]
    fn test_unknown_slot_keeps_known_overrides() {
        let overrides =
            ClassOverrides::from_json(r#"{"sticky": "pinned", "bogus": "x"}"#).unwrap();

        assert_eq!(overrides.sticky.as_deref(), Some("pinned"));
        assert!(overrides.unknown.contains_key("bogus"));
        assert_eq!(HeaderClasses::with_overrides(&overrides).sticky, "pinned");
    }

    #[test]
    fn test_only_unknown_keys_is_empty() {
        let overrides = ClassOverrides::from_json(r#"{"stikcy": "x"}"#).unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let err = ClassOverrides::from_json(r#"{"sticky": 3}"#).unwrap_err();
        assert!(matches!(err, HeaderError::InvalidConfig { .. }));
    }

    #[test]
    fn test_empty_object_is_empty_overrides() {
        let overrides = ClassOverrides::from_json("{}").unwrap();
        assert!(overrides.is_empty());
        assert_eq!(
            HeaderClasses::with_overrides(&overrides),
            *HeaderClasses::defaults()
        );
    }
}
