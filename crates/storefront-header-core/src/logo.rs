//! Logo descriptor and fetch status from the logo collaborator

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO_SRC: &str = "/static/logo.svg";
pub const DEFAULT_LOGO_ALT: &str = "Storefront";

/// Image descriptor for the brand logo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoDescriptor {
    pub src: String,
    #[serde(default = "default_alt")]
    pub alt: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

fn default_alt() -> String {
    DEFAULT_LOGO_ALT.to_string()
}

impl Default for LogoDescriptor {
    fn default() -> Self {
        Self {
            src: DEFAULT_LOGO_SRC.to_string(),
            alt: default_alt(),
            width: None,
            height: None,
        }
    }
}

/// Fetch status of the logo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogoStatus {
    #[default]
    Loading,
    Loaded(LogoDescriptor),
    Failed(String),
}

impl LogoStatus {
    /// Build from the collaborator's separate `loading` / `error` / `logo` values.
    /// `loading` wins over `error`; a missing descriptor falls back to the default image.
    pub fn from_parts(loading: bool, error: Option<String>, logo: Option<LogoDescriptor>) -> Self {
        match (loading, error) {
            (true, _) => LogoStatus::Loading,
            (false, Some(error)) => LogoStatus::Failed(error),
            (false, None) => LogoStatus::Loaded(logo.unwrap_or_default()),
        }
    }

    pub fn loading(&self) -> bool {
        matches!(self, LogoStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LogoStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Descriptor to render, if the slot is filled
    pub fn renderable(&self) -> Option<&LogoDescriptor> {
        match self {
            LogoStatus::Loaded(logo) => Some(logo),
            LogoStatus::Loading | LogoStatus::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_hides_logo_even_with_error() {
        let status = LogoStatus::from_parts(true, Some("timeout".into()), None);
        assert!(status.loading());
        assert!(status.renderable().is_none());
    }

    #[test]
    fn test_error_hides_logo() {
        let status =
            LogoStatus::from_parts(false, Some("404".into()), Some(LogoDescriptor::default()));
        assert_eq!(status.error(), Some("404"));
        assert!(status.renderable().is_none());
    }

    #[test]
    fn test_loaded_without_descriptor_uses_default_image() {
        let status = LogoStatus::from_parts(false, None, None);
        assert_eq!(status.renderable().unwrap().src, DEFAULT_LOGO_SRC);
    }

    #[test]
    fn test_descriptor_from_json_fills_alt() {
        let logo: LogoDescriptor =
            serde_json::from_str(r#"{"src": "/media/logo.png", "width": 120}"#).unwrap();
        assert_eq!(logo.alt, DEFAULT_LOGO_ALT);
        assert_eq!(logo.width, Some(120));
        assert_eq!(logo.height, None);
    }
}
