//! Header compositor
//!
//! Pure function from the current signals to what the header renders.
//! Holds no state of its own.

use crate::classes::HeaderClasses;
use crate::connectivity::ConnectivitySnapshot;
use crate::logo::{LogoDescriptor, LogoStatus};
use crate::search_overlay::SearchOverlayState;
use crate::stickiness::StickinessState;

/// Target of the logo link
pub const HOME_PATH: &str = "/";

/// Everything the compositor reads for one render
#[derive(Debug, Clone, Copy)]
pub struct HeaderInputs<'a> {
    pub classes: &'a HeaderClasses,
    pub stickiness: StickinessState,
    pub connectivity: ConnectivitySnapshot,
    pub overlay: SearchOverlayState,
    pub is_page_loading: bool,
    pub logo: &'a LogoStatus,
}

/// Render decisions for one pass
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderViewModel {
    /// `open` or `closed` slot class
    pub root_class: String,
    /// `sticky` slot class while stuck
    pub sticky_class: Option<String>,
    pub show_page_loader: bool,
    /// Logo to render inside the home link; `None` leaves the slot empty
    pub logo: Option<LogoDescriptor>,
    /// Connectivity to show in the indicator; `None` hides it
    pub online_indicator: Option<ConnectivitySnapshot>,
    /// Whether the search overlay subtree is mounted
    pub search_mounted: bool,
    pub home_href: &'static str,
}

impl HeaderViewModel {
    /// Full class attribute for the header root
    pub fn root_classes(&self) -> String {
        match &self.sticky_class {
            Some(sticky) => format!("{} {}", self.root_class, sticky),
            None => self.root_class.clone(),
        }
    }
}

pub fn compose(inputs: &HeaderInputs<'_>) -> HeaderViewModel {
    let connectivity = inputs.connectivity;

    HeaderViewModel {
        root_class: inputs.overlay.class_for(inputs.classes).to_string(),
        sticky_class: inputs
            .stickiness
            .class_for(inputs.classes)
            .map(str::to_string),
        show_page_loader: inputs.is_page_loading,
        logo: inputs.logo.renderable().cloned(),
        online_indicator: connectivity.shows_indicator().then_some(connectivity),
        search_mounted: inputs.overlay.is_open(),
        home_href: HOME_PATH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(classes: &'a HeaderClasses, logo: &'a LogoStatus) -> HeaderInputs<'a> {
        HeaderInputs {
            classes,
            stickiness: StickinessState::NotStuck,
            connectivity: ConnectivitySnapshot::online(),
            overlay: SearchOverlayState::Closed,
            is_page_loading: false,
            logo,
        }
    }

    #[test]
    fn test_quiet_header() {
        let classes = HeaderClasses::default();
        let logo = LogoStatus::Loaded(LogoDescriptor::default());

        let view = compose(&inputs(&classes, &logo));

        assert_eq!(view.root_classes(), "header-closed");
        assert!(!view.show_page_loader);
        assert!(view.logo.is_some());
        assert!(view.online_indicator.is_none());
        assert!(!view.search_mounted);
        assert_eq!(view.home_href, "/");
    }

    #[test]
    fn test_root_class_ignores_stickiness() {
        let classes = HeaderClasses::default();
        let logo = LogoStatus::Loading;
        let mut input = inputs(&classes, &logo);
        input.stickiness = StickinessState::Stuck;
        input.overlay = SearchOverlayState::Open;

        let view = compose(&input);

        assert_eq!(view.root_class, "header-open");
        assert_eq!(view.sticky_class.as_deref(), Some("header-sticky"));
        assert_eq!(view.root_classes(), "header-open header-sticky");
        assert!(view.search_mounted);
    }

    #[test]
    fn test_page_loader_is_forwarded() {
        let classes = HeaderClasses::default();
        let logo = LogoStatus::Loading;
        let mut input = inputs(&classes, &logo);
        input.is_page_loading = true;
        assert!(compose(&input).show_page_loader);
    }

    #[test]
    fn test_logo_slot_empty_unless_loaded() {
        let classes = HeaderClasses::default();
        for logo in [LogoStatus::Loading, LogoStatus::Failed("boom".to_string())] {
            assert!(compose(&inputs(&classes, &logo)).logo.is_none());
        }
    }

    #[test]
    fn test_indicator_follows_latch() {
        let classes = HeaderClasses::default();
        let logo = LogoStatus::Loading;
        let mut input = inputs(&classes, &logo);

        input.connectivity = ConnectivitySnapshot::new(true, true);
        assert_eq!(
            compose(&input).online_indicator,
            Some(ConnectivitySnapshot::new(true, true))
        );

        input.connectivity = ConnectivitySnapshot::new(false, false);
        assert!(compose(&input).online_indicator.is_some());
    }

    #[test]
    fn test_overridden_classes_flow_through() {
        let classes = HeaderClasses::with_overrides(&crate::classes::ClassOverrides {
            closed: Some("bar".to_string()),
            sticky: Some("bar--pinned".to_string()),
            ..Default::default()
        });
        let logo = LogoStatus::Loading;
        let mut input = inputs(&classes, &logo);
        input.stickiness = StickinessState::Stuck;

        assert_eq!(compose(&input).root_classes(), "bar bar--pinned");
    }
}
