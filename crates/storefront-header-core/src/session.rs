//! One mounted header instance
//!
//! Wires the stickiness observer, connectivity tracker and search overlay
//! controller together and renders them through [`compose`]. Each piece
//! keeps sole ownership of its own state; the session only routes events.

use crate::classes::HeaderClasses;
use crate::compositor::{compose, HeaderInputs, HeaderViewModel};
use crate::connectivity::ConnectivityTracker;
use crate::error::HeaderError;
use crate::event::HeaderEvent;
use crate::logo::LogoStatus;
use crate::search_overlay::{OverlaySlot, SearchOverlayController};
use crate::stickiness::{
    AttachOutcome, IntersectionSource, ObserverConfig, StickinessObserver, StickinessState,
};
use tracing::{debug, info};

pub struct HeaderSession<S: IntersectionSource, P: 'static> {
    classes: HeaderClasses,
    observer: StickinessObserver<S>,
    connectivity: ConnectivityTracker,
    search: SearchOverlayController<P>,
    is_page_loading: bool,
    logo: LogoStatus,
    location: Option<String>,
}

impl<S: IntersectionSource, P: 'static> HeaderSession<S, P> {
    pub fn new(
        classes: HeaderClasses,
        observer_config: ObserverConfig,
        connectivity: ConnectivityTracker,
        search: SearchOverlayController<P>,
    ) -> Self {
        Self {
            classes,
            observer: StickinessObserver::new(observer_config),
            connectivity,
            search,
            is_page_loading: false,
            logo: LogoStatus::default(),
            location: None,
        }
    }

    /// Start observing the header root. A missing anchor is not an error.
    ///
    /// `on_stickiness_change` runs whenever the root flips between stuck and
    /// not stuck, so the host knows to render again.
    pub fn mount<F>(
        &mut self,
        source: S,
        anchor: Option<&S::Target>,
        on_stickiness_change: F,
    ) -> Result<AttachOutcome, HeaderError>
    where
        F: FnMut(StickinessState) + 'static,
    {
        let outcome = self.observer.attach(source, anchor, on_stickiness_change)?;
        info!(?outcome, "Header mounted");
        Ok(outcome)
    }

    /// Release the observation. No callback is processed afterwards.
    pub fn unmount(&mut self) {
        self.observer.detach();
        info!("Header unmounted");
    }

    /// Route an event to the component that owns its slice.
    /// Returns true if that slice changed.
    pub fn dispatch(&mut self, event: HeaderEvent) -> bool {
        debug!(?event, slice = ?event.slice(), "Header event");
        match event {
            HeaderEvent::SearchTriggerActivated => self.search.handle_search_trigger_click(),
            HeaderEvent::Navigated(path) => {
                let previous = self.location.replace(path);
                match previous {
                    Some(previous) if Some(&previous) != self.location.as_ref() => {
                        self.search.close_on_navigation()
                    }
                    _ => false,
                }
            }
            HeaderEvent::ConnectivityChanged(is_online) => {
                let before = self.connectivity.snapshot();
                self.connectivity.set_online(is_online) != before
            }
            HeaderEvent::PageLoadingChanged(loading) => {
                let changed = self.is_page_loading != loading;
                self.is_page_loading = loading;
                changed
            }
            HeaderEvent::LogoChanged(status) => {
                let changed = self.logo != status;
                self.logo = status;
                changed
            }
        }
    }

    pub fn render(&self) -> HeaderViewModel {
        compose(&HeaderInputs {
            classes: &self.classes,
            stickiness: self.observer.state(),
            connectivity: self.connectivity.snapshot(),
            overlay: self.search.state(),
            is_page_loading: self.is_page_loading,
            logo: &self.logo,
        })
    }

    pub fn overlay_slot(&self) -> OverlaySlot<P> {
        self.search.slot()
    }

    pub fn stickiness(&self) -> StickinessState {
        self.observer.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_attached()
    }

    pub fn classes(&self) -> &HeaderClasses {
        &self.classes
    }

    pub fn connectivity(&self) -> &ConnectivityTracker {
        &self.connectivity
    }

    pub fn search(&self) -> &SearchOverlayController<P> {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_overlay::SearchOverlayState;
    use crate::stickiness::IntersectionEntry;
    use crate::testing::{Anchor, ManualIntersectionSource};
    use futures::FutureExt;

    fn session() -> HeaderSession<ManualIntersectionSource, String> {
        HeaderSession::new(
            HeaderClasses::default(),
            ObserverConfig::default(),
            ConnectivityTracker::new(true),
            SearchOverlayController::new(|| async { Ok("panel".to_string()) }.boxed_local()),
        )
    }

    #[test]
    fn test_first_location_does_not_close() {
        let mut header = session();
        header.dispatch(HeaderEvent::SearchTriggerActivated);

        assert!(!header.dispatch(HeaderEvent::Navigated("/".to_string())));
        assert_eq!(header.search().state(), SearchOverlayState::Open);
    }

    #[test]
    fn test_route_change_closes_overlay() {
        let mut header = session();
        header.dispatch(HeaderEvent::Navigated("/".to_string()));
        header.dispatch(HeaderEvent::SearchTriggerActivated);

        assert!(!header.dispatch(HeaderEvent::Navigated("/".to_string())));
        let search = HeaderEvent::Navigated("/search?query=shirt".to_string());
        assert!(header.dispatch(search));
        assert!(!header.render().search_mounted);
    }

    #[test]
    fn test_events_touch_only_their_slice() {
        let mut header = session();
        header
            .mount(ManualIntersectionSource::new(), Some(&Anchor::new("header")), |_| {})
            .unwrap();
        let before = header.render();

        header.dispatch(HeaderEvent::PageLoadingChanged(true));
        let after = header.render();

        assert!(after.show_page_loader);
        assert_eq!(after.root_classes(), before.root_classes());
        assert_eq!(after.online_indicator, before.online_indicator);
        assert_eq!(after.search_mounted, before.search_mounted);
    }

    #[test]
    fn test_logo_event_fills_slot() {
        let mut header = session();
        assert!(header.render().logo.is_none());

        let loaded = LogoStatus::from_parts(false, None, None);
        assert!(header.dispatch(HeaderEvent::LogoChanged(loaded)));
        assert!(header.render().logo.is_some());
    }

    #[test]
    fn test_mount_reports_stickiness_flips() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let source = ManualIntersectionSource::new();
        let flips = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&flips);
        let mut header = session();
        header
            .mount(source.clone(), Some(&Anchor::new("header")), move |state| {
                sink.borrow_mut().push(state)
            })
            .unwrap();

        source.emit(&[IntersectionEntry::hidden()]);
        source.emit(&[IntersectionEntry::hidden()]);
        source.emit(&[IntersectionEntry::fully_visible()]);

        assert_eq!(
            *flips.borrow(),
            vec![StickinessState::Stuck, StickinessState::NotStuck]
        );
    }

    #[test]
    fn test_mount_without_anchor() {
        let mut header = session();
        let outcome = header
            .mount(ManualIntersectionSource::new(), None, |_| {})
            .unwrap();
        assert_eq!(outcome, AttachOutcome::Detached);
        assert!(!header.is_mounted());
    }
}
