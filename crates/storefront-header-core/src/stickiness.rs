//! Viewport stickiness observation
//!
//! Watches the header root's intersection with the viewport and derives
//! whether the header is stuck to the viewport edge. The host platform
//! supplies the observation mechanism through [`IntersectionSource`]; the
//! observer owns the subscription and releases it on detach or drop.

use crate::classes::HeaderClasses;
use crate::error::HeaderError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Ratio at which the anchor counts as fully visible
pub const FULLY_VISIBLE: f64 = 1.0;

/// Observer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: FULLY_VISIBLE,
        }
    }
}

impl ObserverConfig {
    pub fn new(threshold: f64) -> Result<Self, HeaderError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(HeaderError::InvalidThreshold { value: threshold });
        }
        Ok(Self { threshold })
    }
}

/// Whether the header has scrolled out of full view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickinessState {
    #[default]
    NotStuck,
    Stuck,
}

impl StickinessState {
    pub fn from_entry(entry: &IntersectionEntry, threshold: f64) -> Self {
        if entry.meets(threshold) {
            StickinessState::NotStuck
        } else {
            StickinessState::Stuck
        }
    }

    pub fn is_stuck(self) -> bool {
        self == StickinessState::Stuck
    }

    /// Presentation class for this state, if any
    pub fn class_for(self, classes: &HeaderClasses) -> Option<&str> {
        match self {
            StickinessState::Stuck => Some(classes.sticky.as_str()),
            StickinessState::NotStuck => None,
        }
    }
}

/// One intersection report for the observed anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn new(is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            is_intersecting,
            intersection_ratio,
        }
    }

    pub fn fully_visible() -> Self {
        Self::new(true, FULLY_VISIBLE)
    }

    pub fn partially_visible(ratio: f64) -> Self {
        Self::new(ratio > 0.0, ratio)
    }

    pub fn hidden() -> Self {
        Self::new(false, 0.0)
    }

    /// True when the anchor intersects at or above `threshold`.
    /// Sub-pixel ratios just below the threshold do not count.
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio >= threshold
    }
}

/// Callback handed to the host; receives each batch of entries
pub type IntersectionCallback = Box<dyn FnMut(&[IntersectionEntry])>;

/// Host-side intersection observation mechanism
pub trait IntersectionSource {
    /// Element type being observed
    type Target: ?Sized;
    /// Token returned by `observe` and consumed by `unobserve`
    type Handle;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        callback: IntersectionCallback,
    ) -> Result<Self::Handle, HeaderError>;

    fn unobserve(&self, handle: Self::Handle);
}

/// Live observation; unobserves when released or dropped
pub struct Subscription<S: IntersectionSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: IntersectionSource> Subscription<S> {
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(mut self) {
        self.release_handle();
    }

    fn release_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unobserve(handle);
        }
    }
}

impl<S: IntersectionSource> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.release_handle();
    }
}

#[derive(Debug, Default)]
struct CellState {
    state: StickinessState,
    active: bool,
    updates: u64,
}

/// Shared, derived stickiness value written by the observation callback
#[derive(Debug, Clone, Default)]
pub struct StickinessCell {
    inner: Arc<RwLock<CellState>>,
}

impl StickinessCell {
    pub fn get(&self) -> StickinessState {
        self.inner.read().state
    }

    /// Number of callbacks that produced a state
    pub fn updates(&self) -> u64 {
        self.inner.read().updates
    }

    pub fn is_active(&self) -> bool {
        self.inner.read().active
    }

    fn set_active(&self, active: bool) {
        self.inner.write().active = active;
    }

    /// Record a batch; returns the new state and whether it changed.
    /// The last entry in a batch is the most recent one.
    fn record(
        &self,
        entries: &[IntersectionEntry],
        threshold: f64,
    ) -> Option<(StickinessState, bool)> {
        let mut inner = self.inner.write();
        if !inner.active {
            return None;
        }
        let Some(entry) = entries.last() else {
            warn!("Intersection callback fired with no entries");
            return None;
        };

        let next = StickinessState::from_entry(entry, threshold);
        let changed = next != inner.state;
        inner.state = next;
        inner.updates += 1;
        Some((next, changed))
    }
}

/// Result of attaching to an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// Observation is running
    Attached,
    /// Anchor not mounted yet; nothing observed
    Detached,
}

/// Owns the stickiness subscription for one header instance
pub struct StickinessObserver<S: IntersectionSource> {
    config: ObserverConfig,
    cell: StickinessCell,
    subscription: Option<Subscription<S>>,
}

impl<S: IntersectionSource> StickinessObserver<S> {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            cell: StickinessCell::default(),
            subscription: None,
        }
    }

    pub fn config(&self) -> ObserverConfig {
        self.config
    }

    pub fn cell(&self) -> StickinessCell {
        self.cell.clone()
    }

    pub fn state(&self) -> StickinessState {
        self.cell.get()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .map(Subscription::is_active)
            .unwrap_or(false)
    }

    /// Begin observing `anchor`. A previous subscription is released first.
    ///
    /// `on_change` runs only when the derived state flips.
    pub fn attach<F>(
        &mut self,
        source: S,
        anchor: Option<&S::Target>,
        mut on_change: F,
    ) -> Result<AttachOutcome, HeaderError>
    where
        F: FnMut(StickinessState) + 'static,
    {
        self.detach();

        let Some(anchor) = anchor else {
            debug!("Sticky anchor not mounted, skipping observation");
            return Ok(AttachOutcome::Detached);
        };

        let cell = self.cell.clone();
        let threshold = self.config.threshold;
        let callback: IntersectionCallback = Box::new(move |entries| {
            if let Some((state, changed)) = cell.record(entries, threshold) {
                if changed {
                    debug!(?state, "Header stickiness changed");
                    on_change(state);
                }
            }
        });

        self.cell.set_active(true);
        let handle = match source.observe(anchor, threshold, callback) {
            Ok(handle) => handle,
            Err(e) => {
                self.cell.set_active(false);
                return Err(e);
            }
        };

        self.subscription = Some(Subscription {
            source,
            handle: Some(handle),
        });
        debug!(threshold, "Sticky observation attached");
        Ok(AttachOutcome::Attached)
    }

    /// Stop observing. Safe to call when not attached.
    pub fn detach(&mut self) {
        self.cell.set_active(false);
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            debug!("Sticky observation released");
        }
    }
}

impl<S: IntersectionSource> Drop for StickinessObserver<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Anchor, ManualIntersectionSource};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn attached() -> (
        ManualIntersectionSource,
        StickinessObserver<ManualIntersectionSource>,
    ) {
        let source = ManualIntersectionSource::new();
        let mut observer = StickinessObserver::new(ObserverConfig::default());
        let outcome = observer
            .attach(source.clone(), Some(&Anchor::new("header")), |_| {})
            .unwrap();
        assert_eq!(outcome, AttachOutcome::Attached);
        (source, observer)
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ObserverConfig::new(1.0).is_ok());
        assert!(ObserverConfig::new(0.0).is_ok());
        assert!(matches!(
            ObserverConfig::new(1.5),
            Err(HeaderError::InvalidThreshold { .. })
        ));
        assert!(ObserverConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let source = ManualIntersectionSource::new();
        let mut observer = StickinessObserver::new(ObserverConfig::default());

        let outcome = observer.attach(source.clone(), None, |_| {}).unwrap();

        assert_eq!(outcome, AttachOutcome::Detached);
        assert!(!observer.is_attached());
        assert_eq!(source.active_count(), 0);
        assert_eq!(observer.state(), StickinessState::NotStuck);
    }

    #[test]
    fn test_last_callback_wins() {
        let (source, observer) = attached();

        source.emit(&[IntersectionEntry::partially_visible(0.4)]);
        assert_eq!(observer.state(), StickinessState::Stuck);

        source.emit(&[IntersectionEntry::fully_visible()]);
        assert_eq!(observer.state(), StickinessState::NotStuck);

        source.emit(&[IntersectionEntry::hidden()]);
        assert_eq!(observer.state(), StickinessState::Stuck);
        assert_eq!(observer.cell().updates(), 3);
    }

    #[test]
    fn test_subpixel_ratio_counts_as_stuck() {
        let (source, observer) = attached();
        source.emit(&[IntersectionEntry::partially_visible(0.999_9)]);
        assert!(observer.state().is_stuck());
    }

    #[test]
    fn test_batch_uses_most_recent_entry() {
        let (source, observer) = attached();
        source.emit(&[
            IntersectionEntry::hidden(),
            IntersectionEntry::fully_visible(),
        ]);
        assert_eq!(observer.state(), StickinessState::NotStuck);
    }

    #[test]
    fn test_empty_batch_is_ignored() {
        let (source, observer) = attached();
        source.emit(&[IntersectionEntry::hidden()]);
        source.emit(&[]);
        assert_eq!(observer.state(), StickinessState::Stuck);
        assert_eq!(observer.cell().updates(), 1);
    }

    #[test]
    fn test_on_change_fires_only_on_flip() {
        let source = ManualIntersectionSource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut observer = StickinessObserver::new(ObserverConfig::default());
        observer
            .attach(source.clone(), Some(&Anchor::new("header")), move |s| {
                sink.borrow_mut().push(s)
            })
            .unwrap();

        source.emit(&[IntersectionEntry::fully_visible()]);
        source.emit(&[IntersectionEntry::hidden()]);
        source.emit(&[IntersectionEntry::partially_visible(0.2)]);
        source.emit(&[IntersectionEntry::fully_visible()]);

        assert_eq!(
            *seen.borrow(),
            vec![StickinessState::Stuck, StickinessState::NotStuck]
        );
    }

    #[test]
    fn test_detach_releases_and_ignores_late_callbacks() {
        let (source, mut observer) = attached();
        source.emit(&[IntersectionEntry::hidden()]);

        observer.detach();

        assert_eq!(source.active_count(), 0);
        assert_eq!(source.released_count(), 1);
        source.emit(&[IntersectionEntry::fully_visible()]);
        assert_eq!(observer.state(), StickinessState::Stuck);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let (source, observer) = attached();
        assert_eq!(source.active_count(), 1);
        drop(observer);
        assert_eq!(source.active_count(), 0);
    }

    #[test]
    fn test_reattach_replaces_previous_subscription() {
        let (source, mut observer) = attached();
        observer
            .attach(source.clone(), Some(&Anchor::new("header-2")), |_| {})
            .unwrap();
        assert_eq!(source.active_count(), 1);
        assert_eq!(source.released_count(), 1);
    }

    #[test]
    fn test_failed_observe_leaves_observer_detached() {
        let source = ManualIntersectionSource::failing("observer unsupported");
        let mut observer = StickinessObserver::new(ObserverConfig::default());

        let err = observer
            .attach(source, Some(&Anchor::new("header")), |_| {})
            .unwrap_err();

        assert!(matches!(err, HeaderError::ObserveFailed { .. }));
        assert!(!observer.is_attached());
        assert!(!observer.cell().is_active());
    }

    #[test]
    fn test_sticky_class_only_when_stuck() {
        let classes = HeaderClasses::default();
        assert_eq!(
            StickinessState::Stuck.class_for(&classes),
            Some("header-sticky")
        );
        assert_eq!(StickinessState::NotStuck.class_for(&classes), None);
    }
}
