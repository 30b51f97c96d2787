//! Search overlay open/closed state and deferred panel loading
//!
//! The panel is built by a factory that runs on the first `closed -> open`
//! transition and never before. Its result is cached for the lifetime of the
//! controller, so re-opening after a close does not load it again.

use crate::classes::HeaderClasses;
use crate::error::HeaderError;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, error, warn};

pub const SEARCH_PANEL_REF: &str = "search-panel";
pub const SEARCH_TRIGGER_REF: &str = "search-trigger";

/// Open/closed state of the search overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOverlayState {
    #[default]
    Closed,
    Open,
}

impl SearchOverlayState {
    pub fn is_open(self) -> bool {
        self == SearchOverlayState::Open
    }

    /// Trigger activation always lands on `Open`
    pub fn on_trigger(self) -> Self {
        SearchOverlayState::Open
    }

    /// Route change always lands on `Closed`
    pub fn on_navigation(self) -> Self {
        SearchOverlayState::Closed
    }

    /// Root class variant; depends on the overlay only
    pub fn class_for(self, classes: &HeaderClasses) -> &str {
        match self {
            SearchOverlayState::Open => &classes.open,
            SearchOverlayState::Closed => &classes.closed,
        }
    }
}

/// Named reference to an element used for focus and scroll management
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    id: String,
}

impl ElementRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Future produced by the panel factory
pub type PanelFuture<P> = LocalBoxFuture<'static, Result<P, HeaderError>>;

/// Cached load result; errors are kept as their display text
pub type PanelOutcome<P> = Result<Rc<P>, String>;

/// Cloneable handle to the in-flight or finished panel load
pub type SharedPanel<P> = Shared<LocalBoxFuture<'static, PanelOutcome<P>>>;

type PanelFactory<P> = Box<dyn FnOnce() -> PanelFuture<P>>;

/// What the overlay slot of the header renders
#[derive(Debug, Clone, PartialEq)]
pub enum OverlaySlot<P> {
    /// Overlay closed; nothing in the tree
    Absent,
    /// Open, panel still loading; same footprint as the panel
    Placeholder { anchor: ElementRef },
    /// Open with the loaded panel
    Loaded { anchor: ElementRef, panel: Rc<P> },
    /// Open, load failed; handed to the outer fallback boundary
    Failed { anchor: ElementRef, message: String },
}

impl<P> OverlaySlot<P> {
    pub fn is_present(&self) -> bool {
        !matches!(self, OverlaySlot::Absent)
    }

    pub fn anchor(&self) -> Option<&ElementRef> {
        match self {
            OverlaySlot::Absent => None,
            OverlaySlot::Placeholder { anchor }
            | OverlaySlot::Loaded { anchor, .. }
            | OverlaySlot::Failed { anchor, .. } => Some(anchor),
        }
    }
}

/// Sole owner of the search overlay state
pub struct SearchOverlayController<P: 'static> {
    state: SearchOverlayState,
    factory: Option<PanelFactory<P>>,
    panel: Option<SharedPanel<P>>,
    load_count: u32,
    search_ref: ElementRef,
    search_trigger_ref: ElementRef,
}

impl<P: 'static> SearchOverlayController<P> {
    pub fn new<F>(factory: F) -> Self
    where
        F: FnOnce() -> PanelFuture<P> + 'static,
    {
        Self {
            state: SearchOverlayState::Closed,
            factory: Some(Box::new(factory)),
            panel: None,
            load_count: 0,
            search_ref: ElementRef::new(SEARCH_PANEL_REF),
            search_trigger_ref: ElementRef::new(SEARCH_TRIGGER_REF),
        }
    }


    pub fn state(&self) -> SearchOverlayState {
        self.state
    }

    pub fn is_search_open(&self) -> bool {
        self.state.is_open()
    }

    /// Anchor shared by the placeholder and the loaded panel
    pub fn search_ref(&self) -> &ElementRef {
        &self.search_ref
    }

    pub fn search_trigger_ref(&self) -> &ElementRef {
        &self.search_trigger_ref
    }

    /// How many times the panel factory has run (0 or 1)
    pub fn load_count(&self) -> u32 {
        self.load_count
    }

    /// Trigger activation. Returns true if the overlay was closed.
    ///
    /// Activating while already open leaves it open.
    pub fn handle_search_trigger_click(&mut self) -> bool {
        if self.state.is_open() {
            debug!("Search trigger activated while open");
            return false;
        }

        self.state = self.state.on_trigger();
        self.start_panel_load();
        debug!("Search overlay opened");
        true
    }

    /// Called by the routing collaborator when the location changes.
    /// Returns true if the overlay was open.
    pub fn close_on_navigation(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.state = self.state.on_navigation();
        debug!("Search overlay closed by navigation");
        true
    }

    fn start_panel_load(&mut self) {
        let Some(factory) = self.factory.take() else {
            return;
        };

        self.load_count += 1;
        let load = factory();
        let shared = async move {
            load.await.map(Rc::new).map_err(|e| {
                if e.needs_boundary() {
                    error!(error = %e, "Search panel load failed");
                } else {
                    warn!(error = %e, "Search panel degraded");
                }
                e.to_string()
            })
        }
        .boxed_local()
        .shared();
        self.panel = Some(shared);
    }

    /// Handle to the panel load while the overlay is open
    pub fn panel(&self) -> Option<SharedPanel<P>> {
        if !self.state.is_open() {
            return None;
        }
        self.panel.clone()
    }

    pub fn slot(&self) -> OverlaySlot<P> {
        if !self.state.is_open() {
            return OverlaySlot::Absent;
        }

        let anchor = self.search_ref.clone();
        match self.panel.as_ref().and_then(|p| p.peek()) {
            None => OverlaySlot::Placeholder { anchor },
            Some(Ok(panel)) => OverlaySlot::Loaded {
                anchor,
                panel: Rc::clone(panel),
            },
            Some(Err(message)) => OverlaySlot::Failed {
                anchor,
                message: message.clone(),
            },
        }
    }
}

impl<P: 'static> fmt::Debug for SearchOverlayController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOverlayController")
            .field("state", &self.state)
            .field("load_count", &self.load_count)
            .field("search_ref", &self.search_ref)
            .field("search_trigger_ref", &self.search_trigger_ref)
            .finish()
    }
}
