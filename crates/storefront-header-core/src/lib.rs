//! storefront-header-core - Core library for the storefront page header
//!
//! Framework-agnostic state for the header: viewport stickiness, the
//! connectivity latch, the search overlay with deferred panel loading, and
//! the compositor that turns them into render decisions.

pub mod classes;
pub mod compositor;
pub mod connectivity;
pub mod error;
pub mod event;
pub mod logo;
pub mod search_overlay;
pub mod session;
pub mod stickiness;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use classes::{ClassOverrides, HeaderClasses};
pub use compositor::{compose, HeaderInputs, HeaderViewModel, HOME_PATH};
pub use connectivity::{ConnectivitySnapshot, ConnectivityTracker};
pub use error::{ErrorSeverity, HeaderError};
pub use event::{HeaderEvent, StateSlice};
pub use logo::{LogoDescriptor, LogoStatus};
pub use search_overlay::{
    ElementRef, OverlaySlot, PanelFuture, PanelOutcome, SearchOverlayController,
    SearchOverlayState, SharedPanel,
};
pub use session::HeaderSession;
pub use stickiness::{
    AttachOutcome, IntersectionCallback, IntersectionEntry, IntersectionSource, ObserverConfig,
    StickinessCell, StickinessObserver, StickinessState, Subscription, FULLY_VISIBLE,
};
