//! Page loading and connectivity indicators

use leptos::prelude::*;
use storefront_header_core::ConnectivitySnapshot;

/// Thin progress bar shown while the page is loading
#[component]
pub fn PageLoadingIndicator() -> impl IntoView {
    view! {
        <div class="page-loading-indicator" role="progressbar" aria-label="Loading page">
            <div class="page-loading-indicator-bar"></div>
        </div>
    }
}

/// Offline notice, or a "back online" notice once the session has been offline
#[component]
pub fn OnlineIndicator(snapshot: ConnectivitySnapshot) -> impl IntoView {
    let (class, label) = if snapshot.is_online {
        ("online-indicator online-indicator-online", "You are online.")
    } else {
        (
            "online-indicator online-indicator-offline",
            "You are offline. Some features may be unavailable.",
        )
    };

    view! {
        <div class=class role="status" aria-live="polite">
            {label}
        </div>
    }
}
