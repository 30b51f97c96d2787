//! Fallback shown when the search overlay fails to load

use leptos::prelude::*;

/// Error fallback component
///
/// The overlay does not retry on its own; `on_retry` decides what a retry
/// means (the header reloads the page).
#[component]
pub fn ErrorFallback(
    /// Error message to display
    #[prop(into)]
    error: String,
    /// Callback to retry/reset
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-boundary" role="alert">
            <div class="error-boundary-content">
                <p class="error-boundary-message">"Search is unavailable right now."</p>
                <p class="error-boundary-detail">{error}</p>
                <button
                    class="error-boundary-retry"
                    on:click=move |_| on_retry.run(())
                >
                    "Retry"
                </button>
            </div>
        </div>
    }
}
