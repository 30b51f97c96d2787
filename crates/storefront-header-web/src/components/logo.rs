//! Brand logo image

use leptos::prelude::*;
use storefront_header_core::LogoDescriptor;

#[component]
pub fn Logo(logo: LogoDescriptor, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <img
            class=class
            src=logo.src
            alt=logo.alt
            width=logo.width.map(|w| w.to_string())
            height=logo.height.map(|h| h.to_string())
        />
    }
}
