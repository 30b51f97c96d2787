//! Toolbar triggers

use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;

/// Opens the navigation drawer
#[component]
pub fn NavTrigger() -> impl IntoView {
    let (nav_open, set_nav_open) = signal(false);

    view! {
        <button
            class="nav-trigger"
            on:click=move |_| set_nav_open.update(|v| *v = !*v)
            aria-label="Toggle navigation"
            aria-expanded=move || nav_open.get().to_string()
        >
            <span class="nav-trigger-icon">"☰"</span>
        </button>
    }
}

/// Opens the search overlay
#[component]
pub fn SearchTrigger(
    on_click: Callback<()>,
    #[prop(into)] trigger_id: String,
    trigger_ref: NodeRef<html::Button>,
    #[prop(into)] expanded: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            id=trigger_id
            class="search-trigger"
            class:search-trigger-active=move || expanded.get()
            node_ref=trigger_ref
            on:click=move |_| on_click.run(())
            aria-label="Search"
            aria-expanded=move || expanded.get().to_string()
        >
            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="11" cy="11" r="8"/>
                <path d="m21 21-4.3-4.3"/>
            </svg>
        </button>
    }
}

#[component]
pub fn AccountTrigger() -> impl IntoView {
    view! {
        <A href="/account" attr:class="account-trigger" attr:aria-label="Account">
            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>
                <circle cx="12" cy="7" r="4"/>
            </svg>
        </A>
    }
}

#[component]
pub fn CartTrigger() -> impl IntoView {
    view! {
        <A href="/cart" attr:class="cart-trigger" attr:aria-label="Cart">
            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"/>
                <path d="M3 6h18"/>
                <path d="M16 10a4 4 0 0 1-8 0"/>
            </svg>
        </A>
    }
}
