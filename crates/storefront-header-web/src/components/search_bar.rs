//! Search overlay panel and its loading placeholder

use crate::api::{search_url, SearchPanelConfig};
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Placeholder with the panel's footprint, shown while the panel loads
#[component]
pub fn SearchFallback(
    #[prop(into)] anchor_id: String,
    #[prop(into)] class: String,
    #[prop(into)] input_class: String,
    #[prop(into)] loader_class: String,
    search_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div id=anchor_id class=class node_ref=search_ref>
            <div class=input_class>
                <div class=loader_class></div>
            </div>
        </div>
    }
}

/// Search panel: query input plus suggested searches
///
/// Mounts on the same anchor id as the placeholder it replaces.
#[component]
pub fn SearchBar(
    config: SearchPanelConfig,
    #[prop(into)] anchor_id: String,
    search_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let SearchPanelConfig {
        placeholder,
        suggestions,
        min_query_length,
    } = config;

    let (query, set_query) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();
    let navigate = use_navigate();

    // Focus the input as soon as it mounts
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let too_short = move || query.with(|q| q.trim().chars().count() < min_query_length);

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        if too_short() {
            return;
        }
        navigate(&search_url(&query.get()), Default::default());
    };

    let suggestion_list = (!suggestions.is_empty()).then(|| {
        let items = suggestions
            .iter()
            .map(|term| {
                let href = search_url(term);
                let term = term.clone();
                view! {
                    <li class="search-suggestion">
                        <A href=href>{term}</A>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="search-suggestions">{items}</ul> }
    });

    view! {
        <div id=anchor_id class="search-bar" node_ref=search_ref>
            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    class="search-input"
                    node_ref=input_ref
                    placeholder=placeholder
                    prop:value=move || query.get()
                    on:input=move |e| set_query.set(event_target_value(&e))
                />
                <button type="submit" class="btn btn-primary" disabled=too_short>
                    "Search"
                </button>
            </form>
            {suggestion_list}
        </div>
    }
}
