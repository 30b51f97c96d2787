//! Search results page

use crate::api::fetch_search_results;
use crate::state::use_page_loading;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

/// Results for the `query` URL parameter
#[component]
pub fn SearchResults() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| query_map.read().get("query").unwrap_or_default());
    let page_loading = use_page_loading();

    let results_resource = LocalResource::new(move || fetch_search_results(query.get()));

    // Drives the header's page loading indicator
    Effect::new(move |_| page_loading.set(results_resource.get().is_none()));
    on_cleanup(move || page_loading.set(false));

    view! {
        <div class="page search-page">
            <div class="page-header">
                <h2>{move || format!("Results for \"{}\"", query.get())}</h2>
            </div>

            <Suspense fallback=|| view! { <div class="loading">"Searching..."</div> }>
                {move || {
                    results_resource
                        .get()
                        .map(|result| match &*result {
                            Ok(items) if items.is_empty() => {
                                view! {
                                    <p class="empty-state">"No products match your search."</p>
                                }
                                    .into_any()
                            }
                            Ok(items) => {
                                view! {
                                    <ul class="product-list">
                                        {items
                                            .iter()
                                            .map(|item| {
                                                let href = format!("/{}.html", item.url_key);
                                                let name = item.name.clone();
                                                view! {
                                                    <li class="product-item">
                                                        <A href=href>{name}</A>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <div class="error">
                                        <p>{e.clone()}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
