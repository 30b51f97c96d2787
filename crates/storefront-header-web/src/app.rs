//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Header;
use crate::config::page_class_overrides;
use crate::pages::{Home, SearchResults};
use crate::state::provide_page_loading;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    provide_page_loading();
    let classes = page_class_overrides();

    view! {
        <Router>
            <div class="app">
                <Header classes=classes />
                <main class="content">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/search") view=SearchResults />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
