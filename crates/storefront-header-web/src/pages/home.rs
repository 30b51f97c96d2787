//! Landing page

use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">"New season arrivals"</h1>
                <p class="hero-subtitle">"Scroll down to see the header stick to the top."</p>
            </section>
        </div>
    }
}
