//! Top-level category navigation

use leptos::prelude::*;
use leptos_router::components::A;

const CATEGORIES: &[(&str, &str)] = &[
    ("Tops", "/tops"),
    ("Bottoms", "/bottoms"),
    ("Dresses", "/dresses"),
    ("Accessories", "/accessories"),
];

#[component]
pub fn MegaMenu() -> impl IntoView {
    view! {
        <nav class="mega-menu" aria-label="Categories">
            <ul class="mega-menu-list">
                {CATEGORIES
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li class="mega-menu-item">
                                <A href=*href attr:class="mega-menu-link">
                                    {*label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
