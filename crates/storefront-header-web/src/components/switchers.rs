//! Store view and currency switchers

use leptos::prelude::*;

const STORES: &[(&str, &str)] = &[("default", "Default Store View"), ("fr", "French Store View")];
const CURRENCIES: &[&str] = &["USD", "EUR"];

#[component]
pub fn StoreSwitcher() -> impl IntoView {
    let (store, set_store) = signal(STORES[0].0.to_string());

    view! {
        <select
            class="store-switcher"
            aria-label="Store"
            prop:value=move || store.get()
            on:change=move |e| set_store.set(event_target_value(&e))
        >
            {STORES
                .iter()
                .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn CurrencySwitcher() -> impl IntoView {
    let (currency, set_currency) = signal(CURRENCIES[0].to_string());

    view! {
        <select
            class="currency-switcher"
            aria-label="Currency"
            prop:value=move || currency.get()
            on:change=move |e| set_currency.set(event_target_value(&e))
        >
            {CURRENCIES
                .iter()
                .map(|code| view! { <option value=*code>{*code}</option> })
                .collect_view()}
        </select>
    }
}
