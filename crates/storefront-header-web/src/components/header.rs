//! Page header: switchers, toolbar, logo link, and the search overlay

use crate::api::SearchPanelConfig;
use crate::components::{
    AccountTrigger, CartTrigger, CurrencySwitcher, ErrorFallback, Logo, MegaMenu, NavTrigger,
    OnlineIndicator, PageLoadingIndicator, SearchBar, SearchFallback, SearchTrigger,
    StoreSwitcher,
};
use crate::hooks::{use_header, HeaderTalon};
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use storefront_header_core::{ClassOverrides, HeaderClasses, HeaderEvent, OverlaySlot, HOME_PATH};

/// Storefront header
///
/// `classes` overrides any of the named style slots; the rest keep their
/// defaults.
#[component]
pub fn Header(#[prop(optional)] classes: ClassOverrides) -> impl IntoView {
    let root_ref = NodeRef::<html::Header>::new();
    let talon = use_header(HeaderClasses::with_overrides(&classes), root_ref);
    let view_model = talon.view_model;

    let HeaderClasses {
        switchers_container,
        switchers,
        toolbar,
        primary_actions,
        secondary_actions,
        logo_container,
        ..
    } = talon.classes();

    let open_search =
        Callback::new(move |_: ()| talon.dispatch.run(HeaderEvent::SearchTriggerActivated));

    view! {
        <>
            <div class=switchers_container>
                <div class=switchers>
                    <StoreSwitcher />
                    <CurrencySwitcher />
                </div>
            </div>
            <header class=move || view_model.with(|vm| vm.root_classes()) node_ref=root_ref>
                <div class=toolbar>
                    <div class=primary_actions>
                        <NavTrigger />
                    </div>
                    <Show when=move || view_model.with(|vm| vm.show_page_loader)>
                        <PageLoadingIndicator />
                    </Show>
                    {move || {
                        view_model
                            .with(|vm| vm.online_indicator)
                            .map(|snapshot| view! { <OnlineIndicator snapshot=snapshot /> })
                    }}
                    <A href=HOME_PATH attr:class=logo_container>
                        {move || {
                            view_model
                                .with(|vm| vm.logo.clone())
                                .map(|logo| view! { <Logo logo=logo class=talon.classes().logo /> })
                        }}
                    </A>
                    <MegaMenu />
                    <div class=secondary_actions>
                        <SearchTrigger
                            on_click=open_search
                            trigger_id=talon.search_trigger_id()
                            trigger_ref=talon.search_trigger_ref
                            expanded=Signal::derive(move || view_model.with(|vm| vm.search_mounted))
                        />
                        <AccountTrigger />
                        <CartTrigger />
                    </div>
                </div>
                <Show when=move || view_model.with(|vm| vm.search_mounted)>
                    <Suspense fallback=move || search_placeholder(talon, talon.search_anchor_id())>
                        {move || talon.search_panel.get().map(|_| search_overlay(talon))}
                    </Suspense>
                </Show>
            </header>
        </>
    }
}

fn search_placeholder(talon: HeaderTalon, anchor_id: String) -> AnyView {
    let classes = talon.classes();
    view! {
        <SearchFallback
            anchor_id=anchor_id
            class=classes.search_fallback
            input_class=classes.input
            loader_class=classes.loader
            search_ref=talon.search_ref
        />
    }
    .into_any()
}

/// Render whatever the overlay slot currently holds
fn search_overlay(talon: HeaderTalon) -> AnyView {
    match talon.overlay_slot() {
        OverlaySlot::Absent => ().into_any(),
        OverlaySlot::Placeholder { anchor } => search_placeholder(talon, anchor.id().to_string()),
        OverlaySlot::Loaded { anchor, panel } => {
            let config = SearchPanelConfig::clone(&panel);
            view! {
                <SearchBar
                    config=config
                    anchor_id=anchor.id().to_string()
                    search_ref=talon.search_ref
                />
            }
            .into_any()
        }
        OverlaySlot::Failed { message, .. } => view! {
            <ErrorFallback
                error=message
                on_retry=Callback::new(move |_| {
                    let _ = window().location().reload();
                })
            />
        }
        .into_any(),
    }
}
