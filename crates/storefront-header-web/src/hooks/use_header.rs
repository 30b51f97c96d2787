//! Header talon: one `HeaderSession` per mounted header, fed by browser signals
//!
//! Every input reaches the session as a `HeaderEvent`. The view only reads
//! `HeaderSession::render` and `HeaderSession::overlay_slot`.

use crate::api::{fetch_search_panel, SearchPanelConfig};
use crate::hooks::{use_logo, use_online_status};
use crate::intersection::DomIntersectionSource;
use crate::state::use_page_loading;
use futures::FutureExt;
use leptos::html;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use storefront_header_core::{
    AttachOutcome, ConnectivityTracker, HeaderClasses, HeaderEvent, HeaderSession,
    HeaderViewModel, ObserverConfig, OverlaySlot, SearchOverlayController,
};

pub type BrowserHeaderSession = HeaderSession<DomIntersectionSource, SearchPanelConfig>;

#[derive(Clone, Copy)]
pub struct HeaderTalon {
    session: StoredValue<BrowserHeaderSession, LocalStorage>,
    pub view_model: Memo<HeaderViewModel>,
    pub dispatch: Callback<HeaderEvent>,
    /// Settles once the search panel load finishes; idle while closed
    pub search_panel: LocalResource<()>,
    pub search_ref: NodeRef<html::Div>,
    pub search_trigger_ref: NodeRef<html::Button>,
}

impl HeaderTalon {
    pub fn overlay_slot(&self) -> OverlaySlot<SearchPanelConfig> {
        self.session
            .try_with_value(|s| s.overlay_slot())
            .unwrap_or(OverlaySlot::Absent)
    }

    pub fn classes(&self) -> HeaderClasses {
        self.session
            .try_with_value(|s| s.classes().clone())
            .unwrap_or_default()
    }

    /// DOM id shared by the search placeholder and the loaded panel
    pub fn search_anchor_id(&self) -> String {
        self.session
            .try_with_value(|s| s.search().search_ref().id().to_string())
            .unwrap_or_default()
    }

    pub fn search_trigger_id(&self) -> String {
        self.session
            .try_with_value(|s| s.search().search_trigger_ref().id().to_string())
            .unwrap_or_default()
    }
}

/// Build the session for a header whose root element is `root`
pub fn use_header(classes: HeaderClasses, root: NodeRef<html::Header>) -> HeaderTalon {
    let logo = use_logo();
    let is_online = use_online_status();
    let page_loading = use_page_loading();
    let location = use_location();

    let search = SearchOverlayController::new(|| fetch_search_panel().boxed_local());
    let session = StoredValue::new_local(HeaderSession::new(
        classes,
        ObserverConfig::default(),
        ConnectivityTracker::new(is_online.get_untracked()),
        search,
    ));
    let revision = RwSignal::new(0u64);

    let dispatch = Callback::new(move |event: HeaderEvent| {
        let changed = session
            .try_update_value(|s| s.dispatch(event))
            .unwrap_or(false);
        if changed {
            revision.update(|n| *n += 1);
        }
    });

    // Attach once the header root is in the DOM
    Effect::new(move |_| {
        let element = root.get().map(web_sys::Element::from);
        let on_change = move |_| {
            revision.try_update(|n| *n += 1);
        };

        session.update_value(|s| {
            match s.mount(DomIntersectionSource, element.as_ref(), on_change) {
                Ok(AttachOutcome::Attached) => log!("Sticky header observation attached"),
                Ok(AttachOutcome::Detached) => {}
                Err(e) => error!("Sticky header disabled: {}", e),
            }
        });
    });

    on_cleanup(move || {
        session.try_update_value(|s| s.unmount());
    });

    Effect::new(move |_| dispatch.run(HeaderEvent::LogoChanged(logo.get())));
    Effect::new(move |_| dispatch.run(HeaderEvent::ConnectivityChanged(is_online.get())));
    Effect::new(move |_| {
        dispatch.run(HeaderEvent::PageLoadingChanged(page_loading.is_loading()))
    });
    Effect::new(move |_| {
        let location = format!("{}{}", location.pathname.get(), location.search.get());
        dispatch.run(HeaderEvent::Navigated(location));
    });

    let view_model = Memo::new(move |_| {
        revision.track();
        session.with_value(|s| s.render())
    });

    // The panel future is only handed out while the overlay is open
    let search_open = Memo::new(move |_| view_model.with(|vm| vm.search_mounted));
    let search_panel = LocalResource::new(move || {
        let pending = if search_open.get() {
            session.try_with_value(|s| s.search().panel()).flatten()
        } else {
            None
        };
        async move {
            if let Some(panel) = pending {
                let _ = panel.await;
            }
        }
    });

    HeaderTalon {
        session,
        view_model,
        dispatch,
        search_panel,
        search_ref: NodeRef::new(),
        search_trigger_ref: NodeRef::new(),
    }
}
