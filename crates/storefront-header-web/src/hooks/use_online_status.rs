//! Connectivity hook backed by `navigator.onLine` and window online/offline events

use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;

/// Raw browser connectivity; the header session keeps the offline latch
pub fn use_online_status() -> ReadSignal<bool> {
    let (is_online, set_is_online) = signal(window().navigator().on_line());

    let report = move |online: bool| {
        log!("Browser reported online={}", online);
        set_is_online.set(online);
    };

    let online = window_event_listener(ev::online, move |_| report(true));
    let offline = window_event_listener(ev::offline, move |_| report(false));

    on_cleanup(move || {
        online.remove();
        offline.remove();
    });

    is_online
}
