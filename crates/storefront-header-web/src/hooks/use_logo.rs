//! Logo fetch hook

use crate::api::fetch_logo;
use leptos::prelude::*;
use storefront_header_core::LogoStatus;

/// Fetch the store logo once and expose its status
pub fn use_logo() -> Signal<LogoStatus> {
    let logo_resource =
        LocalResource::new(move || async move { fetch_logo().await.map_err(|e| e.to_string()) });

    Signal::derive(move || match logo_resource.get() {
        None => LogoStatus::from_parts(true, None, None),
        Some(result) => match &*result {
            Ok(logo) => LogoStatus::from_parts(false, None, Some(logo.clone())),
            Err(e) => LogoStatus::from_parts(false, Some(e.clone()), None),
        },
    })
}
