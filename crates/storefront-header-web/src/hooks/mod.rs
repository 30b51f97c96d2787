//! Leptos hooks binding the header core to the browser

mod use_header;
mod use_logo;
mod use_online_status;

pub use use_header::{use_header, BrowserHeaderSession, HeaderTalon};
pub use use_logo::use_logo;
pub use use_online_status::use_online_status;
