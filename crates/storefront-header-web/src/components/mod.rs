//! Leptos UI components

mod error_boundary;
mod header;
mod indicators;
mod logo;
mod mega_menu;
mod search_bar;
mod switchers;
mod triggers;

pub use error_boundary::ErrorFallback;
pub use header::Header;
pub use indicators::{OnlineIndicator, PageLoadingIndicator};
pub use logo::Logo;
pub use mega_menu::MegaMenu;
pub use search_bar::{SearchBar, SearchFallback};
pub use switchers::{CurrencySwitcher, StoreSwitcher};
pub use triggers::{AccountTrigger, CartTrigger, NavTrigger, SearchTrigger};
