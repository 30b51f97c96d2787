//! Page components

mod home;
mod search;

pub use home::Home;
pub use search::SearchResults;
