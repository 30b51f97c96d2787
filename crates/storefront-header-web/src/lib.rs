//! storefront-header-web - Leptos frontend for the storefront header

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod intersection;
pub mod pages;
pub mod state;

pub use app::App;
