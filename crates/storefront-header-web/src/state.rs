//! App-level shared state provided through context

use leptos::prelude::*;

/// Page-level loading flag owned by the host pages
#[derive(Clone, Copy)]
pub struct PageLoading {
    loading: RwSignal<bool>,
}

impl PageLoading {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn set(&self, loading: bool) {
        self.loading.set(loading);
    }
}

impl Default for PageLoading {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the page loading flag (wraps app root)
pub fn provide_page_loading() -> PageLoading {
    let page_loading = PageLoading::new();
    provide_context(page_loading);
    page_loading
}

/// Page loading flag; a detached flag that never loads when no provider exists
pub fn use_page_loading() -> PageLoading {
    use_context::<PageLoading>().unwrap_or_default()
}
