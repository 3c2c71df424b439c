use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::sync::{Arc, Mutex};
use web_sys::window;

/// The query-string half of the browser location
pub trait AddressBar: Send + Sync + 'static {
    /// Current query string without the leading `?`
    fn search(&self) -> String;

    /// Replace the query string in place (no history entry)
    fn replace_search(&self, query: &str);
}

/// Browser address bar, written through the router.
///
/// Going through `navigate` (replace mode) keeps the router's location
/// signals in step with the URL, so back/forward and links to the same list
/// are seen by `ListViewModel::track_location`.
#[derive(Clone, Copy)]
pub struct RouterAddressBar {
    navigate: StoredValue<Box<dyn Fn(&str, NavigateOptions)>, LocalStorage>,
}

impl RouterAddressBar {
    /// Must be created under the router
    pub fn new() -> Self {
        let navigate: Box<dyn Fn(&str, NavigateOptions)> = Box::new(use_navigate());
        Self {
            navigate: StoredValue::new_local(navigate),
        }
    }
}

impl AddressBar for RouterAddressBar {
    fn search(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
            .trim_start_matches('?')
            .to_string()
    }

    fn replace_search(&self, query: &str) {
        if self.search() == query {
            return;
        }
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let url = if query.is_empty() {
            path
        } else {
            format!("{}?{}", path, query)
        };
        let options = NavigateOptions {
            replace: true,
            scroll: false,
            ..Default::default()
        };
        if self.navigate.try_with_value(|navigate| navigate(&url, options)).is_none() {
            log::warn!("address bar outlived its router; {} not written", url);
        }
    }
}

/// In-memory address bar
#[derive(Debug, Clone, Default)]
pub struct MemoryAddressBar {
    search: Arc<Mutex<String>>,
}

impl MemoryAddressBar {
    pub fn new(initial: &str) -> Self {
        Self {
            search: Arc::new(Mutex::new(initial.trim_start_matches('?').to_string())),
        }
    }
}

impl AddressBar for MemoryAddressBar {
    fn search(&self) -> String {
        self.search.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn replace_search(&self, query: &str) {
        if let Ok(mut search) = self.search.lock() {
            *search = query.to_string();
        }
    }
}
