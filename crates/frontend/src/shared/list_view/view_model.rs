use super::address_bar::AddressBar;
use super::controller::{FetchTicket, ListState};
use super::query::{encode_query, parse_query, ListDefaults, ListQuery, PageSize};
use crate::shared::api::{Key, Operations, Transport};
use crate::shared::cache::QueryCache;
use crate::shared::notifications::NotificationChannel;
use contracts::domain::common::{AggregateId, MutationKind};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use std::sync::Arc;

/// Paged list of one entity kept in step with the address bar
pub struct ListViewModel<R: Operations, T: Transport> {
    pub state: RwSignal<ListState<R::Entity>>,
    transport: T,
    address_bar: Arc<dyn AddressBar>,
    defaults: ListDefaults,
    notifier: NotificationChannel,
    cache: QueryCache,
}

impl<R: Operations, T: Transport> Clone for ListViewModel<R, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            transport: self.transport.clone(),
            address_bar: self.address_bar.clone(),
            defaults: self.defaults.clone(),
            notifier: self.notifier.clone(),
            cache: self.cache,
        }
    }
}

impl<R: Operations, T: Transport> ListViewModel<R, T> {
    /// Read the initial query from the address bar
    pub fn new(
        transport: T,
        address_bar: Arc<dyn AddressBar>,
        notifier: NotificationChannel,
        cache: QueryCache,
        defaults: &ListDefaults,
    ) -> Self {
        let query = parse_query(&address_bar.search(), defaults);
        address_bar.replace_search(&encode_query(&query));
        Self {
            state: RwSignal::new(ListState::new(query)),
            transport,
            address_bar,
            defaults: defaults.clone(),
            notifier,
            cache,
        }
    }

    pub fn query(&self) -> ListQuery {
        self.state.with_untracked(|s| s.query.clone())
    }

    fn transition(
        &self,
        f: impl FnOnce(&mut ListState<R::Entity>) -> Option<FetchTicket>,
    ) -> Option<FetchTicket> {
        let mut ticket = None;
        self.state.update(|s| ticket = f(s));
        self.sync_address_bar();
        ticket
    }

    fn sync_address_bar(&self) {
        let encoded = self.state.with_untracked(|s| encode_query(&s.query));
        self.address_bar.replace_search(&encoded);
    }

    /// Re-read the query after the location changed outside the list
    /// (back/forward, a link to the same list). The address bar is
    /// normalized again; a ticket is issued only when the query differs.
    pub fn follow_address(&self, search: &str) -> Option<FetchTicket> {
        let query = parse_query(search, &self.defaults);
        let ticket = self.state.try_update(|s| s.replace_query(query)).flatten();
        if ticket.is_some() {
            self.sync_address_bar();
        }
        ticket
    }

    /// Follow the router's location for as long as the page is mounted
    pub fn track_location(&self) {
        let search = use_location().search;
        let vm = self.clone();
        Effect::new(move |_| {
            let current = search.get();
            vm.dispatch(vm.follow_address(&current));
        });
    }

    pub fn set_page(&self, page: usize) -> Option<FetchTicket> {
        self.transition(|s| s.set_page(page))
    }

    pub fn set_page_size(&self, size: PageSize) -> Option<FetchTicket> {
        self.transition(|s| s.set_page_size(size))
    }

    pub fn set_sort(&self, field: &str) -> Option<FetchTicket> {
        self.transition(|s| s.set_sort(field))
    }

    pub fn set_filter(&self, name: &str, value: &str) -> Option<FetchTicket> {
        self.transition(|s| s.set_filter(name, value))
    }

    pub fn clear_filters(&self) -> Option<FetchTicket> {
        self.transition(|s| s.clear_filters())
    }

    /// Ticket for (re)loading the current query
    pub fn reload(&self) -> Option<FetchTicket> {
        self.state.try_update(|s| s.issue())
    }

    /// Run the fetch for `ticket`; a cached page for the same query is shown
    /// while the request is in flight.
    pub async fn fetch(&self, ticket: FetchTicket) {
        let key = encode_query(&ticket.query);
        if let Some(cached) = self.cache.get_page::<R::Entity>(R::KIND, &key) {
            self.state.update(|s| s.show_cached(&ticket, cached));
        }

        let result = R::fetch_page(&self.transport, &ticket.query).await;
        if let Ok(page) = &result {
            self.cache.put_page(R::KIND, key, page.clone());
        }

        let failure = result.as_ref().err().map(ToString::to_string);
        let mut applied = false;
        self.state.update(|s| applied = s.apply(&ticket, result));

        if applied {
            if let Some(message) = failure {
                log::error!("loading {} failed: {}", R::KIND, message);
                self.notifier.error(format!(
                    "Error al cargar {}: {}",
                    R::KIND.list_name().to_lowercase(),
                    message
                ));
            }
        }
    }

    /// Delete one record and refresh the list.
    ///
    /// The refresh is computed from the query current when the server
    /// confirms, not the one at the time of the click.
    pub async fn delete(&self, key: Key<R>) -> bool {
        let row = key.as_string();
        self.state.update(|s| s.begin_delete(row.clone()));
        let result = R::remove(&self.transport, key).await;
        self.state.update(|s| s.end_delete(&row));

        match result {
            Ok(()) => {
                self.cache.apply_mutation(R::KIND, MutationKind::Delete);
                let ticket = self.state.try_update(|s| s.after_delete());
                self.sync_address_bar();
                self.notifier.success(R::DELETED);
                if let Some(ticket) = ticket {
                    self.fetch(ticket).await;
                }
                true
            }
            Err(e) => {
                self.notifier
                    .error(format!("Error al eliminar {}: {}", R::THE_ELEMENT, e));
                false
            }
        }
    }

    /// Fire-and-forget fetch for event handlers
    pub fn dispatch(&self, ticket: Option<FetchTicket>) {
        if let Some(ticket) = ticket {
            let vm = self.clone();
            wasm_bindgen_futures::spawn_local(async move { vm.fetch(ticket).await });
        }
    }

    /// Ask the user, then delete in the background
    pub fn confirm_delete(&self, key: Key<R>, caption: String) {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("¿Está seguro de eliminar {}?", caption))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.delete(key).await;
        });
    }

    pub fn is_deleting(&self, key: &Key<R>) -> bool {
        let key = key.as_string();
        self.state.with(|s| s.is_deleting(&key))
    }
}
