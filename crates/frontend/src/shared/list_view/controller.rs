//! List state machine: query transitions, fetch ticketing and the
//! delete-then-refresh page adjustment. Free of signals and I/O.

use super::query::{is_reserved, ListQuery, PageSize, MAX_PAGE};
use crate::shared::api::ApiResult;
use contracts::shared::envelope::Page;
use std::collections::BTreeSet;

/// One issued fetch: the query it was issued for and its version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub version: u64,
    pub query: ListQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E> {
    pub query: ListQuery,
    pub items: Vec<E>,
    pub total_items: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Keys of the rows whose deletion is in flight
    pub deleting: BTreeSet<String>,
    issued: u64,
    /// Query whose result `items` currently holds
    displayed: Option<ListQuery>,
}

impl<E: Clone> ListState<E> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            loading: false,
            error: None,
            deleting: BTreeSet::new(),
            issued: 0,
            displayed: None,
        }
    }

    pub fn latest_version(&self) -> u64 {
        self.issued
    }

    pub fn is_latest(&self, ticket: &FetchTicket) -> bool {
        ticket.version == self.issued
    }

    /// Issue a fetch for the current query
    pub fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        FetchTicket {
            version: self.issued,
            query: self.query.clone(),
        }
    }

    /// Apply `change` to the query; when `reset_page` is set the page goes
    /// back to 0. A ticket is issued only when the query actually changed.
    fn transition(&mut self, reset_page: bool, change: impl FnOnce(&mut ListQuery)) -> Option<FetchTicket> {
        let before = self.query.clone();
        change(&mut self.query);
        if reset_page {
            self.query.page = 0;
        }
        if self.query == before {
            None
        } else {
            log::debug!("list query -> {:?}", self.query);
            Some(self.issue())
        }
    }

    pub fn set_page(&mut self, page: usize) -> Option<FetchTicket> {
        self.transition(false, |q| q.page = page.min(MAX_PAGE))
    }

    /// Adopt a query read back from the address bar (back/forward, link to
    /// the same list). Nothing is issued when it matches the current one.
    pub fn replace_query(&mut self, query: ListQuery) -> Option<FetchTicket> {
        self.transition(false, |q| *q = query)
    }

    pub fn set_page_size(&mut self, size: PageSize) -> Option<FetchTicket> {
        self.transition(true, |q| q.page_size = size)
    }

    /// Same field flips the direction; a new field sorts ascending
    pub fn set_sort(&mut self, field: &str) -> Option<FetchTicket> {
        self.transition(true, |q| {
            if q.sort_field == field {
                q.sort_direction = q.sort_direction.flip();
            } else {
                q.sort_field = field.to_string();
                q.sort_direction = Default::default();
            }
        })
    }

    /// Empty or blank value removes the filter
    pub fn set_filter(&mut self, name: &str, value: &str) -> Option<FetchTicket> {
        if is_reserved(name) || name.is_empty() {
            log::warn!("refusing filter named {:?}", name);
            return None;
        }
        let value = value.trim();
        self.transition(true, |q| {
            if value.is_empty() {
                q.filters.remove(name);
            } else {
                q.filters.insert(name.to_string(), value.to_string());
            }
        })
    }

    pub fn clear_filters(&mut self) -> Option<FetchTicket> {
        self.transition(true, |q| q.filters.clear())
    }

    pub fn begin_delete(&mut self, key: String) {
        self.deleting.insert(key);
    }

    pub fn end_delete(&mut self, key: &str) {
        self.deleting.remove(key);
    }

    pub fn is_deleting(&self, key: &str) -> bool {
        self.deleting.contains(key)
    }

    /// Show a cached page while the ticket's own fetch is still running
    pub fn show_cached(&mut self, ticket: &FetchTicket, page: Page<E>) {
        if !self.is_latest(ticket) {
            return;
        }
        self.fill(ticket, page);
    }

    /// Apply a fetch result. Results of superseded tickets are dropped;
    /// returns whether the result was applied.
    pub fn apply(&mut self, ticket: &FetchTicket, result: ApiResult<Page<E>>) -> bool {
        if !self.is_latest(ticket) {
            log::debug!(
                "dropping stale list result v{} (latest v{})",
                ticket.version,
                self.issued
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.error = None;
                self.fill(ticket, page);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    fn fill(&mut self, ticket: &FetchTicket, page: Page<E>) {
        self.items = page.content;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages;
        self.displayed = Some(ticket.query.clone());
    }

    /// Ticket for the refresh after a confirmed delete.
    ///
    /// Steps back one page when the row removed was the only one shown on a
    /// page past the first; otherwise re-fetches the current query.
    pub fn after_delete(&mut self) -> FetchTicket {
        let showing_current = self.displayed.as_ref() == Some(&self.query);
        if showing_current && self.items.len() == 1 && self.query.page > 0 {
            self.query.page -= 1;
        }
        self.issue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiError;
    use crate::shared::list_view::query::{ListDefaults, SortDirection};

    fn state() -> ListState<u32> {
        ListState::new(ListQuery::new(&ListDefaults::new("sku", PageSize::DEFAULT)))
    }

    fn page_of(items: Vec<u32>, total: u64) -> Page<u32> {
        let size = 10u64;
        Page {
            content: items,
            total_items: total,
            total_pages: total.div_ceil(size) as u32,
            current_page: None,
        }
    }

    #[test]
    fn test_transitions_reset_page() {
        let mut s = state();
        assert!(s.set_page(3).is_some());
        assert_eq!(s.query.page, 3);

        s.set_sort("nombre");
        assert_eq!(s.query.page, 0);

        s.set_page(2);
        s.set_filter("search", "tuerca");
        assert_eq!(s.query.page, 0);

        s.set_page(2);
        s.set_page_size(PageSize::new(20).unwrap());
        assert_eq!(s.query.page, 0);

        s.set_page(5);
        s.clear_filters();
        assert_eq!(s.query.page, 0);
    }

    #[test]
    fn test_unchanged_query_issues_nothing() {
        let mut s = state();
        assert!(s.set_page(0).is_none());
        assert!(s.set_filter("search", "   ").is_none());
        assert!(s.set_page_size(PageSize::DEFAULT).is_none());
        assert_eq!(s.latest_version(), 0);
    }

    #[test]
    fn test_sort_flip() {
        let mut s = state();
        s.set_sort("nombre");
        assert_eq!(s.query.sort_direction, SortDirection::Asc);
        s.set_sort("nombre");
        assert_eq!(s.query.sort_direction, SortDirection::Desc);
        s.set_sort("cantidad");
        assert_eq!(s.query.sort_field, "cantidad");
        assert_eq!(s.query.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_page_is_bounded() {
        let mut s = state();
        s.set_page(usize::MAX);
        assert_eq!(s.query.page, MAX_PAGE);
    }

    #[test]
    fn test_replace_query_keeps_page_and_skips_same_query() {
        let mut s = state();
        assert!(s.replace_query(s.query.clone()).is_none());

        let mut back = s.query.clone();
        back.page = 3;
        back.filters.insert("search".into(), "tuerca".into());
        let t = s.replace_query(back.clone()).unwrap();
        assert_eq!(t.query, back);
        assert_eq!(s.query.page, 3);
    }

    #[test]
    fn test_overlapping_deletes_keep_each_row_busy() {
        let mut s = state();
        s.begin_delete("1".into());
        s.begin_delete("2".into());
        s.end_delete("1");
        assert!(!s.is_deleting("1"));
        assert!(s.is_deleting("2"));
        s.end_delete("2");
        assert!(s.deleting.is_empty());
    }

    #[test]
    fn test_reserved_filter_names_refused() {
        let mut s = state();
        assert!(s.set_filter("page", "4").is_none());
        assert!(s.query.filters.is_empty());
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut s = state();
        let first = s.issue();
        let second = s.set_page(1).unwrap();

        assert!(s.apply(&second, Ok(page_of(vec![11, 12], 12))));
        assert!(!s.apply(&first, Ok(page_of(vec![1, 2, 3], 12))));
        assert_eq!(s.items, vec![11, 12]);
        assert!(!s.loading);
    }

    #[test]
    fn test_error_keeps_previous_items() {
        let mut s = state();
        let t = s.issue();
        s.apply(&t, Ok(page_of(vec![1], 1)));
        let t = s.issue();
        s.apply(&t, Err(ApiError::Network("offline".into())));
        assert_eq!(s.items, vec![1]);
        assert_eq!(s.error.as_deref(), Some("Error de red: offline"));
    }

    #[test]
    fn test_after_delete_steps_back_from_single_item_page() {
        let mut s = state();
        let t = s.set_page(2).unwrap();
        s.apply(&t, Ok(page_of(vec![21], 21)));

        let refresh = s.after_delete();
        assert_eq!(s.query.page, 1);
        assert_eq!(refresh.query.page, 1);
    }

    #[test]
    fn test_after_delete_refetches_same_page() {
        let mut s = state();
        let t = s.set_page(2).unwrap();
        s.apply(&t, Ok(page_of(vec![21, 22], 22)));

        let refresh = s.after_delete();
        assert_eq!(refresh.query.page, 2);

        let mut first = state();
        let t = first.issue();
        first.apply(&t, Ok(page_of(vec![1], 1)));
        assert_eq!(first.after_delete().query.page, 0);
    }

    #[test]
    fn test_after_delete_uses_query_current_at_confirmation() {
        let mut s = state();
        let t = s.set_page(2).unwrap();
        s.apply(&t, Ok(page_of(vec![21], 21)));
        // user moved on while the delete was in flight
        s.set_page(1);

        let refresh = s.after_delete();
        assert_eq!(refresh.query.page, 1);
    }
}
