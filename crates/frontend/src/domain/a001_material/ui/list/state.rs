use contracts::domain::a001_material::Material;
use contracts::shared::pagination::{ListQuery, Page};
use leptos::prelude::*;

use crate::shared::config::config;

#[derive(Clone, Debug)]
pub struct MaterialListState {
    pub query: ListQuery,
    pub page: Page<Material>,
    pub is_loaded: bool,
    /// Sequence number of the newest request; older responses are dropped
    request_seq: u64,
}

impl Default for MaterialListState {
    fn default() -> Self {
        let page_size = config().default_page_size;
        Self {
            query: ListQuery::new(page_size),
            page: Page::empty(page_size),
            is_loaded: false,
            request_seq: 0,
        }
    }
}

impl MaterialListState {
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// No newer request has been issued since `seq`
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Store the response of request `seq`; returns false when a newer
    /// request has been issued in the meantime
    pub fn apply(&mut self, seq: u64, page: Page<Material>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.page = page;
        self.is_loaded = true;
        true
    }

    /// Apply the search box text; returns whether the query changed
    pub fn set_search(&mut self, term: &str) -> bool {
        let query = self.query.clone().with_search(term);
        let changed = query != self.query;
        self.query = query;
        changed
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages()
    }
}

pub fn create_state() -> RwSignal<MaterialListState> {
    RwSignal::new(MaterialListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total: usize) -> Page<Material> {
        Page {
            items: Vec::new(),
            total,
            page: 0,
            page_size: 25,
        }
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = MaterialListState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(state.apply(second, page_of(3)));
        assert!(!state.apply(first, page_of(99)));
        assert_eq!(state.page.total, 3);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_search_change_restarts_paging() {
        let mut state = MaterialListState::default();
        state.query = state.query.clone().with_page(4);

        assert!(state.set_search("cable"));
        assert_eq!(state.query.page, 0);
        assert!(!state.set_search(" cable "));
    }

    #[test]
    fn test_only_newest_request_is_current() {
        let mut state = MaterialListState::default();
        let first = state.begin_request();
        assert!(state.is_current(first));

        let second = state.begin_request();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));

        // a failed stale request leaves the pending one in charge
        assert!(!state.is_current(first));
        assert!(!state.is_loaded);
    }
}
