//! Server-side pagination shared by every list endpoint.
//!
//! Pages are 0-indexed on both sides of the wire.

use serde::{Deserialize, Serialize};

/// One page of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of records matching the query, across all pages
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 0,
            page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.total_pages()
    }
}

/// Number of pages needed for `total` records; a zero page size counts as one page
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return usize::from(total > 0);
    }
    total.div_ceil(page_size)
}

/// Query parameters accepted by list endpoints (`?page=&page_size=&search=`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size,
            search: None,
        }
    }

    /// Replace the search term; blank input clears it and a new term restarts at page 0
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.split_whitespace().collect::<Vec<_>>().join(" ");
        let search = if term.is_empty() { None } else { Some(term) };
        if search != self.search {
            self.page = 0;
        }
        self.search = search;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Changing the page size invalidates the current page offset
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size != self.page_size {
            self.page = 0;
        }
        self.page_size = page_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 50), 0);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(10, 0), 1);
        assert_eq!(total_pages(0, 0), 0);
    }

    #[test]
    fn test_page_is_last() {
        let page: Page<u32> = Page {
            items: vec![1, 2],
            total: 102,
            page: 2,
            page_size: 50,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_last());
        assert!(Page::<u32>::empty(50).is_last());
    }

    #[test]
    fn test_search_resets_page_and_collapses_whitespace() {
        let query = ListQuery::new(50).with_page(4).with_search("  cable   utp ");
        assert_eq!(query.search.as_deref(), Some("cable utp"));
        assert_eq!(query.page, 0);

        let same = query.clone().with_page(3).with_search("cable utp");
        assert_eq!(same.page, 3);

        let cleared = same.with_search("   ");
        assert_eq!(cleared.search, None);
        assert_eq!(cleared.page, 0);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let query = ListQuery::new(50).with_page(2).with_page_size(100);
        assert_eq!(query.page, 0);
        assert_eq!(query.page_size, 100);

        let unchanged = ListQuery::new(50).with_page(2).with_page_size(50);
        assert_eq!(unchanged.page, 2);
    }
}
