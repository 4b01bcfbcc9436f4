//! Fetch State
//!
//! Plain data owned by the controller. Transitions live here so they can be
//! checked without any async machinery.

use crate::product::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState {
    /// Every product received so far, in fetch order. Never deduplicated.
    pub products: Vec<Product>,
    /// Offset for the next request
    pub skip: usize,
    /// False once a page comes back shorter than the page size
    pub has_more: bool,
    /// A fetch has been issued and not yet resolved
    pub loading: bool,
    pub error: Option<String>,
    /// Set by the first successful fetch; gates the sentinel
    pub has_fetched_once: bool,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            skip: 0,
            has_more: true,
            loading: false,
            error: None,
            has_fetched_once: false,
        }
    }
}

impl FetchState {
    pub(crate) fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// `has_more` only looks at the page length: a short page anywhere ends
    /// the feed, and the response's `total` is not consulted.
    pub(crate) fn apply_page(&mut self, page: Vec<Product>, page_size: usize) {
        self.has_more = page.len() == page_size;
        self.products.extend(page);
        self.skip += page_size;
        self.has_fetched_once = true;
        self.loading = false;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}
