#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::net::types::{Link, LinkPage};

/// Fixed page size for the link feed.
pub const PAGE_SIZE: u32 = 10;

/// State for the paginated link feed on the dashboard.
///
/// The page slice (`items` through `total_pages`) is only ever replaced
/// wholesale from a fetched [`LinkPage`]; a failed fetch keeps the previous
/// data visible and records the error instead.
#[derive(Clone, Debug)]
pub struct LinkFeedState {
    pub items: Vec<Link>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub creating: bool,
    pub error: Option<String>,
}

impl Default for LinkFeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: PAGE_SIZE,
            total_items: 0,
            total_pages: 1,
            loading: true,
            creating: false,
            error: None,
        }
    }
}

impl LinkFeedState {
    /// "Previous" is actionable iff there is an earlier page.
    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// "Next" is actionable iff there is a later page.
    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// A fetch is starting; clear any stale error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the whole page slice atomically from a successful fetch.
    pub fn apply_page(&mut self, page: LinkPage) {
        self.items = page.items;
        self.page = page.page;
        self.page_size = page.page_size;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages;
        self.loading = false;
    }

    /// Record a fetch failure, leaving the previous page slice untouched.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
