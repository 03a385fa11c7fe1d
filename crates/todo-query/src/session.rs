//! View Session
//!
//! Owns the item list, the filter and the page cursor for one UI session.
//! Filter edits reset to page 1, navigation and list replacement clamp.

use chrono::NaiveDate;

use crate::models::{FilterSpec, Item, PageState, ViewResult};
use crate::query::{clamp_page, compute_view, total_pages};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSession {
    items: Vec<Item>,
    filter: FilterSpec,
    page: PageState,
}

impl ViewSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filter: FilterSpec::default(),
            page: PageState::first_page(page_size),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn view(&self) -> ViewResult {
        compute_view(&self.items, &self.filter, &self.page)
    }

    fn filtered_pages(&self) -> usize {
        let count = self.items.iter().filter(|item| self.filter.matches(item)).count();
        total_pages(count, self.page.page_size)
    }

    // ========================
    // Filter changes
    // ========================

    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.page.current_page = 1;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.page.current_page = 1;
    }

    pub fn set_from_date(&mut self, day: Option<NaiveDate>) {
        self.filter.from_date = day;
        self.page.current_page = 1;
    }

    pub fn set_to_date(&mut self, day: Option<NaiveDate>) {
        self.filter.to_date = day;
        self.page.current_page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.set_filter(FilterSpec::default());
    }

    // ========================
    // Navigation
    // ========================

    /// Jump to `page`, clamped to the pages the current filter produces
    pub fn go_to_page(&mut self, page: usize) {
        self.page.current_page = clamp_page(page, self.filtered_pages());
    }

    pub fn next_page(&mut self) {
        let total = self.filtered_pages();
        if self.page.current_page < total {
            self.page.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page.current_page > 1 {
            self.page.current_page -= 1;
        }
    }

    // ========================
    // Item list
    // ========================

    /// Swap in a freshly fetched list; filters stay, page is re-clamped
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.page.current_page = clamp_page(self.page.current_page, self.filtered_pages());
    }
}
