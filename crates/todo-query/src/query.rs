//! View Query Engine
//!
//! Pure derivation of the visible page from (items, filter, page state).

use crate::models::{FilterSpec, Item, PageState, ViewResult};

/// Number of pages needed for `count` items, 0 when `count` is 0
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, max(1, total_pages)]`
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Filter `items`, then cut out the requested page.
///
/// Input order is preserved and the requested page is clamped, so the
/// result is always renderable.
pub fn compute_view(items: &[Item], filter: &FilterSpec, page: &PageState) -> ViewResult {
    let page_size = page.page_size.max(1);
    let filtered: Vec<&Item> = items.iter().filter(|item| filter.matches(item)).collect();

    let total_pages = total_pages(filtered.len(), page_size);
    let current_page = clamp_page(page.current_page, total_pages);

    let start = (current_page - 1) * page_size;
    let page_items = filtered
        .iter()
        .skip(start)
        .take(page_size)
        .map(|item| (*item).clone())
        .collect();

    ViewResult {
        page_items,
        total_pages,
        current_page,
        filtered_count: filtered.len(),
        page_size,
    }
}
