//! Query Models
//!
//! Data structures shared by the query engine and the UI.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date;

/// Todo item as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "todo", alias = "text")]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: impl Into<String>, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Calendar day this item was created on
    pub fn created_day(&self) -> NaiveDate {
        date::day_of(&self.created_at)
    }
}

/// Active search and date-range constraints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search_term: String,
    /// Inclusive lower bound
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to_date: Option<NaiveDate>,
}

impl FilterSpec {
    /// Build a filter from raw form values.
    ///
    /// Date strings that don't parse leave that bound unset.
    pub fn from_inputs(search_term: &str, from_date: &str, to_date: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            from_date: date::parse_day(from_date),
            to_date: date::parse_day(to_date),
        }
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty() && self.from_date.is_none() && self.to_date.is_none()
    }

    /// Whether `item` passes all three predicates
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_text(item) && self.matches_dates(item)
    }

    fn matches_text(&self, item: &Item) -> bool {
        let term = self.search_term.trim();
        if term.is_empty() {
            return true;
        }
        item.text.to_lowercase().contains(&term.to_lowercase())
    }

    fn matches_dates(&self, item: &Item) -> bool {
        if self.from_date.is_none() && self.to_date.is_none() {
            return true;
        }
        let day = item.created_day();
        self.from_date.map_or(true, |from| day >= from) && self.to_date.map_or(true, |to| day <= to)
    }
}

/// Pagination cursor and page size (both 1-based / positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_size: usize,
    pub current_page: usize,
}

impl PageState {
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    /// Zero values are raised to 1
    pub fn new(page_size: usize, current_page: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: current_page.max(1),
        }
    }

    pub fn first_page(page_size: usize) -> Self {
        Self::new(page_size, 1)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first_page(Self::DEFAULT_PAGE_SIZE)
    }
}

/// Ready-to-render slice of items plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResult {
    pub page_items: Vec<Item>,
    /// 0 when nothing matches
    pub total_pages: usize,
    /// Always within `[1, max(1, total_pages)]`
    pub current_page: usize,
    pub filtered_count: usize,
    pub page_size: usize,
}

impl ViewResult {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1..=total_pages, for numbered page buttons
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_item_from_backend_json() {
        let json = r#"{"_id":"65a1","todo":"Buy milk","completed":true,"createdAt":"2024-01-03T10:15:00.000Z","__v":0}"#;
        let item: Item = serde_json::from_str(json).expect("valid item json");

        assert_eq!(item.id, "65a1");
        assert_eq!(item.text, "Buy milk");
        assert!(item.completed);
        assert_eq!(item.created_at, Utc.with_ymd_and_hms(2024, 1, 3, 10, 15, 0).unwrap());
    }

    #[test]
    fn test_item_completed_defaults_to_false() {
        let json = r#"{"id":"1","text":"Walk dog","createdAt":"2024-01-03T00:00:00Z"}"#;
        let item: Item = serde_json::from_str(json).expect("aliases accepted");

        assert_eq!(item.id, "1");
        assert_eq!(item.text, "Walk dog");
        assert!(!item.completed);
    }

    #[test]
    fn test_created_day_uses_utc_date() {
        let item = Item::new("1", "late", Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap());
        assert_eq!(item.created_day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_filter_from_inputs_ignores_bad_dates() {
        let filter = FilterSpec::from_inputs("milk", "2024-13-40", "2024-01-05");

        assert_eq!(filter.search_term, "milk");
        assert_eq!(filter.from_date, None);
        assert_eq!(filter.to_date, NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn test_filter_is_empty() {
        assert!(FilterSpec::default().is_empty());
        assert!(FilterSpec::from_inputs("   ", "", "nope").is_empty());
        assert!(!FilterSpec::from_inputs("a", "", "").is_empty());
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let item = Item::new("1", "Buy MILK today", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        assert!(FilterSpec::from_inputs("milk", "", "").matches(&item));
        assert!(FilterSpec::from_inputs("  buy ", "", "").matches(&item));
        assert!(!FilterSpec::from_inputs("bread", "", "").matches(&item));
    }

    #[test]
    fn test_page_state_normalizes_zero() {
        let page = PageState::new(0, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_view_result_navigation_flags() {
        let view = ViewResult {
            page_items: Vec::new(),
            total_pages: 3,
            current_page: 2,
            filtered_count: 9,
            page_size: 3,
        };

        assert!(view.has_previous());
        assert!(view.has_next());
        assert_eq!(view.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
