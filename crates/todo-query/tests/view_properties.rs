//! Property-based tests for `compute_view`.
//!
//! 1. page items are a subsequence of the input, in order
//! 2. `total_pages == 0` iff nothing matches
//! 3. the returned page is always in `[1, max(1, total_pages)]`
//! 4. identical inputs give identical output

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rstest::rstest;
use todo_query::{compute_view, FilterSpec, Item, PageState, ViewSession};

const WORDS: &[&str] = &["milk", "Bread", "call MOM", "gym", "pay rent", "Milkshake"];

fn arb_item() -> impl Strategy<Value = Item> {
    (0..WORDS.len(), 1u32..=28, 0u32..24, any::<bool>()).prop_map(|(word, day, hour, completed)| {
        let mut item = Item::new(
            format!("{}-{}-{}", word, day, hour),
            WORDS[word],
            Utc.with_ymd_and_hms(2024, 2, day, hour, 30, 0).unwrap(),
        );
        item.completed = completed;
        item
    })
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_item(), 0..40)
}

fn arb_day() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((1u32..=28).prop_map(|d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap()))
}

fn arb_filter() -> impl Strategy<Value = FilterSpec> {
    (
        prop::sample::select(vec!["", "  ", "milk", "MOM", "rent", "zzz"]),
        arb_day(),
        arb_day(),
    )
        .prop_map(|(term, from_date, to_date)| FilterSpec {
            search_term: term.to_string(),
            from_date,
            to_date,
        })
}

fn arb_page() -> impl Strategy<Value = PageState> {
    (0usize..8, 0usize..20).prop_map(|(page_size, current_page)| PageState { page_size, current_page })
}

fn is_subsequence(needle: &[Item], haystack: &[Item]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    #[test]
    fn prop_page_items_are_ordered_subsequence(items in arb_items(), filter in arb_filter(), page in arb_page()) {
        let view = compute_view(&items, &filter, &page);
        prop_assert!(is_subsequence(&view.page_items, &items));
        prop_assert!(view.page_items.iter().all(|item| filter.matches(item)));
    }

    #[test]
    fn prop_zero_pages_iff_no_match(items in arb_items(), filter in arb_filter(), page in arb_page()) {
        let view = compute_view(&items, &filter, &page);
        let any_match = items.iter().any(|item| filter.matches(item));
        prop_assert_eq!(view.total_pages == 0, !any_match);
    }

    #[test]
    fn prop_current_page_in_range(items in arb_items(), filter in arb_filter(), page in arb_page()) {
        let view = compute_view(&items, &filter, &page);
        prop_assert!(view.current_page >= 1);
        prop_assert!(view.current_page <= view.total_pages.max(1));
        prop_assert!(view.page_items.len() <= view.page_size);
    }

    #[test]
    fn prop_compute_view_is_deterministic(items in arb_items(), filter in arb_filter(), page in arb_page()) {
        prop_assert_eq!(compute_view(&items, &filter, &page), compute_view(&items, &filter, &page));
    }

    #[test]
    fn prop_pages_cover_filtered_list(items in arb_items(), filter in arb_filter(), page_size in 1usize..8) {
        let first = compute_view(&items, &filter, &PageState::first_page(page_size));
        let mut collected = Vec::new();
        for number in 1..=first.total_pages {
            collected.extend(compute_view(&items, &filter, &PageState::new(page_size, number)).page_items);
        }
        let expected: Vec<Item> = items.iter().filter(|item| filter.matches(item)).cloned().collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn prop_filter_edit_resets_page(items in arb_items(), page in 1usize..10, term in "[a-z]{0,4}") {
        let mut session = ViewSession::new(3);
        session.replace_items(items);
        session.go_to_page(page);
        session.set_search_term(term);
        prop_assert_eq!(session.page().current_page, 1);
    }
}

fn january_items() -> Vec<Item> {
    (1..=6)
        .map(|d| Item::new(format!("jan-{}", d), format!("task {}", d), Utc.with_ymd_and_hms(2024, 1, d, 9, 0, 0).unwrap()))
        .collect()
}

#[rstest]
#[case("", "", 6)]
#[case("2024-01-02", "2024-01-05", 4)]
#[case("2024-01-06", "", 1)]
#[case("", "2024-01-01", 1)]
#[case("not a date", "2024-01-03", 3)]
#[case("2024-01-04", "garbage", 3)]
fn date_range_counts(#[case] from: &str, #[case] to: &str, #[case] expected: usize) {
    let filter = FilterSpec::from_inputs("", from, to);
    let view = compute_view(&january_items(), &filter, &PageState::first_page(5));
    assert_eq!(view.filtered_count, expected);
}

#[rstest]
fn large_filtered_set_page_three_then_search_resets() {
    let items: Vec<Item> = (1..=30)
        .map(|n| Item::new(format!("t{}", n), format!("task {}", n), Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()))
        .collect();
    let mut session = ViewSession::new(5);
    session.replace_items(items);
    session.go_to_page(3);
    assert_eq!(session.view().current_page, 3);

    session.set_search_term("task 1");

    let view = session.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.page_items[0].id, "t1");
}
