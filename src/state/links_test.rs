use super::*;
use crate::net::types::LinkPage;

fn page(page_no: u32, total_pages: u32) -> LinkPage {
    LinkPage {
        items: vec![Link {
            id: 1,
            title: "X".to_owned(),
            url: "http://x".to_owned(),
            created_at: None,
        }],
        page: page_no,
        page_size: PAGE_SIZE,
        total_items: 11,
        total_pages,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn feed_defaults_to_first_page_loading() {
    let state = LinkFeedState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.page, 1);
    assert_eq!(state.page_size, PAGE_SIZE);
    assert_eq!(state.total_pages, 1);
    assert!(state.loading);
    assert!(!state.creating);
    assert!(state.error.is_none());
}

// =============================================================
// Pagination guards
// =============================================================

#[test]
fn guards_on_single_page() {
    let state = LinkFeedState::default();
    assert!(!state.can_prev());
    assert!(!state.can_next());
}

#[test]
fn guards_on_first_of_many() {
    let mut state = LinkFeedState::default();
    state.apply_page(page(1, 3));
    assert!(!state.can_prev());
    assert!(state.can_next());
}

#[test]
fn guards_on_middle_page() {
    let mut state = LinkFeedState::default();
    state.apply_page(page(2, 3));
    assert!(state.can_prev());
    assert!(state.can_next());
}

#[test]
fn guards_on_last_page() {
    let mut state = LinkFeedState::default();
    state.apply_page(page(3, 3));
    assert!(state.can_prev());
    assert!(!state.can_next());
}

// =============================================================
// Load transitions
// =============================================================

#[test]
fn begin_load_sets_loading_and_clears_error() {
    let mut state = LinkFeedState {
        loading: false,
        error: Some("old".to_owned()),
        ..LinkFeedState::default()
    };
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_page_replaces_whole_slice() {
    let mut state = LinkFeedState::default();
    state.begin_load();
    state.apply_page(page(2, 5));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.page, 2);
    assert_eq!(state.total_items, 11);
    assert_eq!(state.total_pages, 5);
    assert!(!state.loading);
}

#[test]
fn fail_load_keeps_previous_data() {
    let mut state = LinkFeedState::default();
    state.apply_page(page(2, 5));

    state.begin_load();
    state.fail_load("boom");

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.page, 2);
    assert_eq!(state.total_pages, 5);
}
