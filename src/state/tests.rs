//! Tests for pagination state module

use super::*;
use pretty_assertions::assert_eq;

fn window_state() -> PaginationState {
    PaginationState::new("page", "sep")
        .with_current(5, 2)
        .with_previous(4, 2)
        .with_next(6, 2)
        .with_last(10, 5)
        .with_rows(vec![
            PageRow::new(4, 2),
            PageRow::new(5, 2),
            PageRow::new(6, 2),
        ])
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_state_default() {
    let state = PaginationState::default();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.last_page, 1);
    assert_eq!(state.page_param, "page");
    assert_eq!(state.separator_param, "sep");
    assert!(state.current_separator().is_none());
    assert!(state.rows.is_empty());
}

#[test]
fn test_row_labels() {
    let row = PageRow::new(3, 1).with_labels("21-30", "30-21");
    assert_eq!(row.page, 3);
    assert_eq!(row.separator, 1);
    assert_eq!(row.increment_label, "21-30");
    assert_eq!(row.decrement_label, "30-21");
}

// ============================================================================
// Presence Tests
// ============================================================================

#[test]
fn test_zero_counts_as_absent() {
    let mut state = window_state();
    state.current_separator = Some(0);
    state.previous_page = Some(0);
    state.next_separator = Some(0);
    state.last_separator = Some(0);

    assert_eq!(state.current_separator(), None);
    assert_eq!(state.previous_target(), None);
    assert_eq!(state.next_target(), None);
    assert_eq!(state.last_target(), None);
}

#[test]
fn test_neighbour_targets() {
    let state = window_state();
    assert_eq!(state.current_separator(), Some(2));
    assert_eq!(state.previous_target(), Some((4, 2)));
    assert_eq!(state.next_target(), Some((6, 2)));
    assert_eq!(state.last_target(), Some((10, 5)));
    assert_eq!(state.previous_block_target(), None);
    assert_eq!(state.next_block_target(), None);
}

#[test]
fn test_neighbour_needs_both_page_and_separator() {
    let mut state = window_state();
    state.previous_separator = None;
    state.next_page = None;
    assert_eq!(state.previous_target(), None);
    assert_eq!(state.next_target(), None);
}

#[test]
fn test_block_targets_page_is_optional() {
    let state = window_state()
        .with_previous_block(Some(1), 1)
        .with_next_block(None, 3);
    assert_eq!(state.previous_block_target(), Some((Some(1), 1)));
    assert_eq!(state.next_block_target(), Some((None, 3)));
}

#[test]
fn test_active_row() {
    let state = window_state();
    assert_eq!(state.active_row(), Some(&PageRow::new(5, 2)));

    let outside = window_state().with_current(9, 4);
    assert_eq!(outside.active_row(), None);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_validate_ok() {
    assert!(window_state().validate().is_ok());
}

#[test]
fn test_validate_empty_page_param() {
    let state = PaginationState::new("", "sep");
    let err = state.validate().unwrap_err();
    assert!(err.is_state_error());
    assert!(err.to_string().contains("page_param"));
}

#[test]
fn test_validate_blank_separator_param() {
    let state = PaginationState::new("page", "  ");
    let err = state.validate().unwrap_err();
    assert!(err.to_string().contains("separator_param"));
}

// ============================================================================
// Serde Tests
// ============================================================================

#[test]
fn test_deserialize_with_defaults() {
    let yaml = r"
current_page: 5
current_separator: 2
last_page: 10
last_separator: 5
page_param_name: p
rows:
  - page: 4
    separator: 2
  - page: 5
    separator: 2
    increment_label: 41-50
";
    let state: PaginationState = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(state.current_page, 5);
    assert_eq!(state.page_param, "p");
    assert_eq!(state.separator_param, "sep");
    assert_eq!(state.previous_page, None);
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.rows[1].increment_label, "41-50");
    assert_eq!(state.rows[1].decrement_label, "");
}
