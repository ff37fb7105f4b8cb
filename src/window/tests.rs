//! Tests for the window module

use super::*;
use test_case::test_case;

// ============================================================================
// Page Count Tests
// ============================================================================

#[test_case(0, 10 => 0; "no records")]
#[test_case(1, 10 => 1; "single record")]
#[test_case(10, 10 => 1; "exactly one page")]
#[test_case(11, 10 => 2; "one record spills over")]
#[test_case(200, 10 => 20; "twenty pages")]
#[test_case(5, 0 => 0; "zero page size")]
fn test_num_pages(records: u64, page_size: u32) -> u32 {
    num_pages(records, page_size)
}

#[test]
fn test_offset_for() {
    assert_eq!(offset_for(1, 10), 0);
    assert_eq!(offset_for(3, 10), 20);
    // Page 0 never produces a negative offset
    assert_eq!(offset_for(0, 10), 0);
}

// ============================================================================
// Window Scenarios
// ============================================================================

#[test_case(1, 20, 5 => (1, 5); "first page of twenty")]
#[test_case(20, 20, 5 => (16, 20); "last page of twenty")]
#[test_case(10, 20, 5 => (8, 12); "centred")]
#[test_case(2, 20, 5 => (1, 5); "near leading edge")]
#[test_case(19, 20, 5 => (16, 20); "near trailing edge")]
#[test_case(3, 3, 5 => (1, 3); "fewer pages than buttons")]
#[test_case(1, 1, 3 => (1, 1); "single page")]
#[test_case(4, 10, 4 => (2, 5); "even budget")]
#[test_case(1, 10, 1 => (1, 1); "budget of one")]
#[test_case(99, 10, 3 => (8, 10); "current beyond last page")]
#[test_case(0, 10, 3 => (1, 3); "current page zero")]
#[test_case(5, 10, 0 => (5, 5); "zero budget treated as one")]
fn test_compute_window(current: u32, pages: u32, buttons: u32) -> (u32, u32) {
    let window = compute_window(current, pages, buttons);
    (window.start, window.end)
}

#[test]
fn test_empty_window_when_no_pages() {
    let window = compute_window(1, 0, 5);
    assert!(window.is_empty());
    assert_eq!(window.len(), 0);
    assert!(!window.contains(1));
    assert_eq!(window, PageWindow::EMPTY);
}

// ============================================================================
// Window Properties
// ============================================================================

#[test]
fn test_window_is_exact_width_and_contains_current() {
    for buttons in 1..=9 {
        for pages in buttons..=30 {
            for current in 1..=pages {
                let window = compute_window(current, pages, buttons);
                assert_eq!(
                    window.len(),
                    buttons,
                    "width for current={current} pages={pages} buttons={buttons}"
                );
                assert!(window.start >= 1);
                assert!(window.end <= pages);
                assert!(window.contains(current));
            }
        }
    }
}

#[test]
fn test_window_covers_everything_when_budget_exceeds_pages() {
    for buttons in 2..=9 {
        for pages in 1..buttons {
            for current in 1..=pages {
                let window = compute_window(current, pages, buttons);
                assert_eq!(window, PageWindow::new(1, pages));
            }
        }
    }
}

#[test]
fn test_window_is_deterministic() {
    let first = compute_window(7, 42, 5);
    let second = compute_window(7, 42, 5);
    assert_eq!(first, second);
}

// ============================================================================
// Edge Marker Tests
// ============================================================================

#[test]
fn test_edge_markers_at_first_page() {
    let window = compute_window(1, 20, 5);
    let markers = EdgeMarkers::from_window(window, 20);
    assert!(!markers.first);
    assert!(!markers.leading_ellipsis);
    assert!(markers.trailing_ellipsis);
    assert!(markers.last);
}

#[test]
fn test_edge_markers_at_last_page() {
    let window = compute_window(20, 20, 5);
    let markers = EdgeMarkers::from_window(window, 20);
    assert!(markers.first);
    assert!(markers.leading_ellipsis);
    assert!(!markers.trailing_ellipsis);
    assert!(!markers.last);
}

#[test]
fn test_edge_markers_adjacent_to_edges_skip_ellipsis() {
    // Window [2, 4] of 5: first/last buttons are adjacent, no gaps to mark
    let markers = EdgeMarkers::from_window(PageWindow::new(2, 4), 5);
    assert!(markers.first);
    assert!(!markers.leading_ellipsis);
    assert!(!markers.trailing_ellipsis);
    assert!(markers.last);
}

#[test]
fn test_edge_markers_empty() {
    let markers = EdgeMarkers::from_window(PageWindow::EMPTY, 0);
    assert_eq!(markers, EdgeMarkers::default());
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_layout_first_page() {
    let window = compute_window(1, 20, 5);
    let items = layout(1, 20, window, true);

    assert_eq!(
        items,
        vec![
            NavItem::Page {
                number: 1,
                active: true
            },
            NavItem::Page {
                number: 2,
                active: false
            },
            NavItem::Page {
                number: 3,
                active: false
            },
            NavItem::Page {
                number: 4,
                active: false
            },
            NavItem::Page {
                number: 5,
                active: false
            },
            NavItem::Ellipsis,
            NavItem::Last { page: 20 },
            NavItem::Next { page: 2 },
        ]
    );
}

#[test]
fn test_layout_last_page() {
    let window = compute_window(20, 20, 5);
    let items = layout(20, 20, window, true);

    assert_eq!(items[0], NavItem::Previous { page: 19 });
    assert_eq!(items[1], NavItem::First);
    assert_eq!(items[2], NavItem::Ellipsis);
    assert_eq!(
        items.last(),
        Some(&NavItem::Page {
            number: 20,
            active: true
        })
    );
    assert!(!items.iter().any(|i| matches!(i, NavItem::Next { .. })));
}

#[test]
fn test_layout_without_prev_next() {
    let window = compute_window(10, 20, 3);
    let items = layout(10, 20, window, false);
    assert!(!items
        .iter()
        .any(|i| matches!(i, NavItem::Previous { .. } | NavItem::Next { .. })));
}

#[test]
fn test_layout_no_pages_suppresses_everything() {
    let items = layout(1, 0, PageWindow::EMPTY, true);
    assert!(items.is_empty());
}

#[test]
fn test_lazy_layout() {
    assert_eq!(lazy_layout(2, true), vec![NavItem::LoadMore { page: 3 }]);
    assert!(lazy_layout(2, false).is_empty());
}

#[test]
fn test_nav_item_data_page() {
    assert_eq!(NavItem::First.data_page(), Some(1));
    assert_eq!(NavItem::Last { page: 9 }.data_page(), Some(9));
    assert_eq!(NavItem::Ellipsis.data_page(), None);
    assert!(!NavItem::Ellipsis.is_clickable());
    assert!(NavItem::Next { page: 4 }.is_clickable());
}
