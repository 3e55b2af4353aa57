use super::*;

fn numbered(len: usize) -> Vec<DesignRecord> {
    (0..len)
        .map(|i| DesignRecord::new(format!("{i:03}"), format!("Design {i}"), "someone", "#"))
        .collect()
}

#[test]
fn unpaginated_window_shows_newest_block() {
    let window = select_window(20, None, 8);
    assert_eq!(window.start_index, 20);
    assert_eq!(window.count, 8);
    assert_eq!(window.indices().collect::<Vec<_>>(), (12..20).rev().collect::<Vec<_>>());
    assert!(window.nav.has_next);
    assert_eq!(window.nav.next_page_number, Some(1));
    assert!(!window.nav.has_previous);
    assert_eq!(window.nav.previous_page_number, None);
}

#[test]
fn trailing_partial_window() {
    let window = select_window(20, Some(2), 8);
    assert_eq!(window.start_index, 4);
    assert_eq!(window.count, 4);
    assert_eq!(window.indices().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
    assert!(!window.nav.has_next);
    assert_eq!(window.nav.next_page_number, None);
    assert!(window.nav.has_previous);
    assert_eq!(window.nav.previous_page_number, Some(1));
}

#[test]
fn page_one_is_second_newest_block() {
    let window = select_window(20, Some(1), 8);
    assert_eq!(window.start_index, 12);
    assert_eq!(window.indices().collect::<Vec<_>>(), (4..12).rev().collect::<Vec<_>>());
    assert!(window.nav.has_next);
    assert_eq!(window.nav.next_page_number, Some(2));
    assert_eq!(window.nav.previous_page_number, Some(0));
}

#[test]
fn page_zero_behaves_like_no_page() {
    let zero = select_window(20, Some(0), 8);
    let none = select_window(20, None, 8);
    assert_eq!(zero.start_index, none.start_index);
    assert_eq!(zero.count, none.count);
    assert!(!zero.nav.has_previous);
    assert_eq!(zero.nav.next_page_number, Some(1));
}

#[test]
fn page_past_catalog_clamps_to_empty_window() {
    let window = select_window(20, Some(3), 8);
    assert_eq!(window.start_index, 0);
    assert_eq!(window.count, 0);
    assert_eq!(window.indices().count(), 0);
    assert!(!window.nav.has_next);
    assert!(window.nav.has_previous);

    let huge = select_window(20, Some(u32::MAX), usize::MAX);
    assert_eq!(huge.start_index, 0);
    assert_eq!(huge.count, 0);
}

#[test]
fn window_size_never_exceeds_remaining_records() {
    let page_size = 8;
    for len in [0usize, 1, 7, 8, 9, 16, 17, 25] {
        let mut pages = vec![None];
        pages.extend((0..6).map(Some));
        for page in pages {
            let window = select_window(len, page, page_size);
            assert!(window.start_index <= len);
            assert_eq!(window.count, page_size.min(window.start_index));

            let oldest_shown = window.start_index - window.count;
            assert_eq!(window.nav.has_next, oldest_shown > 0, "len={len} page={page:?}");
            assert_eq!(window.nav.has_previous, page.is_some_and(|p| p > 0));
        }
    }
}

#[test]
fn exactly_one_block_has_no_next() {
    let window = select_window(8, None, 8);
    assert_eq!(window.count, 8);
    assert!(!window.nav.has_next);
}

#[test]
fn records_are_returned_newest_first() {
    let records = numbered(20);
    let window = select_window(records.len(), Some(2), 8);
    let ids: Vec<&str> = window.records(&records).into_iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["003", "002", "001", "000"]);
}

#[test]
fn records_clamp_when_catalog_is_shorter_than_window() {
    let records = numbered(3);
    let window = select_window(10, None, 8);
    let ids: Vec<&str> = window.records(&records).into_iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["002"]);

    let past_end = select_window(30, Some(1), 8);
    assert!(past_end.records(&records).is_empty());
}

#[test]
fn hand_built_window_with_oversized_count_stays_in_bounds() {
    let window = WindowResult {
        start_index: 2,
        count: 5,
        nav: build_nav(2, 5, None),
    };
    assert_eq!(window.indices().collect::<Vec<_>>(), vec![1, 0]);

    let records = numbered(10);
    let ids: Vec<&str> = window
        .records(&records)
        .into_iter()
        .map(|record| record.id.as_str())
        .collect();
    assert_eq!(ids, vec!["001", "000"]);
}

#[test]
fn nav_builder_follows_upper_bound_and_page() {
    let nav = build_nav(9, 8, Some(4));
    assert!(nav.has_next);
    assert_eq!(nav.next_page_number, Some(5));
    assert_eq!(nav.previous_page_number, Some(3));

    let nav = build_nav(8, 8, None);
    assert!(!nav.has_next);
    assert!(!nav.has_previous);
}

#[test]
fn window_serializes_flat() {
    let value = serde_json::to_value(select_window(20, Some(2), 8)).expect("json");
    assert_eq!(value["start_index"], 4);
    assert_eq!(value["has_previous"], true);
    assert_eq!(value["previous_page_number"], 1);
}
