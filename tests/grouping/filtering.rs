//! Title filtering.

use super::common::{make_result, make_results, make_untitled};
use folio::{group_results, SearchResult};

#[test]
fn test_results_without_title_are_omitted() {
    let areas = group_results(&make_results("something", vec![make_untitled("news")]));
    assert!(areas.is_empty());
}

#[test]
fn test_empty_title_counts_as_missing() {
    let mut blank = make_result("guide/blank", "");
    blank.kind = "guide".to_string();
    let areas = group_results(&make_results(
        "",
        vec![blank, make_result("guide/a", "Guide A")],
    ));
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].count(), 1);
}

#[test]
fn test_untitled_results_do_not_use_priority_slots() {
    let mut results: Vec<SearchResult> = (0..5)
        .map(|i| make_untitled(&format!("guide/u{}", i)))
        .collect();
    results.extend((0..5).map(|i| make_result(&format!("guide/{}", i), &format!("G{}", i))));

    let areas = group_results(&make_results("", results));
    assert_eq!(areas[0].priority_pages.len(), 5);
    assert!(areas[0].pages.is_empty());
}
