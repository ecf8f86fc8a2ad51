//! Priority/overflow split.

use super::common::{docs_fixture, find_area, make_results, scenario_results, titles};
use folio::{group_results, GroupingOptions, ResultGrouper, SearchResult, PRIORITY_COUNT};

#[test]
fn test_first_five_per_area_are_priority() {
    let results = docs_fixture();
    let areas = group_results(&make_results("", results.clone()));

    let api: Vec<SearchResult> = results
        .iter()
        .filter(|p| p.path.starts_with("api"))
        .take(PRIORITY_COUNT)
        .cloned()
        .collect();
    let guide: Vec<SearchResult> = results
        .iter()
        .filter(|p| p.path.starts_with("guide"))
        .take(PRIORITY_COUNT)
        .cloned()
        .collect();

    assert_eq!(areas[0].priority_pages, api);
    assert_eq!(areas[1].priority_pages, guide);
}

#[test]
fn test_overflow_pages_sorted_by_title() {
    let areas = group_results(&make_results("", docs_fixture()));

    assert!(areas[0].pages.is_empty());
    assert_eq!(
        titles(&areas[1].pages),
        vec![
            "Guide e", "Guide f", "Guide g", "Guide h", "Guide i", "Guide j", "Guide k",
            "Guide l"
        ]
    );
}

#[test]
fn test_scenario_api_and_guide() {
    let areas = group_results(&scenario_results());
    assert_eq!(areas.len(), 2);

    let api = find_area(&areas, "api");
    assert_eq!(api.priority_pages.len(), 5);
    assert!(api.pages.is_empty());

    let guide = find_area(&areas, "guide");
    // Priority keeps rank order, not title order
    assert_eq!(
        titles(&guide.priority_pages),
        vec!["Guide C", "Guide A", "Guide J", "Guide B", "Guide H"]
    );
    assert_eq!(
        titles(&guide.pages),
        vec!["Guide D", "Guide E", "Guide F", "Guide G", "Guide I"]
    );
}

#[test]
fn test_small_areas_have_no_overflow() {
    let input = scenario_results();
    let areas = ResultGrouper::new(GroupingOptions {
        priority_count: 10,
        ..GroupingOptions::default()
    })
    .group(&input);
    assert!(areas.iter().all(|a| a.pages.is_empty()));
    assert_eq!(find_area(&areas, "guide").priority_pages.len(), 10);
}
