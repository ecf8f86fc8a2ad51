//! Area classification and ordering.

use super::common::{area_names, docs_fixture, find_area, make_result, make_results};
use folio::{group_results, SearchArea};

#[test]
fn test_results_grouped_by_containing_folder() {
    let results = docs_fixture().into_iter().take(3).collect();
    let areas = group_results(&make_results("", results));

    assert_eq!(
        areas,
        vec![
            SearchArea {
                name: "api".to_string(),
                priority_pages: vec![make_result("api/d", "API D")],
                pages: vec![],
            },
            SearchArea {
                name: "guide".to_string(),
                priority_pages: vec![
                    make_result("guide/a", "Guide A"),
                    make_result("guide/b", "Guide B"),
                ],
                pages: vec![],
            },
        ]
    );
}

#[test]
fn test_nested_paths_use_top_level_folder() {
    let areas = group_results(&make_results("", docs_fixture()));
    let guide = find_area(&areas, "guide");
    assert!(guide.iter().any(|p| p.path == "guide/a/c"));
    assert_eq!(area_names(&areas), vec!["api", "guide"]);
}

#[test]
fn test_areas_sorted_by_name_regardless_of_rank() {
    let areas = group_results(&make_results(
        "",
        vec![
            make_result("tutorial/a", "T"),
            make_result("guide/a", "G"),
            make_result("api/a", "A"),
            make_result("news", "N"),
        ],
    ));
    assert_eq!(area_names(&areas), vec!["api", "guide", "other", "tutorial"]);
}

#[test]
fn test_area_name_order_is_case_sensitive() {
    let areas = group_results(&make_results(
        "",
        vec![make_result("guide/a", "g"), make_result("Zebra/a", "z")],
    ));
    assert_eq!(area_names(&areas), vec!["Zebra", "guide"]);
}

#[test]
fn test_heading_counts() {
    let areas = group_results(&make_results("", docs_fixture()));
    let headings: Vec<String> = areas.iter().map(|a| a.heading().to_string()).collect();
    assert_eq!(headings, vec!["api (2)", "guide (13)"]);
}

#[test]
fn test_grouping_twice_is_identical() {
    let input = make_results("router", docs_fixture());
    assert_eq!(group_results(&input), group_results(&input));
}
