//! Slash-free paths: folder index pages and the `other` area.

use super::common::{area_names, make_result, make_results};
use folio::{group_results, SearchArea};

#[test]
fn test_top_level_folder_joins_its_children() {
    let areas = group_results(&make_results(
        "",
        vec![
            make_result("tutorial", "Tutorial index"),
            make_result("tutorial/toh-pt1", "Tutorial - part 1"),
        ],
    ));
    assert_eq!(
        areas,
        vec![SearchArea {
            name: "tutorial".to_string(),
            priority_pages: vec![
                make_result("tutorial", "Tutorial index"),
                make_result("tutorial/toh-pt1", "Tutorial - part 1"),
            ],
            pages: vec![],
        }]
    );
}

#[test]
fn test_child_ranked_first_still_claims_index_page() {
    let areas = group_results(&make_results(
        "",
        vec![
            make_result("tutorial/toh-pt1", "Tutorial - part 1"),
            make_result("tutorial", "Tutorial index"),
        ],
    ));
    assert_eq!(area_names(&areas), vec!["tutorial"]);
    assert_eq!(areas[0].priority_pages[1].path, "tutorial");
}

#[test]
fn test_lone_top_level_page_goes_to_other() {
    let news = make_result("news", "News").with_kind("marketing");
    let areas = group_results(&make_results("", vec![news.clone()]));
    assert_eq!(
        areas,
        vec![SearchArea {
            name: "other".to_string(),
            priority_pages: vec![news],
            pages: vec![],
        }]
    );
}

#[test]
fn test_other_collects_every_stray_page() {
    let areas = group_results(&make_results(
        "",
        vec![
            make_result("news", "News"),
            make_result("guide/a", "Guide A"),
            make_result("events", "Events"),
            make_result("about", "About"),
        ],
    ));
    assert_eq!(area_names(&areas), vec!["guide", "other"]);
    let other: Vec<&str> = areas[1].iter().map(|p| p.path.as_str()).collect();
    assert_eq!(other, vec!["news", "events", "about"]);
}

#[test]
fn test_malformed_paths_go_to_other() {
    let areas = group_results(&make_results(
        "",
        vec![
            make_result("", "Home"),
            make_result("/guide", "Leading slash"),
            make_result("docs/", "Trailing slash"),
        ],
    ));
    assert_eq!(area_names(&areas), vec!["other"]);
    assert_eq!(areas[0].count(), 3);
}
