// tests/catalog_flow_tests.rs - End-to-end behaviour of the catalog state machine
//
// Drives `Catalog` and `CatalogState` through the public API against
// scripted sources:
// - request parameters derived from filters
// - replace vs append of the listing
// - "load more" visibility and paging
// - stale result handling
// - failure and retry

mod common;

use common::{course, courses, decode_error, ids, status_error, ScriptedSource};
use course_catalog::web_app::api::ErrorKind;
use course_catalog::web_app::model::{Category, FilterState, SortKey};
use course_catalog::web_app::orchestrator::{fetch_page, Catalog};
use course_catalog::web_app::state::{CatalogState, FetchMode, FetchOutcome};

// ============================================================================
// Request parameters
// ============================================================================

#[tokio::test]
async fn test_search_only_sends_search_page_and_limit() {
    let source = ScriptedSource::new().respond(courses(1, 12)).respond(courses(1, 4));
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;

    catalog.set_search("python").await;

    let query = source.last_query();
    assert_eq!(
        query.pairs(),
        vec![
            ("page", "1".to_string()),
            ("limit", "12".to_string()),
            ("search", "python".to_string()),
        ]
    );
    for param in ["category", "min_price", "max_price", "sort"] {
        assert!(!query.has_param(param), "unexpected {param}");
    }
}

#[tokio::test]
async fn test_category_checked_then_unchecked() {
    let source = ScriptedSource::new();
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;

    catalog.toggle_category(Category::Programming).await;
    let checked = source.last_query();
    catalog.toggle_category(Category::Programming).await;
    let unchecked = source.last_query();

    assert_eq!(checked.category, Some(Category::Programming));
    assert!(checked.pairs().contains(&("category", "Программирование".to_string())));
    assert!(!unchecked.has_param("category"));
    assert_eq!(catalog.state().filters().category, None);
}

#[tokio::test]
async fn test_toggling_other_category_switches_selection() {
    let source = ScriptedSource::new();
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;

    catalog.toggle_category(Category::Design).await;
    catalog.toggle_category(Category::DataAnalytics).await;

    assert_eq!(catalog.state().filters().category, Some(Category::DataAnalytics));
    assert_eq!(source.last_query().category, Some(Category::DataAnalytics));
}

#[tokio::test]
async fn test_all_filters_are_forwarded() {
    let source = ScriptedSource::new();
    let filters = FilterState {
        search_text: "React".to_string(),
        category: Some(Category::Programming),
        min_price: Some(0),
        max_price: Some(30000),
        sort: Some(SortKey::PriceDesc),
    };
    let mut catalog = Catalog::with_filters(&source, filters);

    catalog.mount().await;

    let pairs = source.last_query().pairs();
    assert_eq!(
        pairs,
        vec![
            ("page", "1".to_string()),
            ("limit", "12".to_string()),
            ("search", "React".to_string()),
            ("category", "Программирование".to_string()),
            ("min_price", "0".to_string()),
            ("max_price", "30000".to_string()),
            ("sort", "price_desc".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_inverted_price_bounds_pass_through() {
    let source = ScriptedSource::new();
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;

    catalog.set_min_price(Some(50000)).await;
    catalog.set_max_price(Some(-5)).await;

    let query = source.last_query();
    assert_eq!(query.min_price, Some(50000));
    assert_eq!(query.max_price, Some(-5));
}

#[tokio::test]
async fn test_unchanged_filter_issues_no_request() {
    let source = ScriptedSource::new();
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;
    catalog.set_sort(Some(SortKey::Popularity)).await;
    let before = source.queries().len();

    assert_eq!(catalog.set_sort(Some(SortKey::Popularity)).await, None);
    assert_eq!(catalog.set_search("").await, None);
    assert_eq!(source.queries().len(), before);
}

// ============================================================================
// Listing and pagination
// ============================================================================

#[tokio::test]
async fn test_full_first_page_offers_load_more() {
    let source = ScriptedSource::new().respond(courses(1, 12)).respond(courses(13, 12));
    let mut catalog = Catalog::new(&source);

    assert_eq!(catalog.mount().await, FetchOutcome::Replaced { count: 12 });
    assert!(catalog.state().has_more());
    assert!(catalog.state().show_load_more());

    assert_eq!(catalog.load_more().await, Some(FetchOutcome::Appended { count: 12 }));
    assert_eq!(source.last_query().page, 2);
    assert_eq!(catalog.state().page().current_page, 2);
}

#[tokio::test]
async fn test_short_first_page_hides_load_more() {
    let source = ScriptedSource::new().respond(courses(1, 5));
    let mut catalog = Catalog::new(&source);

    catalog.mount().await;

    assert!(!catalog.state().has_more());
    assert!(!catalog.state().show_load_more());
    assert_eq!(catalog.load_more().await, None);
    assert_eq!(source.queries().len(), 1);
}

#[tokio::test]
async fn test_append_preserves_server_order() {
    let mut second = courses(20, 3);
    second.reverse();
    let source = ScriptedSource::new().respond(courses(1, 12)).respond(second);
    let mut catalog = Catalog::new(&source);

    catalog.mount().await;
    catalog.load_more().await;

    let mut expected: Vec<i64> = (1..=12).collect();
    expected.extend([22, 21, 20]);
    assert_eq!(ids(catalog.courses()), expected);
    assert!(!catalog.state().has_more());
}

#[tokio::test]
async fn test_filter_change_replaces_listing_and_resets_page() {
    let source = ScriptedSource::new()
        .respond(courses(1, 12))
        .respond(courses(13, 12))
        .respond(vec![course(100), course(101)]);
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;
    catalog.load_more().await;
    assert_eq!(catalog.courses().len(), 24);

    let outcome = catalog.set_search("design").await;

    assert_eq!(outcome, Some(FetchOutcome::Replaced { count: 2 }));
    assert_eq!(ids(catalog.courses()), vec![100, 101]);
    assert_eq!(catalog.state().page().current_page, 1);
    assert_eq!(source.last_query().page, 1);
}

#[tokio::test]
async fn test_clear_filters_refetches_unfiltered() {
    let source = ScriptedSource::new();
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;
    catalog.set_min_price(Some(1000)).await;

    assert!(catalog.clear_filters().await.is_some());
    assert!(catalog.state().filters().is_default());
    assert_eq!(source.last_query().pairs().len(), 2);

    assert_eq!(catalog.clear_filters().await, None);
}

// ============================================================================
// Concurrency: stale results
// ============================================================================

#[tokio::test]
async fn test_result_for_superseded_filters_is_discarded() {
    let mut state = CatalogState::new();
    let slow = state.mount();
    let fast = state.set_search("python").expect("search changed");

    let fast_source = ScriptedSource::new().respond(vec![course(1)]);
    let slow_source = ScriptedSource::new().respond(courses(50, 12));

    let fast_result = fetch_page(&fast_source, &fast).await;
    assert_eq!(state.apply(&fast, fast_result), FetchOutcome::Replaced { count: 1 });

    let slow_result = fetch_page(&slow_source, &slow).await;
    assert_eq!(state.apply(&slow, slow_result), FetchOutcome::Stale);

    assert_eq!(ids(state.courses()), vec![1]);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_loading_blocks_duplicate_load_more() {
    let source = ScriptedSource::new().respond(courses(1, 12));
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;
    let mut state = catalog.state().clone();

    let first = state.load_more().expect("load more offered");
    assert_eq!(first.mode, FetchMode::Append);
    assert!(state.is_loading());
    assert!(state.load_more().is_none());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_failed_filter_change_keeps_listing() {
    let source = ScriptedSource::new()
        .respond(courses(1, 12))
        .fail(status_error(500))
        .respond(courses(30, 3));
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;

    let outcome = catalog.set_sort(Some(SortKey::PriceAsc)).await;

    assert_eq!(outcome, Some(FetchOutcome::Failed));
    assert_eq!(catalog.courses().len(), 12);
    assert!(!catalog.state().is_loading());
    // A failure is not "end of listing"
    assert!(catalog.state().has_more());
    // but the old listing cannot be paged under the new sort
    assert!(!catalog.state().show_load_more());
    assert_eq!(catalog.load_more().await, None);
    let error = catalog.state().error().expect("error recorded");
    assert_eq!(error.kind, ErrorKind::Status);
    assert!(error.message.contains("500"));

    // Retry with the same filters
    assert_eq!(catalog.reload().await, FetchOutcome::Replaced { count: 3 });
    assert!(catalog.state().error().is_none());
    assert!(!catalog.state().listing_outdated());
    assert_eq!(source.last_query().sort, Some(SortKey::PriceAsc));
}

#[tokio::test]
async fn test_load_more_resumes_after_failed_reset_is_retried() {
    let source = ScriptedSource::new()
        .respond(courses(1, 12))
        .fail(status_error(503))
        .respond(courses(100, 12))
        .respond(courses(200, 12));
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;
    catalog.set_sort(Some(SortKey::PriceAsc)).await;
    assert!(!catalog.state().show_load_more());

    catalog.reload().await;

    assert!(catalog.state().show_load_more());
    assert_eq!(catalog.load_more().await, Some(FetchOutcome::Appended { count: 12 }));
    let query = source.last_query();
    assert_eq!(query.page, 2);
    assert_eq!(query.sort, Some(SortKey::PriceAsc));
    assert_eq!(catalog.courses()[0].id, 100);
    assert_eq!(catalog.courses()[12].id, 200);
}

#[tokio::test]
async fn test_failed_load_more_can_be_retried() {
    let source = ScriptedSource::new()
        .respond(courses(1, 12))
        .fail(decode_error())
        .respond(courses(13, 12));
    let mut catalog = Catalog::new(&source);
    catalog.mount().await;

    assert_eq!(catalog.load_more().await, Some(FetchOutcome::Failed));
    assert_eq!(catalog.state().error().map(|e| e.kind), Some(ErrorKind::Decode));
    assert_eq!(catalog.state().page().current_page, 1);
    assert!(catalog.state().show_load_more());

    assert_eq!(catalog.load_more().await, Some(FetchOutcome::Appended { count: 12 }));
    assert_eq!(source.last_query().page, 2);
    assert_eq!(catalog.courses().len(), 24);
    assert!(catalog.state().error().is_none());
}
