// tests/fixture_source_tests.rs - The in-memory course service
//
// The catalog tests lean on `InMemoryCourseSource` behaving like the real
// GET /courses endpoint, so its filtering rules are pinned down here.

use course_catalog::fixtures::courses::apply_query;
use course_catalog::fixtures::{sample_courses, InMemoryCourseSource};
use course_catalog::web_app::api::{CourseQuery, CourseSource};
use course_catalog::web_app::model::{Category, FilterState, SortKey};
use course_catalog::web_app::orchestrator::Catalog;
use course_catalog::web_app::state::FetchOutcome;

fn query(filters: FilterState, page: u32) -> CourseQuery {
    CourseQuery::from_filters(&filters, page)
}

#[test]
fn test_sample_catalog_shape() {
    let courses = sample_courses();
    assert_eq!(courses.len(), 30);
    assert!(courses.iter().enumerate().all(|(i, c)| c.id == i as i64 + 1));

    let in_category = |category: Category| {
        courses.iter().filter(|c| c.category == category.label()).count()
    };
    assert_eq!(in_category(Category::Programming), 13);
    assert_eq!(in_category(Category::DataAnalytics), 9);
    assert_eq!(in_category(Category::Design), 8);
}

#[test]
fn test_price_bounds_are_inclusive() {
    let filters = FilterState {
        min_price: Some(30000),
        max_price: Some(31000),
        ..Default::default()
    };
    let found = apply_query(&sample_courses(), &query(filters, 1));

    assert!(!found.is_empty());
    assert!(found.iter().all(|c| (30000..=31000).contains(&c.price)));
    assert!(found.iter().any(|c| c.price == 31000));
}

#[test]
fn test_inverted_bounds_match_nothing() {
    let filters = FilterState {
        min_price: Some(40000),
        max_price: Some(10000),
        ..Default::default()
    };
    assert!(apply_query(&sample_courses(), &query(filters, 1)).is_empty());
}

#[test]
fn test_sort_orders() {
    let all = |sort| {
        let filters = FilterState {
            sort: Some(sort),
            ..Default::default()
        };
        let mut q = query(filters, 1);
        q.limit = 100;
        apply_query(&sample_courses(), &q)
    };

    let asc = all(SortKey::PriceAsc);
    assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
    assert_eq!(asc[0].price, 0);

    let desc = all(SortKey::PriceDesc);
    assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

    let popular = all(SortKey::Popularity);
    assert!(popular.windows(2).all(|w| w[0].customer_count >= w[1].customer_count));
}

#[tokio::test]
async fn test_source_records_queries() {
    let source = InMemoryCourseSource::new(sample_courses());
    let q = query(FilterState::default(), 2);

    let page = source.fetch_courses(&q).await.unwrap();

    assert_eq!(page.len(), 12);
    assert_eq!(page[0].id, 13);
    assert_eq!(source.last_request(), Some(q));
}

#[tokio::test]
async fn test_paging_through_sample_catalog() {
    let mut catalog = Catalog::new(InMemoryCourseSource::new(sample_courses()));

    assert_eq!(catalog.mount().await, FetchOutcome::Replaced { count: 12 });
    assert_eq!(catalog.load_more().await, Some(FetchOutcome::Appended { count: 12 }));
    assert_eq!(catalog.load_more().await, Some(FetchOutcome::Appended { count: 6 }));
    assert_eq!(catalog.load_more().await, None);

    let ids: Vec<i64> = catalog.courses().iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());
    assert_eq!(catalog.source().requests().len(), 3);
}

#[tokio::test]
async fn test_free_course_found_with_zero_max_price() {
    let filters = FilterState {
        max_price: Some(0),
        ..Default::default()
    };
    let mut catalog = Catalog::with_filters(InMemoryCourseSource::new(sample_courses()), filters);

    catalog.mount().await;

    assert_eq!(catalog.courses().len(), 1);
    assert_eq!(catalog.courses()[0].name, "Бесплатный вводный урок");
    assert!(!catalog.state().has_more());
}
