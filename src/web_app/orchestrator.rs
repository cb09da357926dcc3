// web_app/orchestrator.rs - Runs catalog fetches against a course source
//
// `fetch_page` executes one request. `Catalog` pairs a `CatalogState`
// with a source for callers that await each step in turn (the CLI probe
// and tests); the Leptos page drives the same state from spawned tasks.

use crate::web_app::api::{CatalogError, CourseSource};
use crate::web_app::model::{Category, Course, FilterState, SortKey};
use crate::web_app::state::{CatalogState, FetchMode, FetchOutcome, FetchRequest};

/// Executes a single fetch request.
pub async fn fetch_page<S: CourseSource>(
    source: &S,
    request: &FetchRequest,
) -> Result<Vec<Course>, CatalogError> {
    tracing::debug!(
        "fetching page {} ({:?}, generation {})",
        request.page,
        request.mode,
        request.generation
    );

    let result = source.fetch_courses(&request.query).await;

    // Failures are reported once, when the state folds them in
    if let Ok(courses) = &result {
        tracing::debug!("page {} returned {} courses", request.page, courses.len());
    }

    result
}

/// Catalog state bound to a course source
pub struct Catalog<S> {
    source: S,
    state: CatalogState,
}

impl<S: CourseSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self::with_filters(source, FilterState::default())
    }

    pub fn with_filters(source: S, filters: FilterState) -> Self {
        Self {
            source,
            state: CatalogState::with_filters(filters),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn courses(&self) -> &[Course] {
        self.state.courses()
    }

    /// Fetches `page_number` under the current filters, replacing the
    /// listing when `is_reset` and appending otherwise.
    pub async fn fetch_page(&mut self, is_reset: bool, page_number: u32) -> FetchOutcome {
        let mode = if is_reset { FetchMode::Reset } else { FetchMode::Append };
        let request = self.state.begin_fetch(mode, page_number);
        self.run(request).await
    }

    pub async fn mount(&mut self) -> FetchOutcome {
        let request = self.state.mount();
        self.run(request).await
    }

    pub async fn reload(&mut self) -> FetchOutcome {
        let request = self.state.reload();
        self.run(request).await
    }

    /// Returns `None` when nothing was fetched.
    pub async fn load_more(&mut self) -> Option<FetchOutcome> {
        let request = self.state.load_more();
        self.run_opt(request).await
    }

    pub async fn set_search(&mut self, text: impl Into<String>) -> Option<FetchOutcome> {
        let request = self.state.set_search(text);
        self.run_opt(request).await
    }

    pub async fn toggle_category(&mut self, category: Category) -> Option<FetchOutcome> {
        let request = self.state.toggle_category(category);
        self.run_opt(request).await
    }

    pub async fn set_category(&mut self, category: Option<Category>) -> Option<FetchOutcome> {
        let request = self.state.set_category(category);
        self.run_opt(request).await
    }

    pub async fn set_min_price(&mut self, price: Option<i64>) -> Option<FetchOutcome> {
        let request = self.state.set_min_price(price);
        self.run_opt(request).await
    }

    pub async fn set_max_price(&mut self, price: Option<i64>) -> Option<FetchOutcome> {
        let request = self.state.set_max_price(price);
        self.run_opt(request).await
    }

    pub async fn set_sort(&mut self, sort: Option<SortKey>) -> Option<FetchOutcome> {
        let request = self.state.set_sort(sort);
        self.run_opt(request).await
    }

    pub async fn clear_filters(&mut self) -> Option<FetchOutcome> {
        let request = self.state.clear_filters();
        self.run_opt(request).await
    }

    async fn run(&mut self, request: FetchRequest) -> FetchOutcome {
        let result = fetch_page(&self.source, &request).await;
        self.state.apply(&request, result)
    }

    async fn run_opt(&mut self, request: Option<FetchRequest>) -> Option<FetchOutcome> {
        match request {
            Some(request) => Some(self.run(request).await),
            None => None,
        }
    }
}
