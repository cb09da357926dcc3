// web_app/state.rs - Catalog state machine
//
// Holds the filters, the pagination counters and the displayed listing.
// Every mutation that needs network data returns a `FetchRequest`; the
// caller runs it and feeds the result back through `apply`.
//
// Requests are tagged with the generation they were issued under. Any
// filter change starts a new generation, so a slow response for old
// filters can never overwrite the listing for the new ones.

use serde::{Deserialize, Serialize};

use crate::web_app::api::{CatalogError, CourseQuery, FetchFailure};
use crate::web_app::model::{Category, Course, FilterState, PageState, SortKey, PAGE_SIZE};

/// Whether a fetch replaces the listing or extends it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchMode {
    Reset,
    Append,
}

/// A fetch the caller must run against a `CourseSource`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub mode: FetchMode,
    pub page: u32,
    pub query: CourseQuery,
}

/// What `apply` did with a fetch result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Replaced { count: usize },
    Appended { count: usize },
    /// Issued under an older generation; ignored
    Stale,
    /// Fetch failed; listing kept as it was
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    filters: FilterState,
    page: PageState,
    courses: Vec<Course>,
    error: Option<FetchFailure>,
    generation: u64,
    /// Set when the last reset failed: the listing belongs to the previous
    /// filters, so paging on from it would mix two result sets.
    listing_outdated: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from non-default filters without issuing a fetch.
    pub fn with_filters(filters: FilterState) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.page.is_loading
    }

    pub fn has_more(&self) -> bool {
        self.page.has_more
    }

    /// True after a failed reset until a reset succeeds.
    pub fn listing_outdated(&self) -> bool {
        self.listing_outdated
    }

    /// Whether the "load more" control should be offered.
    pub fn show_load_more(&self) -> bool {
        self.page.has_more && !self.page.is_loading && !self.listing_outdated
    }

    /// Initial fetch when the page is mounted.
    pub fn mount(&mut self) -> FetchRequest {
        self.begin_fetch(FetchMode::Reset, 1)
    }

    /// Re-runs page 1 for the current filters, e.g. after a failure.
    pub fn reload(&mut self) -> FetchRequest {
        self.begin_fetch(FetchMode::Reset, 1)
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> Option<FetchRequest> {
        let text = text.into();
        self.change_filters(|f| f.search_text = text)
    }

    pub fn set_category(&mut self, category: Option<Category>) -> Option<FetchRequest> {
        self.change_filters(|f| f.category = category)
    }

    /// Checkbox semantics: toggling the selected category clears it,
    /// toggling any other category selects it instead.
    pub fn toggle_category(&mut self, category: Category) -> Option<FetchRequest> {
        let next = if self.filters.category == Some(category) {
            None
        } else {
            Some(category)
        };
        self.set_category(next)
    }

    pub fn set_min_price(&mut self, price: Option<i64>) -> Option<FetchRequest> {
        self.change_filters(|f| f.min_price = price)
    }

    pub fn set_max_price(&mut self, price: Option<i64>) -> Option<FetchRequest> {
        self.change_filters(|f| f.max_price = price)
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) -> Option<FetchRequest> {
        self.change_filters(|f| f.sort = sort)
    }

    pub fn clear_filters(&mut self) -> Option<FetchRequest> {
        self.change_filters(|f| *f = FilterState::default())
    }

    /// Requests the next page, unless there is nothing more to load or
    /// a fetch is already in flight.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.show_load_more() {
            tracing::debug!(
                "load more ignored: has_more={} is_loading={}",
                self.page.has_more,
                self.page.is_loading
            );
            return None;
        }
        let next_page = self.page.current_page + 1;
        Some(self.begin_fetch(FetchMode::Append, next_page))
    }

    /// Issues a request for `page` under the current filters.
    ///
    /// A reset starts a new generation, so every reset in flight before it
    /// becomes stale.
    pub fn begin_fetch(&mut self, mode: FetchMode, page: u32) -> FetchRequest {
        let page = page.max(1);
        if mode == FetchMode::Reset {
            self.generation += 1;
            self.page.has_more = true;
        }
        self.page.current_page = page;
        self.page.is_loading = true;
        self.error = None;

        FetchRequest {
            generation: self.generation,
            mode,
            page,
            query: CourseQuery::from_filters(&self.filters, page),
        }
    }

    /// Folds a finished fetch into the state.
    pub fn apply(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<Course>, CatalogError>,
    ) -> FetchOutcome {
        if request.generation != self.generation {
            tracing::debug!(
                "dropping stale page {} (generation {} < {})",
                request.page,
                request.generation,
                self.generation
            );
            return FetchOutcome::Stale;
        }

        self.page.is_loading = false;

        match result {
            Ok(batch) => {
                let count = batch.len();
                self.page.has_more = count == PAGE_SIZE;
                self.error = None;
                match request.mode {
                    FetchMode::Reset => {
                        self.courses = batch;
                        self.listing_outdated = false;
                        tracing::info!("page 1 loaded: {} courses", count);
                        FetchOutcome::Replaced { count }
                    }
                    FetchMode::Append => {
                        self.courses.extend(batch);
                        tracing::info!(
                            "page {} appended: {} courses ({} total)",
                            request.page,
                            count,
                            self.courses.len()
                        );
                        FetchOutcome::Appended { count }
                    }
                }
            }
            Err(e) => {
                tracing::warn!("fetch for page {} failed: {}", request.page, e);
                // has_more is left alone: a failure says nothing about the
                // size of the listing
                match request.mode {
                    // Keep has_more so the same page can be retried
                    FetchMode::Append => {
                        self.page.current_page = request.page.saturating_sub(1).max(1);
                    }
                    // The listing still shows the previous filters' results
                    FetchMode::Reset => {
                        self.listing_outdated = true;
                    }
                }
                self.error = Some(FetchFailure::from(&e));
                FetchOutcome::Failed
            }
        }
    }

    fn change_filters(&mut self, edit: impl FnOnce(&mut FilterState)) -> Option<FetchRequest> {
        let mut next = self.filters.clone();
        edit(&mut next);
        if next == self.filters {
            return None;
        }
        self.filters = next;
        tracing::debug!("filters changed: {:?}", self.filters);
        Some(self.begin_fetch(FetchMode::Reset, 1))
    }
}
