// web_app/pages/catalog.rs - Course catalog page
//
// Owns the catalog state for the lifetime of the page. Every user action
// is turned into a state transition; transitions that need data hand back
// a FetchRequest, which runs as a local task and is folded back in when it
// resolves. Results for superseded filters are dropped by the state.
//
// The course service URL comes from the server (get_catalog_config); one
// HttpCourseSource is built from it and shared by every fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::HttpCourseSource;
use crate::web_app::components::*;
use crate::web_app::config::CatalogConfig;
use crate::web_app::model::{Category, SortKey};
use crate::web_app::orchestrator::fetch_page;
use crate::web_app::server_fns::get_catalog_config;
use crate::web_app::state::{CatalogState, FetchRequest};

/// Applies `step` to the state and runs the fetch it asks for, if any.
fn drive(
    state: RwSignal<CatalogState>,
    source: StoredValue<Option<HttpCourseSource>>,
    step: impl FnOnce(&mut CatalogState) -> Option<FetchRequest>,
) {
    // Client clones share one connection pool
    let Some(source) = source.get_value() else {
        tracing::debug!("course service not resolved yet; ignoring input");
        return;
    };
    let Some(request) = state.try_update(step).flatten() else {
        return;
    };

    spawn_local(async move {
        let result = fetch_page(&source, &request).await;
        state.update(|s| {
            s.apply(&request, result);
        });
    });
}

/// Resolves the course service, builds the shared source and loads page 1.
async fn connect(state: RwSignal<CatalogState>, source: StoredValue<Option<HttpCourseSource>>) {
    let config = match get_catalog_config().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("could not fetch catalog config, using bundled value: {}", e);
            CatalogConfig::from_env()
        }
    };
    tracing::info!("course service: {}", config.courses_url());

    match HttpCourseSource::new(&config) {
        Ok(http) => {
            source.set_value(Some(http));
            drive(state, source, |s| Some(s.mount()));
        }
        Err(e) => state.update(|s| {
            let request = s.mount();
            s.apply(&request, Err(e));
        }),
    }
}

/// Main catalog page component
///
/// Composes:
/// - Filter panel (search, categories, price range, sort)
/// - Error banner with retry
/// - Course grid with "load more"
#[component]
pub fn CatalogPage() -> impl IntoView {
    let source = StoredValue::new(None::<HttpCourseSource>);
    let state = RwSignal::new(CatalogState::new());

    // Read-only views of the state for the components
    let search_text = Signal::derive(move || state.with(|s| s.filters().search_text.clone()));
    let category = Signal::derive(move || state.with(|s| s.filters().category));
    let min_price = Signal::derive(move || state.with(|s| s.filters().min_price));
    let max_price = Signal::derive(move || state.with(|s| s.filters().max_price));
    let sort = Signal::derive(move || state.with(|s| s.filters().sort));
    let courses = Signal::derive(move || state.with(|s| s.courses().to_vec()));
    let show_load_more = Signal::derive(move || state.with(|s| s.show_load_more()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let error = Signal::derive(move || state.with(|s| s.error().cloned()));

    // Initial page load (runs once, in the browser)
    Effect::new(move || spawn_local(connect(state, source)));

    let on_search = Callback::new(move |text: String| {
        drive(state, source, move |s| s.set_search(text));
    });
    let on_toggle_category = Callback::new(move |category: Category| {
        drive(state, source, move |s| s.toggle_category(category));
    });
    let on_min_price = Callback::new(move |price: Option<i64>| {
        drive(state, source, move |s| s.set_min_price(price));
    });
    let on_max_price = Callback::new(move |price: Option<i64>| {
        drive(state, source, move |s| s.set_max_price(price));
    });
    let on_sort = Callback::new(move |sort: Option<SortKey>| {
        drive(state, source, move |s| s.set_sort(sort));
    });
    let on_clear = Callback::new(move |()| {
        drive(state, source, |s| s.clear_filters());
    });
    let on_load_more = Callback::new(move |()| {
        drive(state, source, |s| s.load_more());
    });
    let on_retry = Callback::new(move |()| {
        if source.with_value(Option::is_none) {
            spawn_local(connect(state, source));
        } else {
            drive(state, source, |s| Some(s.reload()));
        }
    });

    view! {
        <FilterPanel
            search_text=search_text
            category=category
            min_price=min_price
            max_price=max_price
            sort=sort
            on_search=on_search
            on_toggle_category=on_toggle_category
            on_min_price=on_min_price
            on_max_price=on_max_price
            on_sort=on_sort
            on_clear=on_clear
        />

        {move || error.get().map(|failure| view! {
            <ErrorDisplay error=failure.user_message().to_string() on_retry=on_retry />
        })}

        <CourseGrid
            courses=courses
            show_load_more=show_load_more
            loading=loading
            on_load_more=on_load_more
        />
    }
}
