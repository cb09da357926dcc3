// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and routing for the catalog.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::CatalogPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Каталог курсов" />
        <Meta name="description" content="Каталог онлайн-курсов с поиском, фильтрами и сортировкой" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/course_catalog.css" />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                    <Route path=path!("/courses") view=CatalogPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Страница не найдена"</p>
            <a href="/">"К каталогу курсов"</a>
        </div>
    }
}
