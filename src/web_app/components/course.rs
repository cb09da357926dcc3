// web_app/components/course.rs - Course display components
//
// - CourseCard: one card in the grid
// - CourseGrid: the `courses-grid` section with load-more and loading state

use leptos::prelude::*;

use super::common::Loading;
use crate::web_app::model::Course;

pub fn price_label(price: i64) -> String {
    format!("{price}Тг")
}

pub fn customers_label(count: i64) -> String {
    format!("{count} покупателей")
}

/// Card for a single course
#[component]
pub fn CourseCard(
    /// The course to display
    course: Course,
) -> impl IntoView {
    view! {
        <div class="course-card">
            <img src=course.image_url alt="Course Image" />
            <h2>{course.name}</h2>
            <p>{course.description}</p>
            <h3>{course.category}</h3>
            <p class="price">{price_label(course.price)}</p>
            <p>{customers_label(course.customer_count)}</p>
        </div>
    }
}

/// Grid of course cards followed by the pagination controls
#[component]
pub fn CourseGrid(
    /// Courses loaded so far, in display order
    courses: Signal<Vec<Course>>,
    /// Whether the "load more" button should be offered
    show_load_more: Signal<bool>,
    /// Whether a fetch is in flight
    loading: Signal<bool>,
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="courses-grid" id="courses-grid">
            // Keyed by position too, so a repeated id across pages still renders
            <For
                each=move || courses.get().into_iter().enumerate()
                key=|(index, course)| (*index, course.id)
                children=move |(_, course)| view! { <CourseCard course=course /> }
            />

            <Show when=move || show_load_more.get()>
                <button type="button" class="load-more" on:click=move |_| on_load_more.run(())>
                    "Загрузить еще"
                </button>
            </Show>

            <Show when=move || loading.get()>
                <Loading />
            </Show>
        </section>
    }
}
