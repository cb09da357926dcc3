// web_app/components/filters.rs - Filter controls for the catalog
//
// - SearchInput: free-text search, applied on every keystroke
// - CategoryCheckboxes: three checkboxes bound to one category value
// - PriceRangeFilter: min/max inputs applied on blur
// - SortDropdown: sort order selector
// - FilterPanel: the whole `filters` section
//
// Components only report user intent through callbacks; the page owns
// the state and decides whether a fetch is needed.

use leptos::prelude::*;

use super::common::SecondaryButton;
use crate::web_app::model::{parse_price, Category, SortKey};

/// Free-text search box
#[component]
pub fn SearchInput(
    /// Current search text
    value: Signal<String>,
    /// Called with the new text on every input event
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            id="search"
            placeholder="Поиск курсов..."
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}

/// Category checkboxes
///
/// Checking a box selects its category; unchecking the selected box
/// clears the filter. Only one category is active at a time.
#[component]
pub fn CategoryCheckboxes(
    /// Currently selected category
    selected: Signal<Option<Category>>,
    /// Called with the category whose box was toggled
    on_toggle: Callback<Category>,
) -> impl IntoView {
    view! {
        <div class="categories">
            {Category::ALL.into_iter().map(|category| {
                view! {
                    <label>
                        <input
                            type="checkbox"
                            value=category.label()
                            prop:checked=move || selected.get() == Some(category)
                            on:change=move |_| on_toggle.run(category)
                        />
                        {category.label()}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

/// Text shown in a price input for a bound (blank when unset)
pub fn price_text(price: Option<i64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// Price range filter
///
/// Two number inputs; the typed value is committed when the field loses
/// focus. Blank clears the bound, unparsable text is reverted.
#[component]
pub fn PriceRangeFilter(
    /// Minimum price
    min_price: Signal<Option<i64>>,
    /// Maximum price
    max_price: Signal<Option<i64>>,
    on_min_change: Callback<Option<i64>>,
    on_max_change: Callback<Option<i64>>,
) -> impl IntoView {
    let local_min = RwSignal::new(price_text(min_price.get_untracked()));
    let local_max = RwSignal::new(price_text(max_price.get_untracked()));

    // Follow external changes such as "clear all"
    Effect::new(move || local_min.set(price_text(min_price.get())));
    Effect::new(move || local_max.set(price_text(max_price.get())));

    let apply_min = move || match parse_price(&local_min.get_untracked()) {
        Ok(value) => on_min_change.run(value),
        Err(e) => {
            tracing::debug!("ignoring min price input: {}", e);
            local_min.set(price_text(min_price.get_untracked()));
        }
    };

    let apply_max = move || match parse_price(&local_max.get_untracked()) {
        Ok(value) => on_max_change.run(value),
        Err(e) => {
            tracing::debug!("ignoring max price input: {}", e);
            local_max.set(price_text(max_price.get_untracked()));
        }
    };

    view! {
        <div class="price-range">
            <input
                type="number"
                id="min-price"
                placeholder="Цена от"
                prop:value=move || local_min.get()
                on:input=move |ev| local_min.set(event_target_value(&ev))
                on:blur=move |_| apply_min()
            />
            <span>"–"</span>
            <input
                type="number"
                id="max-price"
                placeholder="Цена до"
                prop:value=move || local_max.get()
                on:input=move |ev| local_max.set(event_target_value(&ev))
                on:blur=move |_| apply_max()
            />
        </div>
    }
}

/// Sort order selector
#[component]
pub fn SortDropdown(
    /// Current sort order
    sort: Signal<Option<SortKey>>,
    on_change: Callback<Option<SortKey>>,
) -> impl IntoView {
    view! {
        <div class="sort">
            <label>
                "Сортировка:"
                <select
                    id="sort"
                    on:change=move |ev| {
                        on_change.run(SortKey::from_query_value(&event_target_value(&ev)));
                    }
                >
                    <option value="" selected=move || sort.get().is_none()>"—"</option>
                    {SortKey::ALL.into_iter().map(|key| {
                        view! {
                            <option
                                value=key.as_query_value()
                                selected=move || sort.get() == Some(key)
                            >
                                {key.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}

/// Complete filter section
#[component]
pub fn FilterPanel(
    search_text: Signal<String>,
    category: Signal<Option<Category>>,
    min_price: Signal<Option<i64>>,
    max_price: Signal<Option<i64>>,
    sort: Signal<Option<SortKey>>,
    on_search: Callback<String>,
    on_toggle_category: Callback<Category>,
    on_min_price: Callback<Option<i64>>,
    on_max_price: Callback<Option<i64>>,
    on_sort: Callback<Option<SortKey>>,
    /// Clear filters callback
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="filters">
            <SearchInput value=search_text on_change=on_search />

            <CategoryCheckboxes selected=category on_toggle=on_toggle_category />

            <PriceRangeFilter
                min_price=min_price
                max_price=max_price
                on_min_change=on_min_price
                on_max_change=on_max_price
            />

            <SortDropdown sort=sort on_change=on_sort />

            <SecondaryButton on_click=on_clear>"Сбросить фильтры"</SecondaryButton>
        </section>
    }
}
