// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the catalog page.

use leptos::prelude::*;

/// Loading indicator
#[component]
pub fn Loading(
    /// Message shown next to the spinner
    #[prop(default = "Загрузка...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}

/// Error banner with an optional retry action
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    /// Called when the user asks to try again
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-icon">"⚠"</span>
            <p>{error}</p>
            {on_retry.map(|retry| view! {
                <SecondaryButton on_click=retry>"Повторить"</SecondaryButton>
            })}
        </div>
    }
}

/// Lighter button for secondary actions (retry, clear filters)
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="secondary-button"
            disabled=disabled
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
