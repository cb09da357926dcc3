// web_app/mod.rs - Root module for the course catalog application
//
// Architecture:
// - model/: Shared data types (filters, page state, courses)
// - api/: Query assembly and the HTTP client for the course service
// - config.rs: Where the course service lives
// - state.rs: Filter holder + pagination controller (pure state machine)
// - orchestrator.rs: Runs fetches and folds results into the state
// - server_fns.rs: Server functions (catalog config for the browser)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;

pub mod api;

pub mod config;

pub mod state;

pub mod orchestrator;

// Server functions, components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
