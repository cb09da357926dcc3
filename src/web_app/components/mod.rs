// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay, buttons)
// - filters.rs: Filter controls (search, categories, price range, sort)
// - course.rs: Course cards and the paginated grid

pub mod common;
pub mod course;
pub mod filters;

// Re-export commonly used components for convenience
pub use common::*;
pub use course::*;
pub use filters::*;
