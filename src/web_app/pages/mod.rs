// web_app/pages/mod.rs - Page components module
//
// - CatalogPage: filterable, sortable, incrementally loaded course grid

pub mod catalog;

// Re-export page components
pub use catalog::CatalogPage;
