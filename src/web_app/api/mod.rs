// web_app/api/mod.rs - Client side of the course-listing service
//
// - query.rs: parameter assembly for GET /courses
// - client.rs: the CourseSource seam and its reqwest implementation
// - error.rs: failure taxonomy (transport, status, decode)

pub mod client;
pub mod error;
pub mod query;

pub use client::{CourseSource, HttpCourseSource};
pub use error::{CatalogError, ErrorKind, FetchFailure};
pub use query::CourseQuery;
