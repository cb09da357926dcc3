// fixtures/mod.rs - Reusable course data and an in-memory course service
//
// Tests (and anyone experimenting without the real service) need a
// course source that behaves like GET /courses. `InMemoryCourseSource`
// answers queries from a fixed list the way an idealised service would:
// case-insensitive substring match on the trimmed name, exact category,
// price bounds, sort, then offset/limit. The deployed service ignores
// `min_price`/`max_price`; the fixture applies them.

pub mod courses;

pub use courses::{sample_courses, InMemoryCourseSource};
