// common/mod.rs - Shared helpers for the catalog integration tests
//
// Provides hand-built courses and a scripted course source that replays
// canned responses in order, so tests can control page sizes and
// failures without a running service.

#![allow(dead_code)]
#![allow(async_fn_in_trait)]

use std::collections::VecDeque;
use std::sync::Mutex;

use course_catalog::web_app::api::{CatalogError, CourseQuery, CourseSource};
use course_catalog::web_app::model::{Category, Course};

/// Course with the given id and otherwise plain values
pub fn course(id: i64) -> Course {
    Course {
        id,
        name: format!("Курс {id}"),
        description: format!("Описание {id}"),
        image_url: "/templates/img/IT1.jpeg".to_string(),
        category: Category::Programming.label().to_string(),
        price: 10_000 + id,
        customer_count: id,
    }
}

/// Courses with consecutive ids starting at `first`
pub fn courses(first: i64, count: usize) -> Vec<Course> {
    (first..first + count as i64).map(course).collect()
}

pub fn ids(courses: &[Course]) -> Vec<i64> {
    courses.iter().map(|c| c.id).collect()
}

/// Non-success status as the HTTP source reports it
pub fn status_error(status: u16) -> CatalogError {
    CatalogError::Status {
        status,
        url: "http://127.0.0.1:8000/courses".to_string(),
    }
}

pub fn decode_error() -> CatalogError {
    let err = serde_json::from_str::<Vec<Course>>("{\"detail\": \"oops\"}").unwrap_err();
    CatalogError::Decode(err)
}

/// Replays queued responses in order and records every query
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Vec<Course>, CatalogError>>>,
    queries: Mutex<Vec<CourseQuery>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, courses: Vec<Course>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(courses));
        self
    }

    pub fn fail(self, error: CatalogError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn queries(&self) -> Vec<CourseQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> CourseQuery {
        self.queries().pop().expect("no query recorded")
    }
}

impl CourseSource for ScriptedSource {
    async fn fetch_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, CatalogError> {
        self.queries.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
