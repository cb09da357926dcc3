// web_app/api/client.rs - Access to the remote course-listing service
//
// `CourseSource` is the seam between the orchestration logic and the
// network. The HTTP implementation uses reqwest, which maps onto the
// browser fetch API when compiled to WASM.

#![allow(async_fn_in_trait)]

use crate::web_app::config::CatalogConfig;
use crate::web_app::model::Course;

use super::error::CatalogError;
use super::query::CourseQuery;

/// Anything that can answer a course-listing query
pub trait CourseSource {
    /// Fetch one page of courses matching `query`, in server order
    async fn fetch_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, CatalogError>;
}

impl<S: CourseSource + ?Sized> CourseSource for &S {
    async fn fetch_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, CatalogError> {
        (**self).fetch_courses(query).await
    }
}

/// Course source backed by `GET <base>/courses`
#[derive(Debug, Clone)]
pub struct HttpCourseSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCourseSource {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            endpoint: config.courses_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CourseSource for HttpCourseSource {
    async fn fetch_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, CatalogError> {
        tracing::debug!("GET {} {:?}", self.endpoint, query.pairs());

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let courses: Vec<Course> = serde_json::from_str(&body)?;
        Ok(courses)
    }
}
