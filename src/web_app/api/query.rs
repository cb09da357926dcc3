// web_app/api/query.rs - Query parameters for GET /courses
//
// Only `page` and `limit` are always present. Every other field is
// omitted unless the user actually set it.

use serde::{Deserialize, Serialize};

use crate::web_app::model::{Category, FilterState, SortKey, PAGE_SIZE};

/// Parameter set for one page of the course listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseQuery {
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

fn default_limit() -> u32 {
    PAGE_SIZE as u32
}

impl CourseQuery {
    /// Derives the parameters for `page` from the current filters.
    pub fn from_filters(filters: &FilterState, page: u32) -> Self {
        CourseQuery {
            page,
            limit: default_limit(),
            search: (!filters.search_text.is_empty()).then(|| filters.search_text.clone()),
            category: filters.category,
            min_price: filters.min_price,
            max_price: filters.max_price,
            sort: filters.sort,
        }
    }

    /// Encoded key/value pairs in wire order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.label().to_string()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price", max_price.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_query_value().to_string()));
        }
        pairs
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.pairs().iter().any(|(k, _)| *k == key)
    }

    /// Zero-based row offset the service skips for this page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit as usize
    }
}
