// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used by the catalog state machine, the HTTP client,
// the Leptos components and the CLI probe alike.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of courses requested per page (sent as `limit`)
pub const PAGE_SIZE: usize = 12;

/// Errors produced when turning user input into filter values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFilterError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown sort order: {0}")]
    UnknownSort(String),
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

/// Course category (single-select filter)
///
/// Serialized as the literal label the course service stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Программирование")]
    Programming,
    #[serde(rename = "Дизайн")]
    Design,
    #[serde(rename = "Дата аналитика")]
    DataAnalytics,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Programming,
        Category::Design,
        Category::DataAnalytics,
    ];

    /// Literal label used both on the wire and in the UI
    pub fn label(self) -> &'static str {
        match self {
            Category::Programming => "Программирование",
            Category::Design => "Дизайн",
            Category::DataAnalytics => "Дата аналитика",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(category) = Category::from_label(trimmed) {
            return Ok(category);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "programming" => Ok(Category::Programming),
            "design" => Ok(Category::Design),
            "data-analytics" | "data_analytics" => Ok(Category::DataAnalytics),
            _ => Err(ParseFilterError::UnknownCategory(s.to_string())),
        }
    }
}

/// Sort order understood by the course service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    Popularity,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::PriceAsc, SortKey::PriceDesc, SortKey::Popularity];

    pub fn as_query_value(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Popularity => "popularity",
        }
    }

    /// Maps a `<select>` value back to a sort key. Anything unknown,
    /// including the empty "no sort" option, yields `None`.
    pub fn from_query_value(value: &str) -> Option<SortKey> {
        SortKey::ALL.into_iter().find(|k| k.as_query_value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Цена ↑",
            SortKey::PriceDesc => "Цена ↓",
            SortKey::Popularity => "Популярность",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for SortKey {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::from_query_value(s.trim())
            .ok_or_else(|| ParseFilterError::UnknownSort(s.to_string()))
    }
}

/// Filters chosen by the user
///
/// Price bounds are deliberately unvalidated: negative or inverted
/// bounds are forwarded to the service as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub category: Option<Category>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: Option<SortKey>,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Pagination bookkeeping for the "load more" grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Last page requested (1-indexed)
    pub current_page: u32,
    /// True when the last page came back full
    pub has_more: bool,
    /// True while a fetch for the current generation is in flight
    pub is_loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            has_more: false,
            is_loading: false,
        }
    }
}

/// Course record as returned by `GET /courses`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub category: String,
    pub price: i64,
    #[serde(rename = "customers")]
    pub customer_count: i64,
}

/// Parses a price input field. Blank means "unset".
pub fn parse_price(input: &str) -> Result<Option<i64>, ParseFilterError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ParseFilterError::InvalidPrice(input.to_string()))
}
