//! The paginated-resource pattern shared by every list page.
//!
//! A page is a [`ListController`] over a source implementing some subset of
//! the capability traits below. Words implement all of them, Comments
//! everything but [`CreateItem`], Users only [`PageSource`].

mod controller;
mod state;

use std::time::Duration;

use async_trait::async_trait;
use rand::RngCore;

use crate::envelope::Paginated;
use crate::error::ApiError;

pub use controller::ListController;
pub use state::{DataSource, FetchPlan, FetchTicket, ListState, LoadStatus, PageView};

/// Arguments of a page fetch at the service boundary. `page` is 1-based;
/// the table widget works with 0-based indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl PageQuery {
    pub fn from_ui(ui_page: u32, limit: u32, search: &str) -> Self {
        Self {
            page: ui_page + 1,
            limit,
            search: search.to_string(),
        }
    }

    pub fn ui_page(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// `page=..&limit=..[&search=..]`; `search` is left out when empty.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.limit);
        if !self.search.is_empty() {
            query.push_str("&search=");
            query.push_str(&urlencoding::encode(&self.search));
        }
        query
    }
}

/// One page of records plus the total across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> From<Paginated<T>> for Page<T> {
    fn from(body: Paginated<T>) -> Self {
        Self {
            items: body.data,
            total: body.meta.total,
        }
    }
}

/// Records addressable by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

#[async_trait(?Send)]
pub trait PageSource {
    type Item: Identified + Clone + 'static;

    /// Singular noun used in banners, e.g. "word".
    const NOUN: &'static str;
    /// Plural noun used in banners, e.g. "words".
    const NOUN_PLURAL: &'static str;

    async fn fetch_page(&self, query: &PageQuery) -> Result<Page<Self::Item>, ApiError>;
}

#[async_trait(?Send)]
pub trait CreateItem: PageSource {
    type Draft;

    async fn create(&self, draft: &Self::Draft) -> Result<Self::Item, ApiError>;

    /// Builds the in-memory record added while mock mode is on.
    fn mock_record(id: String, draft: &Self::Draft) -> Self::Item;
}

#[async_trait(?Send)]
pub trait UpdateItem: PageSource {
    type Patch;

    async fn update(&self, id: &str, patch: &Self::Patch) -> Result<(), ApiError>;

    /// Applies `patch` to an in-memory record while mock mode is on.
    fn apply_patch(item: &mut Self::Item, patch: &Self::Patch);
}

#[async_trait(?Send)]
pub trait DeleteItem: PageSource {
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Sources that can serve a synthetic dataset for demos.
pub trait MockSource: PageSource {
    fn generate(count: usize, rng: &mut dyn RngCore) -> Vec<Self::Item>;

    /// Search predicate over mock records; `needle` is already lowercased
    /// and non-empty.
    fn matches(item: &Self::Item, needle: &str) -> bool;
}

/// Delay applied to mock fetches.
#[async_trait(?Send)]
pub trait Latency {
    async fn wait(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn wait(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_page_is_ui_page_plus_one() {
        for ui_page in [0, 1, 7, 41] {
            for limit in crate::config::PAGE_SIZE_OPTIONS {
                let query = PageQuery::from_ui(ui_page, limit, "hello");
                assert_eq!(query.page, ui_page + 1);
                assert_eq!(query.ui_page(), ui_page);
            }
        }
    }

    #[test]
    fn query_string_encodes_search_and_omits_empty() {
        assert_eq!(PageQuery::from_ui(0, 10, "").to_query_string(), "page=1&limit=10");
        assert_eq!(
            PageQuery::from_ui(2, 25, "thank you&more").to_query_string(),
            "page=3&limit=25&search=thank%20you%26more"
        );
    }
}
