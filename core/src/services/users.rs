use async_trait::async_trait;

use crate::envelope::{Paginated, Wrapped};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::list::{Identified, Page, PageQuery, PageSource};
use crate::models::{User, UserStats};

use super::list_path;

type UsersEnvelope<T> = Wrapped<T>;

#[derive(Debug, Clone, PartialEq)]
pub struct UsersService {
    client: ApiClient,
}

impl UsersService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET `/users?page&limit`. The users endpoint takes no search term.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Page<User>, ApiError> {
        let query = PageQuery {
            page,
            limit,
            search: String::new(),
        };
        self.client
            .get::<UsersEnvelope<Paginated<User>>>(&list_path("/users", &query))
            .await
            .map(Page::from)
    }

    pub async fn stats(&self) -> Result<UserStats, ApiError> {
        self.client
            .get::<UsersEnvelope<UserStats>>("/users/stats")
            .await
    }
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait(?Send)]
impl PageSource for UsersService {
    type Item = User;

    const NOUN: &'static str = "user";
    const NOUN_PLURAL: &'static str = "users";

    async fn fetch_page(&self, query: &PageQuery) -> Result<Page<User>, ApiError> {
        self.list(query.page, query.limit).await
    }
}
