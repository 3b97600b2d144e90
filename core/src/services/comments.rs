use async_trait::async_trait;
use rand::RngCore;

use crate::envelope::{Paginated, Wrapped};
use crate::error::ApiError;
use crate::http::{ApiClient, Method};
use crate::list::{DeleteItem, Identified, MockSource, Page, PageQuery, PageSource, UpdateItem};
use crate::mock;
use crate::models::{Comment, CommentInput, DeletedId};

use super::{list_path, now_timestamp, segment};

type CommentsEnvelope<T> = Wrapped<T>;

#[derive(Debug, Clone, PartialEq)]
pub struct CommentsService {
    client: ApiClient,
}

impl CommentsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PageQuery) -> Result<Page<Comment>, ApiError> {
        self.client
            .get::<CommentsEnvelope<Paginated<Comment>>>(&list_path("/comments", query))
            .await
            .map(Page::from)
    }

    pub async fn update(&self, id: &str, input: &CommentInput) -> Result<Comment, ApiError> {
        self.client
            .patch::<_, CommentsEnvelope<Comment>>(&format!("/comments/{}", segment(id)), input)
            .await
    }

    /// The backend echoes the removed id.
    pub async fn delete(&self, id: &str) -> Result<DeletedId, ApiError> {
        self.client
            .fetch_json::<(), CommentsEnvelope<DeletedId>>(
                Method::Delete,
                &format!("/comments/{}", segment(id)),
                None,
            )
            .await
    }
}

impl Identified for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait(?Send)]
impl PageSource for CommentsService {
    type Item = Comment;

    const NOUN: &'static str = "comment";
    const NOUN_PLURAL: &'static str = "comments";

    async fn fetch_page(&self, query: &PageQuery) -> Result<Page<Comment>, ApiError> {
        self.list(query).await
    }
}

#[async_trait(?Send)]
impl UpdateItem for CommentsService {
    type Patch = CommentInput;

    async fn update(&self, id: &str, patch: &CommentInput) -> Result<(), ApiError> {
        CommentsService::update(self, id, patch).await.map(|_| ())
    }

    fn apply_patch(item: &mut Comment, patch: &CommentInput) {
        item.text = patch.text.clone();
        if patch.username.is_some() {
            item.username = patch.username.clone();
        }
        item.updated_at = now_timestamp();
    }
}

#[async_trait(?Send)]
impl DeleteItem for CommentsService {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        CommentsService::delete(self, id).await.map(|_| ())
    }
}

impl MockSource for CommentsService {
    fn generate(count: usize, rng: &mut dyn RngCore) -> Vec<Comment> {
        mock::generate_comments(count, rng)
    }

    fn matches(item: &Comment, needle: &str) -> bool {
        item.text.to_lowercase().contains(needle)
    }
}
