use async_trait::async_trait;

use crate::envelope::{Bare, Paginated};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::list::{CreateItem, DeleteItem, Identified, Page, PageQuery, PageSource, UpdateItem};
use crate::models::{
    AnswerInput, Game, GameAnswer, GameInput, GameQuestion, QuestionInput,
};

use super::{list_path, now_timestamp, segment};

type GamesEnvelope<T> = Bare<T>;

/// Quiz games with their questions and answers.
#[derive(Debug, Clone, PartialEq)]
pub struct GamesService {
    client: ApiClient,
}

impl GamesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PageQuery) -> Result<Page<Game>, ApiError> {
        self.client
            .get::<GamesEnvelope<Paginated<Game>>>(&list_path("/games", query))
            .await
            .map(Page::from)
    }

    /// Game with nested questions and answers.
    pub async fn get(&self, id: &str) -> Result<Game, ApiError> {
        self.client
            .get::<GamesEnvelope<Game>>(&format!("/games/{}", segment(id)))
            .await
    }

    pub async fn create(&self, input: &GameInput) -> Result<Game, ApiError> {
        self.client
            .post::<_, GamesEnvelope<Game>>("/games", input)
            .await
    }

    pub async fn update(&self, id: &str, input: &GameInput) -> Result<Game, ApiError> {
        self.client
            .patch::<_, GamesEnvelope<Game>>(&format!("/games/{}", segment(id)), input)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/games/{}", segment(id)))
            .await
    }

    /* ------------------------------ questions ----------------------------- */

    pub async fn add_question(
        &self,
        game_id: &str,
        input: &QuestionInput,
    ) -> Result<GameQuestion, ApiError> {
        self.client
            .post::<_, GamesEnvelope<GameQuestion>>(
                &format!("/games/{}/questions", segment(game_id)),
                input,
            )
            .await
    }

    pub async fn update_question(
        &self,
        question_id: &str,
        input: &QuestionInput,
    ) -> Result<GameQuestion, ApiError> {
        self.client
            .patch::<_, GamesEnvelope<GameQuestion>>(
                &format!("/games/questions/{}", segment(question_id)),
                input,
            )
            .await
    }

    pub async fn delete_question(&self, question_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/games/questions/{}", segment(question_id)))
            .await
    }

    /* ------------------------------- answers ------------------------------ */

    pub async fn add_answer(
        &self,
        question_id: &str,
        input: &AnswerInput,
    ) -> Result<GameAnswer, ApiError> {
        self.client
            .post::<_, GamesEnvelope<GameAnswer>>(
                &format!("/games/questions/{}/answers", segment(question_id)),
                input,
            )
            .await
    }

    pub async fn update_answer(
        &self,
        answer_id: &str,
        input: &AnswerInput,
    ) -> Result<GameAnswer, ApiError> {
        self.client
            .patch::<_, GamesEnvelope<GameAnswer>>(
                &format!("/games/answers/{}", segment(answer_id)),
                input,
            )
            .await
    }

    pub async fn delete_answer(&self, answer_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/games/answers/{}", segment(answer_id)))
            .await
    }
}

impl Identified for Game {
    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait(?Send)]
impl PageSource for GamesService {
    type Item = Game;

    const NOUN: &'static str = "game";
    const NOUN_PLURAL: &'static str = "games";

    async fn fetch_page(&self, query: &PageQuery) -> Result<Page<Game>, ApiError> {
        self.list(query).await
    }
}

#[async_trait(?Send)]
impl CreateItem for GamesService {
    type Draft = GameInput;

    async fn create(&self, draft: &GameInput) -> Result<Game, ApiError> {
        GamesService::create(self, draft).await
    }

    fn mock_record(id: String, draft: &GameInput) -> Game {
        let now = now_timestamp();
        Game {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            created_at: now.clone(),
            updated_at: now,
            questions: Vec::new(),
        }
    }
}

#[async_trait(?Send)]
impl UpdateItem for GamesService {
    type Patch = GameInput;

    async fn update(&self, id: &str, patch: &GameInput) -> Result<(), ApiError> {
        GamesService::update(self, id, patch).await.map(|_| ())
    }

    fn apply_patch(item: &mut Game, patch: &GameInput) {
        item.title = patch.title.clone();
        item.description = patch.description.clone();
    }
}

#[async_trait(?Send)]
impl DeleteItem for GamesService {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        GamesService::delete(self, id).await
    }
}
