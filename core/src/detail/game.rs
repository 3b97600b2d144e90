use std::future::Future;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{AnswerInput, Game, GameInput, QuestionInput};
use crate::observe::Shared;
use crate::services::GamesService;

use super::{settle, DetailState};

/// Game detail page. Every mutation is followed by a full re-fetch of the
/// game, questions and answers included.
#[derive(Debug, Clone)]
pub struct GameDetail {
    service: GamesService,
    game_id: String,
    state: Shared<DetailState<Game>>,
}

impl GameDetail {
    pub fn new(service: GamesService, game_id: impl Into<String>, listener: Rc<dyn Fn()>) -> Self {
        Self {
            service,
            game_id: game_id.into(),
            state: Shared::new(DetailState::default(), listener),
        }
    }

    pub fn state(&self) -> DetailState<Game> {
        self.state.snapshot()
    }

    pub fn dismiss_error(&self) {
        self.state.update(DetailState::dismiss_error);
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        self.state.update(|state| state.is_loading = true);
        let result = self.service.get(&self.game_id).await;
        if let Err(err) = &result {
            log::error!("Failed to load game {}: {err}", self.game_id);
        }
        self.state.update(|state| {
            state.is_loading = false;
            match &result {
                Ok(game) => {
                    state.item = Some(game.clone());
                    state.error = None;
                }
                Err(_) => state.error = Some("Failed to load game".to_string()),
            }
        });
        result.map(|_| ())
    }

    async fn mutate<R>(
        &self,
        failure: &str,
        call: impl Future<Output = Result<R, ApiError>>,
    ) -> Result<(), ApiError> {
        self.state.update(|state| state.is_loading = true);
        let result = call.await.map(|_| ());
        if result.is_err() {
            settle(&self.state, &result, failure);
            return result;
        }
        // the mutation landed; a failed reload only raises the page banner
        if let Err(err) = self.load().await {
            log::debug!("reload after mutation failed: {err}");
        }
        Ok(())
    }

    pub async fn update_game(&self, input: &GameInput) -> Result<(), ApiError> {
        self.mutate(
            "Failed to update game",
            self.service.update(&self.game_id, input),
        )
        .await
    }

    /// Adds when `editing` is `None`, otherwise updates that question.
    pub async fn save_question(
        &self,
        editing: Option<&str>,
        input: &QuestionInput,
    ) -> Result<(), ApiError> {
        match editing {
            Some(question_id) => {
                self.mutate(
                    "Failed to save question",
                    self.service.update_question(question_id, input),
                )
                .await
            }
            None => {
                self.mutate(
                    "Failed to save question",
                    self.service.add_question(&self.game_id, input),
                )
                .await
            }
        }
    }

    pub async fn delete_question(&self, question_id: &str) -> Result<(), ApiError> {
        self.mutate(
            "Failed to delete question",
            self.service.delete_question(question_id),
        )
        .await
    }

    /// Adds an answer to `question_id` when `editing` is `None`, otherwise
    /// updates that answer.
    pub async fn save_answer(
        &self,
        question_id: &str,
        editing: Option<&str>,
        input: &AnswerInput,
    ) -> Result<(), ApiError> {
        match editing {
            Some(answer_id) => {
                self.mutate(
                    "Failed to save answer",
                    self.service.update_answer(answer_id, input),
                )
                .await
            }
            None => {
                self.mutate(
                    "Failed to save answer",
                    self.service.add_answer(question_id, input),
                )
                .await
            }
        }
    }

    pub async fn delete_answer(&self, answer_id: &str) -> Result<(), ApiError> {
        self.mutate(
            "Failed to delete answer",
            self.service.delete_answer(answer_id),
        )
        .await
    }
}
