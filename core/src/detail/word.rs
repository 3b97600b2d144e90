use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{
    DefinitionInput, Example, ExampleInput, VerbForm, VerbFormInput, Word, WordDefinition,
    WordInput,
};
use crate::observe::Shared;
use crate::services::WordsService;

use super::{settle, DetailState};

/// Word detail page: the base record from the id lookup, enriched with the
/// nested collections from the title lookup, and the editors for both.
#[derive(Debug, Clone)]
pub struct WordDetail {
    service: WordsService,
    word_id: String,
    state: Shared<DetailState<Word>>,
}

fn decrement(count: Option<u64>) -> Option<u64> {
    Some(count.unwrap_or(0).saturating_sub(1))
}

fn increment(count: Option<u64>) -> Option<u64> {
    Some(count.unwrap_or(0) + 1)
}

/// Field-wise overlay of a saved definition onto the one on screen. The
/// backend may leave out the id and the nested meanings.
fn merge_definition(current: &mut WordDefinition, saved: WordDefinition) {
    let WordDefinition {
        id,
        type_en,
        type_uz,
        meaning,
        plural,
        others,
    } = saved;
    current.id = id.or(current.id.take());
    current.type_en = type_en;
    current.type_uz = type_uz;
    current.meaning = meaning;
    current.plural = plural;
    if !others.is_empty() {
        current.others = others;
    }
}

fn merge_example(current: &mut Example, saved: Example) {
    current.id = saved.id.or(current.id.take());
    current.phrase = saved.phrase;
    current.translation = saved.translation;
}

fn merge_verb_form(current: &mut VerbForm, saved: VerbForm) {
    current.id = saved.id.or(current.id.take());
    current.tense = saved.tense;
    if !saved.content.is_empty() {
        current.content = saved.content;
    }
}

impl WordDetail {
    pub fn new(service: WordsService, word_id: impl Into<String>, listener: Rc<dyn Fn()>) -> Self {
        Self {
            service,
            word_id: word_id.into(),
            state: Shared::new(DetailState::default(), listener),
        }
    }

    pub fn state(&self) -> DetailState<Word> {
        self.state.snapshot()
    }

    pub fn dismiss_error(&self) {
        self.state.update(DetailState::dismiss_error);
    }

    /// Base lookup by id, then the title lookup for definitions, examples
    /// and verb forms. Only the first is fatal.
    pub async fn load(&self) -> Result<(), ApiError> {
        self.state.update(|state| state.is_loading = true);

        let mut word = match self.service.get(&self.word_id).await {
            Ok(word) => word,
            Err(err) => {
                log::error!("Failed to fetch word {}: {err}", self.word_id);
                self.state.update(|state| {
                    state.item = None;
                    state.is_loading = false;
                    state.error = Some("Failed to fetch word details".to_string());
                });
                return Err(err);
            }
        };

        if !word.title_eng.is_empty() {
            match self.service.details(&word.title_eng).await {
                Ok(details) => {
                    word.definitions = details.definitions;
                    word.examples = details.examples;
                    word.verb_forms = details.verb_forms;
                }
                Err(err) => {
                    log::error!("Failed to fetch detailed word data for {}: {err}", word.title_eng);
                }
            }
        }

        self.state.update(|state| {
            state.item = Some(word);
            state.is_loading = false;
            state.error = None;
        });
        Ok(())
    }

    fn loaded_id(&self) -> Result<String, ApiError> {
        self.state
            .read()
            .item
            .as_ref()
            .map(|word| word.id.clone())
            .ok_or_else(|| ApiError::InvalidRequest("word is not loaded".to_string()))
    }

    fn begin(&self) -> Result<String, ApiError> {
        let id = self.loaded_id()?;
        self.state.update(|state| state.is_loading = true);
        Ok(id)
    }

    fn apply(&self, f: impl FnOnce(&mut Word)) {
        self.state.update(|state| {
            if let Some(word) = state.item.as_mut() {
                f(word);
            }
        });
    }

    pub async fn save_word(&self, input: &WordInput) -> Result<(), ApiError> {
        let id = self.begin()?;
        let result = self.service.update(&id, input).await;
        if let Ok(updated) = &result {
            let updated = updated.clone();
            self.apply(|word| word.merge_base(updated));
        }
        settle(&self.state, &result, "Failed to update word");
        result.map(|_| ())
    }

    /* ----------------------------- definitions ---------------------------- */

    /// Adds when `editing` is `None`, otherwise updates that definition.
    pub async fn save_definition(
        &self,
        editing: Option<&str>,
        input: &DefinitionInput,
    ) -> Result<(), ApiError> {
        let word_id = self.begin()?;
        let result = match editing {
            Some(definition_id) => {
                let result = self
                    .service
                    .update_definition(&word_id, definition_id, input)
                    .await;
                if let Ok(saved) = &result {
                    let saved = saved.clone();
                    self.apply(|word| {
                        if let Some(current) = word
                            .definitions
                            .iter_mut()
                            .find(|d| d.id.as_deref() == Some(definition_id))
                        {
                            merge_definition(current, saved);
                        }
                    });
                }
                result
            }
            None => {
                let result = self.service.add_definition(&word_id, input).await;
                if let Ok(saved) = &result {
                    let saved = saved.clone();
                    self.apply(|word| {
                        word.definitions.push(saved);
                        word.definitions_count = increment(word.definitions_count);
                    });
                }
                result
            }
        };
        settle(&self.state, &result, "Failed to save definition");
        result.map(|_| ())
    }

    pub async fn delete_definition(&self, definition_id: &str) -> Result<(), ApiError> {
        let word_id = self.begin()?;
        let result = self.service.delete_definition(&word_id, definition_id).await;
        if result.is_ok() {
            self.apply(|word| {
                word.definitions
                    .retain(|d| d.id.as_deref() != Some(definition_id));
                word.definitions_count = decrement(word.definitions_count);
            });
        }
        settle(&self.state, &result, "Failed to delete definition");
        result
    }

    /* ------------------------------ examples ------------------------------ */

    pub async fn save_example(
        &self,
        editing: Option<&str>,
        input: &ExampleInput,
    ) -> Result<(), ApiError> {
        let word_id = self.begin()?;
        let result = match editing {
            Some(example_id) => {
                let result = self.service.update_example(&word_id, example_id, input).await;
                if let Ok(saved) = &result {
                    let saved = saved.clone();
                    self.apply(|word| {
                        if let Some(current) = word
                            .examples
                            .iter_mut()
                            .find(|e| e.id.as_deref() == Some(example_id))
                        {
                            merge_example(current, saved);
                        }
                    });
                }
                result
            }
            None => {
                let result = self.service.add_example(&word_id, input).await;
                if let Ok(saved) = &result {
                    let saved = saved.clone();
                    self.apply(|word| {
                        word.examples.push(saved);
                        word.examples_count = increment(word.examples_count);
                    });
                }
                result
            }
        };
        settle(&self.state, &result, "Failed to save example");
        result.map(|_| ())
    }

    pub async fn delete_example(&self, example_id: &str) -> Result<(), ApiError> {
        let word_id = self.begin()?;
        let result = self.service.delete_example(&word_id, example_id).await;
        if result.is_ok() {
            self.apply(|word| {
                word.examples.retain(|e| e.id.as_deref() != Some(example_id));
                word.examples_count = decrement(word.examples_count);
            });
        }
        settle(&self.state, &result, "Failed to delete example");
        result
    }

    /* ----------------------------- verb forms ----------------------------- */

    pub async fn save_verb_form(
        &self,
        editing: Option<&str>,
        input: &VerbFormInput,
    ) -> Result<(), ApiError> {
        let word_id = self.begin()?;
        let result = match editing {
            Some(verb_form_id) => {
                let result = self
                    .service
                    .update_verb_form(&word_id, verb_form_id, input)
                    .await;
                if let Ok(saved) = &result {
                    let saved = saved.clone();
                    self.apply(|word| {
                        if let Some(current) = word
                            .verb_forms
                            .iter_mut()
                            .find(|v| v.id.as_deref() == Some(verb_form_id))
                        {
                            merge_verb_form(current, saved);
                        }
                    });
                }
                result
            }
            None => {
                let result = self.service.add_verb_form(&word_id, input).await;
                if let Ok(saved) = &result {
                    let saved = saved.clone();
                    self.apply(|word| {
                        word.verb_forms.push(saved);
                        word.verb_forms_count = increment(word.verb_forms_count);
                    });
                }
                result
            }
        };
        settle(&self.state, &result, "Failed to save verb form");
        result.map(|_| ())
    }

    pub async fn delete_verb_form(&self, verb_form_id: &str) -> Result<(), ApiError> {
        let word_id = self.begin()?;
        let result = self.service.delete_verb_form(&word_id, verb_form_id).await;
        if result.is_ok() {
            self.apply(|word| {
                word.verb_forms
                    .retain(|v| v.id.as_deref() != Some(verb_form_id));
                word.verb_forms_count = decrement(word.verb_forms_count);
            });
        }
        settle(&self.state, &result, "Failed to delete verb form");
        result
    }
}
