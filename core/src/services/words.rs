use async_trait::async_trait;
use rand::RngCore;

use crate::envelope::{Bare, Paginated};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::list::{
    CreateItem, DeleteItem, Identified, MockSource, Page, PageQuery, PageSource, UpdateItem,
};
use crate::mock;
use crate::models::{
    DefinitionInput, Example, ExampleInput, VerbForm, VerbFormInput, Word, WordDefinition,
    WordInput,
};

use super::{list_path, now_timestamp, segment};

type WordsEnvelope<T> = Bare<T>;

/// Words and their nested definitions, examples and verb forms.
#[derive(Debug, Clone, PartialEq)]
pub struct WordsService {
    client: ApiClient,
}

impl WordsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PageQuery) -> Result<Page<Word>, ApiError> {
        self.client
            .get::<WordsEnvelope<Paginated<Word>>>(&list_path("/words", query))
            .await
            .map(Page::from)
    }

    /// Base fields only, looked up by id.
    pub async fn get(&self, id: &str) -> Result<Word, ApiError> {
        self.client
            .get::<WordsEnvelope<Word>>(&format!("/words/single/{}", segment(id)))
            .await
    }

    /// Full entry with nested collections, looked up by English title.
    pub async fn details(&self, title_eng: &str) -> Result<Word, ApiError> {
        self.client
            .get::<WordsEnvelope<Word>>(&format!("/words/{}", segment(title_eng)))
            .await
    }

    pub async fn create(&self, input: &WordInput) -> Result<Word, ApiError> {
        self.client
            .post::<_, WordsEnvelope<Word>>("/words", input)
            .await
    }

    pub async fn update(&self, id: &str, input: &WordInput) -> Result<Word, ApiError> {
        self.client
            .patch::<_, WordsEnvelope<Word>>(&format!("/words/{}", segment(id)), input)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/words/{}", segment(id)))
            .await
    }

    /* ----------------------------- definitions ---------------------------- */

    pub async fn add_definition(
        &self,
        word_id: &str,
        input: &DefinitionInput,
    ) -> Result<WordDefinition, ApiError> {
        self.client
            .post::<_, WordsEnvelope<WordDefinition>>(
                &format!("/words/{}/definitions", segment(word_id)),
                input,
            )
            .await
    }

    pub async fn update_definition(
        &self,
        word_id: &str,
        definition_id: &str,
        input: &DefinitionInput,
    ) -> Result<WordDefinition, ApiError> {
        self.client
            .patch::<_, WordsEnvelope<WordDefinition>>(
                &format!(
                    "/words/{}/definitions/{}",
                    segment(word_id),
                    segment(definition_id)
                ),
                input,
            )
            .await
    }

    pub async fn delete_definition(&self, word_id: &str, definition_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/words/{}/definitions/{}",
                segment(word_id),
                segment(definition_id)
            ))
            .await
    }

    /* ------------------------------ examples ------------------------------ */

    pub async fn add_example(&self, word_id: &str, input: &ExampleInput) -> Result<Example, ApiError> {
        self.client
            .post::<_, WordsEnvelope<Example>>(
                &format!("/words/{}/examples", segment(word_id)),
                input,
            )
            .await
    }

    pub async fn update_example(
        &self,
        word_id: &str,
        example_id: &str,
        input: &ExampleInput,
    ) -> Result<Example, ApiError> {
        self.client
            .patch::<_, WordsEnvelope<Example>>(
                &format!("/words/{}/examples/{}", segment(word_id), segment(example_id)),
                input,
            )
            .await
    }

    pub async fn delete_example(&self, word_id: &str, example_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/words/{}/examples/{}",
                segment(word_id),
                segment(example_id)
            ))
            .await
    }

    /* ----------------------------- verb forms ----------------------------- */

    pub async fn add_verb_form(
        &self,
        word_id: &str,
        input: &VerbFormInput,
    ) -> Result<VerbForm, ApiError> {
        self.client
            .post::<_, WordsEnvelope<VerbForm>>(
                &format!("/words/{}/verb-forms", segment(word_id)),
                input,
            )
            .await
    }

    pub async fn update_verb_form(
        &self,
        word_id: &str,
        verb_form_id: &str,
        input: &VerbFormInput,
    ) -> Result<VerbForm, ApiError> {
        self.client
            .patch::<_, WordsEnvelope<VerbForm>>(
                &format!(
                    "/words/{}/verb-forms/{}",
                    segment(word_id),
                    segment(verb_form_id)
                ),
                input,
            )
            .await
    }

    pub async fn delete_verb_form(&self, word_id: &str, verb_form_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!(
                "/words/{}/verb-forms/{}",
                segment(word_id),
                segment(verb_form_id)
            ))
            .await
    }
}

impl Identified for Word {
    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait(?Send)]
impl PageSource for WordsService {
    type Item = Word;

    const NOUN: &'static str = "word";
    const NOUN_PLURAL: &'static str = "words";

    async fn fetch_page(&self, query: &PageQuery) -> Result<Page<Word>, ApiError> {
        self.list(query).await
    }
}

#[async_trait(?Send)]
impl CreateItem for WordsService {
    type Draft = WordInput;

    async fn create(&self, draft: &WordInput) -> Result<Word, ApiError> {
        WordsService::create(self, draft).await
    }

    fn mock_record(id: String, draft: &WordInput) -> Word {
        let now = now_timestamp();
        Word {
            id,
            title_eng: draft.title_eng.clone(),
            title_uz: draft.title_uz.clone(),
            transcription: draft.transcription_value(),
            usage_frequency: draft.usage_frequency,
            synonyms: draft.synonyms.clone(),
            anagrams: draft.anagrams.clone(),
            created_at: now.clone(),
            updated_at: now,
            definitions_count: Some(0),
            examples_count: Some(0),
            verb_forms_count: Some(0),
            bookmarks_count: Some(0),
            comments_count: Some(0),
            ..Word::default()
        }
    }
}

#[async_trait(?Send)]
impl UpdateItem for WordsService {
    type Patch = WordInput;

    async fn update(&self, id: &str, patch: &WordInput) -> Result<(), ApiError> {
        WordsService::update(self, id, patch).await.map(|_| ())
    }

    fn apply_patch(item: &mut Word, patch: &WordInput) {
        item.title_eng = patch.title_eng.clone();
        item.title_uz = patch.title_uz.clone();
        item.transcription = patch.transcription_value();
        item.usage_frequency = patch.usage_frequency;
        item.synonyms = patch.synonyms.clone();
        item.anagrams = patch.anagrams.clone();
    }
}

#[async_trait(?Send)]
impl DeleteItem for WordsService {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        WordsService::delete(self, id).await
    }
}

impl MockSource for WordsService {
    fn generate(count: usize, rng: &mut dyn RngCore) -> Vec<Word> {
        mock::generate_words(count, rng)
    }

    fn matches(item: &Word, needle: &str) -> bool {
        item.title_eng.to_lowercase().contains(needle) || item.title_uz.to_lowercase().contains(needle)
    }
}
