//! Client-side shapes of the backend resources.
//!
//! The backend owns all of these; the console only holds transient copies.
//! Keys are camelCase on the wire.

use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/*                                  users                                     */
/* -------------------------------------------------------------------------- */

/// A dictionary user, also used for the logged-in operator identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks_count: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: u64,
    pub last_week: u64,
    pub last_month: u64,
    pub last_year: u64,
}

/* -------------------------------------------------------------------------- */
/*                                  auth                                      */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub email: String,
    pub access_token: String,
}

/* -------------------------------------------------------------------------- */
/*                                  words                                     */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefinitionExample {
    pub phrase: String,
    pub translation: String,
}

/// An alternate meaning of a definition, with its own examples.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OtherMeaning {
    pub meaning: String,
    #[serde(default)]
    pub examples: Vec<DefinitionExample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub type_en: String,
    #[serde(default)]
    pub type_uz: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(default)]
    pub others: Vec<OtherMeaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormPair {
    pub singular: String,
    pub plural: String,
}

/// One titled block of a conjugation table ("Affirmative", "Negative"...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerbFormContent {
    pub title: String,
    #[serde(default)]
    pub forms: Vec<FormPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerbForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub tense: String,
    #[serde(default)]
    pub content: Vec<VerbFormContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Example {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub translation: String,
}

/// A dictionary entry. List endpoints fill only the counts; the nested
/// collections come from the title-keyed detail lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub title_eng: String,
    #[serde(default)]
    pub title_uz: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_frequency: Option<u32>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub anagrams: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb_forms_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<u64>,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub verb_forms: Vec<VerbForm>,
}

impl Word {
    /// Takes the scalar fields of `updated` while keeping the nested
    /// collections already loaded, since PATCH responses carry none.
    pub fn merge_base(&mut self, updated: Word) {
        let Word {
            id,
            title_eng,
            title_uz,
            transcription,
            usage_frequency,
            synonyms,
            anagrams,
            created_at,
            updated_at,
            definitions_count,
            examples_count,
            verb_forms_count,
            bookmarks_count,
            comments_count,
            ..
        } = updated;

        if !id.is_empty() {
            self.id = id;
        }
        self.title_eng = title_eng;
        self.title_uz = title_uz;
        self.transcription = transcription;
        self.usage_frequency = usage_frequency;
        self.synonyms = synonyms;
        self.anagrams = anagrams;
        if !created_at.is_empty() {
            self.created_at = created_at;
        }
        if !updated_at.is_empty() {
            self.updated_at = updated_at;
        }
        self.definitions_count = definitions_count.or(self.definitions_count);
        self.examples_count = examples_count.or(self.examples_count);
        self.verb_forms_count = verb_forms_count.or(self.verb_forms_count);
        self.bookmarks_count = bookmarks_count.or(self.bookmarks_count);
        self.comments_count = comments_count.or(self.comments_count);
    }
}

/// Body of word create/update calls. Every field is always sent, so a
/// cleared transcription (`""`) or frequency (`null`) reaches the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInput {
    pub title_eng: String,
    pub title_uz: String,
    pub transcription: String,
    pub usage_frequency: Option<u32>,
    pub synonyms: Vec<String>,
    pub anagrams: Vec<String>,
}

impl WordInput {
    /// Transcription as stored on a [`Word`]: empty means none.
    pub fn transcription_value(&self) -> Option<String> {
        (!self.transcription.is_empty()).then(|| self.transcription.clone())
    }
}

/// Definition bodies carry only the flat fields; the backend rejects
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionInput {
    pub type_en: String,
    pub type_uz: String,
    pub meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExampleInput {
    pub phrase: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerbFormInput {
    pub tense: String,
    pub content: Vec<VerbFormContent>,
}

/* -------------------------------------------------------------------------- */
/*                                 comments                                   */
/* -------------------------------------------------------------------------- */

/// Title snapshot of the commented word, denormalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTitle {
    pub title_eng: String,
    #[serde(default)]
    pub title_uz: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(rename = "Word", default, skip_serializing_if = "Option::is_none")]
    pub word: Option<WordTitle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_id: Option<String>,
}

/// Payload of `DELETE /comments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DeletedId {
    #[serde(default)]
    pub id: String,
}

/* -------------------------------------------------------------------------- */
/*                                  games                                     */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameAnswer {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameQuestion {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub answers: Vec<GameAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub questions: Vec<GameQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    pub text: String,
    pub is_correct: bool,
}
