//! Edit-dialog form models.
//!
//! Forms hold what the operator typed, as text, and convert to request
//! bodies on submit. Nested sub-lists are edited through consuming methods
//! that rebuild the affected vectors, so a form value handed to the UI is
//! never mutated in place.

use thiserror::Error;

use crate::models::{
    AnswerInput, Comment, CommentInput, DefinitionExample, DefinitionInput, Example,
    ExampleInput, FormPair, Game, GameAnswer, GameInput, GameQuestion, OtherMeaning,
    QuestionInput, VerbForm, VerbFormContent, VerbFormInput, Word, WordDefinition, WordInput,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be a whole number, got `{value}`")]
    NotANumber { field: &'static str, value: String },
}

/// Splits comma-separated text, trimming every token and dropping empty ones.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

fn optional(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn required(text: &str, field: &'static str) -> Result<String, FormError> {
    optional(text).ok_or(FormError::Required(field))
}

/* -------------------------------------------------------------------------- */
/*                                   words                                    */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordForm {
    pub title_eng: String,
    pub title_uz: String,
    pub transcription: String,
    pub usage_frequency: String,
    pub synonyms: String,
    pub anagrams: String,
}

impl WordForm {
    pub fn from_word(word: &Word) -> Self {
        Self {
            title_eng: word.title_eng.clone(),
            title_uz: word.title_uz.clone(),
            transcription: word.transcription.clone().unwrap_or_default(),
            usage_frequency: word
                .usage_frequency
                .map(|n| n.to_string())
                .unwrap_or_default(),
            synonyms: join_list(&word.synonyms),
            anagrams: join_list(&word.anagrams),
        }
    }

    pub fn to_input(&self) -> Result<WordInput, FormError> {
        let usage_frequency = match self.usage_frequency.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| FormError::NotANumber {
                field: "Usage frequency",
                value: raw.to_string(),
            })?),
        };
        Ok(WordInput {
            title_eng: required(&self.title_eng, "English title")?,
            title_uz: self.title_uz.trim().to_string(),
            transcription: self.transcription.trim().to_string(),
            usage_frequency,
            synonyms: parse_list(&self.synonyms),
            anagrams: parse_list(&self.anagrams),
        })
    }
}

/// Which half of an example pair an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleField {
    Phrase,
    Translation,
}

/// Definition dialog. The nested meanings are editable but only the flat
/// fields are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefinitionForm {
    pub type_en: String,
    pub type_uz: String,
    pub meaning: String,
    pub plural: String,
    pub others: Vec<OtherMeaning>,
}

impl DefinitionForm {
    pub fn from_definition(definition: &WordDefinition) -> Self {
        Self {
            type_en: definition.type_en.clone(),
            type_uz: definition.type_uz.clone(),
            meaning: definition.meaning.clone(),
            plural: definition.plural.clone().unwrap_or_default(),
            others: definition.others.clone(),
        }
    }

    pub fn to_input(&self) -> DefinitionInput {
        DefinitionInput {
            type_en: self.type_en.trim().to_string(),
            type_uz: self.type_uz.trim().to_string(),
            meaning: self.meaning.trim().to_string(),
            plural: optional(&self.plural),
        }
    }

    fn with_others(mut self, f: impl FnOnce(&mut Vec<OtherMeaning>)) -> Self {
        let mut others = self.others.clone();
        f(&mut others);
        self.others = others;
        self
    }

    fn with_other_examples(
        self,
        index: usize,
        f: impl FnOnce(&mut Vec<DefinitionExample>),
    ) -> Self {
        self.with_others(|others| {
            if let Some(other) = others.get_mut(index) {
                let mut examples = other.examples.clone();
                f(&mut examples);
                other.examples = examples;
            }
        })
    }

    pub fn add_other(self) -> Self {
        self.with_others(|others| others.push(OtherMeaning::default()))
    }

    pub fn remove_other(self, index: usize) -> Self {
        self.with_others(|others| {
            if index < others.len() {
                others.remove(index);
            }
        })
    }

    pub fn set_other_meaning(self, index: usize, meaning: String) -> Self {
        self.with_others(|others| {
            if let Some(other) = others.get_mut(index) {
                other.meaning = meaning;
            }
        })
    }

    pub fn add_other_example(self, index: usize) -> Self {
        self.with_other_examples(index, |examples| examples.push(DefinitionExample::default()))
    }

    pub fn remove_other_example(self, index: usize, example: usize) -> Self {
        self.with_other_examples(index, |examples| {
            if example < examples.len() {
                examples.remove(example);
            }
        })
    }

    pub fn set_other_example(
        self,
        index: usize,
        example: usize,
        field: ExampleField,
        value: String,
    ) -> Self {
        self.with_other_examples(index, |examples| {
            if let Some(pair) = examples.get_mut(example) {
                match field {
                    ExampleField::Phrase => pair.phrase = value,
                    ExampleField::Translation => pair.translation = value,
                }
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExampleForm {
    pub phrase: String,
    pub translation: String,
}

impl ExampleForm {
    pub fn from_example(example: &Example) -> Self {
        Self {
            phrase: example.phrase.clone(),
            translation: example.translation.clone(),
        }
    }

    pub fn to_input(&self) -> ExampleInput {
        ExampleInput {
            phrase: self.phrase.trim().to_string(),
            translation: self.translation.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Singular,
    Plural,
}

fn blank_section() -> VerbFormContent {
    VerbFormContent {
        title: String::new(),
        forms: vec![FormPair::default()],
    }
}

/// Verb-form dialog: a tense plus titled sections of singular/plural rows.
/// Always holds at least one section, and every loaded section at least
/// one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbFormForm {
    pub tense: String,
    pub content: Vec<VerbFormContent>,
}

impl Default for VerbFormForm {
    fn default() -> Self {
        Self {
            tense: String::new(),
            content: vec![blank_section()],
        }
    }
}

impl VerbFormForm {
    pub fn from_verb_form(verb_form: &VerbForm) -> Self {
        let content = if verb_form.content.is_empty() {
            vec![blank_section()]
        } else {
            verb_form
                .content
                .iter()
                .map(|section| VerbFormContent {
                    title: section.title.clone(),
                    forms: if section.forms.is_empty() {
                        vec![FormPair::default()]
                    } else {
                        section.forms.clone()
                    },
                })
                .collect()
        };
        Self {
            tense: verb_form.tense.clone(),
            content,
        }
    }

    pub fn to_input(&self) -> VerbFormInput {
        VerbFormInput {
            tense: self.tense.trim().to_string(),
            content: self.content.clone(),
        }
    }

    fn with_content(mut self, f: impl FnOnce(&mut Vec<VerbFormContent>)) -> Self {
        let mut content = self.content.clone();
        f(&mut content);
        self.content = content;
        self
    }

    fn with_rows(self, section: usize, f: impl FnOnce(&mut Vec<FormPair>)) -> Self {
        self.with_content(|content| {
            if let Some(entry) = content.get_mut(section) {
                let mut forms = entry.forms.clone();
                f(&mut forms);
                entry.forms = forms;
            }
        })
    }

    pub fn add_section(self) -> Self {
        self.with_content(|content| content.push(blank_section()))
    }

    pub fn remove_section(self, section: usize) -> Self {
        self.with_content(|content| {
            if section < content.len() {
                content.remove(section);
            }
        })
    }

    pub fn set_section_title(self, section: usize, title: String) -> Self {
        self.with_content(|content| {
            if let Some(entry) = content.get_mut(section) {
                entry.title = title;
            }
        })
    }

    pub fn add_row(self, section: usize) -> Self {
        self.with_rows(section, |forms| forms.push(FormPair::default()))
    }

    pub fn remove_row(self, section: usize, row: usize) -> Self {
        self.with_rows(section, |forms| {
            if row < forms.len() {
                forms.remove(row);
            }
        })
    }

    pub fn set_row(self, section: usize, row: usize, field: FormField, value: String) -> Self {
        self.with_rows(section, |forms| {
            if let Some(pair) = forms.get_mut(row) {
                match field {
                    FormField::Singular => pair.singular = value,
                    FormField::Plural => pair.plural = value,
                }
            }
        })
    }
}

/* -------------------------------------------------------------------------- */
/*                                  comments                                  */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentForm {
    pub text: String,
    pub username: String,
    pub word_id: String,
}

impl CommentForm {
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            text: comment.text.clone(),
            username: comment.username.clone().unwrap_or_default(),
            word_id: comment.word_id.clone().unwrap_or_default(),
        }
    }

    pub fn to_input(&self) -> Result<CommentInput, FormError> {
        Ok(CommentInput {
            text: required(&self.text, "Comment text")?,
            username: optional(&self.username),
            word_id: optional(&self.word_id),
        })
    }
}

/* -------------------------------------------------------------------------- */
/*                                   games                                    */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameForm {
    pub title: String,
    pub description: String,
}

impl GameForm {
    pub fn from_game(game: &Game) -> Self {
        Self {
            title: game.title.clone(),
            description: game.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_input(&self) -> Result<GameInput, FormError> {
        Ok(GameInput {
            title: required(&self.title, "Title")?,
            description: optional(&self.description),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionForm {
    pub text: String,
}

impl QuestionForm {
    pub fn from_question(question: &GameQuestion) -> Self {
        Self {
            text: question.text.clone(),
        }
    }

    pub fn to_input(&self) -> Result<QuestionInput, FormError> {
        Ok(QuestionInput {
            text: required(&self.text, "Question text")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerForm {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerForm {
    pub fn from_answer(answer: &GameAnswer) -> Self {
        Self {
            text: answer.text.clone(),
            is_correct: answer.is_correct,
        }
    }

    pub fn to_input(&self) -> Result<AnswerInput, FormError> {
        Ok(AnswerInput {
            text: required(&self.text, "Answer text")?,
            is_correct: self.is_correct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_lists_are_trimmed_and_compacted() {
        assert_eq!(parse_list("a, b ,, c"), vec!["a", "b", "c"]);
        assert!(parse_list(" , ,").is_empty());
        assert_eq!(join_list(&parse_list("x,y")), "x, y");
    }

    #[test]
    fn word_form_requires_english_title_and_numeric_frequency() {
        let mut form = WordForm {
            title_eng: "  ".into(),
            ..WordForm::default()
        };
        assert_eq!(form.to_input(), Err(FormError::Required("English title")));

        form.title_eng = "Hello".into();
        form.usage_frequency = "often".into();
        assert!(matches!(form.to_input(), Err(FormError::NotANumber { .. })));

        form.usage_frequency = " 42 ".into();
        form.synonyms = "hi, hey ,".into();
        let input = form.to_input().unwrap();
        assert_eq!(input.usage_frequency, Some(42));
        assert_eq!(input.synonyms, vec!["hi", "hey"]);
        assert_eq!(input.transcription, "");
    }

    #[test]
    fn word_form_round_trips_a_loaded_word() {
        let word = Word {
            id: "w1".into(),
            title_eng: "Hello".into(),
            title_uz: "Salom".into(),
            transcription: Some("/hello/".into()),
            usage_frequency: Some(7),
            synonyms: vec!["hi".into(), "hey".into()],
            ..Word::default()
        };
        let form = WordForm::from_word(&word);
        assert_eq!(form.synonyms, "hi, hey");
        assert_eq!(form.usage_frequency, "7");
        let input = form.to_input().unwrap();
        assert_eq!(input.transcription, "/hello/");
    }

    #[test]
    fn nested_meaning_edits_leave_the_original_untouched() {
        let original = DefinitionForm::default().add_other().add_other_example(0);
        let edited = original
            .clone()
            .set_other_meaning(0, "salutation".into())
            .set_other_example(0, 0, ExampleField::Phrase, "Hello!".into());

        assert_eq!(original.others[0].meaning, "");
        assert_eq!(original.others[0].examples[0].phrase, "");
        assert_eq!(edited.others[0].meaning, "salutation");
        assert_eq!(edited.others[0].examples[0].phrase, "Hello!");

        let trimmed = edited.remove_other_example(0, 0).remove_other(0);
        assert!(trimmed.others.is_empty());
    }

    #[test]
    fn out_of_range_nested_edits_are_ignored() {
        let form = DefinitionForm::default()
            .remove_other(3)
            .set_other_meaning(1, "x".into())
            .add_other_example(2);
        assert_eq!(form, DefinitionForm::default());
    }

    #[test]
    fn definition_body_drops_nested_meanings() {
        let form = DefinitionForm {
            type_en: "noun".into(),
            meaning: "greeting".into(),
            plural: " ".into(),
            ..DefinitionForm::default()
        }
        .add_other();
        let input = form.to_input();
        assert_eq!(input.plural, None);
        assert_eq!(input.meaning, "greeting");
    }

    #[test]
    fn verb_form_edit_is_normalized() {
        let empty = VerbForm {
            id: Some("v1".into()),
            tense: "Present".into(),
            content: Vec::new(),
        };
        let form = VerbFormForm::from_verb_form(&empty);
        assert_eq!(form.content, vec![blank_section()]);

        let rowless = VerbForm {
            id: None,
            tense: "Past".into(),
            content: vec![VerbFormContent {
                title: "Affirmative".into(),
                forms: Vec::new(),
            }],
        };
        let form = VerbFormForm::from_verb_form(&rowless);
        assert_eq!(form.content[0].title, "Affirmative");
        assert_eq!(form.content[0].forms, vec![FormPair::default()]);
    }

    #[test]
    fn verb_form_sections_and_rows() {
        let form = VerbFormForm::default()
            .set_section_title(0, "Affirmative".into())
            .set_row(0, 0, FormField::Singular, "I go".into())
            .set_row(0, 0, FormField::Plural, "We go".into())
            .add_row(0)
            .add_section()
            .remove_row(0, 1);

        assert_eq!(form.content.len(), 2);
        assert_eq!(form.content[0].forms.len(), 1);
        assert_eq!(form.content[0].forms[0].plural, "We go");

        let input = form.remove_section(1).to_input();
        assert_eq!(input.content.len(), 1);
    }

    #[test]
    fn optional_comment_fields_are_omitted_when_blank() {
        let form = CommentForm {
            text: "Nice".into(),
            ..CommentForm::default()
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.username, None);
        assert_eq!(input.word_id, None);
        assert!(CommentForm::default().to_input().is_err());
    }

    #[test]
    fn game_forms_validate_text() {
        assert_eq!(GameForm::default().to_input(), Err(FormError::Required("Title")));
        let answer = AnswerForm {
            text: "Paris".into(),
            is_correct: true,
        };
        assert!(answer.to_input().unwrap().is_correct);
        assert!(QuestionForm::default().to_input().is_err());
    }
}
