mod support;

use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;
use support::harness;
use wordsuz_admin_core::detail::{GameDetail, WordDetail};
use wordsuz_admin_core::forms::{DefinitionForm, VerbFormForm, WordForm};
use wordsuz_admin_core::models::{AnswerInput, ExampleInput, QuestionInput, VerbForm};
use wordsuz_admin_core::services::{GamesService, WordsService};

fn base_word() -> serde_json::Value {
    json!({
        "id": "w1",
        "titleEng": "Thank you",
        "titleUz": "Rahmat",
        "synonyms": ["thanks"],
        "anagrams": [],
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-01T10:00:00.000Z",
        "definitionsCount": 1,
        "examplesCount": 0
    })
}

fn word_detail() -> (support::Harness, WordDetail) {
    let h = harness();
    let detail = WordDetail::new(WordsService::new(h.client.clone()), "w1", Rc::new(|| {}));
    (h, detail)
}

#[test]
fn detail_merges_nested_collections_from_the_title_lookup() {
    let (h, detail) = word_detail();
    h.transport.json(base_word()).json(json!({
        "id": "w1",
        "titleEng": "Thank you",
        "definitions": [{"id": "d1", "typeEn": "phrase", "typeUz": "ibora", "meaning": "gratitude",
                         "others": [{"meaning": "polite refusal", "examples": []}]}],
        "verbForms": [{"id": "v1", "tense": "Present", "content": []}]
    }));

    block_on(detail.load()).unwrap();

    let state = detail.state();
    let word = state.item.unwrap();
    assert_eq!(word.title_uz, "Rahmat");
    assert_eq!(word.definitions.len(), 1);
    assert_eq!(word.definitions[0].others[0].meaning, "polite refusal");
    assert!(word.examples.is_empty());
    assert_eq!(word.verb_forms.len(), 1);
    assert_eq!(state.error, None);
    assert_eq!(
        h.transport.calls(),
        vec!["GET /words/single/w1", "GET /words/Thank%20you"]
    );
}

#[test]
fn enrichment_failure_is_not_fatal() {
    let (h, detail) = word_detail();
    h.transport
        .json(base_word())
        .reply(404, r#"{"message":"Word not found"}"#);

    block_on(detail.load()).unwrap();

    let state = detail.state();
    let word = state.item.expect("base record still shown");
    assert_eq!(word.synonyms, vec!["thanks".to_string()]);
    assert!(word.definitions.is_empty());
    assert!(word.verb_forms.is_empty());
    assert_eq!(state.error, None);
    assert!(!state.is_loading);
}

#[test]
fn base_fetch_failure_shows_the_page_error() {
    let (h, detail) = word_detail();
    h.transport.reply(500, "");

    assert!(block_on(detail.load()).is_err());

    let state = detail.state();
    assert!(state.item.is_none());
    assert_eq!(state.error.as_deref(), Some("Failed to fetch word details"));
    assert_eq!(h.transport.requests().len(), 1);
}

#[test]
fn nested_edits_keep_counts_in_step() {
    let (h, detail) = word_detail();
    h.transport
        .json(base_word())
        .json(json!({"id": "w1", "titleEng": "Thank you", "definitions": [{"id": "d1", "typeEn": "phrase", "typeUz": "ibora", "meaning": "gratitude"}]}))
        // add example
        .json(json!({"id": "e1", "phrase": "Thank you very much", "translation": "Katta rahmat"}))
        // edit definition
        .json(json!({"id": "d1", "typeEn": "phrase", "typeUz": "ibora", "meaning": "thanks"}))
        // delete definition
        .reply(200, "")
        // failing example delete
        .reply(500, "");
    block_on(detail.load()).unwrap();

    let example = ExampleInput {
        phrase: "Thank you very much".into(),
        translation: "Katta rahmat".into(),
    };
    block_on(detail.save_example(None, &example)).unwrap();
    let word = detail.state().item.unwrap();
    assert_eq!(word.examples.len(), 1);
    assert_eq!(word.examples_count, Some(1));

    let definition = DefinitionForm::from_definition(&word.definitions[0]).add_other();
    let input = DefinitionForm {
        meaning: "thanks".into(),
        ..definition
    }
    .to_input();
    block_on(detail.save_definition(Some("d1"), &input)).unwrap();
    assert_eq!(detail.state().item.unwrap().definitions[0].meaning, "thanks");
    let sent: serde_json::Value =
        serde_json::from_str(h.transport.last().body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({"typeEn": "phrase", "typeUz": "ibora", "meaning": "thanks"}));

    block_on(detail.delete_definition("d1")).unwrap();
    let word = detail.state().item.unwrap();
    assert!(word.definitions.is_empty());
    assert_eq!(word.definitions_count, Some(0));

    assert!(block_on(detail.delete_example("e1")).is_err());
    let state = detail.state();
    assert_eq!(state.error.as_deref(), Some("Failed to delete example"));
    assert_eq!(state.item.unwrap().examples.len(), 1);

    assert_eq!(
        h.transport.calls()[2..],
        [
            "POST /words/w1/examples",
            "PATCH /words/w1/definitions/d1",
            "DELETE /words/w1/definitions/d1",
            "DELETE /words/w1/examples/e1",
        ]
    );
}

#[test]
fn basic_info_edit_merges_without_losing_collections() {
    let (h, detail) = word_detail();
    h.transport
        .json(base_word())
        .json(json!({"id": "w1", "titleEng": "Thank you", "examples": [{"id": "e1", "phrase": "p", "translation": "t"}]}))
        .json(json!({"id": "w1", "titleEng": "Thanks", "titleUz": "Rahmat", "synonyms": ["ta"], "anagrams": []}));
    block_on(detail.load()).unwrap();

    let mut form = WordForm::from_word(&detail.state().item.unwrap());
    form.title_eng = "Thanks".into();
    form.synonyms = "ta".into();
    block_on(detail.save_word(&form.to_input().unwrap())).unwrap();

    let word = detail.state().item.unwrap();
    assert_eq!(word.title_eng, "Thanks");
    assert_eq!(word.examples.len(), 1);
    assert_eq!(word.definitions_count, Some(1));
}

#[test]
fn added_verb_form_is_appended() {
    let (h, detail) = word_detail();
    h.transport
        .json(base_word())
        .json(json!({"id": "w1", "titleEng": "Thank you"}))
        .json(json!({"id": "v9", "tense": "Past", "content": [{"title": "Affirmative",
                     "forms": [{"singular": "I went", "plural": "We went"}]}]}));
    block_on(detail.load()).unwrap();

    let form = VerbFormForm::from_verb_form(&VerbForm::default());
    let input = VerbFormForm {
        tense: "Past".into(),
        ..form
    }
    .to_input();
    block_on(detail.save_verb_form(None, &input)).unwrap();

    let word = detail.state().item.unwrap();
    assert_eq!(word.verb_forms[0].id.as_deref(), Some("v9"));
    assert_eq!(word.verb_forms_count, Some(1));
}

fn game_json(questions: serde_json::Value) -> serde_json::Value {
    json!({"id": "g1", "title": "Capitals", "createdAt": "", "updatedAt": "", "questions": questions})
}

#[test]
fn game_mutations_refetch_the_whole_game() {
    let h = harness();
    h.transport
        .json(game_json(json!([])))
        .json(json!({"id": "q1", "text": "Capital of France?", "gameId": "g1"}))
        .json(game_json(json!([{"id": "q1", "text": "Capital of France?", "answers": []}])))
        .json(json!({"id": "a1", "text": "Paris", "isCorrect": true, "questionId": "q1"}))
        .json(game_json(json!([{"id": "q1", "text": "Capital of France?",
                                 "answers": [{"id": "a1", "text": "Paris", "isCorrect": true}]}])));
    let detail = GameDetail::new(GamesService::new(h.client.clone()), "g1", Rc::new(|| {}));

    block_on(detail.load()).unwrap();
    block_on(detail.save_question(
        None,
        &QuestionInput {
            text: "Capital of France?".into(),
        },
    ))
    .unwrap();
    block_on(detail.save_answer(
        "q1",
        None,
        &AnswerInput {
            text: "Paris".into(),
            is_correct: true,
        },
    ))
    .unwrap();

    let game = detail.state().item.unwrap();
    assert!(game.questions[0].answers[0].is_correct);
    assert_eq!(
        h.transport.calls(),
        vec![
            "GET /games/g1",
            "POST /games/g1/questions",
            "GET /games/g1",
            "POST /games/questions/q1/answers",
            "GET /games/g1",
        ]
    );
}

#[test]
fn question_saved_before_a_failed_reload_still_closes_the_dialog() {
    let h = harness();
    h.transport
        .json(game_json(json!([])))
        .json(json!({"id": "q1", "text": "Capital of France?", "gameId": "g1"}))
        .reply(503, "");
    let detail = GameDetail::new(GamesService::new(h.client.clone()), "g1", Rc::new(|| {}));
    block_on(detail.load()).unwrap();

    let saved = block_on(detail.save_question(
        None,
        &QuestionInput {
            text: "Capital of France?".into(),
        },
    ));

    assert!(saved.is_ok());
    assert_eq!(
        h.transport.calls(),
        vec!["GET /games/g1", "POST /games/g1/questions", "GET /games/g1"]
    );
    let state = detail.state();
    assert_eq!(state.error.as_deref(), Some("Failed to load game"));
    assert!(!state.is_loading);
}

#[test]
fn failed_game_mutation_keeps_the_loaded_game() {
    let h = harness();
    h.transport
        .json(game_json(json!([{"id": "q1", "text": "?", "answers": []}])))
        .reply(500, "");
    let detail = GameDetail::new(GamesService::new(h.client.clone()), "g1", Rc::new(|| {}));
    block_on(detail.load()).unwrap();

    assert!(block_on(detail.delete_question("q1")).is_err());

    let state = detail.state();
    assert_eq!(state.error.as_deref(), Some("Failed to delete question"));
    assert_eq!(state.item.unwrap().questions.len(), 1);
    assert!(!state.is_loading);
    assert_eq!(h.transport.pending(), 0);
}
