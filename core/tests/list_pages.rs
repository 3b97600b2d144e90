mod support;

use std::rc::Rc;

use futures::executor::block_on;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;
use support::{harness, words_page};
use wordsuz_admin_core::forms::WordForm;
use wordsuz_admin_core::models::{CommentInput, GameInput, WordInput};
use wordsuz_admin_core::services::{CommentsService, GamesService, UsersService, WordsService};
use wordsuz_admin_core::{ApiError, DataSource, ListController, LoadStatus, Method, NoLatency};

fn words_controller(client: &wordsuz_admin_core::ApiClient) -> ListController<WordsService> {
    ListController::new(
        WordsService::new(client.clone()),
        Rc::new(NoLatency),
        Rc::new(|| {}),
    )
}

#[test]
fn service_page_is_one_more_than_the_table_page() {
    let h = harness();
    h.transport
        .json(words_page(&["Hello"], 31))
        .json(words_page(&["Book"], 31))
        .json(words_page(&["Car"], 31));
    let list = words_controller(&h.client);

    block_on(list.refresh());
    block_on(list.set_page(3));
    block_on(list.set_page_size(25));

    assert_eq!(
        h.transport.calls(),
        vec![
            "GET /words?page=1&limit=10",
            "GET /words?page=4&limit=10",
            "GET /words?page=1&limit=25",
        ]
    );
    assert_eq!(list.state().page(), 0);
    assert_eq!(list.state().status(), LoadStatus::Loaded);
}

#[test]
fn committing_a_search_resets_the_page_and_clearing_restores_the_total() {
    let h = harness();
    h.transport
        .json(words_page(&["Hello", "Help"], 40))
        .json(words_page(&["Hello"], 40))
        .json(words_page(&["Hello"], 1))
        .json(words_page(&["Hello", "Help"], 40));
    let list = words_controller(&h.client);

    block_on(list.refresh());
    block_on(list.set_page(2));
    list.stage_search("thank you");
    // typing alone does not fetch
    assert_eq!(h.transport.requests().len(), 2);

    block_on(list.submit_search());
    assert_eq!(list.state().page(), 0);
    assert_eq!(list.state().total(), 1);
    assert_eq!(
        h.transport.calls()[2],
        "GET /words?page=1&limit=10&search=thank%20you"
    );

    block_on(list.clear_search());
    assert_eq!(list.state().search_input(), "");
    assert_eq!(list.state().search_query(), "");
    assert_eq!(list.state().total(), 40);
    assert_eq!(h.transport.calls()[3], "GET /words?page=1&limit=10");
}

#[test]
fn failed_fetch_sets_the_banner() {
    let h = harness();
    h.transport.reply(500, r#"{"message":"boom"}"#);
    let list = words_controller(&h.client);

    block_on(list.refresh());

    assert_eq!(list.state().status(), LoadStatus::Errored);
    assert_eq!(list.state().error(), Some("Failed to fetch words"));
    assert!(!list.state().is_loading());
}

#[test]
fn mock_mode_regenerates_data_and_leaves_live_state_alone() {
    let h = harness();
    h.transport
        .json(words_page(&["Hello"], 7))
        .reply(500, "")
        .json(words_page(&["Hello"], 7));
    let list = words_controller(&h.client);
    let mut rng = SmallRng::seed_from_u64(3);

    block_on(list.refresh());
    block_on(list.set_page(1));
    assert_eq!(list.state().error(), Some("Failed to fetch words"));
    let live_before = list.state().live_view().clone();

    block_on(list.set_mock_mode(true, &mut rng));
    {
        let state = list.state();
        assert_eq!(state.source(), DataSource::Mock);
        assert_eq!(state.page(), 0);
        assert_eq!(state.total(), 50);
        assert_eq!(state.items().len(), 10);
        assert_eq!(state.error(), None);
        assert_eq!(state.live_view(), &live_before);
    }
    let first_dataset = list.state().mock_records().unwrap().to_vec();

    block_on(list.set_mock_mode(true, &mut rng));
    assert_ne!(list.state().mock_records().unwrap(), first_dataset.as_slice());

    // no network while mock mode is on
    assert_eq!(h.transport.requests().len(), 2);

    block_on(list.set_mock_mode(false, &mut rng));
    assert_eq!(list.state().source(), DataSource::Live);
    assert_eq!(list.state().total(), 7);
    assert_eq!(h.transport.requests().len(), 3);
}

#[test]
fn mock_search_filters_titles_case_insensitively() {
    let h = harness();
    let list = words_controller(&h.client);
    let mut rng = SmallRng::seed_from_u64(5);
    block_on(list.set_mock_mode(true, &mut rng));
    block_on(list.set_page(2));

    let expected = list
        .state()
        .mock_records()
        .unwrap()
        .iter()
        .filter(|w| w.title_eng.to_lowercase().contains("o") || w.title_uz.to_lowercase().contains("o"))
        .count() as u64;

    list.stage_search("O");
    block_on(list.submit_search());

    assert_eq!(list.state().page(), 0);
    assert_eq!(list.state().total(), expected);
    assert!(h.transport.requests().is_empty());
}

#[test]
fn mock_mutations_stay_in_memory() {
    let h = harness();
    let list = words_controller(&h.client);
    let mut rng = SmallRng::seed_from_u64(9);
    block_on(list.set_mock_mode(true, &mut rng));

    let draft = WordInput {
        title_eng: "Window".into(),
        title_uz: "Deraza".into(),
        ..WordInput::default()
    };
    block_on(list.create(&draft)).unwrap();
    {
        let state = list.state();
        let first = &state.items()[0];
        assert_eq!(first.id, "mock-51");
        assert_eq!(first.title_eng, "Window");
        assert_eq!(first.definitions_count, Some(0));
        assert_eq!(state.total(), 51);
    }

    let patch = WordInput {
        title_eng: "Door".into(),
        ..draft.clone()
    };
    block_on(list.update("mock-51", &patch)).unwrap();
    assert_eq!(list.state().items()[0].title_eng, "Door");

    block_on(list.delete("mock-51")).unwrap();
    assert_eq!(list.state().total(), 50);
    assert!(h.transport.requests().is_empty());
}

#[test]
fn deleting_the_last_row_of_a_later_page_leaves_an_empty_page() {
    let h = harness();
    h.transport
        .json(words_page(&["Hello"], 11))
        .json(words_page(&["Zebra"], 11))
        .reply(200, "")
        .json(words_page(&[], 10));
    let list = words_controller(&h.client);

    block_on(list.refresh());
    block_on(list.set_page(1));
    block_on(list.delete("w1")).unwrap();

    let state = list.state();
    assert_eq!(state.page(), 1);
    assert!(state.items().is_empty());
    assert_eq!(state.total(), 10);
    assert_eq!(state.status(), LoadStatus::Loaded);
    drop(state);
    assert_eq!(
        h.transport.calls()[2..],
        ["DELETE /words/w1", "GET /words?page=2&limit=10"]
    );
}

#[test]
fn clearing_optional_word_fields_sends_empty_values() {
    let h = harness();
    let hello = words_page(&["Hello"], 1)["data"][0].clone();
    h.transport
        .json(words_page(&["Hello"], 1))
        .json(hello)
        .json(words_page(&["Hello"], 1));
    let list = words_controller(&h.client);
    block_on(list.refresh());

    let form = WordForm {
        title_eng: "Hello".into(),
        title_uz: "Salom".into(),
        transcription: "  ".into(),
        usage_frequency: String::new(),
        ..WordForm::default()
    };
    block_on(list.update("w1", &form.to_input().unwrap())).unwrap();

    let patch = h
        .transport
        .requests()
        .into_iter()
        .find(|request| request.method == Method::Patch)
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(patch.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["transcription"], json!(""));
    assert_eq!(body["usageFrequency"], serde_json::Value::Null);
    assert!(body.as_object().unwrap().contains_key("usageFrequency"));
}

#[test]
fn games_list_refetches_after_create_and_delete() {
    let h = harness();
    let game = |id: &str, title: &str| json!({"id": id, "title": title, "createdAt": "", "updatedAt": ""});
    h.transport
        .json(json!({"data": [game("g1", "Capitals")], "meta": {"total": 1}}))
        .json(game("g2", "Animals"))
        .json(json!({"data": [game("g2", "Animals"), game("g1", "Capitals")], "meta": {"total": 2}}))
        .reply(200, "")
        .json(json!({"data": [game("g2", "Animals")], "meta": {"total": 1}}));
    let list = ListController::new(
        GamesService::new(h.client.clone()),
        Rc::new(NoLatency),
        Rc::new(|| {}),
    );

    block_on(list.refresh());
    assert_eq!(list.state().items()[0].title, "Capitals");

    let draft = GameInput {
        title: "Animals".into(),
        description: None,
    };
    block_on(list.create(&draft)).unwrap();
    assert_eq!(list.state().total(), 2);

    block_on(list.delete("g1")).unwrap();
    {
        let state = list.state();
        assert_eq!(state.total(), 1);
        assert_eq!(state.items()[0].id, "g2");
        assert_eq!(state.error(), None);
    }
    assert_eq!(
        h.transport.calls(),
        vec![
            "GET /games?page=1&limit=10",
            "POST /games",
            "GET /games?page=1&limit=10",
            "DELETE /games/g1",
            "GET /games?page=1&limit=10",
        ]
    );
    let create = &h.transport.requests()[1];
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(create.body.as_deref().unwrap()).unwrap(),
        json!({"title": "Animals"})
    );
}

#[test]
fn failed_mutation_reports_and_skips_the_refetch() {
    let h = harness();
    h.transport
        .json(json!({
            "data": {"data": [{"id": "c1", "text": "hi", "createdAt": "", "updatedAt": ""}],
                     "meta": {"total": 1}},
            "message": "", "statusCode": 200
        }))
        .reply(500, r#"{"message":"db down"}"#);
    let list = ListController::new(
        CommentsService::new(h.client.clone()),
        Rc::new(NoLatency),
        Rc::new(|| {}),
    );
    block_on(list.refresh());

    let patch = CommentInput {
        text: "hello".into(),
        ..CommentInput::default()
    };
    let err = block_on(list.update("c1", &patch)).unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(list.state().error(), Some("Failed to update comment"));
    assert_eq!(list.state().items().len(), 1);
    assert_eq!(h.transport.requests().len(), 2);
}

#[test]
fn comments_unwrap_the_wrapped_envelope() {
    let h = harness();
    h.transport
        .json(json!({
            "data": {"data": [{"id": "c1", "text": "nice", "username": null,
                               "Word": {"titleEng": "Hello", "titleUz": "Salom"}}],
                     "meta": {"total": 12}},
            "message": "", "statusCode": 200
        }))
        .json(json!({"data": {"id": "c1"}, "message": "Deleted", "statusCode": 200}))
        .json(json!({"data": {"data": [], "meta": {"total": 11}}, "message": "", "statusCode": 200}));
    let list = ListController::new(
        CommentsService::new(h.client.clone()),
        Rc::new(NoLatency),
        Rc::new(|| {}),
    );

    block_on(list.refresh());
    assert_eq!(list.state().total(), 12);
    assert_eq!(
        list.state().items()[0].word.as_ref().map(|w| w.title_uz.as_str()),
        Some("Salom")
    );

    block_on(list.delete("c1")).unwrap();
    assert_eq!(list.state().total(), 11);
}

#[test]
fn user_stats_are_fetched_once_and_cached() {
    let h = harness();
    h.transport
        .json(json!({
            "data": {"total": 120, "lastWeek": 4, "lastMonth": 19, "lastYear": 88},
            "message": "", "statusCode": 200
        }));
    let panel = wordsuz_admin_core::stats::StatsPanel::new(
        UsersService::new(h.client.clone()),
        Rc::new(|| {}),
    );

    block_on(panel.open()).unwrap();
    block_on(panel.open()).unwrap();

    assert_eq!(panel.state().stats.map(|s| s.last_month), Some(19));
    assert_eq!(h.transport.calls(), vec!["GET /users/stats"]);
}
