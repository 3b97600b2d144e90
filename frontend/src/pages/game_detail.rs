use yew::prelude::*;
use yew_router::prelude::*;

use wordsuz_admin_core::detail::GameDetail;
use wordsuz_admin_core::format::format_timestamp;
use wordsuz_admin_core::forms::{AnswerForm, GameForm, QuestionForm};
use wordsuz_admin_core::models::{GameAnswer, GameQuestion};
use wordsuz_admin_core::services::GamesService;

use super::games::GameFields;
use super::progress;
use crate::api::use_client;
use crate::components::{dialog_actions, ConfirmDialog, ErrorBanner, Field, Modal};
use crate::hooks::{run_mutation, spawn_with, use_observed};
use crate::utils::{bind, checkbox_checked};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Game,
    Question { editing: Option<String> },
    Answer { question_id: String, editing: Option<String> },
    DeleteQuestion(String),
    DeleteAnswer(String),
}

/* -------------------------------------------------------------------------- */
/*                              questions table                               */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct QuestionsTableProps {
    pub questions: Vec<GameQuestion>,
    pub on_edit_question: Callback<GameQuestion>,
    pub on_delete_question: Callback<String>,
    pub on_add_answer: Callback<String>,
    pub on_edit_answer: Callback<GameAnswer>,
    pub on_delete_answer: Callback<String>,
}

#[function_component(QuestionsTable)]
pub fn questions_table(props: &QuestionsTableProps) -> Html {
    let answer_row = |answer: &GameAnswer| {
        let edit = {
            let answer = answer.clone();
            props.on_edit_answer.reform(move |_: MouseEvent| answer.clone())
        };
        let id = answer.id.clone();
        let delete = props.on_delete_answer.reform(move |_: MouseEvent| id.clone());
        html! {
            <tr key={answer.id.clone()}>
                <td>{ &answer.text }</td>
                <td><input type="checkbox" checked={answer.is_correct} disabled={true} /></td>
                <td class="actions">
                    <button class="btn-link" onclick={edit}>{"Edit"}</button>
                    <button class="btn-link danger" onclick={delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    };

    let question_row = |question: &GameQuestion| {
        let edit = {
            let question = question.clone();
            props.on_edit_question.reform(move |_: MouseEvent| question.clone())
        };
        let delete = {
            let id = question.id.clone();
            props.on_delete_question.reform(move |_: MouseEvent| id.clone())
        };
        let add_answer = {
            let id = question.id.clone();
            props.on_add_answer.reform(move |_: MouseEvent| id.clone())
        };
        html! {
            <tr key={question.id.clone()}>
                <td class="question">{ &question.text }</td>
                <td>
                    <table class="table nested">
                        <thead><tr><th>{"Answer"}</th><th>{"Correct"}</th><th>{"Actions"}</th></tr></thead>
                        <tbody>
                            { for question.answers.iter().map(answer_row) }
                            <tr><td colspan="3">
                                <button class="btn-link" onclick={add_answer}>{"+ Add answer"}</button>
                            </td></tr>
                        </tbody>
                    </table>
                </td>
                <td class="actions">
                    <button class="btn-link" onclick={edit}>{"Edit"}</button>
                    <button class="btn-link danger" onclick={delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    };

    html! {
        <table class="table">
            <thead><tr><th>{"Question"}</th><th>{"Answers"}</th><th>{"Actions"}</th></tr></thead>
            <tbody>
                if props.questions.is_empty() {
                    <tr><td class="empty" colspan="3">{"No questions yet"}</td></tr>
                } else {
                    { for props.questions.iter().map(question_row) }
                }
            </tbody>
        </table>
    }
}

/* -------------------------------------------------------------------------- */
/*                                    page                                    */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct GameDetailPageProps {
    pub id: String,
}

#[function_component(GameDetailPage)]
pub fn game_detail_page(props: &GameDetailPageProps) -> Html {
    let client = use_client();
    let game_id = props.id.clone();
    let detail = use_observed(move |listener| {
        GameDetail::new(GamesService::new(client), game_id, listener)
    });
    let editor = use_state(|| Editor::Closed);
    let game_form = use_state(GameForm::default);
    let question_form = use_state(QuestionForm::default);
    let answer_form = use_state(AnswerForm::default);
    let form_error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let detail = detail.clone();
        use_effect_with((), move |_| {
            spawn_with(&detail, |detail| async move {
                if let Err(e) = detail.load().await {
                    log::debug!("game detail load: {e}");
                }
            });
            || ()
        });
    }

    let close = {
        let editor = editor.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            form_error.set(None);
            editor.set(Editor::Closed);
        })
    };

    /* ---------------- openers ------------------------------------------- */
    let open_edit_game = {
        let editor = editor.clone();
        let game_form = game_form.clone();
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(game) = detail.state().item {
                game_form.set(GameForm::from_game(&game));
                editor.set(Editor::Game);
            }
        })
    };
    let open_add_question = {
        let editor = editor.clone();
        let question_form = question_form.clone();
        Callback::from(move |_: MouseEvent| {
            question_form.set(QuestionForm::default());
            editor.set(Editor::Question { editing: None });
        })
    };
    let on_edit_question = {
        let editor = editor.clone();
        let question_form = question_form.clone();
        Callback::from(move |question: GameQuestion| {
            question_form.set(QuestionForm::from_question(&question));
            editor.set(Editor::Question {
                editing: Some(question.id),
            });
        })
    };
    let on_delete_question = {
        let editor = editor.clone();
        Callback::from(move |id: String| editor.set(Editor::DeleteQuestion(id)))
    };
    let on_add_answer = {
        let editor = editor.clone();
        let answer_form = answer_form.clone();
        Callback::from(move |question_id: String| {
            answer_form.set(AnswerForm::default());
            editor.set(Editor::Answer {
                question_id,
                editing: None,
            });
        })
    };
    let on_edit_answer = {
        let editor = editor.clone();
        let answer_form = answer_form.clone();
        Callback::from(move |answer: GameAnswer| {
            answer_form.set(AnswerForm::from_answer(&answer));
            editor.set(Editor::Answer {
                question_id: answer.question_id.clone(),
                editing: Some(answer.id),
            });
        })
    };
    let on_delete_answer = {
        let editor = editor.clone();
        Callback::from(move |id: String| editor.set(Editor::DeleteAnswer(id)))
    };

    /* ---------------- save / delete ------------------------------------- */
    let on_save = {
        let detail = detail.clone();
        let editor = editor.clone();
        let game_form = game_form.clone();
        let question_form = question_form.clone();
        let answer_form = answer_form.clone();
        let form_error = form_error.clone();
        let busy = busy.clone();
        let close = close.clone();
        Callback::from(move |_: ()| {
            let submitted = match (*editor).clone() {
                Editor::Game => game_form.to_input().map(|input| {
                    run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                        detail.update_game(&input).await
                    })
                }),
                Editor::Question { editing } => question_form.to_input().map(|input| {
                    run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                        detail.save_question(editing.as_deref(), &input).await
                    })
                }),
                Editor::Answer {
                    question_id,
                    editing,
                } => answer_form.to_input().map(|input| {
                    run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                        detail
                            .save_answer(&question_id, editing.as_deref(), &input)
                            .await
                    })
                }),
                _ => Ok(()),
            };
            form_error.set(submitted.err().map(|e| e.to_string()));
        })
    };

    let on_delete = {
        let detail = detail.clone();
        let editor = editor.clone();
        let busy = busy.clone();
        let close = close.clone();
        Callback::from(move |_: ()| match (*editor).clone() {
            Editor::DeleteQuestion(id) => {
                run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                    detail.delete_question(&id).await
                })
            }
            Editor::DeleteAnswer(id) => {
                run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                    detail.delete_answer(&id).await
                })
            }
            _ => {}
        })
    };

    /* ---------------- view ---------------------------------------------- */
    let state = detail.state();
    let on_dismiss = {
        let detail = detail.clone();
        Callback::from(move |_: ()| detail.dismiss_error())
    };
    let form_message = (*form_error)
        .clone()
        .map(|message| html!(<p class="form-error">{ message }</p>))
        .unwrap_or_default();

    let dialog = match &*editor {
        Editor::Closed => Html::default(),
        Editor::Game => html! {
            <Modal open={true} title="Edit Game" on_close={close.clone()}
                actions={dialog_actions(*busy, "Save", close.clone(), on_save)}>
                { form_message }
                <GameFields form={game_form.clone()} />
            </Modal>
        },
        Editor::Question { editing } => html! {
            <Modal open={true} title={if editing.is_some() { "Edit Question" } else { "Add Question" }}
                on_close={close.clone()} actions={dialog_actions(*busy, "Save", close.clone(), on_save)}>
                { form_message }
                <Field label="Question" required={true} value={question_form.text.clone()}
                    oninput={bind(&question_form, |f: &mut QuestionForm, v| f.text = v)} />
            </Modal>
        },
        Editor::Answer { editing, .. } => {
            let toggle_correct = {
                let answer_form = answer_form.clone();
                Callback::from(move |e: Event| {
                    let mut next = (*answer_form).clone();
                    next.is_correct = checkbox_checked(&e);
                    answer_form.set(next);
                })
            };
            html! {
                <Modal open={true} title={if editing.is_some() { "Edit Answer" } else { "Add Answer" }}
                    on_close={close.clone()} actions={dialog_actions(*busy, "Save", close.clone(), on_save)}>
                    { form_message }
                    <Field label="Answer" required={true} value={answer_form.text.clone()}
                        oninput={bind(&answer_form, |f: &mut AnswerForm, v| f.text = v)} />
                    <label class="checkbox">
                        <input type="checkbox" checked={answer_form.is_correct} onchange={toggle_correct} />
                        {"Correct answer"}
                    </label>
                </Modal>
            }
        }
        Editor::DeleteQuestion(_) => html! {
            <ConfirmDialog open={true} title="Delete question" message="Delete this question and its answers?"
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
        Editor::DeleteAnswer(_) => html! {
            <ConfirmDialog open={true} title="Delete answer" message="Delete this answer?"
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
    };

    let has_game = state.item.is_some();
    html! {
        <section class="page">
            <div class="page-header">
                <Link<Route> classes="btn-link" to={Route::Games}>{"← Back to Games"}</Link<Route>>
                <h1>{"Game Details"}</h1>
                <button class="btn-outline" onclick={open_edit_game} disabled={!has_game}>{"Edit Game"}</button>
            </div>

            { progress(state.is_loading) }
            <ErrorBanner message={state.error.clone().map(AttrValue::from)} {on_dismiss} />

            if let Some(game) = state.item.clone() {
                <div class="panel">
                    <h2>{ &game.title }</h2>
                    if let Some(description) = game.description.clone() {
                        <p class="muted">{ description }</p>
                    }
                    <small class="muted">
                        { format!("Created: {} • Updated: {}", format_timestamp(&game.created_at), format_timestamp(&game.updated_at)) }
                    </small>
                </div>

                <div class="section-header">
                    <h2>{"Questions"}</h2>
                    <button class="btn-primary" onclick={open_add_question}>{"Add Question"}</button>
                </div>
                <QuestionsTable questions={game.questions.clone()}
                    {on_edit_question} {on_delete_question} {on_add_answer} {on_edit_answer} {on_delete_answer} />
            }

            { dialog }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(questions: Vec<GameQuestion>) -> QuestionsTableProps {
        QuestionsTableProps {
            questions,
            on_edit_question: Callback::noop(),
            on_delete_question: Callback::noop(),
            on_add_answer: Callback::noop(),
            on_edit_answer: Callback::noop(),
            on_delete_answer: Callback::noop(),
        }
    }

    #[test]
    fn empty_game_says_so() {
        let html = block_on(LocalServerRenderer::<QuestionsTable>::with_props(props(vec![])).render());
        assert!(html.contains("No questions yet"), "{html}");
    }

    #[test]
    fn questions_list_their_answers() {
        let question = GameQuestion {
            id: "q1".into(),
            text: "Capital of France?".into(),
            answers: vec![
                GameAnswer {
                    id: "a1".into(),
                    text: "Paris".into(),
                    is_correct: true,
                    ..GameAnswer::default()
                },
                GameAnswer {
                    id: "a2".into(),
                    text: "Lyon".into(),
                    ..GameAnswer::default()
                },
            ],
            ..GameQuestion::default()
        };
        let html = block_on(LocalServerRenderer::<QuestionsTable>::with_props(props(vec![question])).render());
        assert!(html.contains("Capital of France?"), "{html}");
        assert!(html.contains("Paris") && html.contains("Lyon"), "{html}");
        assert!(html.contains("+ Add answer"), "{html}");
    }
}
