use yew::prelude::*;
use yew_router::prelude::*;

use wordsuz_admin_core::format::{count, format_timestamp, or_dash};
use wordsuz_admin_core::forms::WordForm;
use wordsuz_admin_core::models::Word;
use wordsuz_admin_core::services::WordsService;

use super::{
    empty_row, list_banner, list_pagination, list_search_indicator, list_toolbar, progress, Dialog,
};
use crate::api::use_client;
use crate::components::{dialog_actions, ConfirmDialog, Field, Modal};
use crate::hooks::{run_mutation, use_list_controller};
use crate::utils::bind;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                 quick view                                 */
/* -------------------------------------------------------------------------- */

pub(super) fn chips(items: &[String], empty: &'static str) -> Html {
    if items.is_empty() {
        return html!(<p class="muted">{ empty }</p>);
    }
    html! {
        <div class="chips">
            { for items.iter().map(|item| html!(<span class="chip">{ item }</span>)) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WordSummaryProps {
    pub word: Word,
}

#[function_component(WordSummary)]
pub fn word_summary(props: &WordSummaryProps) -> Html {
    let w = &props.word;
    html! {
        <div class="summary">
            <p><strong>{"ID: "}</strong>{ &w.id }</p>
            <p><strong>{"English: "}</strong>{ &w.title_eng }</p>
            <p><strong>{"Uzbek: "}</strong>{ &w.title_uz }</p>
            <p><strong>{"Transcription: "}</strong>{ or_dash(w.transcription.as_deref()) }</p>
            <p><strong>{"Usage frequency: "}</strong>{ w.usage_frequency.map(|f| f.to_string()).unwrap_or_else(|| "-".into()) }</p>
            <p><strong>{"Created: "}</strong>{ format_timestamp(&w.created_at) }</p>
            <p><strong>{"Updated: "}</strong>{ format_timestamp(&w.updated_at) }</p>

            <h3>{"Synonyms"}</h3>
            { chips(&w.synonyms, "No synonyms") }
            <h3>{"Anagrams"}</h3>
            { chips(&w.anagrams, "No anagrams") }

            <h3>{"Statistics"}</h3>
            <ul class="stats">
                <li>{ format!("Definitions: {}", count(w.definitions_count)) }</li>
                <li>{ format!("Examples: {}", count(w.examples_count)) }</li>
                <li>{ format!("Verb forms: {}", count(w.verb_forms_count)) }</li>
                <li>{ format!("Bookmarks: {}", count(w.bookmarks_count)) }</li>
                <li>{ format!("Comments: {}", count(w.comments_count)) }</li>
            </ul>
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                 edit form                                  */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct WordFieldsProps {
    pub form: UseStateHandle<WordForm>,
}

/// Inputs of the add/edit dialog; shared with the detail page.
#[function_component(WordFields)]
pub fn word_fields(props: &WordFieldsProps) -> Html {
    let form = &props.form;
    html! {
        <div class="form-stack">
            <Field label="English title" required={true} value={form.title_eng.clone()}
                oninput={bind(form, |f: &mut WordForm, v| f.title_eng = v)} />
            <Field label="Uzbek title" value={form.title_uz.clone()}
                oninput={bind(form, |f: &mut WordForm, v| f.title_uz = v)} />
            <Field label="Transcription" value={form.transcription.clone()}
                oninput={bind(form, |f: &mut WordForm, v| f.transcription = v)} />
            <Field label="Usage frequency" kind="number" value={form.usage_frequency.clone()}
                oninput={bind(form, |f: &mut WordForm, v| f.usage_frequency = v)} />
            <Field label="Synonyms" helper={Some(AttrValue::from("Comma separated"))} value={form.synonyms.clone()}
                oninput={bind(form, |f: &mut WordForm, v| f.synonyms = v)} />
            <Field label="Anagrams" helper={Some(AttrValue::from("Comma separated"))} value={form.anagrams.clone()}
                oninput={bind(form, |f: &mut WordForm, v| f.anagrams = v)} />
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                    page                                    */
/* -------------------------------------------------------------------------- */

#[function_component(WordsPage)]
pub fn words_page() -> Html {
    let client = use_client();
    let list = use_list_controller(move || WordsService::new(client));
    let dialog = use_state(|| Dialog::<Word>::Closed);
    let form = use_state(WordForm::default);
    let form_error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let close = {
        let dialog = dialog.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            form_error.set(None);
            dialog.set(Dialog::Closed);
        })
    };

    let open_create = {
        let dialog = dialog.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(WordForm::default());
            dialog.set(Dialog::Create);
        })
    };

    let on_save = {
        let list = list.clone();
        let dialog = dialog.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let busy = busy.clone();
        let close = close.clone();
        Callback::from(move |_: ()| {
            let input = match form.to_input() {
                Ok(input) => input,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            form_error.set(None);
            let editing = match &*dialog {
                Dialog::Edit(word) => Some(word.id.clone()),
                _ => None,
            };
            run_mutation(&list, &busy, close.clone(), move |list| async move {
                match editing {
                    Some(id) => list.update(&id, &input).await,
                    None => list.create(&input).await,
                }
            });
        })
    };

    let on_delete = {
        let list = list.clone();
        let dialog = dialog.clone();
        let busy = busy.clone();
        let close = close.clone();
        Callback::from(move |_: ()| {
            let Dialog::Delete(word) = &*dialog else {
                return;
            };
            let id = word.id.clone();
            run_mutation(&list, &busy, close.clone(), move |list| async move {
                list.delete(&id).await
            });
        })
    };

    /* ---------------- rows ---------------------------------------------- */
    let row = |word: &Word| {
        let view = {
            let dialog = dialog.clone();
            let word = word.clone();
            Callback::from(move |_: MouseEvent| dialog.set(Dialog::View(word.clone())))
        };
        let edit = {
            let dialog = dialog.clone();
            let form = form.clone();
            let word = word.clone();
            Callback::from(move |_: MouseEvent| {
                form.set(WordForm::from_word(&word));
                dialog.set(Dialog::Edit(word.clone()));
            })
        };
        let delete = {
            let dialog = dialog.clone();
            let word = word.clone();
            Callback::from(move |_: MouseEvent| dialog.set(Dialog::Delete(word.clone())))
        };
        html! {
            <tr key={word.id.clone()}>
                <td class="mono ellipsis">{ &word.id }</td>
                <td>{ &word.title_eng }</td>
                <td>{ &word.title_uz }</td>
                <td>{ or_dash(word.transcription.as_deref()) }</td>
                <td>{ word.usage_frequency.map(|f| f.to_string()).unwrap_or_else(|| "-".into()) }</td>
                <td class="num">{ count(word.definitions_count) }</td>
                <td class="num">{ count(word.examples_count) }</td>
                <td>{ format_timestamp(&word.created_at) }</td>
                <td class="actions">
                    <button class="btn-link" onclick={view}>{"View"}</button>
                    <Link<Route> classes="btn-link" to={Route::WordDetail { id: word.id.clone() }}>{"Details"}</Link<Route>>
                    <button class="btn-link" onclick={edit}>{"Edit"}</button>
                    <button class="btn-link danger" onclick={delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    };

    let state = list.state();
    let add_button = html!(<button class="btn-primary" onclick={open_create}>{"Add Word"}</button>);

    let editor = match &*dialog {
        Dialog::Create | Dialog::Edit(_) => {
            let title = if matches!(&*dialog, Dialog::Create) { "Add Word" } else { "Edit Word" };
            html! {
                <Modal open={true} {title} on_close={close.clone()}
                    actions={dialog_actions(*busy, "Save", close.clone(), on_save)}>
                    if let Some(message) = (*form_error).clone() {
                        <p class="form-error">{ message }</p>
                    }
                    <WordFields form={form.clone()} />
                </Modal>
            }
        }
        Dialog::View(word) => html! {
            <Modal open={true} title="Word details" on_close={close.clone()}>
                <WordSummary word={word.clone()} />
            </Modal>
        },
        Dialog::Delete(word) => html! {
            <ConfirmDialog open={true} title="Delete word"
                message={format!("Delete \"{}\"? This cannot be undone.", word.title_eng)}
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
        Dialog::Closed => Html::default(),
    };

    html! {
        <section class="page">
            <div class="page-header">
                <h1>{"Words Management"}</h1>
            </div>
            { list_toolbar(&list, "Search words...", add_button) }
            { list_search_indicator(&list) }
            { list_banner(&list) }
            { progress(state.is_loading()) }

            <table class="table">
                <thead>
                    <tr>
                        <th>{"ID"}</th><th>{"English"}</th><th>{"Uzbek"}</th><th>{"Transcription"}</th>
                        <th>{"Usage"}</th><th>{"Definitions"}</th><th>{"Examples"}</th>
                        <th>{"Created At"}</th><th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if state.items().is_empty() && !state.is_loading() {
                        { empty_row(9, "No words found") }
                    } else {
                        { for state.items().iter().map(row) }
                    }
                </tbody>
            </table>
            { list_pagination(&list) }

            { editor }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn summary_lists_collections_and_counts() {
        let word = Word {
            id: "w1".into(),
            title_eng: "Thank you".into(),
            title_uz: "Rahmat".into(),
            synonyms: vec!["thanks".into()],
            definitions_count: Some(2),
            created_at: "2024-05-01T10:00:00.000Z".into(),
            ..Word::default()
        };
        let html = block_on(LocalServerRenderer::<WordSummary>::with_props(WordSummaryProps { word }).render());
        assert!(html.contains("thanks"), "{html}");
        assert!(html.contains("No anagrams"), "{html}");
        assert!(html.contains("Definitions: 2"), "{html}");
        assert!(html.contains("Examples: 0"), "{html}");
        assert!(html.contains("2024-05-01 10:00:00"), "{html}");
    }
}
