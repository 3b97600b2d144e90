use yew::prelude::*;
use yew_router::prelude::*;

use wordsuz_admin_core::detail::WordDetail;
use wordsuz_admin_core::format::{count, format_timestamp, or_dash};
use wordsuz_admin_core::forms::{
    DefinitionForm, ExampleField, ExampleForm, FormError, FormField, VerbFormForm, WordForm,
};
use wordsuz_admin_core::models::{
    DefinitionExample, Example, FormPair, OtherMeaning, VerbForm, VerbFormContent, Word,
    WordDefinition,
};
use wordsuz_admin_core::services::WordsService;

use super::progress;
use super::words::{chips, WordFields};
use crate::api::use_client;
use crate::components::{dialog_actions, ConfirmDialog, ErrorBanner, Field, Modal, StatCard, Tabs};
use crate::hooks::{run_mutation, spawn_with, use_observed};
use crate::utils::{bind, input_value};
use crate::Route;

const TAB_LABELS: [&str; 4] = ["Definitions", "Examples", "Verb Forms", "Statistics"];

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Word,
    Definition { editing: Option<String> },
    Example { editing: Option<String> },
    VerbForm { editing: Option<String> },
    DeleteDefinition(String),
    DeleteExample(String),
    DeleteVerbForm(String),
}

/// Text input feeding a form that is rebuilt by value on every change.
fn on_text<F, T>(form: &UseStateHandle<F>, apply: T) -> Callback<InputEvent>
where
    F: Clone + 'static,
    T: Fn(F, String) -> F + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| form.set(apply((*form).clone(), input_value(&e))))
}

fn on_click<F, T>(form: &UseStateHandle<F>, apply: T) -> Callback<MouseEvent>
where
    F: Clone + 'static,
    T: Fn(F) -> F + 'static,
{
    let form = form.clone();
    Callback::from(move |_: MouseEvent| form.set(apply((*form).clone())))
}

fn title(editing: &Option<String>, noun: &str) -> String {
    match editing {
        Some(_) => format!("Edit {noun}"),
        None => format!("Add {noun}"),
    }
}

/* -------------------------------------------------------------------------- */
/*                                 read views                                 */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct BasicInfoProps {
    pub word: Word,
}

#[function_component(BasicInfo)]
pub fn basic_info(props: &BasicInfoProps) -> Html {
    let w = &props.word;
    html! {
        <div class="info-grid">
            <p><strong>{"English: "}</strong>{ &w.title_eng }</p>
            <p><strong>{"Uzbek: "}</strong>{ or_dash(Some(w.title_uz.as_str()).filter(|t| !t.is_empty())) }</p>
            <p><strong>{"Transcription: "}</strong>{ or_dash(w.transcription.as_deref()) }</p>
            <p><strong>{"Usage Frequency: "}</strong>{ w.usage_frequency.map(|f| f.to_string()).unwrap_or_else(|| "-".into()) }</p>
            <div>
                <strong>{"Synonyms:"}</strong>
                { chips(&w.synonyms, "No synonyms") }
            </div>
            <div>
                <strong>{"Anagrams:"}</strong>
                { chips(&w.anagrams, "No anagrams") }
            </div>
        </div>
    }
}

fn other_meaning(other: &OtherMeaning) -> Html {
    let example = |pair: &DefinitionExample| {
        html!(<li><em>{ &pair.phrase }</em>{" - "}{ &pair.translation }</li>)
    };
    html! {
        <li>
            { &other.meaning }
            if !other.examples.is_empty() {
                <div class="muted">{"Examples:"}</div>
                <ul>{ for other.examples.iter().map(example) }</ul>
            }
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct DefinitionsListProps {
    pub definitions: Vec<WordDefinition>,
    pub on_edit: Callback<WordDefinition>,
    pub on_delete: Callback<String>,
}

#[function_component(DefinitionsList)]
pub fn definitions_list(props: &DefinitionsListProps) -> Html {
    if props.definitions.is_empty() {
        return html!(<p class="info">{"No definitions available for this word."}</p>);
    }
    let card = |(index, definition): (usize, &WordDefinition)| {
        let edit = {
            let definition = definition.clone();
            props.on_edit.reform(move |_: MouseEvent| definition.clone())
        };
        let delete = definition.id.clone().map(|id| {
            props.on_delete.reform(move |_: MouseEvent| id.clone())
        });
        html! {
            <div class="panel" key={definition.id.clone().unwrap_or_else(|| index.to_string())}>
                <h3>{ format!("{}. {}", index + 1, definition.meaning) }</h3>
                <p><strong>{"Part of Speech: "}</strong>
                    { format!("English: {} / Uzbek: {}", definition.type_en, if definition.type_uz.is_empty() { "N/A" } else { definition.type_uz.as_str() }) }
                </p>
                if let Some(plural) = definition.plural.clone() {
                    <p><strong>{"Plural Form: "}</strong>{ plural }</p>
                }
                if !definition.others.is_empty() {
                    <strong>{"Other Meanings:"}</strong>
                    <ol>{ for definition.others.iter().map(other_meaning) }</ol>
                }
                <div class="actions">
                    <button class="btn-link" onclick={edit}>{"Edit"}</button>
                    if let Some(delete) = delete {
                        <button class="btn-link danger" onclick={delete}>{"Delete"}</button>
                    }
                </div>
            </div>
        }
    };
    html!(<>{ for props.definitions.iter().enumerate().map(card) }</>)
}

#[derive(Properties, PartialEq)]
pub struct ExamplesListProps {
    pub examples: Vec<Example>,
    pub on_edit: Callback<Example>,
    pub on_delete: Callback<String>,
}

#[function_component(ExamplesList)]
pub fn examples_list(props: &ExamplesListProps) -> Html {
    if props.examples.is_empty() {
        return html!(<p class="info">{"No examples available for this word."}</p>);
    }
    let card = |(index, example): (usize, &Example)| {
        let edit = {
            let example = example.clone();
            props.on_edit.reform(move |_: MouseEvent| example.clone())
        };
        let delete = example.id.clone().map(|id| {
            props.on_delete.reform(move |_: MouseEvent| id.clone())
        });
        html! {
            <div class="panel" key={example.id.clone().unwrap_or_else(|| index.to_string())}>
                <h3>{ &example.phrase }</h3>
                <p class="muted">{ &example.translation }</p>
                <div class="actions">
                    <button class="btn-link" onclick={edit}>{"Edit"}</button>
                    if let Some(delete) = delete {
                        <button class="btn-link danger" onclick={delete}>{"Delete"}</button>
                    }
                </div>
            </div>
        }
    };
    html!(<>{ for props.examples.iter().enumerate().map(card) }</>)
}

fn verb_section(section: &VerbFormContent) -> Html {
    let row = |pair: &FormPair| {
        html!(<tr><td>{ &pair.singular }</td><td>{ &pair.plural }</td></tr>)
    };
    html! {
        <div class="verb-section">
            <h4>{ &section.title }</h4>
            <table class="table compact">
                <thead><tr><th>{"Singular"}</th><th>{"Plural"}</th></tr></thead>
                <tbody>{ for section.forms.iter().map(row) }</tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VerbFormsListProps {
    pub verb_forms: Vec<VerbForm>,
    pub on_edit: Callback<VerbForm>,
    pub on_delete: Callback<String>,
}

#[function_component(VerbFormsList)]
pub fn verb_forms_list(props: &VerbFormsListProps) -> Html {
    if props.verb_forms.is_empty() {
        return html!(<p class="info">{"No verb forms available for this word."}</p>);
    }
    let card = |(index, verb_form): (usize, &VerbForm)| {
        let edit = {
            let verb_form = verb_form.clone();
            props.on_edit.reform(move |_: MouseEvent| verb_form.clone())
        };
        let delete = verb_form.id.clone().map(|id| {
            props.on_delete.reform(move |_: MouseEvent| id.clone())
        });
        html! {
            <div class="panel" key={verb_form.id.clone().unwrap_or_else(|| index.to_string())}>
                <h3>{ format!("Tense: {}", verb_form.tense) }</h3>
                { for verb_form.content.iter().map(verb_section) }
                <div class="actions">
                    <button class="btn-link" onclick={edit}>{"Edit"}</button>
                    if let Some(delete) = delete {
                        <button class="btn-link danger" onclick={delete}>{"Delete"}</button>
                    }
                </div>
            </div>
        }
    };
    html!(<>{ for props.verb_forms.iter().enumerate().map(card) }</>)
}

#[derive(Properties, PartialEq)]
pub struct WordStatsProps {
    pub word: Word,
}

#[function_component(WordStats)]
pub fn word_stats(props: &WordStatsProps) -> Html {
    let w = &props.word;
    let cards = [
        ("Definitions", count(w.definitions_count)),
        ("Examples", count(w.examples_count)),
        ("Verb Forms", count(w.verb_forms_count)),
        ("Bookmarks", count(w.bookmarks_count)),
        ("Comments", count(w.comments_count)),
    ];
    html! {
        <div class="card-grid">
            { for cards.iter().map(|(label, value)| html! {
                <StatCard label={*label} value={value.to_string()} />
            }) }
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                edit dialogs                                */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct DefinitionFieldsProps {
    pub form: UseStateHandle<DefinitionForm>,
}

#[function_component(DefinitionFields)]
pub fn definition_fields(props: &DefinitionFieldsProps) -> Html {
    let form = &props.form;

    let other = |(index, other): (usize, &OtherMeaning)| {
        let example = |(n, pair): (usize, &DefinitionExample)| {
            html! {
                <div class="nested-row" key={n.to_string()}>
                    <span class="muted">{ format!("Example #{}", n + 1) }</span>
                    <Field label="Phrase" value={pair.phrase.clone()}
                        oninput={on_text(form, move |f: DefinitionForm, v| f.set_other_example(index, n, ExampleField::Phrase, v))} />
                    <Field label="Translation" value={pair.translation.clone()}
                        oninput={on_text(form, move |f: DefinitionForm, v| f.set_other_example(index, n, ExampleField::Translation, v))} />
                    <button class="btn-link danger"
                        onclick={on_click(form, move |f: DefinitionForm| f.remove_other_example(index, n))}>
                        {"Remove example"}
                    </button>
                </div>
            }
        };
        html! {
            <fieldset class="nested" key={index.to_string()}>
                <legend>{ format!("Other Meaning #{}", index + 1) }</legend>
                <Field label="Meaning" multiline={true} value={other.meaning.clone()}
                    oninput={on_text(form, move |f: DefinitionForm, v| f.set_other_meaning(index, v))} />
                <div class="muted">{"Examples:"}</div>
                { for other.examples.iter().enumerate().map(example) }
                <div class="actions">
                    <button class="btn-link" onclick={on_click(form, move |f: DefinitionForm| f.add_other_example(index))}>
                        {"+ Add example"}
                    </button>
                    <button class="btn-link danger" onclick={on_click(form, move |f: DefinitionForm| f.remove_other(index))}>
                        {"Remove meaning"}
                    </button>
                </div>
            </fieldset>
        }
    };

    html! {
        <div class="form-stack">
            <Field label="Part of Speech (English)" required={true} value={form.type_en.clone()}
                oninput={bind(form, |f: &mut DefinitionForm, v| f.type_en = v)} />
            <Field label="Part of Speech (Uzbek)" value={form.type_uz.clone()}
                oninput={bind(form, |f: &mut DefinitionForm, v| f.type_uz = v)} />
            <Field label="Primary Meaning" required={true} multiline={true} value={form.meaning.clone()}
                oninput={bind(form, |f: &mut DefinitionForm, v| f.meaning = v)} />
            <Field label="Plural Form (if applicable)" value={form.plural.clone()}
                oninput={bind(form, |f: &mut DefinitionForm, v| f.plural = v)} />

            <h3>{"Other Meanings"}</h3>
            { for form.others.iter().enumerate().map(other) }
            <button class="btn-outline" onclick={on_click(form, DefinitionForm::add_other)}>
                {"+ Add other meaning"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExampleFieldsProps {
    pub form: UseStateHandle<ExampleForm>,
}

#[function_component(ExampleFields)]
pub fn example_fields(props: &ExampleFieldsProps) -> Html {
    let form = &props.form;
    html! {
        <div class="form-stack">
            <Field label="Example Phrase" required={true} multiline={true} value={form.phrase.clone()}
                oninput={bind(form, |f: &mut ExampleForm, v| f.phrase = v)} />
            <Field label="Translation" multiline={true} value={form.translation.clone()}
                oninput={bind(form, |f: &mut ExampleForm, v| f.translation = v)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VerbFormFieldsProps {
    pub form: UseStateHandle<VerbFormForm>,
}

#[function_component(VerbFormFields)]
pub fn verb_form_fields(props: &VerbFormFieldsProps) -> Html {
    let form = &props.form;

    let section = |(index, section): (usize, &VerbFormContent)| {
        let row = |(n, pair): (usize, &FormPair)| {
            html! {
                <div class="nested-row" key={n.to_string()}>
                    <span class="muted">{ format!("Form #{}", n + 1) }</span>
                    <Field label="Singular" value={pair.singular.clone()}
                        oninput={on_text(form, move |f: VerbFormForm, v| f.set_row(index, n, FormField::Singular, v))} />
                    <Field label="Plural" value={pair.plural.clone()}
                        oninput={on_text(form, move |f: VerbFormForm, v| f.set_row(index, n, FormField::Plural, v))} />
                    <button class="btn-link danger"
                        onclick={on_click(form, move |f: VerbFormForm| f.remove_row(index, n))}>
                        {"Remove form"}
                    </button>
                </div>
            }
        };
        html! {
            <fieldset class="nested" key={index.to_string()}>
                <legend>{ format!("Content Section #{}", index + 1) }</legend>
                <Field label="Title" value={section.title.clone()}
                    oninput={on_text(form, move |f: VerbFormForm, v| f.set_section_title(index, v))} />
                <div class="muted">{"Forms:"}</div>
                { for section.forms.iter().enumerate().map(row) }
                <div class="actions">
                    <button class="btn-link" onclick={on_click(form, move |f: VerbFormForm| f.add_row(index))}>
                        {"+ Add form"}
                    </button>
                    <button class="btn-link danger" onclick={on_click(form, move |f: VerbFormForm| f.remove_section(index))}>
                        {"Remove section"}
                    </button>
                </div>
            </fieldset>
        }
    };

    html! {
        <div class="form-stack">
            <Field label="Tense" required={true} value={form.tense.clone()}
                oninput={bind(form, |f: &mut VerbFormForm, v| f.tense = v)} />
            <h3>{"Verb Form Content"}</h3>
            { for form.content.iter().enumerate().map(section) }
            <button class="btn-outline" onclick={on_click(form, VerbFormForm::add_section)}>
                {"+ Add content section"}
            </button>
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                    page                                    */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct WordDetailPageProps {
    pub id: String,
}

#[function_component(WordDetailPage)]
pub fn word_detail_page(props: &WordDetailPageProps) -> Html {
    let client = use_client();
    let word_id = props.id.clone();
    let detail = use_observed(move |listener| {
        WordDetail::new(WordsService::new(client), word_id, listener)
    });
    let tab = use_state(|| 0usize);
    let editor = use_state(|| Editor::Closed);
    let word_form = use_state(WordForm::default);
    let definition_form = use_state(DefinitionForm::default);
    let example_form = use_state(ExampleForm::default);
    let verb_form_form = use_state(VerbFormForm::default);
    let form_error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let detail = detail.clone();
        use_effect_with((), move |_| {
            spawn_with(&detail, |detail| async move {
                if let Err(e) = detail.load().await {
                    log::debug!("word detail load: {e}");
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
    let open_edit_word = {
        let editor = editor.clone();
        let word_form = word_form.clone();
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(word) = detail.state().item {
                word_form.set(WordForm::from_word(&word));
                editor.set(Editor::Word);
            }
        })
    };
    let open_add_definition = {
        let editor = editor.clone();
        let definition_form = definition_form.clone();
        Callback::from(move |_: MouseEvent| {
            definition_form.set(DefinitionForm::default());
            editor.set(Editor::Definition { editing: None });
        })
    };
    let on_edit_definition = {
        let editor = editor.clone();
        let definition_form = definition_form.clone();
        Callback::from(move |definition: WordDefinition| {
            definition_form.set(DefinitionForm::from_definition(&definition));
            editor.set(Editor::Definition {
                editing: definition.id,
            });
        })
    };
    let open_add_example = {
        let editor = editor.clone();
        let example_form = example_form.clone();
        Callback::from(move |_: MouseEvent| {
            example_form.set(ExampleForm::default());
            editor.set(Editor::Example { editing: None });
        })
    };
    let on_edit_example = {
        let editor = editor.clone();
        let example_form = example_form.clone();
        Callback::from(move |example: Example| {
            example_form.set(ExampleForm::from_example(&example));
            editor.set(Editor::Example {
                editing: example.id,
            });
        })
    };
    let open_add_verb_form = {
        let editor = editor.clone();
        let verb_form_form = verb_form_form.clone();
        Callback::from(move |_: MouseEvent| {
            verb_form_form.set(VerbFormForm::default());
            editor.set(Editor::VerbForm { editing: None });
        })
    };
    let on_edit_verb_form = {
        let editor = editor.clone();
        let verb_form_form = verb_form_form.clone();
        Callback::from(move |verb_form: VerbForm| {
            verb_form_form.set(VerbFormForm::from_verb_form(&verb_form));
            editor.set(Editor::VerbForm {
                editing: verb_form.id,
            });
        })
    };
    let confirm = |make: fn(String) -> Editor| {
        let editor = editor.clone();
        Callback::from(move |id: String| editor.set(make(id)))
    };

    /* ---------------- save / delete ------------------------------------- */
    let on_save = {
        let detail = detail.clone();
        let editor = editor.clone();
        let word_form = word_form.clone();
        let definition_form = definition_form.clone();
        let example_form = example_form.clone();
        let verb_form_form = verb_form_form.clone();
        let form_error = form_error.clone();
        let busy = busy.clone();
        let close = close.clone();
        Callback::from(move |_: ()| {
            let submitted: Result<(), FormError> = match (*editor).clone() {
                Editor::Word => word_form.to_input().map(|input| {
                    run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                        detail.save_word(&input).await
                    })
                }),
                Editor::Definition { editing } => {
                    let input = definition_form.to_input();
                    run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                        detail.save_definition(editing.as_deref(), &input).await
                    });
                    Ok(())
                }
                Editor::Example { editing } => {
                    let input = example_form.to_input();
                    run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                        detail.save_example(editing.as_deref(), &input).await
                    });
                    Ok(())
                }
                Editor::VerbForm { editing } => {
                    let input = verb_form_form.to_input();
                    run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                        detail.save_verb_form(editing.as_deref(), &input).await
                    });
                    Ok(())
                }
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
            Editor::DeleteDefinition(id) => {
                run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                    detail.delete_definition(&id).await
                })
            }
            Editor::DeleteExample(id) => {
                run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                    detail.delete_example(&id).await
                })
            }
            Editor::DeleteVerbForm(id) => {
                run_mutation(&detail, &busy, close.clone(), move |detail| async move {
                    detail.delete_verb_form(&id).await
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
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| tab.set(index))
    };
    let form_message = (*form_error)
        .clone()
        .map(|message| html!(<p class="form-error">{ message }</p>))
        .unwrap_or_default();

    let dialog = match &*editor {
        Editor::Definition { editing } => html! {
            <Modal open={true} title={title(editing, "Definition")} on_close={close.clone()}
                actions={dialog_actions(*busy, "Save", close.clone(), on_save.clone())}>
                { form_message.clone() }
                <DefinitionFields form={definition_form.clone()} />
            </Modal>
        },
        Editor::Example { editing } => html! {
            <Modal open={true} title={title(editing, "Example")} on_close={close.clone()}
                actions={dialog_actions(*busy, "Save", close.clone(), on_save.clone())}>
                { form_message.clone() }
                <ExampleFields form={example_form.clone()} />
            </Modal>
        },
        Editor::VerbForm { editing } => html! {
            <Modal open={true} title={title(editing, "Verb Form")} on_close={close.clone()}
                actions={dialog_actions(*busy, "Save", close.clone(), on_save.clone())}>
                { form_message.clone() }
                <VerbFormFields form={verb_form_form.clone()} />
            </Modal>
        },
        Editor::DeleteDefinition(_) => html! {
            <ConfirmDialog open={true} title="Delete Definition"
                message="Are you sure you want to delete this definition? This action cannot be undone."
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
        Editor::DeleteExample(_) => html! {
            <ConfirmDialog open={true} title="Delete Example"
                message="Are you sure you want to delete this example? This action cannot be undone."
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
        Editor::DeleteVerbForm(_) => html! {
            <ConfirmDialog open={true} title="Delete Verb Form"
                message="Are you sure you want to delete this verb form? This action cannot be undone."
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
        Editor::Closed | Editor::Word => Html::default(),
    };

    let Some(word) = state.item.clone() else {
        return html! {
            <section class="page">
                <Link<Route> classes="btn-link" to={Route::Words}>{"← Back to Words"}</Link<Route>>
                { progress(state.is_loading) }
                <ErrorBanner message={state.error.clone().map(AttrValue::from)} {on_dismiss} />
                if !state.is_loading {
                    <p class="info">{"Word not found"}</p>
                }
            </section>
        };
    };

    let basic = if *editor == Editor::Word {
        html! {
            <>
                { form_message }
                <WordFields form={word_form.clone()} />
                <div class="actions">{ dialog_actions(*busy, "Save", close.clone(), on_save) }</div>
            </>
        }
    } else {
        html!(<BasicInfo word={word.clone()} />)
    };

    let tab_body = match *tab {
        0 => html! {
            <>
                <div class="section-header">
                    <h2>{"Definitions"}</h2>
                    <button class="btn-primary" onclick={open_add_definition}>{"Add Definition"}</button>
                </div>
                <DefinitionsList definitions={word.definitions.clone()} on_edit={on_edit_definition}
                    on_delete={confirm(Editor::DeleteDefinition)} />
            </>
        },
        1 => html! {
            <>
                <div class="section-header">
                    <h2>{"Examples"}</h2>
                    <button class="btn-primary" onclick={open_add_example}>{"Add Example"}</button>
                </div>
                <ExamplesList examples={word.examples.clone()} on_edit={on_edit_example}
                    on_delete={confirm(Editor::DeleteExample)} />
            </>
        },
        2 => html! {
            <>
                <div class="section-header">
                    <h2>{"Verb Forms"}</h2>
                    <button class="btn-primary" onclick={open_add_verb_form}>{"Add Verb Form"}</button>
                </div>
                <VerbFormsList verb_forms={word.verb_forms.clone()} on_edit={on_edit_verb_form}
                    on_delete={confirm(Editor::DeleteVerbForm)} />
            </>
        },
        _ => html! {
            <>
                <h2>{"Statistics"}</h2>
                <WordStats word={word.clone()} />
            </>
        },
    };

    html! {
        <section class="page">
            <div class="page-header">
                <Link<Route> classes="btn-link" to={Route::Words}>{"← Back to Words"}</Link<Route>>
                <h1>{ format!("{} / {}", word.title_eng, word.title_uz) }</h1>
            </div>

            { progress(state.is_loading) }
            <ErrorBanner message={state.error.clone().map(AttrValue::from)} {on_dismiss} />

            <div class="panel">
                <div class="section-header">
                    <h2>{"Basic Information"}</h2>
                    if *editor != Editor::Word {
                        <button class="btn-outline" onclick={open_edit_word}>{"Edit"}</button>
                    }
                </div>
                { basic }
                <small class="muted">
                    { format!("Created: {} • Updated: {}", format_timestamp(&word.created_at), format_timestamp(&word.updated_at)) }
                </small>
            </div>

            <Tabs labels={TAB_LABELS.iter().map(|l| AttrValue::from(*l)).collect::<Vec<_>>()}
                active={*tab} on_select={on_tab} />
            { tab_body }

            { dialog }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn definition() -> WordDefinition {
        WordDefinition {
            id: Some("d1".into()),
            type_en: "noun".into(),
            meaning: "a greeting".into(),
            plural: Some("hellos".into()),
            others: vec![OtherMeaning {
                meaning: "an exclamation of surprise".into(),
                examples: vec![DefinitionExample {
                    phrase: "Hello! What is this?".into(),
                    translation: "Voy! Bu nima?".into(),
                }],
            }],
            ..WordDefinition::default()
        }
    }

    #[test]
    fn definition_cards_show_nested_meanings() {
        let props = DefinitionsListProps {
            definitions: vec![definition()],
            on_edit: Callback::noop(),
            on_delete: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<DefinitionsList>::with_props(props).render());
        assert!(html.contains("1. a greeting"), "{html}");
        assert!(html.contains("Uzbek: N/A"), "{html}");
        assert!(html.contains("hellos"), "{html}");
        assert!(html.contains("an exclamation of surprise"), "{html}");
        assert!(html.contains("Voy! Bu nima?"), "{html}");
    }

    #[test]
    fn empty_lists_explain_themselves() {
        let props = ExamplesListProps {
            examples: vec![],
            on_edit: Callback::noop(),
            on_delete: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ExamplesList>::with_props(props).render());
        assert!(html.contains("No examples available"), "{html}");

        let props = VerbFormsListProps {
            verb_forms: vec![],
            on_edit: Callback::noop(),
            on_delete: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<VerbFormsList>::with_props(props).render());
        assert!(html.contains("No verb forms available"), "{html}");
    }

    #[test]
    fn verb_forms_render_their_sections() {
        let props = VerbFormsListProps {
            verb_forms: vec![VerbForm {
                id: Some("v1".into()),
                tense: "present".into(),
                content: vec![VerbFormContent {
                    title: "Affirmative".into(),
                    forms: vec![FormPair {
                        singular: "I go".into(),
                        plural: "we go".into(),
                    }],
                }],
            }],
            on_edit: Callback::noop(),
            on_delete: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<VerbFormsList>::with_props(props).render());
        assert!(html.contains("Tense: present"), "{html}");
        assert!(html.contains("Affirmative"), "{html}");
        assert!(html.contains("I go") && html.contains("we go"), "{html}");
    }

    #[test]
    fn statistics_default_missing_counts_to_zero() {
        let word = Word {
            definitions_count: Some(3),
            comments_count: None,
            ..Word::default()
        };
        let html = block_on(LocalServerRenderer::<WordStats>::with_props(WordStatsProps { word }).render());
        assert!(html.contains("Definitions"), "{html}");
        assert!(html.contains(">3<"), "{html}");
        assert!(html.contains("Comments"), "{html}");
    }

    #[test]
    fn dialog_titles_follow_the_mode() {
        assert_eq!(title(&None, "Example"), "Add Example");
        assert_eq!(title(&Some("e1".into()), "Example"), "Edit Example");
    }
}
