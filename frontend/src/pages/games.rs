use yew::prelude::*;
use yew_router::prelude::*;

use wordsuz_admin_core::format::{format_timestamp, or_dash};
use wordsuz_admin_core::forms::GameForm;
use wordsuz_admin_core::models::Game;
use wordsuz_admin_core::services::GamesService;

use super::{empty_row, list_banner, list_pagination, progress, Dialog};
use crate::api::use_client;
use crate::components::{dialog_actions, ConfirmDialog, Field, Modal};
use crate::hooks::{run_mutation, use_list_controller};
use crate::utils::bind;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GameFieldsProps {
    pub form: UseStateHandle<GameForm>,
}

/// Title and description inputs; the detail page edits through it too.
#[function_component(GameFields)]
pub fn game_fields(props: &GameFieldsProps) -> Html {
    let form = &props.form;
    html! {
        <div class="form-stack">
            <Field label="Title" required={true} value={form.title.clone()}
                oninput={bind(form, |f: &mut GameForm, v| f.title = v)} />
            <Field label="Description" multiline={true} value={form.description.clone()}
                oninput={bind(form, |f: &mut GameForm, v| f.description = v)} />
        </div>
    }
}

#[function_component(GamesPage)]
pub fn games_page() -> Html {
    let client = use_client();
    let list = use_list_controller(move || GamesService::new(client));
    let dialog = use_state(|| Dialog::<Game>::Closed);
    let form = use_state(GameForm::default);
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
            form.set(GameForm::default());
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
                Dialog::Edit(game) => Some(game.id.clone()),
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
            let Dialog::Delete(game) = &*dialog else {
                return;
            };
            let id = game.id.clone();
            run_mutation(&list, &busy, close.clone(), move |list| async move {
                list.delete(&id).await
            });
        })
    };

    let row = |game: &Game| {
        let edit = {
            let dialog = dialog.clone();
            let form = form.clone();
            let game = game.clone();
            Callback::from(move |_: MouseEvent| {
                form.set(GameForm::from_game(&game));
                dialog.set(Dialog::Edit(game.clone()));
            })
        };
        let delete = {
            let dialog = dialog.clone();
            let game = game.clone();
            Callback::from(move |_: MouseEvent| dialog.set(Dialog::Delete(game.clone())))
        };
        html! {
            <tr key={game.id.clone()}>
                <td>
                    <Link<Route> classes="btn-link" to={Route::GameDetail { id: game.id.clone() }}>
                        { &game.title }
                    </Link<Route>>
                </td>
                <td>{ or_dash(game.description.as_deref()) }</td>
                <td>{ format_timestamp(&game.created_at) }</td>
                <td class="actions">
                    <button class="btn-link" onclick={edit}>{"Edit"}</button>
                    <button class="btn-link danger" onclick={delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    };

    let state = list.state();

    let editor = match &*dialog {
        Dialog::Create | Dialog::Edit(_) => {
            let title = if matches!(&*dialog, Dialog::Create) { "Create Game" } else { "Edit Game" };
            html! {
                <Modal open={true} {title} on_close={close.clone()}
                    actions={dialog_actions(*busy, "Save", close.clone(), on_save)}>
                    if let Some(message) = (*form_error).clone() {
                        <p class="form-error">{ message }</p>
                    }
                    <GameFields form={form.clone()} />
                </Modal>
            }
        }
        Dialog::Delete(game) => html! {
            <ConfirmDialog open={true} title="Delete game"
                message={format!("Delete \"{}\" with all its questions?", game.title)}
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
        Dialog::View(_) | Dialog::Closed => Html::default(),
    };

    html! {
        <section class="page">
            <div class="page-header">
                <h1>{"Games"}</h1>
                <button class="btn-primary" onclick={open_create}>{"New Game"}</button>
            </div>
            { list_banner(&list) }
            { progress(state.is_loading()) }

            <table class="table">
                <thead>
                    <tr><th>{"Title"}</th><th>{"Description"}</th><th>{"Created"}</th><th>{"Actions"}</th></tr>
                </thead>
                <tbody>
                    if state.items().is_empty() && !state.is_loading() {
                        { empty_row(4, "No games found") }
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
