use yew::prelude::*;

use wordsuz_admin_core::format::{format_timestamp, or_dash};
use wordsuz_admin_core::forms::CommentForm;
use wordsuz_admin_core::models::Comment;
use wordsuz_admin_core::services::CommentsService;

use super::{
    empty_row, list_banner, list_pagination, list_search_indicator, list_toolbar, progress, Dialog,
};
use crate::api::use_client;
use crate::components::{dialog_actions, ConfirmDialog, Field, Modal};
use crate::hooks::{run_mutation, use_list_controller};
use crate::utils::bind;

fn word_label(comment: &Comment) -> String {
    match &comment.word {
        Some(word) if word.title_uz.is_empty() => word.title_eng.clone(),
        Some(word) => format!("{} ({})", word.title_eng, word.title_uz),
        None => or_dash(comment.word_id.as_deref()),
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentSummaryProps {
    pub comment: Comment,
}

#[function_component(CommentSummary)]
pub fn comment_summary(props: &CommentSummaryProps) -> Html {
    let c = &props.comment;
    html! {
        <div class="summary">
            <p><strong>{"ID: "}</strong>{ &c.id }</p>
            <p><strong>{"Username: "}</strong>{ c.username.clone().unwrap_or_else(|| "Anonymous".into()) }</p>
            <p><strong>{"Word: "}</strong>{ word_label(c) }</p>
            <p><strong>{"Created: "}</strong>{ format_timestamp(&c.created_at) }</p>
            <p><strong>{"Updated: "}</strong>{ format_timestamp(&c.updated_at) }</p>
            <h3>{"Comment"}</h3>
            <blockquote>{ &c.text }</blockquote>
        </div>
    }
}

#[function_component(CommentsPage)]
pub fn comments_page() -> Html {
    let client = use_client();
    let list = use_list_controller(move || CommentsService::new(client));
    let dialog = use_state(|| Dialog::<Comment>::Closed);
    let form = use_state(CommentForm::default);
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

    let on_save = {
        let list = list.clone();
        let dialog = dialog.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let busy = busy.clone();
        let close = close.clone();
        Callback::from(move |_: ()| {
            let Dialog::Edit(comment) = &*dialog else {
                return;
            };
            let input = match form.to_input() {
                Ok(input) => input,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            form_error.set(None);
            let id = comment.id.clone();
            run_mutation(&list, &busy, close.clone(), move |list| async move {
                list.update(&id, &input).await
            });
        })
    };

    let on_delete = {
        let list = list.clone();
        let dialog = dialog.clone();
        let busy = busy.clone();
        let close = close.clone();
        Callback::from(move |_: ()| {
            let Dialog::Delete(comment) = &*dialog else {
                return;
            };
            let id = comment.id.clone();
            run_mutation(&list, &busy, close.clone(), move |list| async move {
                list.delete(&id).await
            });
        })
    };

    let row = |comment: &Comment| {
        let open = |make: fn(Comment) -> Dialog<Comment>| {
            let dialog = dialog.clone();
            let form = form.clone();
            let comment = comment.clone();
            Callback::from(move |_: MouseEvent| {
                form.set(CommentForm::from_comment(&comment));
                dialog.set(make(comment.clone()));
            })
        };
        html! {
            <tr key={comment.id.clone()}>
                <td class="mono ellipsis">{ &comment.id }</td>
                <td>{ comment.username.clone().unwrap_or_else(|| "Anonymous".into()) }</td>
                <td class="ellipsis">{ &comment.text }</td>
                <td>{ word_label(comment) }</td>
                <td>{ format_timestamp(&comment.created_at) }</td>
                <td class="actions">
                    <button class="btn-link" onclick={open(Dialog::View)}>{"View"}</button>
                    <button class="btn-link" onclick={open(Dialog::Edit)}>{"Edit"}</button>
                    <button class="btn-link danger" onclick={open(Dialog::Delete)}>{"Delete"}</button>
                </td>
            </tr>
        }
    };

    let state = list.state();

    let editor = match &*dialog {
        Dialog::View(comment) => html! {
            <Modal open={true} title="Comment details" on_close={close.clone()}>
                <CommentSummary comment={comment.clone()} />
            </Modal>
        },
        Dialog::Edit(_) => html! {
            <Modal open={true} title="Edit Comment" on_close={close.clone()}
                actions={dialog_actions(*busy, "Save", close.clone(), on_save)}>
                if let Some(message) = (*form_error).clone() {
                    <p class="form-error">{ message }</p>
                }
                <div class="form-stack">
                    <Field label="Username" value={form.username.clone()}
                        oninput={bind(&form, |f: &mut CommentForm, v| f.username = v)} />
                    <Field label="Comment Text" required={true} multiline={true} value={form.text.clone()}
                        oninput={bind(&form, |f: &mut CommentForm, v| f.text = v)} />
                    <Field label="Word ID" value={form.word_id.clone()}
                        oninput={bind(&form, |f: &mut CommentForm, v| f.word_id = v)} />
                </div>
            </Modal>
        },
        Dialog::Delete(_) => html! {
            <ConfirmDialog open={true} title="Delete comment"
                message="Delete this comment? This cannot be undone."
                busy={*busy} on_confirm={on_delete} on_cancel={close.clone()} />
        },
        Dialog::Create | Dialog::Closed => Html::default(),
    };

    html! {
        <section class="page">
            <div class="page-header">
                <h1>{"Comments Management"}</h1>
            </div>
            { list_toolbar(&list, "Search in comments...", Html::default()) }
            { list_search_indicator(&list) }
            { list_banner(&list) }
            { progress(state.is_loading()) }

            <table class="table">
                <thead>
                    <tr>
                        <th>{"ID"}</th><th>{"Username"}</th><th>{"Text"}</th><th>{"Word"}</th>
                        <th>{"Created At"}</th><th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if state.items().is_empty() && !state.is_loading() {
                        { empty_row(6, "No comments found") }
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
    use wordsuz_admin_core::models::WordTitle;

    #[test]
    fn word_column_prefers_the_embedded_titles() {
        let mut comment = Comment {
            word_id: Some("w1".into()),
            ..Comment::default()
        };
        assert_eq!(word_label(&comment), "w1");

        comment.word = Some(WordTitle {
            title_eng: "Hello".into(),
            title_uz: "Salom".into(),
        });
        assert_eq!(word_label(&comment), "Hello (Salom)");
    }
}
