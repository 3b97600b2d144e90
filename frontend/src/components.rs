//! Presentational widgets shared by the pages. None of them talk to the
//! network; pages pass state down and get events back through callbacks.

use yew::prelude::*;

use wordsuz_admin_core::config::PAGE_SIZE_OPTIONS;

use crate::utils::{checkbox_checked, input_value, select_value};

/* -------------------------------------------------------------------------- */
/*                                  feedback                                  */
/* -------------------------------------------------------------------------- */

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! { <div class="spinner" role="progressbar">{"Loading…"}</div> }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = props.message.clone() else {
        return Html::default();
    };
    let onclick = props.on_dismiss.reform(|_: MouseEvent| ());
    html! {
        <div class="alert alert-error" role="alert">
            <span>{ message }</span>
            <button class="icon-btn" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-label">{ props.label.clone() }</div>
            <div class="stat-value">{ props.value.clone() }</div>
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                  toolbar                                   */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("Search…"))]
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
}

/// Typing only stages the text; Enter or the button commits it.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| input_value(&e));
    let onsubmit = props.on_submit.reform(|e: SubmitEvent| e.prevent_default());
    let onclear = props.on_clear.reform(|_: MouseEvent| ());

    html! {
        <form class="search-bar" {onsubmit}>
            <input type="search" value={props.value.clone()} placeholder={props.placeholder.clone()} {oninput} />
            <button type="submit" class="btn-outline">{"Search"}</button>
            if !props.value.is_empty() {
                <button type="button" class="btn-link" onclick={onclear}>{"Clear"}</button>
            }
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchIndicatorProps {
    pub query: AttrValue,
    pub total: u64,
    pub on_clear: Callback<()>,
}

#[function_component(SearchIndicator)]
pub fn search_indicator(props: &SearchIndicatorProps) -> Html {
    if props.query.is_empty() {
        return Html::default();
    }
    let onclick = props.on_clear.reform(|_: MouseEvent| ());
    html! {
        <div class="search-indicator">
            <span>{ format!("Search results for \"{}\"", props.query) }</span>
            <span class="chip">{ format!("{} found", props.total) }</span>
            <button class="btn-link" {onclick}>{"Clear search"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MockToggleProps {
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(MockToggle)]
pub fn mock_toggle(props: &MockToggleProps) -> Html {
    let onchange = props.on_toggle.reform(|e: Event| checkbox_checked(&e));
    html! {
        <label class="switch">
            <input type="checkbox" checked={props.checked} {onchange} />
            <span>{ if props.checked { "Mock data" } else { "Live data" } }</span>
        </label>
    }
}

/* -------------------------------------------------------------------------- */
/*                                 pagination                                 */
/* -------------------------------------------------------------------------- */

/// `"11–20 of 45"` for the 0-based `page`.
pub fn range_label(total: u64, page: u32, page_size: u32) -> String {
    let size = u64::from(page_size.max(1));
    let first = u64::from(page) * size;
    if total == 0 || first >= total {
        return format!("0 of {total}");
    }
    let last = (first + size).min(total);
    format!("{}–{} of {}", first + 1, last, total)
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub on_page: Callback<u32>,
    pub on_page_size: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let page = props.page;
    let has_next = (u64::from(page) + 1) * u64::from(props.page_size.max(1)) < props.total;

    let prev = props.on_page.reform(move |_: MouseEvent| page.saturating_sub(1));
    let next = props.on_page.reform(move |_: MouseEvent| page + 1);
    let onchange = {
        let fallback = props.page_size;
        props
            .on_page_size
            .reform(move |e: Event| select_value(&e).parse().unwrap_or(fallback))
    };

    html! {
        <div class="pagination">
            <label>
                {"Rows per page"}
                <select {onchange}>
                    { for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == props.page_size}>{ size.to_string() }</option>
                    }) }
                </select>
            </label>
            <span>{ range_label(props.total, props.page, props.page_size) }</span>
            <button class="icon-btn" aria-label="Previous page" disabled={page == 0} onclick={prev}>{"‹"}</button>
            <button class="icon-btn" aria-label="Next page" disabled={!has_next} onclick={next}>{"›"}</button>
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                  dialogs                                   */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub actions: Html,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }
    let onclick = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="icon-btn" aria-label="Close" {onclick}>{"×"}</button>
                </div>
                <div class="modal-body">{ for props.children.iter() }</div>
                <div class="modal-actions">{ props.actions.clone() }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Delete"))]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let actions = html! {
        <>
            <button class="btn-outline" onclick={cancel} disabled={props.busy}>{"Cancel"}</button>
            <button class="btn-danger" onclick={confirm} disabled={props.busy}>
                { if props.busy { AttrValue::from("Working…") } else { props.confirm_label.clone() } }
            </button>
        </>
    };
    html! {
        <Modal open={props.open} title={props.title.clone()} on_close={props.on_cancel.clone()} {actions}>
            <p>{ props.message.clone() }</p>
        </Modal>
    }
}

/// Cancel/save buttons of an edit dialog.
pub fn dialog_actions(busy: bool, save_label: &'static str, on_cancel: Callback<()>, on_save: Callback<()>) -> Html {
    let cancel = on_cancel.reform(|_: MouseEvent| ());
    let save = on_save.reform(|_: MouseEvent| ());
    html! {
        <>
            <button class="btn-outline" onclick={cancel} disabled={busy}>{"Cancel"}</button>
            <button class="btn-primary" onclick={save} disabled={busy}>
                { if busy { "Saving…" } else { save_label } }
            </button>
        </>
    }
}

/* -------------------------------------------------------------------------- */
/*                                form fields                                 */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub helper: Option<AttrValue>,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let label = if props.required {
        format!("{} *", props.label)
    } else {
        props.label.to_string()
    };
    html! {
        <label class="field">
            <span>{ label }</span>
            if props.multiline {
                <textarea rows="3" value={props.value.clone()} oninput={props.oninput.clone()} />
            } else {
                <input type={props.kind.clone()} value={props.value.clone()} oninput={props.oninput.clone()} />
            }
            if let Some(helper) = props.helper.clone() {
                <small class="helper">{ helper }</small>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub labels: Vec<AttrValue>,
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    html! {
        <div class="tabs" role="tablist">
            { for props.labels.iter().enumerate().map(|(index, label)| {
                let onclick = props.on_select.reform(move |_: MouseEvent| index);
                let class = classes!("tab", (index == props.active).then_some("active"));
                html! { <button {class} role="tab" {onclick}>{ label.clone() }</button> }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn range_label_counts_from_one() {
        assert_eq!(range_label(45, 1, 10), "11–20 of 45");
        assert_eq!(range_label(45, 4, 10), "41–45 of 45");
        assert_eq!(range_label(0, 0, 10), "0 of 0");
        // page left behind after a delete
        assert_eq!(range_label(10, 1, 10), "0 of 10");
    }

    #[test]
    fn pagination_offers_every_page_size() {
        let props = PaginationProps {
            total: 31,
            page: 0,
            page_size: 25,
            on_page: Callback::noop(),
            on_page_size: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Pagination>::with_props(props).render());
        for size in PAGE_SIZE_OPTIONS {
            assert!(html.contains(&format!("value=\"{size}\"")), "missing {size}: {html}");
        }
        assert!(html.contains("1–25 of 31"), "{html}");
    }

    #[test]
    fn error_banner_renders_nothing_without_a_message() {
        let props = ErrorBannerProps {
            message: None,
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ErrorBanner>::with_props(props).render());
        assert!(!html.contains("alert"), "{html}");

        let props = ErrorBannerProps {
            message: Some("Failed to fetch words".into()),
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ErrorBanner>::with_props(props).render());
        assert!(html.contains("Failed to fetch words"), "{html}");
    }

    #[test]
    fn search_indicator_shows_query_and_count() {
        let props = SearchIndicatorProps {
            query: "thank".into(),
            total: 3,
            on_clear: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SearchIndicator>::with_props(props).render());
        assert!(html.contains("Search results for"), "{html}");
        assert!(html.contains("thank"), "{html}");
        assert!(html.contains("3 found"), "{html}");
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let props = ConfirmDialogProps {
            open: false,
            title: "Delete word".into(),
            message: "Are you sure?".into(),
            confirm_label: "Delete".into(),
            busy: false,
            on_confirm: Callback::noop(),
            on_cancel: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ConfirmDialog>::with_props(props).render());
        assert!(!html.contains("Are you sure?"), "{html}");
    }

    #[test]
    fn busy_confirm_dialog_disables_its_buttons() {
        let props = ConfirmDialogProps {
            open: true,
            title: "Delete word".into(),
            message: "Are you sure?".into(),
            confirm_label: "Delete".into(),
            busy: true,
            on_confirm: Callback::noop(),
            on_cancel: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ConfirmDialog>::with_props(props).render());
        assert!(html.contains("Are you sure?"), "{html}");
        assert!(html.contains("Working…"), "{html}");
        assert!(html.contains("disabled"), "{html}");
    }
}
