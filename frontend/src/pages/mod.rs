//! One module per screen. The list screens share the toolbar, banner and
//! pagination wiring below.

use std::rc::Rc;

use yew::prelude::*;

use wordsuz_admin_core::{ListController, MockSource, PageSource};

use crate::components::{ErrorBanner, MockToggle, Pagination, SearchBar, SearchIndicator};
use crate::hooks::spawn_with;
use crate::utils::mock_rng;

pub mod comments;
pub mod dashboard;
pub mod game_detail;
pub mod games;
pub mod users;
pub mod word_detail;
pub mod words;

/// Which dialog a list screen has open, and for which row.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog<T> {
    Closed,
    View(T),
    Create,
    Edit(T),
    Delete(T),
}

impl<T> Dialog<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }
}

/* -------------------------------------------------------------------------- */
/*                             list screen wiring                             */
/* -------------------------------------------------------------------------- */

pub fn list_banner<S: PageSource + 'static>(list: &Rc<ListController<S>>) -> Html {
    let message = list.state().error().map(|e| AttrValue::from(e.to_string()));
    let on_dismiss = {
        let list = list.clone();
        Callback::from(move |_: ()| list.dismiss_error())
    };
    html!(<ErrorBanner {message} {on_dismiss} />)
}

pub fn list_pagination<S: PageSource + 'static>(list: &Rc<ListController<S>>) -> Html {
    let (total, page, page_size) = {
        let state = list.state();
        (state.total(), state.page(), state.page_size())
    };
    let on_page = {
        let list = list.clone();
        Callback::from(move |page: u32| {
            spawn_with(&list, move |list| async move { list.set_page(page).await })
        })
    };
    let on_page_size = {
        let list = list.clone();
        Callback::from(move |size: u32| {
            spawn_with(&list, move |list| async move { list.set_page_size(size).await })
        })
    };
    html!(<Pagination {total} {page} {page_size} {on_page} {on_page_size} />)
}

fn clear_search<S: PageSource + 'static>(list: &Rc<ListController<S>>) -> Callback<()> {
    let list = list.clone();
    Callback::from(move |_: ()| spawn_with(&list, |list| async move { list.clear_search().await }))
}

/// Mock switch plus search box.
pub fn list_toolbar<S: MockSource + 'static>(
    list: &Rc<ListController<S>>,
    placeholder: &'static str,
    extra: Html,
) -> Html {
    let (is_mock, value) = {
        let state = list.state();
        (state.is_mock(), AttrValue::from(state.search_input().to_string()))
    };
    let on_toggle = {
        let list = list.clone();
        Callback::from(move |enabled: bool| {
            spawn_with(&list, move |list| async move {
                let mut rng = mock_rng();
                list.set_mock_mode(enabled, &mut rng).await;
            })
        })
    };
    let on_input = {
        let list = list.clone();
        Callback::from(move |text: String| list.stage_search(text))
    };
    let on_submit = {
        let list = list.clone();
        Callback::from(move |_: ()| spawn_with(&list, |list| async move { list.submit_search().await }))
    };

    html! {
        <div class="toolbar">
            <MockToggle checked={is_mock} {on_toggle} />
            <SearchBar {value} placeholder={placeholder} {on_input} {on_submit} on_clear={clear_search(list)} />
            { extra }
        </div>
    }
}

pub fn list_search_indicator<S: PageSource + 'static>(list: &Rc<ListController<S>>) -> Html {
    let (query, total) = {
        let state = list.state();
        (AttrValue::from(state.search_query().to_string()), state.total())
    };
    html!(<SearchIndicator {query} {total} on_clear={clear_search(list)} />)
}

pub fn progress(loading: bool) -> Html {
    if loading {
        html!(<div class="progress-bar" role="progressbar" />)
    } else {
        Html::default()
    }
}

pub fn empty_row(colspan: usize, text: &'static str) -> Html {
    html! {
        <tr><td class="empty" colspan={colspan.to_string()}>{ text }</td></tr>
    }
}
