use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

use wordsuz_admin_core::services::AuthService;
use wordsuz_admin_core::{SessionState, SessionStore};

use crate::api::use_client;
use crate::hooks::use_observed;

/* ---------------- session context ----------------- */

/// The store plus the state it held at the provider's last render, so
/// consumers re-render when the session changes.
#[derive(Clone)]
pub struct Session {
    pub store: Rc<SessionStore>,
    pub state: SessionState,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.state == other.state
    }
}

#[hook]
pub fn use_session() -> Option<Session> {
    use_context::<Session>()
}

/* ---------------- provider props ------------------- */

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/* ---------------- provider ------------------------- */

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let client = use_client();
    let store = use_observed(move |listener| SessionStore::new(AuthService::new(client), listener));

    // restore once, then follow logins/logouts made in other tabs
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            store.restore();
            let listener = web_sys::window().map(|window| {
                let store = store.clone();
                EventListener::new(&window, "storage", move |_| store.sync_from_storage())
            });
            move || drop(listener)
        });
    }

    let context = Session {
        store: store.clone(),
        state: store.state(),
    };

    html! {
        <ContextProvider<Session> {context}>
            { for props.children.iter() }
        </ContextProvider<Session>>
    }
}
