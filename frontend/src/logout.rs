use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::use_session;
use crate::Route;

#[function_component(Logout)]
pub fn logout() -> Html {
    let navigator = use_navigator();
    let session = use_session();

    let onclick = Callback::from(move |_: MouseEvent| {
        let navigator = navigator.clone();
        let Some(store) = session.as_ref().map(|s| s.store.clone()) else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            // local only: drops the stored token and identity
            if let Err(e) = store.logout().await {
                log::error!("logout: {e}");
            }
            if let Some(navigator) = navigator {
                navigator.replace(&Route::Login);
            }
        });
    });

    html! { <button class="btn-outline" {onclick}>{ "Logout" }</button> }
}
