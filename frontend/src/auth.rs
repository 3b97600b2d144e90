use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use wordsuz_admin_core::models::LoginRequest;

use crate::components::ErrorBanner;
use crate::session::use_session;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                login form                                  */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let navigator = use_navigator();
    let session = use_session();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let message = use_state(String::new);
    let show_password = use_state(|| false);

    let Some(session) = session else {
        return Html::default();
    };
    if session.state.is_authenticated() {
        return html!(<Redirect<Route> to={Route::Dashboard} />);
    }
    let is_loading = session.state.is_loading;

    /* ------------------ <form onsubmit=…> ---------------------------------- */
    let onsubmit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let message = message.clone();
        let store = session.store.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let field = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let credentials = LoginRequest {
                email: field(&email_ref).trim().to_string(),
                password: field(&password_ref),
            };
            if credentials.email.is_empty() || credentials.password.is_empty() {
                message.set("Email and password are required".into());
                return;
            }

            message.set(String::new());
            let store = store.clone();
            let message = message.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match store.login(&credentials).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => message.set(e.login_message()),
                }
            });
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };
    let dismiss = {
        let message = message.clone();
        Callback::from(move |_: ()| message.set(String::new()))
    };

    /* ---------------------------- view ------------------------------------- */
    html! {
        <div class="login-container">
            <div class="login-card">
                <h1 class="login-title">{"WordsUz Admin"}</h1>
                <p class="login-subtitle">{"Sign in to manage the dictionary"}</p>

                <ErrorBanner
                    message={(!message.is_empty()).then(|| AttrValue::from((*message).clone()))}
                    on_dismiss={dismiss}
                />

                <form {onsubmit}>
                    <label class="field">
                        <span>{"Email"}</span>
                        <input ref={email_ref} type="email" autocomplete="username" disabled={is_loading} />
                    </label>
                    <label class="field">
                        <span>{"Password"}</span>
                        <div class="password-row">
                            <input
                                ref={password_ref}
                                type={if *show_password { "text" } else { "password" }}
                                autocomplete="current-password"
                                disabled={is_loading}
                            />
                            <button type="button" class="btn-link" onclick={toggle_password}>
                                { if *show_password { "Hide" } else { "Show" } }
                            </button>
                        </div>
                    </label>
                    <button type="submit" class="btn-primary" disabled={is_loading}>
                        { if is_loading { "Signing in…" } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
