use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod components;
mod guard;
mod hooks;
mod layout;
mod logout;
mod pages;
mod session;
mod utils;

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/words")]
    Words,
    #[at("/words/:id")]
    WordDetail { id: String },
    #[at("/comments")]
    Comments,
    #[at("/users")]
    Users,
    #[at("/games")]
    Games,
    #[at("/games/:id")]
    GameDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn protected(page: Html) -> Html {
    html! {
        <guard::ProtectedRoute>
            <layout::MainLayout>{ page }</layout::MainLayout>
        </guard::ProtectedRoute>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html!(<auth::LoginForm />),
        Route::Home | Route::NotFound => html!(<Redirect<Route> to={Route::Dashboard} />),
        Route::Dashboard => protected(html!(<pages::dashboard::Dashboard />)),
        Route::Words => protected(html!(<pages::words::WordsPage />)),
        Route::WordDetail { id } => protected(html!(<pages::word_detail::WordDetailPage key={id.clone()} id={id.clone()} />)),
        Route::Comments => protected(html!(<pages::comments::CommentsPage />)),
        Route::Users => protected(html!(<pages::users::UsersPage />)),
        Route::Games => protected(html!(<pages::games::GamesPage />)),
        Route::GameDetail { id } => protected(html!(<pages::game_detail::GameDetailPage key={id.clone()} id={id.clone()} />)),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    let client = use_memo((), |_| api::build_client());

    html! {
        <ContextProvider<wordsuz_admin_core::ApiClient> context={(*client).clone()}>
            <session::SessionProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </session::SessionProvider>
        </ContextProvider<wordsuz_admin_core::ApiClient>>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::new().render();
}
