use yew::prelude::*;
use yew_router::prelude::*;

use wordsuz_admin_core::guard::{decide, GuardDecision};

use crate::components::Spinner;
use crate::session::use_session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let location = use_location()
        .map(|l| l.path().to_string())
        .unwrap_or_default();

    let Some(session) = use_session() else {
        return html!(<Spinner />);
    };

    match decide(&session.state, &location) {
        GuardDecision::Pending => html!(<Spinner />),
        GuardDecision::Allow => html! { <>{ for props.children.iter() }</> },
        GuardDecision::RedirectToLogin { from } => {
            log::debug!("guard: {from} requires a session");
            html!(<Redirect<Route> to={Route::Login} />)
        }
    }
}
