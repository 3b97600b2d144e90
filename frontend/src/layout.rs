use yew::prelude::*;
use yew_router::prelude::*;

use crate::logout;
use crate::session::use_session;
use crate::Route;

const NAV_ITEMS: [(&str, Route); 5] = [
    ("Dashboard", Route::Dashboard),
    ("Words", Route::Words),
    ("Comments", Route::Comments),
    ("Users", Route::Users),
    ("Games", Route::Games),
];

/// Whether `current` belongs to the section of `item`; detail pages light up
/// their list entry.
fn is_active(item: &Route, current: Option<&Route>) -> bool {
    match (item, current) {
        (Route::Words, Some(Route::WordDetail { .. })) => true,
        (Route::Games, Some(Route::GameDetail { .. })) => true,
        (item, Some(current)) => item == current,
        (_, None) => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let drawer_open = use_state(|| true);
    let current = use_route::<Route>();
    let name = use_session()
        .map(|s| s.state.display_name())
        .unwrap_or_else(|| "Admin".into());

    let toggle = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(!*drawer_open))
    };

    /* ---------------- view ---------------------------------------------- */
    html! {
        <div class={classes!("shell", (!*drawer_open).then_some("drawer-collapsed"))}>
            <header class="header">
                <button class="icon-btn" aria-label="Toggle navigation" onclick={toggle}>{"☰"}</button>
                <div class="header-title">{"WordsUz Admin"}</div>
                <div class="header-user">
                    <span class="header-name">{ name }</span>
                    <logout::Logout />
                </div>
            </header>

            <nav class="nav">
                <ul class="nav-list">
                    { for NAV_ITEMS.iter().map(|(label, route)| {
                        let class = classes!("nav-item", is_active(route, current.as_ref()).then_some("active"));
                        html! {
                            <li {class}>
                                <Link<Route> to={route.clone()}>{ *label }</Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </nav>

            <main class="main-content">
                { for props.children.iter() }
            </main>
        </div>
    }
}
