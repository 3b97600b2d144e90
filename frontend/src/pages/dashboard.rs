use yew::prelude::*;

use crate::components::StatCard;
use crate::session::use_session;

const CARDS: [&str; 4] = ["Total Users", "Total Words", "Total Bookmarks", "Total Comments"];

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub name: AttrValue,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    html! {
        <section class="page">
            <h1>{"Dashboard"}</h1>
            <p class="subtitle">{ format!("Welcome back, {}!", props.name) }</p>

            <div class="card-grid">
                { for CARDS.iter().map(|label| html!(<StatCard label={*label} value="0" />)) }
            </div>

            <div class="panel-grid">
                <div class="panel">
                    <h2>{"Recent Activity"}</h2>
                    <p class="muted">{"No recent activity to display."}</p>
                </div>
                <div class="panel">
                    <h2>{"System Information"}</h2>
                    <p><strong>{"Version: "}</strong>{ env!("CARGO_PKG_VERSION") }</p>
                    <p><strong>{"Build: "}</strong>{ if cfg!(debug_assertions) { "Development" } else { "Release" } }</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let name = use_session()
        .map(|s| s.state.display_name())
        .unwrap_or_else(|| "Admin".into());
    html!(<DashboardView name={name} />)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn dashboard_greets_the_operator_and_lists_the_cards() {
        let props = DashboardViewProps {
            name: "ops@words.uz".into(),
        };
        let html = block_on(LocalServerRenderer::<DashboardView>::with_props(props).render());
        assert!(html.contains("Welcome back, ops@words.uz!"), "{html}");
        for label in CARDS {
            assert!(html.contains(label), "missing {label}: {html}");
        }
    }
}
