use yew::prelude::*;

use wordsuz_admin_core::format::{count, format_timestamp};
use wordsuz_admin_core::models::{User, UserStats};
use wordsuz_admin_core::services::UsersService;
use wordsuz_admin_core::stats::StatsPanel;

use super::{empty_row, list_banner, list_pagination, progress};
use crate::api::use_client;
use crate::components::{ErrorBanner, Spinner, StatCard, Tabs};
use crate::hooks::{spawn_with, use_list_controller, use_observed};

const LIST_TAB: usize = 0;
const STATS_TAB: usize = 1;

#[derive(Properties, PartialEq)]
pub struct UserStatsCardsProps {
    pub stats: UserStats,
}

#[function_component(UserStatsCards)]
pub fn user_stats_cards(props: &UserStatsCardsProps) -> Html {
    let s = props.stats;
    let cards = [
        ("Total Users", s.total),
        ("New Users (Last Week)", s.last_week),
        ("New Users (Last Month)", s.last_month),
        ("New Users (Last Year)", s.last_year),
    ];
    html! {
        <div class="card-grid">
            { for cards.iter().map(|(label, value)| html! {
                <StatCard label={*label} value={value.to_string()} />
            }) }
        </div>
    }
}

fn user_row(user: &User) -> Html {
    html! {
        <tr key={user.id.clone()}>
            <td class="mono ellipsis">{ &user.id }</td>
            <td>{ &user.email }</td>
            <td class="num">{ count(user.bookmarks_count) }</td>
            <td>{ format_timestamp(&user.created_at) }</td>
            <td>{ format_timestamp(&user.updated_at) }</td>
        </tr>
    }
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let client = use_client();
    let list = {
        let client = client.clone();
        use_list_controller(move || UsersService::new(client))
    };
    let panel = use_observed(move |listener| StatsPanel::new(UsersService::new(client), listener));
    let tab = use_state(|| LIST_TAB);

    let on_select = {
        let tab = tab.clone();
        let panel = panel.clone();
        Callback::from(move |index: usize| {
            tab.set(index);
            if index == STATS_TAB {
                spawn_with(&panel, |panel| async move {
                    if let Err(e) = panel.open().await {
                        log::debug!("user stats: {e}");
                    }
                });
            }
        })
    };

    let body = if *tab == STATS_TAB {
        let stats = panel.state();
        let on_dismiss = {
            let panel = panel.clone();
            Callback::from(move |_: ()| panel.dismiss_error())
        };
        html! {
            <>
                <ErrorBanner message={stats.error.clone().map(AttrValue::from)} {on_dismiss} />
                if stats.is_loading {
                    <Spinner />
                } else if let Some(stats) = stats.stats {
                    <UserStatsCards {stats} />
                }
            </>
        }
    } else {
        let state = list.state();
        html! {
            <>
                { list_banner(&list) }
                { progress(state.is_loading()) }
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th><th>{"Email"}</th><th>{"Bookmarks"}</th>
                            <th>{"Created At"}</th><th>{"Updated At"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if state.items().is_empty() && !state.is_loading() {
                            { empty_row(5, "No users found") }
                        } else {
                            { for state.items().iter().map(user_row) }
                        }
                    </tbody>
                </table>
                { list_pagination(&list) }
            </>
        }
    };

    html! {
        <section class="page">
            <div class="page-header">
                <h1>{"Users Management"}</h1>
            </div>
            <Tabs labels={vec![AttrValue::from("Users List"), AttrValue::from("User Statistics")]}
                active={*tab} {on_select} />
            { body }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn stats_cards_show_every_window() {
        let props = UserStatsCardsProps {
            stats: UserStats {
                total: 120,
                last_week: 4,
                last_month: 19,
                last_year: 88,
            },
        };
        let html = block_on(LocalServerRenderer::<UserStatsCards>::with_props(props).render());
        assert!(html.contains("Total Users"), "{html}");
        assert!(html.contains("New Users (Last Month)"), "{html}");
        assert!(html.contains("120") && html.contains("88"), "{html}");
    }
}
