use std::rc::Rc;

use crate::error::ApiError;
use crate::models::UserStats;
use crate::observe::Shared;
use crate::services::UsersService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsState {
    pub stats: Option<UserStats>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// User statistics tab. Fetched the first time the tab opens, then kept
/// for the life of the page.
#[derive(Debug, Clone)]
pub struct StatsPanel {
    service: UsersService,
    state: Shared<StatsState>,
}

impl StatsPanel {
    pub fn new(service: UsersService, listener: Rc<dyn Fn()>) -> Self {
        Self {
            service,
            state: Shared::new(StatsState::default(), listener),
        }
    }

    pub fn state(&self) -> StatsState {
        self.state.snapshot()
    }

    /// Fetches unless a result is cached or a fetch is already running.
    pub async fn open(&self) -> Result<(), ApiError> {
        let should_fetch = self.state.update(|state| {
            if state.stats.is_some() || state.is_loading {
                false
            } else {
                state.is_loading = true;
                true
            }
        });
        if !should_fetch {
            return Ok(());
        }

        let result = self.service.stats().await;
        self.state.update(|state| {
            state.is_loading = false;
            match &result {
                Ok(stats) => {
                    state.stats = Some(*stats);
                    state.error = None;
                }
                Err(err) => {
                    log::error!("Failed to fetch user stats: {err}");
                    state.error = Some("Failed to fetch user statistics".to_string());
                }
            }
        });
        result.map(|_| ())
    }

    pub fn dismiss_error(&self) {
        self.state.update(|state| state.error = None);
    }
}
