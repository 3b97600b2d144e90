//! Process-wide operator session.

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{LoginRequest, User};
use crate::observe::Shared;
use crate::services::now_timestamp;
use crate::services::AuthService;
use crate::storage::{clear_session, SessionStorage, ACCESS_TOKEN_KEY, USER_KEY};

/// Identity of the logged-in operator and whether a session transition is
/// still running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name for greetings: username, else email, else "Admin".
    pub fn display_name(&self) -> String {
        let user = self.user.as_ref();
        user.and_then(|u| u.username.as_deref())
            .filter(|name| !name.is_empty())
            .or_else(|| user.map(|u| u.email.as_str()).filter(|email| !email.is_empty()))
            .unwrap_or("Admin")
            .to_string()
    }
}

impl Default for SessionState {
    /// Loading until [`SessionStore::restore`] has run.
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

/// Owns the session state and keeps it in step with persisted storage.
#[derive(Clone)]
pub struct SessionStore {
    auth: AuthService,
    storage: Rc<dyn SessionStorage>,
    state: Shared<SessionState>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(auth: AuthService, listener: Rc<dyn Fn()>) -> Self {
        let storage = auth.client().storage();
        Self {
            auth,
            storage,
            state: Shared::new(SessionState::default(), listener),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.snapshot()
    }

    /// Rebuilds the session from storage. A stored identity that does not
    /// parse is removed together with the token.
    pub fn restore(&self) {
        let user = self.read_persisted();
        self.state.update(|state| {
            state.user = user;
            state.is_loading = false;
        });
    }

    /// Re-reads storage after another tab changed it. Leaves the state
    /// untouched when nothing differs.
    pub fn sync_from_storage(&self) {
        let user = self.read_persisted();
        if self.state.read().user != user {
            log::info!("session changed in another tab");
            self.state.update(|state| state.user = user);
        }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        self.state.update(|state| state.is_loading = true);
        let result = self.authenticate(credentials).await;
        self.state.update(|state| {
            if let Ok(user) = &result {
                state.user = Some(user.clone());
            }
            state.is_loading = false;
        });
        match &result {
            Ok(user) => log::info!("logged in as {}", user.email),
            Err(err) => log::error!("login failed: {err}"),
        }
        result
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.state.update(|state| state.is_loading = true);
        let result = self.auth.logout().await;
        clear_session(self.storage.as_ref());
        self.state.update(|state| {
            state.user = None;
            state.is_loading = false;
        });
        log::info!("logged out");
        result
    }

    async fn authenticate(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let response = self.auth.login(credentials).await?;
        self.storage.set(ACCESS_TOKEN_KEY, &response.access_token)?;

        // The backend returns no profile; the operator is always "Admin".
        let now = now_timestamp();
        let user = User {
            id: "admin".to_string(),
            email: response.email,
            username: Some("Admin".to_string()),
            created_at: now.clone(),
            updated_at: now,
            bookmarks_count: None,
        };
        let json = serde_json::to_string(&user)?;
        self.storage.set(USER_KEY, &json)?;
        Ok(user)
    }

    fn read_persisted(&self) -> Option<User> {
        let token = self.storage.get(ACCESS_TOKEN_KEY)?;
        let json = self.storage.get(USER_KEY)?;
        if token.is_empty() {
            return None;
        }
        match serde_json::from_str::<User>(&json) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("stored user is corrupt, clearing session: {err}");
                clear_session(self.storage.as_ref());
                None
            }
        }
    }
}
