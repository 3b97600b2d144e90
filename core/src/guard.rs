use crate::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";

/// What the protected area should render for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore has not finished; render neither branch.
    Pending,
    Allow,
    /// Send the operator to login. `from` is the path they asked for; it is
    /// captured for a post-login redirect but not acted on yet.
    RedirectToLogin { from: String },
}

pub fn decide(session: &SessionState, location: &str) -> GuardDecision {
    if session.is_loading {
        GuardDecision::Pending
    } else if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin {
            from: location.to_string(),
        }
    }
}
