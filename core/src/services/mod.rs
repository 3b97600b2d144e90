//! One service per backend resource.
//!
//! Each module fixes the envelope its resource answers with (see
//! [`crate::envelope`]) and exposes typed calls for its endpoints. The list
//! capabilities of [`crate::list`] are implemented here as well.

pub mod auth;
pub mod comments;
pub mod games;
pub mod users;
pub mod words;

pub use auth::AuthService;
pub use comments::CommentsService;
pub use games::GamesService;
pub use users::UsersService;
pub use words::WordsService;

use crate::list::PageQuery;

/// Percent-encodes a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

pub(crate) fn list_path(resource: &str, query: &PageQuery) -> String {
    format!("{resource}?{}", query.to_query_string())
}

/// RFC 3339 with milliseconds and a `Z` suffix, as the backend writes them.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
