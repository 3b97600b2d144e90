//! Controllers behind the single-record pages.

pub mod game;
pub mod word;

pub use game::GameDetail;
pub use word::WordDetail;

use crate::error::ApiError;
use crate::observe::Shared;

/// State of a detail page: the record, once loaded, plus the page banner.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState<T> {
    pub item: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        Self {
            item: None,
            is_loading: true,
            error: None,
        }
    }
}

impl<T> DetailState<T> {
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Records the outcome of a mutation: clears the banner on success, sets
/// `failure` on error. Loading is cleared either way.
pub(crate) fn settle<T, R>(
    state: &Shared<DetailState<T>>,
    result: &Result<R, ApiError>,
    failure: &str,
) {
    if let Err(err) = result {
        log::error!("{failure}: {err}");
    }
    state.update(|state| {
        state.is_loading = false;
        state.error = result.as_ref().err().map(|_| failure.to_string());
    });
}
