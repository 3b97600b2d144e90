use std::cell::Ref;
use std::rc::Rc;

use rand::RngCore;

use crate::config::{MOCK_DATASET_SIZE, MOCK_LATENCY};
use crate::error::ApiError;
use crate::observe::Shared;

use super::{
    CreateItem, DataSource, DeleteItem, FetchPlan, Latency, ListState, MockSource, PageSource,
    UpdateItem,
};

/// Drives a [`ListState`] against a source: fetches, search, paging, mock
/// mode and the CRUD dialogs' mutations.
///
/// Mutations re-fetch the current page on success. On failure they set the
/// page banner and return the error, and the caller keeps its dialog open.
pub struct ListController<S: PageSource> {
    source: S,
    state: Shared<ListState<S::Item>>,
    latency: Rc<dyn Latency>,
}

impl<S: PageSource> ListController<S> {
    pub fn new(source: S, latency: Rc<dyn Latency>, listener: Rc<dyn Fn()>) -> Self {
        Self {
            source,
            state: Shared::new(ListState::new(S::NOUN_PLURAL), listener),
            latency,
        }
    }

    pub fn state(&self) -> Ref<'_, ListState<S::Item>> {
        self.state.read()
    }

    pub fn snapshot(&self) -> ListState<S::Item> {
        self.state.snapshot()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn is_mock(&self) -> bool {
        self.state.read().source() == DataSource::Mock
    }

    fn fail(&self, message: String, err: &ApiError) {
        log::error!("{message}: {err}");
        self.state.update(|state| state.set_error(message));
    }

    /// Fetches the page described by the current state.
    pub async fn refresh(&self) {
        let ticket = self.state.update(ListState::begin_fetch);
        let result = match ticket.plan {
            FetchPlan::Live(query) => self.source.fetch_page(&query).await,
            FetchPlan::Mock(page) => {
                self.latency.wait(MOCK_LATENCY).await;
                Ok(page)
            }
        };
        self.state.update(|state| state.complete(ticket.seq, result));
    }

    /// `page` is the 0-based index from the pagination widget.
    pub async fn set_page(&self, page: u32) {
        if self.state.update(|state| state.set_page(page)) {
            self.refresh().await;
        }
    }

    pub async fn set_page_size(&self, page_size: u32) {
        if self.state.update(|state| state.set_page_size(page_size)) {
            self.refresh().await;
        }
    }

    pub fn stage_search(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.update(|state| state.stage_search(text));
    }

    pub async fn submit_search(&self) {
        if self.state.update(ListState::submit_search) {
            self.refresh().await;
        }
    }

    pub async fn clear_search(&self) {
        if self.state.update(ListState::clear_search) {
            self.refresh().await;
        }
    }

    pub fn dismiss_error(&self) {
        self.state.update(ListState::dismiss_error);
    }
}

impl<S: MockSource> ListController<S> {
    /// Turning mock mode on generates a fresh dataset every time; turning
    /// it off returns to live fetches.
    pub async fn set_mock_mode(&self, enabled: bool, rng: &mut dyn RngCore) {
        let changed = if enabled {
            let records = S::generate(MOCK_DATASET_SIZE, rng);
            self.state
                .update(|state| state.enable_mock(records, S::matches))
        } else {
            self.state.update(ListState::disable_mock)
        };
        if changed {
            self.refresh().await;
        }
    }
}

impl<S: CreateItem> ListController<S> {
    pub async fn create(&self, draft: &S::Draft) -> Result<(), ApiError> {
        if self.is_mock() {
            self.state.update(|state| {
                let record = S::mock_record(state.next_mock_id(), draft);
                state.mock_prepend(record);
            });
        } else if let Err(err) = self.source.create(draft).await {
            self.fail(format!("Failed to add {}", S::NOUN), &err);
            return Err(err);
        }
        self.refresh().await;
        Ok(())
    }
}

impl<S: UpdateItem> ListController<S> {
    pub async fn update(&self, id: &str, patch: &S::Patch) -> Result<(), ApiError> {
        if self.is_mock() {
            self.state
                .update(|state| state.mock_update(id, |item| S::apply_patch(item, patch)));
        } else if let Err(err) = self.source.update(id, patch).await {
            self.fail(format!("Failed to update {}", S::NOUN), &err);
            return Err(err);
        }
        self.refresh().await;
        Ok(())
    }
}

impl<S: DeleteItem> ListController<S> {
    /// The page index is left alone even if the page becomes empty.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        if self.is_mock() {
            self.state.update(|state| state.mock_remove(id));
        } else if let Err(err) = self.source.delete(id).await {
            self.fail(format!("Failed to delete {}", S::NOUN), &err);
            return Err(err);
        }
        self.refresh().await;
        Ok(())
    }
}
