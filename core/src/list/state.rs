use std::fmt;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::ApiError;

use super::{Identified, Page, PageQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Live,
    Mock,
}

/// What the table shows: rows, total count and the banner.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub error: Option<String>,
}

impl<T> Default for PageView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            error: None,
        }
    }
}

/// How a fetch started by [`ListState::begin_fetch`] is to be served.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPlan<T> {
    Live(PageQuery),
    /// Already sliced from the mock dataset; only the latency remains.
    Mock(Page<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<T> {
    pub seq: u64,
    pub plan: FetchPlan<T>,
}

struct MockData<T> {
    records: Vec<T>,
    matches: fn(&T, &str) -> bool,
    view: PageView<T>,
}

impl<T: Clone> MockData<T> {
    fn page(&self, ui_page: u32, page_size: u32, search: &str) -> Page<T> {
        let needle = search.to_lowercase();
        let filtered: Vec<&T> = if needle.is_empty() {
            self.records.iter().collect()
        } else {
            self.records
                .iter()
                .filter(|record| (self.matches)(record, &needle))
                .collect()
        };

        let start = ui_page as usize * page_size as usize;
        Page {
            total: filtered.len() as u64,
            items: filtered
                .into_iter()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect(),
        }
    }
}

impl<T: Clone> Clone for MockData<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            matches: self.matches,
            view: self.view.clone(),
        }
    }
}

/// View-state of one list page.
///
/// `Idle -> Loading -> {Loaded, Errored}`; any change of page, page size,
/// committed search or data source re-enters `Loading`. Live and mock data
/// keep separate views so mock mode never leaks into the live total or
/// error. Every fetch carries a sequence number and only the latest one
/// may land.
#[derive(Clone)]
pub struct ListState<T> {
    noun_plural: &'static str,
    page: u32,
    page_size: u32,
    search_input: String,
    search_query: String,
    status: LoadStatus,
    live: PageView<T>,
    mock: Option<MockData<T>>,
    seq: u64,
}

impl<T: Clone> fmt::Debug for ListState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListState")
            .field("noun", &self.noun_plural)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("search_query", &self.search_query)
            .field("status", &self.status)
            .field("source", &self.source())
            .field("total", &self.view().total)
            .field("seq", &self.seq)
            .finish()
    }
}

impl<T: Clone> ListState<T> {
    pub fn new(noun_plural: &'static str) -> Self {
        Self {
            noun_plural,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            search_input: String::new(),
            search_query: String::new(),
            status: LoadStatus::Idle,
            live: PageView::default(),
            mock: None,
            seq: 0,
        }
    }

    /* ------------------------------ accessors ----------------------------- */

    /// 0-based page index, as the pagination widget expects.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn source(&self) -> DataSource {
        if self.mock.is_some() {
            DataSource::Mock
        } else {
            DataSource::Live
        }
    }

    pub fn is_mock(&self) -> bool {
        self.mock.is_some()
    }

    pub fn view(&self) -> &PageView<T> {
        match &self.mock {
            Some(mock) => &mock.view,
            None => &self.live,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.view().items
    }

    pub fn total(&self) -> u64 {
        self.view().total
    }

    pub fn error(&self) -> Option<&str> {
        self.view().error.as_deref()
    }

    /// The live view, even while mock mode is on.
    pub fn live_view(&self) -> &PageView<T> {
        &self.live
    }

    pub fn mock_records(&self) -> Option<&[T]> {
        self.mock.as_ref().map(|mock| mock.records.as_slice())
    }

    pub fn page_count(&self) -> u32 {
        let total = self.total();
        let size = u64::from(self.page_size.max(1));
        total.div_ceil(size) as u32
    }

    fn view_mut(&mut self) -> &mut PageView<T> {
        match &mut self.mock {
            Some(mock) => &mut mock.view,
            None => &mut self.live,
        }
    }

    /* ----------------------------- transitions ---------------------------- */
    // Each returns whether a fetch is now due.

    pub fn set_page(&mut self, page: u32) -> bool {
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        let page_size = page_size.max(1);
        if page_size == self.page_size && self.page == 0 {
            return false;
        }
        self.page_size = page_size;
        self.page = 0;
        true
    }

    /// Keystrokes only stage the text; nothing is fetched.
    pub fn stage_search(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    pub fn submit_search(&mut self) -> bool {
        let changed = self.search_query != self.search_input || self.page != 0;
        self.search_query = self.search_input.clone();
        self.page = 0;
        changed
    }

    pub fn clear_search(&mut self) -> bool {
        let changed = !self.search_query.is_empty() || self.page != 0;
        self.search_input.clear();
        self.search_query.clear();
        self.page = 0;
        changed
    }

    /// Switches to a freshly generated dataset. Always regenerates, even if
    /// mock mode was already on.
    pub fn enable_mock(&mut self, records: Vec<T>, matches: fn(&T, &str) -> bool) -> bool {
        self.mock = Some(MockData {
            records,
            matches,
            view: PageView::default(),
        });
        self.page = 0;
        self.seq += 1;
        true
    }

    /// Drops the synthetic dataset and returns to the live view as it was
    /// before mock mode was switched on.
    pub fn disable_mock(&mut self) -> bool {
        let was_mock = self.mock.take().is_some();
        self.page = 0;
        self.seq += 1;
        was_mock
    }

    pub fn begin_fetch(&mut self) -> FetchTicket<T> {
        self.seq += 1;
        self.status = LoadStatus::Loading;
        let plan = match &self.mock {
            Some(mock) => FetchPlan::Mock(mock.page(self.page, self.page_size, &self.search_query)),
            None => FetchPlan::Live(PageQuery::from_ui(
                self.page,
                self.page_size,
                &self.search_query,
            )),
        };
        FetchTicket {
            seq: self.seq,
            plan,
        }
    }

    /// Lands the result of fetch `seq`. Returns `false` and changes nothing
    /// when a newer fetch has been started since.
    pub fn complete(&mut self, seq: u64, result: Result<Page<T>, ApiError>) -> bool {
        if seq != self.seq {
            log::debug!(
                "discarding stale {} response #{seq} (latest #{})",
                self.noun_plural,
                self.seq
            );
            return false;
        }

        let noun = self.noun_plural;
        let view = self.view_mut();
        let status = match result {
            Ok(page) => {
                view.items = page.items;
                view.total = page.total;
                view.error = None;
                LoadStatus::Loaded
            }
            Err(err) => {
                log::error!("Failed to fetch {noun}: {err}");
                view.error = Some(format!("Failed to fetch {noun}"));
                LoadStatus::Errored
            }
        };
        self.status = status;
        true
    }

    /// Sets the banner of the current view without touching its rows.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.view_mut().error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.view_mut().error = None;
    }
}

impl<T: Clone + Identified> ListState<T> {
    pub fn mock_update(&mut self, id: &str, apply: impl FnOnce(&mut T)) -> bool {
        let Some(mock) = self.mock.as_mut() else {
            return false;
        };
        match mock.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                apply(record);
                true
            }
            None => false,
        }
    }

    pub fn mock_remove(&mut self, id: &str) -> bool {
        let Some(mock) = self.mock.as_mut() else {
            return false;
        };
        let before = mock.records.len();
        mock.records.retain(|record| record.id() != id);
        mock.records.len() != before
    }

    /// New mock records go to the front, as the newest entry.
    pub fn mock_prepend(&mut self, record: T) {
        if let Some(mock) = self.mock.as_mut() {
            mock.records.insert(0, record);
        }
    }

    /// `mock-<n>` with `n` above every numeric suffix in use, so ids stay
    /// unique after deletions.
    pub fn next_mock_id(&self) -> String {
        let next = self
            .mock
            .as_ref()
            .map(|mock| {
                mock.records
                    .iter()
                    .filter_map(|record| record.id().strip_prefix("mock-")?.parse::<u64>().ok())
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0)
            + 1;
        format!("mock-{next}")
    }
}
