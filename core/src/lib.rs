//! WordsUz admin console, client core.
//!
//! Everything the console does short of touching the DOM lives here: entity
//! models, response envelopes, the HTTP client wrapper, resource services,
//! the session store, the route-guard decision, the generic list controller
//! and the detail controllers. Browser specifics (fetch, localStorage,
//! timers, navigation) are injected through the traits in [`http`],
//! [`storage`] and [`list`].

pub mod config;
pub mod detail;
pub mod envelope;
pub mod error;
pub mod format;
pub mod forms;
pub mod guard;
pub mod http;
pub mod list;
pub mod mock;
pub mod models;
pub mod observe;
pub mod services;
pub mod session;
pub mod stats;
pub mod storage;

pub use config::ApiConfig;
pub use error::{ApiError, StorageError};
pub use guard::{GuardDecision, LOGIN_ROUTE};
pub use http::{ApiClient, HttpRequest, HttpResponse, LoginRedirect, Method, Transport};
pub use list::{
    CreateItem, DataSource, DeleteItem, Identified, Latency, ListController, ListState,
    LoadStatus, MockSource, NoLatency, Page, PageQuery, PageSource, UpdateItem,
};
pub use session::{SessionState, SessionStore};
pub use storage::{MemoryStorage, SessionStorage};
