#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use wordsuz_admin_core::{
    ApiClient, ApiConfig, ApiError, HttpRequest, HttpResponse, LoginRedirect, MemoryStorage,
    Transport,
};

/// Answers requests from a queue, in order, and keeps every request it saw.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    seen: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: impl Into<String>) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn json(&self, body: serde_json::Value) -> &Self {
        self.reply(200, body.to_string())
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.seen.borrow().last().cloned().expect("no request sent")
    }

    /// `METHOD path` of every request, base URL stripped.
    pub fn calls(&self) -> Vec<String> {
        self.seen
            .borrow()
            .iter()
            .map(|req| format!("{} {}", req.method, req.url.trim_start_matches(BASE_URL)))
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.replies.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".into())))
    }
}

#[derive(Default)]
pub struct RecordingRedirect {
    pub targets: RefCell<Vec<String>>,
}

impl LoginRedirect for RecordingRedirect {
    fn redirect(&self, path: &str) {
        self.targets.borrow_mut().push(path.to_string());
    }
}

pub const BASE_URL: &str = "http://api.test";

pub struct Harness {
    pub client: ApiClient,
    pub transport: Rc<ScriptedTransport>,
    pub storage: MemoryStorage,
    pub redirect: Rc<RecordingRedirect>,
}

pub fn harness() -> Harness {
    let transport = Rc::new(ScriptedTransport::default());
    let storage = MemoryStorage::new();
    let redirect = Rc::new(RecordingRedirect::default());
    let client = ApiClient::new(
        ApiConfig::new(BASE_URL),
        transport.clone(),
        Rc::new(storage.clone()),
        redirect.clone(),
    );
    Harness {
        client,
        transport,
        storage,
        redirect,
    }
}

/// A bare `{data, meta}` page of words titled `titles`.
pub fn words_page(titles: &[&str], total: u64) -> serde_json::Value {
    let data: Vec<_> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({
                "id": format!("w{}", i + 1),
                "titleEng": title,
                "titleUz": "",
                "synonyms": [],
                "anagrams": [],
                "createdAt": "2024-05-01T10:00:00.000Z",
                "updatedAt": "2024-05-01T10:00:00.000Z"
            })
        })
        .collect();
    serde_json::json!({ "data": data, "meta": { "total": total, "page": 1, "limit": 10 } })
}
