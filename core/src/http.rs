//! HTTP client wrapper.
//!
//! [`ApiClient`] owns the cross-cutting request policy: base URL, bearer
//! credential from persisted storage, status mapping and the global 401
//! handling. The actual I/O goes through a [`Transport`] supplied by the
//! platform (gloo-net in the browser, a scripted fake in tests).

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::guard::LOGIN_ROUTE;
use crate::storage::{clear_session, SessionStorage, ACCESS_TOKEN_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a request and returns whatever the server answered.
///
/// Implementations return `Err` only when no response was obtained; every
/// HTTP status, 4xx and 5xx included, is an `Ok`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Forces navigation to the login view after the session expired.
pub trait LoginRedirect {
    fn redirect(&self, path: &str);
}

/// Client for the WordsUz REST API. Cheap to clone; clones share the
/// transport, storage and redirect.
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ApiConfig>,
    transport: Rc<dyn Transport>,
    storage: Rc<dyn SessionStorage>,
    redirect: Rc<dyn LoginRedirect>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport) && Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: Rc<dyn Transport>,
        storage: Rc<dyn SessionStorage>,
        redirect: Rc<dyn LoginRedirect>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            transport,
            storage,
            redirect,
        }
    }

    pub fn storage(&self) -> Rc<dyn SessionStorage> {
        Rc::clone(&self.storage)
    }

    /// JSON call whose response is unwrapped through envelope `E`.
    pub async fn fetch_json<B, E>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<E::Payload, ApiError>
    where
        B: Serialize + ?Sized,
        E: Envelope,
    {
        let response = self.execute(method, path, body).await?;
        let text = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        let envelope: E = serde_json::from_str(text).map_err(|err| {
            log::error!("{method} {path}: undecodable body: {err}");
            ApiError::from(err)
        })?;
        Ok(envelope.into_payload())
    }

    /// Call whose body, if any, is ignored (deletes answering 200 or 204).
    pub async fn fetch_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, body).await.map(|_| ())
    }

    pub async fn get<E: Envelope>(&self, path: &str) -> Result<E::Payload, ApiError> {
        self.fetch_json::<(), E>(Method::Get, path, None).await
    }

    pub async fn post<B, E>(&self, path: &str, body: &B) -> Result<E::Payload, ApiError>
    where
        B: Serialize + ?Sized,
        E: Envelope,
    {
        self.fetch_json::<B, E>(Method::Post, path, Some(body)).await
    }

    pub async fn patch<B, E>(&self, path: &str, body: &B) -> Result<E::Payload, ApiError>
    where
        B: Serialize + ?Sized,
        E: Envelope,
    {
        self.fetch_json::<B, E>(Method::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.fetch_empty::<()>(Method::Delete, path, None).await
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body)?;
        let response = self.transport.send(request).await.map_err(|err| {
            log::error!("{method} {path}: {err}");
            err
        })?;

        match response.status {
            200..=299 => Ok(response),
            401 => {
                // One response, one expiry: the session is cleared and the
                // redirect issued exactly once for this request, and the
                // caller still gets the error for its own banner.
                self.expire_session(method, path);
                Err(ApiError::Unauthorized)
            }
            status => {
                let message = error_message(&response.body);
                log::error!("{method} {path}: HTTP {status} {message}");
                Err(ApiError::Status { status, message })
            }
        }
    }

    fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| ApiError::InvalidRequest(err.to_string()))?;

        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.storage.get(ACCESS_TOKEN_KEY) {
            if !token.is_empty() {
                headers.push(("Authorization".to_string(), format!("Bearer {token}")));
            }
        }

        Ok(HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        })
    }

    fn expire_session(&self, method: Method, path: &str) {
        log::warn!("{method} {path}: 401, clearing session");
        clear_session(self.storage.as_ref());
        self.redirect.redirect(LOGIN_ROUTE);
    }
}

/// Pulls a readable message out of an error body. NestJS-style backends
/// send `message` either as a string or as a list of validation errors.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("message") {
            Some(Value::String(msg)) => msg.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        },
        _ => body.trim().chars().take(200).collect(),
    }
}
