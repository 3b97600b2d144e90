//! The two response envelopes the backend uses.
//!
//! Auth, users and comments wrap their payload in
//! `{data, message, statusCode}`; words and games return the payload bare
//! (a paginated body is then `{data, meta}` at the top level). Services pick
//! the envelope per resource through [`Envelope`], so unifying the backend
//! later only touches the type aliases in `services`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A response shape that carries a payload.
pub trait Envelope: DeserializeOwned {
    type Payload;

    fn into_payload(self) -> Self::Payload;
}

/// `{data, message, statusCode}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wrapped<T> {
    pub data: T,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status_code: u16,
}

impl<T: DeserializeOwned> Envelope for Wrapped<T> {
    type Payload = T;

    fn into_payload(self) -> T {
        self.data
    }
}

/// The payload itself, no wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bare<T>(pub T);

impl<T: DeserializeOwned> Envelope for Bare<T> {
    type Payload = T;

    fn into_payload(self) -> T {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

/// `{data: [...], meta: {total, page, limit}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_paginated_body_unwraps_to_inner_page() {
        let body = r#"{
            "data": {"data": [{"n": 1}, {"n": 2}], "meta": {"total": 12, "page": 1, "limit": 2}},
            "message": "ok",
            "statusCode": 200
        }"#;
        let env: Wrapped<Paginated<serde_json::Value>> = serde_json::from_str(body).unwrap();
        let page = env.into_payload();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total, 12);
    }

    #[test]
    fn bare_paginated_body_unwraps_to_itself() {
        let body = r#"{"data": [], "meta": {"total": 0}}"#;
        let env: Bare<Paginated<serde_json::Value>> = serde_json::from_str(body).unwrap();
        let page = env.into_payload();
        assert!(page.data.is_empty());
        assert_eq!(page.meta, PageMeta::default());
    }
}
