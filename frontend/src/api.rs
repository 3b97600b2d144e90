//! Browser side of the API client: gloo-net transport and the hard
//! redirect used when the session expires.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use yew::prelude::*;

use wordsuz_admin_core::{
    ApiClient, ApiConfig, ApiError, HttpRequest, HttpResponse, LoginRedirect, Method, Transport,
};

use crate::utils::BrowserStorage;

/* ------------------------------ transport ------------------------------- */

#[derive(Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        // an unreadable body on an error status still carries the status
        let body = resp.text().await.unwrap_or_default();

        log::debug!("{} {} -> {}", request.method, request.url, status);
        Ok(HttpResponse { status, body })
    }
}

/* ------------------------------ redirect -------------------------------- */

/// Full page navigation, so every in-memory view state is dropped with the
/// expired session.
#[derive(Debug, Default)]
pub struct BrowserRedirect;

impl LoginRedirect for BrowserRedirect {
    fn redirect(&self, path: &str) {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        if let Err(e) = location.set_href(path) {
            log::error!("redirect to {path} failed: {e:?}");
        }
    }
}

/* ------------------------------ wiring ---------------------------------- */

pub fn build_client() -> ApiClient {
    let config = ApiConfig::from_build_env();
    log::info!("API base URL: {}", config.base_url);
    ApiClient::new(
        config,
        Rc::new(GlooTransport),
        Rc::new(BrowserStorage),
        Rc::new(BrowserRedirect),
    )
}

#[hook]
pub fn use_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(build_client)
}
