//! Browser helpers: localStorage, timers, entropy and input events.

use std::time::Duration;

use async_trait::async_trait;
use gloo::storage::{LocalStorage, Storage};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use wordsuz_admin_core::{Latency, SessionStorage, StorageError};

/// `window.localStorage`, holding raw strings without JSON quoting.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Real delay for mock fetches.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerLatency;

#[async_trait(?Send)]
impl Latency for TimerLatency {
    async fn wait(&self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Fresh generator for a mock dataset.
pub fn mock_rng() -> SmallRng {
    let seed = js_sys::Date::now() as u64 ^ (js_sys::Math::random() * u32::MAX as f64) as u64;
    SmallRng::seed_from_u64(seed)
}

/* ---------------------------- input events ------------------------------ */

pub fn input_value(e: &InputEvent) -> String {
    let target = match e.target() {
        Some(t) => t,
        None => return String::new(),
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn checkbox_checked(e: &Event) -> bool {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

pub fn select_value(e: &Event) -> String {
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// Callback storing the typed text into a form field of a `use_state` form.
pub fn bind<F, T>(form: &UseStateHandle<F>, set: T) -> Callback<InputEvent>
where
    F: Clone + 'static,
    T: Fn(&mut F, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*form).clone();
        set(&mut next, input_value(&e));
        form.set(next);
    })
}
