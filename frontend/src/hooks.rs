use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use wordsuz_admin_core::{ListController, PageSource};

use crate::utils::TimerLatency;

/// Builds a controller once per component instance, wiring its change
/// listener to a re-render of that component.
#[hook]
pub fn use_observed<T, F>(make: F) -> Rc<T>
where
    T: 'static,
    F: FnOnce(Rc<dyn Fn()>) -> T,
{
    let trigger = use_force_update();
    use_memo((), move |_| {
        let listener: Rc<dyn Fn()> = Rc::new(move || trigger.force_update());
        make(listener)
    })
}

/// A list controller for `source`, with its first page fetched on mount.
#[hook]
pub fn use_list_controller<S, F>(source: F) -> Rc<ListController<S>>
where
    S: PageSource + 'static,
    F: FnOnce() -> S,
{
    let controller = use_observed(move |listener| {
        ListController::new(source(), Rc::new(TimerLatency), listener)
    });
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { controller.refresh().await });
            || ()
        });
    }
    controller
}

/// Runs `task` on a clone of `target` without blocking the render.
pub fn spawn_with<T, F, Fut>(target: &Rc<T>, task: F)
where
    T: 'static,
    F: FnOnce(Rc<T>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    spawn_local(task(target.clone()));
}

/// Runs a dialog mutation: `busy` is raised for its duration and
/// `on_success` fires only when it succeeds, so a failed save leaves the
/// dialog open for a retry.
pub fn run_mutation<T, E, F, Fut>(
    target: &Rc<T>,
    busy: &UseStateHandle<bool>,
    on_success: Callback<()>,
    task: F,
) where
    T: 'static,
    F: FnOnce(Rc<T>) -> Fut,
    Fut: Future<Output = Result<(), E>> + 'static,
{
    busy.set(true);
    let busy = busy.clone();
    let pending = task(target.clone());
    spawn_local(async move {
        let result = pending.await;
        busy.set(false);
        if result.is_ok() {
            on_success.emit(());
        }
    });
}
