use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Interior-mutable state that calls a listener after every change.
///
/// Controllers keep their view state here; the UI layer passes a listener
/// that schedules a re-render. Borrows never outlive a single call, so no
/// borrow is held across an `.await`.
pub struct Shared<T> {
    inner: Rc<RefCell<T>>,
    listener: Rc<dyn Fn()>,
}

impl<T> Shared<T> {
    pub fn new(value: T, listener: Rc<dyn Fn()>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
            listener,
        }
    }

    pub fn read(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut guard = self.inner.borrow_mut();
            f(&mut guard)
        };
        (self.listener)();
        result
    }

    pub fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            listener: Rc::clone(&self.listener),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.inner.borrow()).finish()
    }
}
