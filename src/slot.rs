// Shared holder for a callback that reschedules itself. The callback keeps
// a clone of the slot, which forms a reference cycle; `release` breaks it.

use std::cell::RefCell;
use std::rc::Rc;

pub struct CallbackSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for CallbackSlot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for CallbackSlot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> CallbackSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, callback: T) {
        *self.0.borrow_mut() = Some(callback);
    }

    /// Run `f` against the stored callback, if any.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.borrow().as_ref().map(f)
    }

    /// Take the callback out, dropping whatever it captured once the caller
    /// lets go of it. Must not be called from inside the callback itself.
    pub fn release(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }
}
