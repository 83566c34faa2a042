//! Event callbacks passed into components as props.

use std::rc::Rc;

/// A cloneable event handler.
///
/// Components run on a single UI thread, so handlers are reference counted
/// without synchronisation.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Callback<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Handler that ignores every event.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn call(&self, arg: T) {
        (self.0)(arg)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> core::fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Handlers compare by identity: two callbacks are equal when they share
/// the same underlying closure.
impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T, F> From<F> for Callback<T>
where
    F: Fn(T) + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
