//! Listener handles.

use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::error::{ListenerError, panic_message};

/// Callable stored behind a [`Listener`] handle.
pub type ListenerFn<P> = dyn Fn(&P, &str) -> anyhow::Result<()>;

/// A registered callback receiving `(payload, event_name)`.
///
/// Handles are cheap to clone. Identity is the identity of the shared
/// callable: clones of one handle are the same listener (so `off` with a clone
/// removes the original registration), while two handles built from separate
/// `Listener::new` calls are different listeners even if the closures match.
pub struct Listener<P> {
    callback: Rc<ListenerFn<P>>,
}

impl<P> Listener<P> {
    /// Wrap a fallible callback. An `Err` return is reported as a listener failure.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&P, &str) -> anyhow::Result<()> + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Wrap a callback that cannot fail (other than by panicking).
    pub fn infallible<F>(callback: F) -> Self
    where
        F: Fn(&P, &str) + 'static,
    {
        Self::new(move |payload, event| {
            callback(payload, event);
            Ok(())
        })
    }

    /// Whether both handles refer to the same registered callable.
    pub fn same_as(&self, other: &Listener<P>) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }

    /// Invoke the callback, converting an error return or a panic into a
    /// [`ListenerError`].
    ///
    /// Panics are only caught when the binary unwinds (`panic = "unwind"`).
    pub(crate) fn invoke(&self, payload: &P, event_name: &str) -> Result<(), ListenerError> {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.callback)(payload, event_name))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(ListenerError::Failed {
                event: event_name.to_string(),
                source,
            }),
            Err(payload) => Err(ListenerError::Panicked {
                event: event_name.to_string(),
                message: panic_message(&*payload),
            }),
        }
    }
}

impl<P> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<P> core::fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}
