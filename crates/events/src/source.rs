//! Event-source composition for host objects.

use std::rc::Rc;

use crate::emitter::Emitter;
use crate::listener::Listener;

/// A host object that emits events through an embedded [`Emitter`].
///
/// Implementors provide the accessor; the subscription API comes for free.
///
/// ```
/// use herald_events::{Emitter, EventSource, Listener};
///
/// #[derive(Default)]
/// struct Cart {
///     events: Emitter<u32>,
/// }
///
/// impl EventSource for Cart {
///     type Payload = u32;
///
///     fn emitter(&self) -> &Emitter<u32> {
///         &self.events
///     }
/// }
///
/// let cart = Cart::default();
/// cart.on(Some("item.added"), &Listener::infallible(|qty: &u32, _: &str| assert_eq!(*qty, 3)));
/// cart.emit("item.added", &3);
/// ```
pub trait EventSource {
    type Payload;

    fn emitter(&self) -> &Emitter<Self::Payload>;

    fn listen(&self, event_name: Option<&str>, listener: &Listener<Self::Payload>) {
        self.emitter().listen(event_name, listener);
    }

    fn unlisten(&self, event_name: Option<&str>, listener: &Listener<Self::Payload>) {
        self.emitter().unlisten(event_name, listener);
    }

    fn on(&self, event_name: Option<&str>, listener: &Listener<Self::Payload>) {
        self.emitter().on(event_name, listener);
    }

    fn off(&self, event_name: Option<&str>, listener: &Listener<Self::Payload>) {
        self.emitter().off(event_name, listener);
    }

    fn emit(&self, event_name: &str, payload: &Self::Payload) {
        self.emitter().emit(event_name, payload);
    }
}

impl<P> EventSource for Emitter<P> {
    type Payload = P;

    fn emitter(&self) -> &Emitter<P> {
        self
    }
}

impl<S> EventSource for Rc<S>
where
    S: EventSource + ?Sized,
{
    type Payload = S::Payload;

    fn emitter(&self) -> &Emitter<Self::Payload> {
        (**self).emitter()
    }
}
