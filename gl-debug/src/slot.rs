use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::message::DebugMessage;

/// A user supplied debug message handler.
pub struct Handler(Box<dyn Fn(&DebugMessage<'_>) + Send + Sync>);

impl Handler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&DebugMessage<'_>) + Send + Sync + 'static,
    {
        Self(Box::new(handler))
    }

    #[inline]
    pub fn call(&self, message: &DebugMessage<'_>) {
        (self.0)(message)
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Handler")
    }
}

/// Holds at most one [`Handler`].
///
/// Registering replaces whatever was there before; there is no chaining.
/// The slot is swapped atomically, so a concurrent [`HandlerSlot::invoke`]
/// sees either the old or the new handler, never a partial one. No lock is held
/// while a handler runs: a handler may register or unregister on the same slot
/// and the invocation in flight still completes with the handler it started
/// with.
pub struct HandlerSlot {
    handler: ArcSwapOption<Handler>,
}

impl Default for HandlerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("registered", &self.is_registered())
            .finish()
    }
}

impl HandlerSlot {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            handler: ArcSwapOption::const_empty(),
        }
    }

    /// Stores `handler` in the slot, or clears it when `None`.
    pub fn register(&self, handler: Option<Handler>) {
        self.handler.store(handler.map(Arc::new));
    }

    /// Shorthand for registering a closure.
    pub fn set<F>(&self, handler: F)
    where
        F: Fn(&DebugMessage<'_>) + Send + Sync + 'static,
    {
        self.register(Some(Handler::new(handler)));
    }

    #[inline]
    pub fn unregister(&self) {
        self.register(None);
    }

    #[inline]
    pub fn is_registered(&self) -> bool {
        self.handler.load().is_some()
    }

    /// Calls the registered handler once with `message`.
    ///
    /// Returns whether a handler was registered.
    pub fn invoke(&self, message: &DebugMessage<'_>) -> bool {
        let Some(handler) = self.handler.load_full() else {
            return false;
        };

        handler.call(message);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::message::UserData;

    fn message(text: &str) -> DebugMessage<'_> {
        DebugMessage {
            source: gl::DEBUG_SOURCE_API,
            gltype: gl::DEBUG_TYPE_ERROR,
            id: 1280,
            severity: gl::DEBUG_SEVERITY_HIGH,
            length: text.len() as i32,
            message: text,
            user_data: UserData::null(),
        }
    }

    #[test]
    fn test_empty_slot_does_nothing() {
        let slot = HandlerSlot::new();

        assert!(!slot.is_registered());
        assert!(!slot.invoke(&message("unheard")));
    }

    #[test]
    fn test_handler_called_once_with_message() {
        let slot = HandlerSlot::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&received);
        slot.set(move |message| {
            sink.lock().unwrap().push((
                message.source,
                message.gltype,
                message.id,
                message.severity,
                message.length,
                message.message.to_owned(),
            ));
        });

        assert!(slot.invoke(&message("GL error")));

        let received = received.lock().unwrap();
        assert_eq!(
            *received,
            vec![(
                gl::DEBUG_SOURCE_API,
                gl::DEBUG_TYPE_ERROR,
                1280,
                gl::DEBUG_SEVERITY_HIGH,
                8,
                "GL error".to_owned(),
            )]
        );
    }

    #[test]
    fn test_last_registration_wins() {
        let slot = HandlerSlot::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        slot.set(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        slot.set(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        slot.invoke(&message("which one"));

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_register_none_clears() {
        let slot = HandlerSlot::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        slot.set(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        slot.register(None);

        assert!(!slot.is_registered());
        assert!(!slot.invoke(&message("dropped")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_handler_can_unregister_itself() {
        let slot = Arc::new(HandlerSlot::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner_slot = Arc::clone(&slot);
        let counter = Arc::clone(&calls);
        slot.set(move |message| {
            inner_slot.unregister();
            // The handler is still alive for the rest of this call.
            assert_eq!(message.message, "once");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(slot.invoke(&message("once")));
        assert!(!slot.invoke(&message("twice")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_invoke_and_register() {
        let slot = HandlerSlot::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let delivered = AtomicUsize::new(0);

        crossbeam::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|_| {
                    for _ in 0..1000 {
                        if slot.invoke(&message("from a driver thread")) {
                            delivered.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                });
            }

            scope.spawn(|_| {
                for round in 0..100 {
                    if round % 2 == 0 {
                        let counter = Arc::clone(&calls);
                        slot.set(move |_| {
                            counter.fetch_add(1, Ordering::SeqCst);
                        });
                    } else {
                        slot.unregister();
                    }
                }
            });
        })
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), delivered.load(Ordering::SeqCst));
    }
}
