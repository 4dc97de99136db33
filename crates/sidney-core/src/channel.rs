#![forbid(unsafe_code)]

//! Per-object publish/subscribe event channels.
//!
//! An [`EventChannel`] stores handlers keyed by event name. Producers announce
//! state changes by name without knowing who listens; consumers subscribe
//! closures. The channel is generic over the handler type so that standalone
//! objects (through the [`Publisher`] trait) and arena-stored GUI elements
//! (whose handlers also receive the arena) share one implementation.
//!
//! # Dispatch order
//!
//! 1. Explicit subscribers, in subscription order.
//! 2. The event's default handler, if one was registered.
//!
//! Default handlers carry an object's built-in behaviour. They are
//! registered explicitly when the object is constructed and always run last.
//!
//! # Invariants
//!
//! - Each handler runs exactly once per publish.
//! - Publishing an event nobody listens to is a no-op.
//! - Handlers are snapshotted before dispatch, so a handler may subscribe or
//!   unsubscribe without disturbing the publish in progress.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use smallvec::SmallVec;

/// Name of an event, e.g. `"changed"` or `"clicked_left_mouse_button"`.
pub type EventName = Cow<'static, str>;

/// Snapshot of the handlers registered for one event.
pub type HandlerList<H> = SmallVec<[H; 4]>;

/// Identifies one subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

struct Subscriber<H> {
    id: SubscriptionId,
    event: EventName,
    handler: H,
}

/// Ordered handler storage for one publishing object.
pub struct EventChannel<H> {
    subscribers: Vec<Subscriber<H>>,
    defaults: AHashMap<EventName, H>,
    next_id: u64,
}

impl<H> fmt::Debug for EventChannel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events: Vec<&str> = self.subscribers.iter().map(|s| s.event.as_ref()).collect();
        let defaults: Vec<&str> = self.defaults.keys().map(|k| k.as_ref()).collect();
        f.debug_struct("EventChannel")
            .field("subscribers", &events)
            .field("defaults", &defaults)
            .finish()
    }
}

impl<H> Default for EventChannel<H> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            defaults: AHashMap::new(),
            next_id: 0,
        }
    }
}

impl<H: Clone> EventChannel<H> {
    /// Create an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `event`. Handlers run in subscription order.
    pub fn subscribe(&mut self, event: impl Into<EventName>, handler: H) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            event: event.into(),
            handler,
        });
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Register the built-in handler for `event`, replacing any previous one.
    ///
    /// The default handler runs after every explicit subscriber.
    pub fn set_default(&mut self, event: impl Into<EventName>, handler: H) {
        self.defaults.insert(event.into(), handler);
    }

    /// Whether a default handler exists for `event`.
    #[must_use]
    pub fn has_default(&self, event: &str) -> bool {
        self.defaults.contains_key(event)
    }

    /// Snapshot the handlers for `event` in dispatch order.
    #[must_use]
    pub fn handlers(&self, event: &str) -> HandlerList<H> {
        let mut list: HandlerList<H> = self
            .subscribers
            .iter()
            .filter(|s| s.event == event)
            .map(|s| s.handler.clone())
            .collect();
        if let Some(default) = self.defaults.get(event) {
            list.push(default.clone());
        }
        list
    }

    /// Number of explicit subscribers for `event` (defaults excluded).
    #[must_use]
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.iter().filter(|s| s.event == event).count()
    }

    /// Drop every explicit subscriber. Default handlers are kept.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

/// Handler type used by [`Publisher`] implementors.
pub type PublisherHandler<T> = Rc<dyn Fn(&mut T, &<T as Publisher>::Args)>;

/// Publish/subscribe mixin for standalone objects.
///
/// Implementors expose their channel; subscribing and publishing come for
/// free. Every handler receives the publishing object first, followed by
/// the event arguments.
///
/// ```
/// use sidney_core::channel::{EventChannel, Publisher, PublisherHandler};
///
/// #[derive(Default)]
/// struct Counter {
///     value: i32,
///     channel: EventChannel<PublisherHandler<Counter>>,
/// }
///
/// impl Publisher for Counter {
///     type Args = i32;
///     fn channel(&self) -> &EventChannel<PublisherHandler<Self>> { &self.channel }
///     fn channel_mut(&mut self) -> &mut EventChannel<PublisherHandler<Self>> { &mut self.channel }
/// }
///
/// let mut counter = Counter::default();
/// counter.subscribe("added", |c: &mut Counter, n: &i32| c.value += *n);
/// counter.publish("added", &5);
/// assert_eq!(counter.value, 5);
/// ```
pub trait Publisher: Sized {
    /// Arguments carried by every event of this publisher.
    type Args;

    /// The object's channel.
    fn channel(&self) -> &EventChannel<PublisherHandler<Self>>;

    /// The object's channel, mutably.
    fn channel_mut(&mut self) -> &mut EventChannel<PublisherHandler<Self>>;

    /// Subscribe a handler to `event`.
    fn subscribe<F>(&mut self, event: impl Into<EventName>, handler: F) -> SubscriptionId
    where
        F: Fn(&mut Self, &Self::Args) + 'static,
    {
        self.channel_mut().subscribe(event, Rc::new(handler))
    }

    /// Remove a subscription.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.channel_mut().unsubscribe(id)
    }

    /// Invoke every handler registered for `event`.
    ///
    /// Returns the number of handlers that ran.
    fn publish(&mut self, event: &str, args: &Self::Args) -> usize {
        let handlers = self.channel().handlers(event);
        tracing::trace!(message = "channel.publish", event, handlers = handlers.len());
        for handler in &handlers {
            handler(self, args);
        }
        handlers.len()
    }
}
