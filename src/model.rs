//! Observable attributes and event subscription shared by every game entity.
//!
//! Entities are plain structs. Each setter funnels through [`set_attribute`],
//! which stores the new value and notifies listeners with a [`Change`] on two
//! event names: the generic [`CHANGED`] and the attribute specific
//! `changed:<attribute>` (see [`changed_event`]).
//!
//! Listeners run inline on the emitting call. A listener that writes back to
//! the entity it is observing will trigger another round of notifications;
//! nothing here breaks such cycles, so avoid writing them.

use alloc::{borrow::Cow, format, rc::Rc, string::String, vec::Vec};
use core::{
    cell::{Cell, RefCell},
    fmt,
};

/// Generic event emitted after any attribute changes.
pub const CHANGED: &str = "changed";

/// Event emitted by boards (and proxied by players) after a shot resolves.
pub const EVENT_SHOT: &str = "shot";

/// Name of the attribute specific change event, e.g. `changed:activated`.
pub fn changed_event(attribute: &str) -> String {
    format!("{}:{}", CHANGED, attribute)
}

/// Snapshot of an attribute value carried by change events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Size(usize),
    Text(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Size(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(String::from(v))
    }
}

/// Payload of `changed` and `changed:<attribute>` events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub attribute: &'static str,
    pub old_value: Value,
    pub new_value: Value,
}

/// Handle returned by [`EventEmitter::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Rc<dyn Fn(&str, &E)>;

struct Registration<E> {
    id: ListenerId,
    event: Cow<'static, str>,
    listener: Listener<E>,
}

struct Registry<E> {
    next_id: u64,
    listeners: Vec<Registration<E>>,
}

/// Named-event observer list.
///
/// Cloning an emitter yields another handle to the same listener list, which
/// is how an owning entity forwards the events of an entity it owns.
pub struct EventEmitter<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register `listener` for events named `event`. The listener receives the
    /// event name and the payload.
    pub fn on<F>(&self, event: impl Into<Cow<'static, str>>, listener: F) -> ListenerId
    where
        F: Fn(&str, &E) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push(Registration {
            id,
            event: event.into(),
            listener: Rc::new(listener),
        });
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|r| r.id != id);
        registry.listeners.len() != before
    }

    /// Call every listener registered for `event`, in registration order.
    ///
    /// Iterates over a snapshot, so listeners may subscribe or unsubscribe
    /// while being notified. Listeners added during an emission only see
    /// later emissions.
    pub fn emit(&self, event: &str, payload: &E) {
        let matching: Vec<Listener<E>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.event == event)
            .map(|r| Rc::clone(&r.listener))
            .collect();
        for listener in matching {
            listener(event, payload);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl<E> Clone for EventEmitter<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Entity that exposes an event stream.
pub trait Model {
    type Event;

    fn events(&self) -> &EventEmitter<Self::Event>;

    fn on<F>(&self, event: impl Into<Cow<'static, str>>, listener: F) -> ListenerId
    where
        F: Fn(&str, &Self::Event) + 'static,
    {
        self.events().on(event, listener)
    }

    fn off(&self, id: ListenerId) -> bool {
        self.events().off(id)
    }
}

/// Store `value` into `slot` and notify listeners if it differs from the
/// current value.
///
/// Emits [`CHANGED`] followed by `changed:<attribute>`, both with the same
/// [`Change`] wrapped by `wrap`. Returns whether anything changed.
pub fn set_attribute<T, E>(
    slot: &mut T,
    value: T,
    attribute: &'static str,
    events: &EventEmitter<E>,
    wrap: impl FnOnce(Change) -> E,
) -> bool
where
    T: PartialEq + Clone + Into<Value>,
{
    if *slot == value {
        return false;
    }
    let old_value = core::mem::replace(slot, value);
    let change = Change {
        attribute,
        old_value: old_value.into(),
        new_value: slot.clone().into(),
    };
    let payload = wrap(change);
    events.emit(CHANGED, &payload);
    events.emit(&changed_event(attribute), &payload);
    true
}

/// [`set_attribute`] for `Copy` attributes kept in a [`Cell`] on a shared
/// entity. The cell holds the new value before listeners run.
pub fn set_cell_attribute<T, E>(
    slot: &Cell<T>,
    value: T,
    attribute: &'static str,
    events: &EventEmitter<E>,
    wrap: impl FnOnce(Change) -> E,
) -> bool
where
    T: PartialEq + Copy + Into<Value>,
{
    let mut previous = slot.get();
    if previous == value {
        return false;
    }
    slot.set(value);
    set_attribute(&mut previous, value, attribute, events, wrap)
}

/// [`set_attribute`] for attributes kept in a [`RefCell`] on a shared entity.
/// The borrow is released before listeners run, so they may read the entity.
pub fn set_ref_cell_attribute<T, E>(
    slot: &RefCell<T>,
    value: T,
    attribute: &'static str,
    events: &EventEmitter<E>,
    wrap: impl FnOnce(Change) -> E,
) -> bool
where
    T: PartialEq + Clone + Into<Value>,
{
    let mut previous = slot.borrow().clone();
    if previous == value {
        return false;
    }
    *slot.borrow_mut() = value.clone();
    set_attribute(&mut previous, value, attribute, events, wrap)
}
