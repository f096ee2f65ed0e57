//! Fleet members and their hit tracking.

use alloc::{rc::Rc, string::String};
use core::{
    cell::{Cell, RefCell},
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::common::BoardError;
use crate::model::{self, Change, EventEmitter, Model};

static NEXT_SHIP_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique ship identifier, stable for the ship's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(usize);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct ShipInner {
    id: ShipId,
    name: RefCell<String>,
    size: usize,
    hit_parts_count: Cell<usize>,
    events: EventEmitter<Change>,
}

/// A ship in a player's fleet.
///
/// `Ship` is a shared handle: clones refer to the same ship, which is how
/// board cells point back at the ship they belong to. Equality is identity.
#[derive(Clone)]
pub struct Ship {
    inner: Rc<ShipInner>,
}

impl Ship {
    /// Create an undamaged ship with `size` parts.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            inner: Rc::new(ShipInner {
                id: ShipId(NEXT_SHIP_ID.fetch_add(1, Ordering::Relaxed)),
                name: RefCell::new(name.into()),
                size,
                hit_parts_count: Cell::new(0),
                events: EventEmitter::new(),
            }),
        }
    }

    pub fn id(&self) -> ShipId {
        self.inner.id
    }

    pub fn name(&self) -> String {
        self.inner.name.borrow().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) -> bool {
        model::set_ref_cell_attribute(&self.inner.name, name.into(), "name", &self.inner.events, |c| c)
    }

    pub fn size(&self) -> usize {
        self.inner.size
    }

    pub fn hit_parts_count(&self) -> usize {
        self.inner.hit_parts_count.get()
    }

    /// Record one more hit part. Returns the new hit count.
    pub fn take_hit(&self) -> Result<usize, BoardError> {
        let count = self.hit_parts_count();
        if count >= self.size() {
            return Err(BoardError::OverHit);
        }
        self.set_hit_parts_count(count + 1);
        Ok(count + 1)
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_parts_count() == self.size()
    }

    /// Force the ship into its sunk state. Calling it on a sunk ship does
    /// nothing. Board cells are left as they are; use `Board::sink_ship` or
    /// `Player::sink_ship` to mark them too.
    pub fn sink(&self) {
        self.set_hit_parts_count(self.size());
    }

    fn set_hit_parts_count(&self, count: usize) -> bool {
        model::set_cell_attribute(
            &self.inner.hit_parts_count,
            count,
            "hit_parts_count",
            &self.inner.events,
            |c| c,
        )
    }
}

impl Model for Ship {
    type Event = Change;

    fn events(&self) -> &EventEmitter<Change> {
        &self.inner.events
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Ship {}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ship")
            .field("id", &self.id())
            .field("name", &*self.inner.name.borrow())
            .field("size", &self.size())
            .field("hit_parts_count", &self.hit_parts_count())
            .finish()
    }
}
