use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// An opaque, process-unique identifier.
///
/// Entities carry no data; systems key their component storage by them.
/// The value `0` is reserved as [`Entity::INVALID`] and is never issued by
/// an [`EntityAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(u64);

impl Entity {
    /// The reserved "no entity" sentinel.
    pub const INVALID: Entity = Entity(0);

    /// Wraps a raw identifier, e.g. one read back by a serializer.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues fresh entity identifiers.
///
/// Identifiers increase monotonically from 1 and are never reused for the
/// lifetime of the allocator. `allocate` takes `&self` and may be called
/// from any number of threads.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    counter: Mutex<u64>,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a previously unissued, non-zero entity.
    pub fn allocate(&self) -> Entity {
        let mut counter = self.counter.lock();
        *counter += 1;
        Entity(*counter)
    }

    /// Number of entities issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        *self.counter.lock()
    }
}
