//! Runtime Type Tags
//!
//! Component data crosses the dispatch boundary type-erased, so every
//! component type and every system type is identified by a stable 64-bit
//! tag: the xxh3 hash of its type name. Tags are plain values; comparing or
//! hashing them is O(1).

use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// A stable identifier for a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentTypeTag(u64);

impl ComponentTypeTag {
    /// Tag of a Rust component type.
    #[inline]
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }

    /// Tag of an arbitrary type name (e.g. one read from a scene file).
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(xxh3_64(name.as_bytes()))
    }

    #[inline]
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// A stable identifier for a system type.
///
/// Built exactly like [`ComponentTypeTag`] but kept as its own type so the
/// registry cannot confuse "what is owned" with "who owns it".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SystemId(u64);

impl SystemId {
    #[inline]
    #[must_use]
    pub fn of<S: 'static>() -> Self {
        Self::from_name(std::any::type_name::<S>())
    }

    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(xxh3_64(name.as_bytes()))
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Marks a type as component data that can be offered to systems.
///
/// The default name is the Rust type path. Override `type_name` when the tag
/// has to stay stable across crate renames or module moves.
pub trait Component: 'static {
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    #[inline]
    fn type_tag() -> ComponentTypeTag
    where
        Self: Sized,
    {
        ComponentTypeTag::of::<Self>()
    }
}
