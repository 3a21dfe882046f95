//! Error Types
//!
//! This module defines the error types used throughout the runtime.
//!
//! # Overview
//!
//! The main error type [`OrreryError`] covers the failure modes of the
//! entity/system layer and the transform graph:
//! - Invalid or unknown entity arguments
//! - Structural edits that would break the parent/child tree
//! - Component data that no registered system accepts
//!
//! Type mismatches between offered component data and a system are *not*
//! errors: [`ComponentSystem::try_create`](crate::core::ComponentSystem::try_create)
//! reports them by returning `false` so that a dispatcher can try the next
//! system.
//!
//! # Usage
//!
//! ```rust,ignore
//! use orrery::errors::{OrreryError, Result};
//!
//! fn attach(graph: &mut TransformGraph, parent: Entity, child: Entity) -> Result<()> {
//!     graph.add_child(parent, child)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::core::entity::Entity;
use crate::core::type_tag::ComponentTypeTag;

/// The main error type for the runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrreryError {
    // ========================================================================
    // Invalid Arguments
    // ========================================================================
    /// The invalid entity sentinel was passed where a live entity is required.
    #[error("Invalid entity passed as {context}")]
    InvalidEntity {
        /// Which argument was invalid (e.g. "parent", "child")
        context: &'static str,
    },

    /// The entity has no transform node.
    #[error("Entity {entity} has no transform node ({context})")]
    MissingTransform {
        /// The entity that was looked up
        entity: Entity,
        /// Which argument was being resolved
        context: &'static str,
    },

    /// The child already has a parent and the graph does not reattach implicitly.
    #[error("Entity {child} is already a child of {parent}")]
    AlreadyParented {
        /// The child that was offered
        child: Entity,
        /// Its current parent
        parent: Entity,
    },

    /// An entity was offered as its own parent.
    #[error("Entity {0} cannot be attached to itself")]
    SelfParenting(Entity),

    /// The child is an ancestor of the requested parent.
    #[error("Attaching {child} under {parent} would create a cycle")]
    CyclicParenting {
        /// The requested parent, a descendant of `child`
        parent: Entity,
        /// The offered child
        child: Entity,
    },

    // ========================================================================
    // Dispatch Errors
    // ========================================================================
    /// No registered system accepted component data of this type.
    #[error("No system accepts component type {0}")]
    UnknownComponentType(ComponentTypeTag),
}

impl OrreryError {
    /// Returns `true` for the invalid-argument class of errors, i.e. an
    /// entity argument that is the sentinel, lacks a node, or would break
    /// the tree shape.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidEntity { .. }
                | Self::MissingTransform { .. }
                | Self::AlreadyParented { .. }
                | Self::SelfParenting(_)
                | Self::CyclicParenting { .. }
        )
    }
}

/// Alias for `Result<T, OrreryError>`.
pub type Result<T> = std::result::Result<T, OrreryError>;
