//! Scene Graph
//!
//! - [`SceneNode`]: local pose, scale and hierarchy links of one entity
//! - [`WorldTransform`]: cached world pose, derived from the hierarchy
//! - [`TransformGraph`]: the system owning both and keeping them in sync
//! - [`GraphSettings`]: graph configuration

pub mod node;
pub mod settings;
pub mod transform_graph;

pub use node::{ChildList, SceneNode, WorldTransform};
pub use settings::{GraphSettings, ReparentPolicy};
pub use transform_graph::TransformGraph;
