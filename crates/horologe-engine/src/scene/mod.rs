//! Scene (mesh stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic mesh descriptors
//! - hand out stable handles so callers can rewrite transforms in place
//! - provide deterministic paint ordering (layer + insertion order)
//! - define the write-only sink contract renderers implement
//!
//! Shape-specific geometry lives under `scene::shapes`.

mod cmd;
mod layer;
mod list;
mod sink;

pub mod shapes;

pub use cmd::MeshCmd;
pub use layer::{Layer, SortKey};
pub use list::{MeshHandle, MeshItem, MeshList};
pub use shapes::Shape;
pub use sink::{RecordingSink, SceneSink};
