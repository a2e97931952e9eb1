//! Floorplan Core Library
//!
//! Platform-agnostic data model and interaction logic for the floorplan
//! viewer: document decoding, view transform, hit testing and the
//! pointer state machine.

pub mod document;
pub mod input;
pub mod loader;
pub mod schema;
pub mod view;

pub use document::{DOOR_DEPTH, Door, FloorplanDocument, Furniture, Region};
pub use hit_test::{TOOLTIP_OFFSET, hit_test, hits, tooltip_anchor};
pub use input::{DragState, InteractionController, ViewAction, ViewerEvent};
pub use loader::{DocumentLoader, LoadError, LoadResult};
pub use view::{MAX_SCALE, MIN_SCALE, ViewTransform};
