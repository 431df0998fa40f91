//! Mind Mapper rendering: the [`Surface`] abstraction, the paint pass that
//! draws the grid and idea forest onto it, and per-frame hit testing.

pub mod hit;
pub mod paint;
pub mod recording;
pub mod scene;
pub mod surface;

pub use hit::{Selectable, hit_test, selectables};
pub use paint::{paint_children, paint_scene, paint_snap_marker};
pub use recording::{DrawOp, RecordingSurface};
pub use scene::SceneSurface;
pub use surface::{CursorStyle, Surface};
