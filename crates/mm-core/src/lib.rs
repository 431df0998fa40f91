//! Mind Mapper core: geometry, snap grid, viewport transforms, and the
//! idea/branch forest with its connector routing.
//!
//! Nothing here draws or listens for input; see `mm-render` and `mm-editor`.

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod id;
pub mod measure;
pub mod model;
pub mod routing;
pub mod storage;
pub mod style;
pub mod viewport;

pub use config::MapperConfig;
pub use error::MapError;
pub use geometry::{Bounds, Point, distance};
pub use grid::{Grid, GridPoint};
pub use id::IdeaId;
pub use measure::{ApproxMeasure, TextMeasure};
pub use model::{Branch, Idea, MindMap};
pub use routing::{Anchor, Route, Side};
pub use storage::{BlobStore, MemoryStore};
pub use style::{Color, FontSpec, IdeaStyle, Length};
pub use viewport::{Playground, Viewport};
