//! Mind Mapper editor: input events, hover selection, panning, and the
//! [`MindMapper`] controller tying the tree, grid, and viewport together.

pub mod input;
pub mod mapper;
pub mod pan;
pub mod selection;

pub use input::{InputEvent, PointerButton};
pub use mapper::{Cursor, MindMapper};
pub use pan::PanState;
pub use selection::{Selection, Transition};
