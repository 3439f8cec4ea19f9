//! Rendering module
//!
//! Decides what to draw, not how: the game is turned into a list of draw commands
//! that an external rasterizer consumes once per tick.

pub mod intent;
pub mod scene;

pub use intent::{DrawCmd, Frame, TextAnchor};
pub use scene::build_frame;
