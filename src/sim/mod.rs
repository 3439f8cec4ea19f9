//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws or touches the platform:
//! - Fixed tick, per-tick units only
//! - Randomness comes from the session's own RNG
//! - Rendering reads the state, never mutates it

pub mod collision;
pub mod effects;
pub mod game;
pub mod rect;
pub mod registry;
pub mod state;
pub mod tick;

pub use collision::{first_intersecting, intersects, paddle_bounce_velocity};
pub use effects::{FloatingText, Particle, PowerUp, PowerUpKind};
pub use game::{Game, GamePhase};
pub use rect::Rect;
pub use registry::{Registry, Transient};
pub use state::{Ball, BallStep, Brick, Direction, GameSession, Paddle, Trail};
pub use tick::{TickInput, TickOutcome, tick};
