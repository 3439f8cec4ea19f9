//! Brick Junior Ball - a classic brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Simulation (paddle/ball/brick physics, effects, game state machine)
//! - `renderer`: Render intents emitted once per tick for an external rasterizer
//! - `driver`: Fixed-rate frame loop wiring input, simulation and presentation
//! - `settings`: User preferences

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Linear RGBA color, each channel in 0.0..=1.0
pub type Color = [f32; 4];

/// Build an opaque color from 8-bit channels
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Same color with a different alpha
#[inline]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}

/// Game configuration constants
///
/// All distances are pixels, all velocities are pixels per tick.
pub mod consts {
    use crate::{Color, rgb};

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Distance from the bottom of the screen to the paddle top
    pub const PADDLE_BOTTOM_GAP: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Width while the WidenPaddle power-up is in effect
    pub const PADDLE_WIDE_WIDTH: f32 = 150.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Horizontal launch speed (sign picked at random)
    pub const BALL_LAUNCH_SPEED_X: f32 = 4.0;
    /// Vertical launch speed (always upward)
    pub const BALL_LAUNCH_SPEED_Y: f32 = 5.0;
    /// Horizontal speed when the ball leaves the paddle edge
    pub const BALL_MAX_SPEED_X: f32 = 6.0;
    /// Vertical speed floor applied on paddle bounce
    pub const BALL_MIN_SPEED_Y: f32 = 4.0;
    /// Ball trail samples kept
    pub const TRAIL_LENGTH: usize = 12;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_OFFSET_LEFT: f32 = 35.0;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = (SCREEN_WIDTH / (BRICK_WIDTH + BRICK_PADDING)) as usize;

    /// Scoring and lives
    pub const POINTS_PER_BRICK: u64 = 100;
    pub const STARTING_LIVES: u32 = 3;

    /// Effects
    pub const PARTICLES_PER_BURST: usize = 12;
    pub const PARTICLE_MIN_LIFE: u32 = 20;
    pub const PARTICLE_MAX_LIFE: u32 = 40;
    pub const PARTICLE_GRAVITY: f32 = 0.15;
    pub const FLOATER_LIFE: u32 = 45;
    pub const FLOATER_RISE_SPEED: f32 = 1.0;
    pub const POWERUP_CHANCE: f64 = 0.15;
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_FALL_SPEED: f32 = 3.0;

    /// Screen shake (ticks, pixels)
    pub const SHAKE_PADDLE_TICKS: u32 = 4;
    pub const SHAKE_BRICK_TICKS: u32 = 8;
    pub const SHAKE_MAGNITUDE: f32 = 4.0;

    /// Palette
    pub const WHITE: Color = rgb(255, 255, 255);
    pub const BLACK: Color = rgb(0, 0, 0);
    pub const RED: Color = rgb(255, 60, 60);
    pub const BLUE: Color = rgb(60, 100, 255);
    pub const GREEN: Color = rgb(60, 255, 60);
    pub const YELLOW: Color = rgb(255, 255, 60);
    pub const CYAN: Color = rgb(60, 230, 255);
    pub const MAGENTA: Color = rgb(255, 80, 220);
}
