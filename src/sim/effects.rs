//! Transient entities: particles, floating score text, falling power-ups

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::registry::Transient;
use crate::Color;
use crate::consts::*;

/// A spark thrown out of a broken brick
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Ticks left to live
    pub life: u32,
    pub radius: f32,
    /// Radius lost per tick
    pub shrink: f32,
}

impl Particle {
    /// A particle flying off `origin` in a random direction
    pub fn random<R: Rng>(origin: Vec2, color: Color, rng: &mut R) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed: f32 = rng.random_range(1.0..4.0);
        let life = rng.random_range(PARTICLE_MIN_LIFE..=PARTICLE_MAX_LIFE);
        let radius: f32 = rng.random_range(2.0..5.0);
        Self {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            color,
            life,
            radius,
            // Shrinks to nothing right as life runs out
            shrink: radius / life as f32,
        }
    }
}

impl Transient for Particle {
    fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
        self.radius -= self.shrink;
    }

    fn is_expired(&self) -> bool {
        self.life == 0 || self.radius <= 0.0
    }
}

/// Text that drifts upward and fades ("+100", power-up confirmations)
#[derive(Debug, Clone)]
pub struct FloatingText {
    pub pos: Vec2,
    pub vel: Vec2,
    pub text: String,
    pub color: Color,
    pub life: u32,
    pub max_life: u32,
}

impl FloatingText {
    pub fn new(pos: Vec2, text: impl Into<String>, color: Color) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, -FLOATER_RISE_SPEED),
            text: text.into(),
            color,
            life: FLOATER_LIFE,
            max_life: FLOATER_LIFE,
        }
    }

    /// Opacity, fading linearly with remaining life
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.life as f32 / self.max_life as f32
    }
}

impl Transient for FloatingText {
    fn update(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
    }

    fn is_expired(&self) -> bool {
        self.life == 0
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    WidenPaddle,
    ExtraLife,
}

impl PowerUpKind {
    /// Pick a kind, 50/50
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            PowerUpKind::WidenPaddle
        } else {
            PowerUpKind::ExtraLife
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PowerUpKind::WidenPaddle => CYAN,
            PowerUpKind::ExtraLife => MAGENTA,
        }
    }

    /// Single glyph drawn on the falling capsule
    pub fn glyph(&self) -> &'static str {
        match self {
            PowerUpKind::WidenPaddle => "W",
            PowerUpKind::ExtraLife => "+",
        }
    }

    /// Text floated when collected
    pub fn confirmation(&self) -> &'static str {
        match self {
            PowerUpKind::WidenPaddle => "WIDE PADDLE",
            PowerUpKind::ExtraLife => "+1 LIFE",
        }
    }
}

/// A capsule falling toward the paddle
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub rect: Rect,
    pub vel: Vec2,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(center: Vec2, kind: PowerUpKind) -> Self {
        Self {
            rect: Rect::from_center(center, POWERUP_SIZE, POWERUP_SIZE),
            vel: Vec2::new(0.0, POWERUP_FALL_SPEED),
            kind,
        }
    }
}

impl Transient for PowerUp {
    fn update(&mut self) {
        self.rect.translate(self.vel);
    }

    /// Gone once fully below the screen; paddle pickup is handled by the session
    fn is_expired(&self) -> bool {
        self.rect.top() > SCREEN_HEIGHT
    }
}
