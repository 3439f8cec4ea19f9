//! Game state and core simulation types
//!
//! `GameSession` owns every entity. Nothing outside the session holds a reference into it.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{intersects, paddle_bounce_velocity};
use super::effects::{FloatingText, Particle, PowerUp, PowerUpKind};
use super::rect::Rect;
use super::registry::Registry;
use crate::Color;
use crate::consts::*;

/// Horizontal paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Pixels moved per tick while a direction is held
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
                SCREEN_HEIGHT - PADDLE_BOTTOM_GAP,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    /// Shift by one tick of movement, then keep inside the screen
    pub fn slide(&mut self, direction: Direction) {
        let dx = match direction {
            Direction::Left => -self.speed,
            Direction::Right => self.speed,
        };
        self.rect.translate(Vec2::new(dx, 0.0));
        self.clamp_to_screen();
    }

    /// Resize around the current center, then keep inside the screen
    pub fn set_width(&mut self, width: f32) {
        self.rect.set_width(width);
        self.clamp_to_screen();
    }

    pub fn reset_width(&mut self) {
        self.set_width(PADDLE_WIDTH);
    }

    fn clamp_to_screen(&mut self) {
        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
        }
        if self.rect.right() > SCREEN_WIDTH {
            self.rect.set_right(SCREEN_WIDTH);
        }
    }
}

/// Bounded history of recent ball centers (oldest first)
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_LENGTH)
    }
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, dropping the oldest past capacity
    pub fn record(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vec2> + '_ {
        self.points.iter()
    }
}

/// What happened to the ball during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallStep {
    /// Ball is resting on the paddle
    Idle,
    Moved,
    /// Ball dropped below the screen
    Lost,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    /// False while resting on the paddle, waiting for launch
    pub active: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
                BALL_RADIUS * 2.0,
                BALL_RADIUS * 2.0,
            ),
            vel: Vec2::ZERO,
            active: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Sit centered on top of the paddle (no-op once launched)
    pub fn rest_on(&mut self, paddle: &Paddle) {
        if self.active {
            return;
        }
        self.rect.set_center_x(paddle.rect.center().x);
        self.rect.set_bottom(paddle.rect.top());
        self.vel = Vec2::ZERO;
    }

    /// Launch upward with a random horizontal sign. Returns false if already moving.
    pub fn launch<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.active {
            return false;
        }
        let vx = if rng.random_bool(0.5) {
            BALL_LAUNCH_SPEED_X
        } else {
            -BALL_LAUNCH_SPEED_X
        };
        self.vel = Vec2::new(vx, -BALL_LAUNCH_SPEED_Y);
        self.active = true;
        true
    }

    /// Advance one tick and reflect off the side and top walls
    ///
    /// Walls flip velocity without pushing the ball back inside, so it may sit past an
    /// edge for a tick.
    pub fn step(&mut self, trail: &mut Trail) -> BallStep {
        if !self.active {
            return BallStep::Idle;
        }

        self.rect.translate(self.vel);
        trail.record(self.center());

        if self.rect.left() <= 0.0 || self.rect.right() >= SCREEN_WIDTH {
            self.vel.x = -self.vel.x;
        }
        if self.rect.top() <= 0.0 {
            self.vel.y = -self.vel.y;
        }
        if self.rect.top() > SCREEN_HEIGHT {
            return BallStep::Lost;
        }

        BallStep::Moved
    }

    /// Bounce off the paddle if overlapping and falling. Returns true on bounce.
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle) -> bool {
        if !self.active || self.vel.y <= 0.0 || !intersects(&self.rect, &paddle.rect) {
            return false;
        }
        self.vel = paddle_bounce_velocity(&self.rect, self.vel, &paddle.rect);
        // Lift out so the next tick does not start inside the paddle
        self.rect.set_bottom(paddle.rect.top());
        true
    }

    /// Vertical flip after a brick hit; no push-out, corners can clip
    pub fn bounce_off_brick(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// A brick; exists until hit once
#[derive(Debug, Clone)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
}

impl Brick {
    /// Row color: two red rows, two yellow, then green
    pub fn row_color(row: usize) -> Color {
        match row {
            0 | 1 => RED,
            2 | 3 => YELLOW,
            _ => GREEN,
        }
    }

    /// The level layout, row by row
    pub fn grid() -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let x = col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT;
                let y = row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP;
                bricks.push(Brick {
                    rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                    color: Self::row_color(row),
                });
            }
        }
        bricks
    }
}

/// Everything belonging to one play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live bricks; a hit brick is removed for good
    pub bricks: Vec<Brick>,
    pub particles: Registry<Particle>,
    pub floaters: Registry<FloatingText>,
    pub powerups: Registry<PowerUp>,
    pub trail: Trail,
    pub score: u64,
    pub lives: u32,
    /// Ticks of screen shake remaining
    pub shake_ticks: u32,
    /// Frame offset for the current tick's shake
    pub shake_offset: Vec2,
    rng: Pcg32,
}

impl GameSession {
    /// Fresh session with a full brick grid
    pub fn new(seed: u64) -> Self {
        let mut session = Self {
            paddle: Paddle::default(),
            ball: Ball::new(),
            bricks: Vec::new(),
            particles: Registry::new(),
            floaters: Registry::new(),
            powerups: Registry::new(),
            trail: Trail::default(),
            score: 0,
            lives: STARTING_LIVES,
            shake_ticks: 0,
            shake_offset: Vec2::ZERO,
            rng: Pcg32::seed_from_u64(seed),
        };
        session.reset();
        session
    }

    /// Back to the start of a game: new bricks, parked ball, score and lives restored
    ///
    /// The RNG keeps running so consecutive games differ.
    pub fn reset(&mut self) {
        self.paddle = Paddle::default();
        self.ball = Ball::new();
        self.ball.rest_on(&self.paddle);
        self.bricks = Brick::grid();
        self.particles.clear();
        self.floaters.clear();
        self.powerups.clear();
        self.trail.clear();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.shake_ticks = 0;
        self.shake_offset = Vec2::ZERO;
    }

    /// Launch the parked ball. No-op if it is already moving.
    pub fn launch_ball(&mut self) -> bool {
        self.ball.launch(&mut self.rng)
    }

    /// Start (or extend) a screen-shake pulse
    pub fn shake(&mut self, ticks: u32) {
        self.shake_ticks = self.shake_ticks.max(ticks);
    }

    /// Advance the shake countdown, rolling this tick's frame offset
    pub fn update_shake(&mut self) {
        if self.shake_ticks > 0 {
            self.shake_ticks -= 1;
            self.shake_offset = Vec2::new(
                self.rng.random_range(-SHAKE_MAGNITUDE..=SHAKE_MAGNITUDE),
                self.rng.random_range(-SHAKE_MAGNITUDE..=SHAKE_MAGNITUDE),
            );
        } else {
            self.shake_offset = Vec2::ZERO;
        }
    }

    /// Ball fell out: one life down, ball parked, paddle back to base width
    pub fn lose_ball(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.ball.active = false;
        self.paddle.reset_width();
        self.ball.rest_on(&self.paddle);
        self.trail.clear();
        log::debug!("Ball lost, {} lives left", self.lives);
    }

    /// Remove brick `index` and play out its destruction
    pub fn break_brick(&mut self, index: usize) {
        let brick = self.bricks.remove(index);
        let center = brick.rect.center();

        self.ball.bounce_off_brick();
        self.score += POINTS_PER_BRICK;
        self.shake(SHAKE_BRICK_TICKS);

        for _ in 0..PARTICLES_PER_BURST {
            let particle = Particle::random(center, brick.color, &mut self.rng);
            self.particles.spawn(particle);
        }
        self.floaters.spawn(FloatingText::new(
            Vec2::new(center.x, brick.rect.top()),
            format!("+{POINTS_PER_BRICK}"),
            WHITE,
        ));

        if self.rng.random_bool(POWERUP_CHANCE) {
            let kind = PowerUpKind::random(&mut self.rng);
            self.powerups.spawn(PowerUp::new(center, kind));
            log::debug!("Power-up {kind:?} dropped at ({:.0}, {:.0})", center.x, center.y);
        }

        log::debug!(
            "Brick hit at ({:.0}, {:.0}), score {}, {} bricks left",
            center.x,
            center.y,
            self.score,
            self.bricks.len()
        );
    }

    /// Apply a collected power-up's effect
    pub fn apply_powerup(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::WidenPaddle => self.paddle.set_width(PADDLE_WIDE_WIDTH),
            PowerUpKind::ExtraLife => self.lives += 1,
        }
        let at = Vec2::new(self.paddle.rect.center().x, self.paddle.rect.top() - 10.0);
        self.floaters
            .spawn(FloatingText::new(at, kind.confirmation(), kind.color()));
        log::debug!("Power-up {kind:?} collected, lives {}", self.lives);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_layout() {
        let bricks = Brick::grid();
        assert_eq!(BRICK_COLS, 9);
        assert_eq!(bricks.len(), 45);
        assert_eq!(bricks[0].rect.position(), Vec2::new(35.0, 50.0));
        assert_eq!(bricks[0].color, RED);
        assert_eq!(bricks[2 * BRICK_COLS].color, YELLOW);
        assert_eq!(bricks[4 * BRICK_COLS].color, GREEN);
        assert!(bricks.iter().all(|b| b.rect.right() <= SCREEN_WIDTH));
    }

    #[test]
    fn test_paddle_clamps_at_edges() {
        let mut paddle = Paddle::default();
        for _ in 0..200 {
            paddle.slide(Direction::Left);
        }
        assert_eq!(paddle.rect.left(), 0.0);
        for _ in 0..200 {
            paddle.slide(Direction::Right);
        }
        assert_eq!(paddle.rect.right(), SCREEN_WIDTH);
    }

    #[test]
    fn test_paddle_widen_at_edge_stays_on_screen() {
        let mut paddle = Paddle::default();
        for _ in 0..200 {
            paddle.slide(Direction::Right);
        }
        paddle.set_width(PADDLE_WIDE_WIDTH);
        assert_eq!(paddle.rect.w, PADDLE_WIDE_WIDTH);
        assert_eq!(paddle.rect.right(), SCREEN_WIDTH);
        paddle.reset_width();
        assert_eq!(paddle.rect.w, PADDLE_WIDTH);
    }

    proptest! {
        #[test]
        fn prop_paddle_always_on_screen(
            moves in proptest::collection::vec((any::<bool>(), 0u8..4), 0..400),
        ) {
            let mut paddle = Paddle::default();
            for (left, action) in moves {
                match action {
                    0 => paddle.set_width(PADDLE_WIDE_WIDTH),
                    1 => paddle.reset_width(),
                    _ => paddle.slide(if left { Direction::Left } else { Direction::Right }),
                }
                prop_assert!(paddle.rect.left() >= 0.0);
                prop_assert!(paddle.rect.right() <= SCREEN_WIDTH);
            }
        }
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut trail = Trail::with_capacity(3);
        for i in 0..5 {
            trail.record(Vec2::new(i as f32, 0.0));
        }
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_ball_rests_on_paddle() {
        let paddle = Paddle::default();
        let mut ball = Ball::new();
        ball.rest_on(&paddle);
        assert_eq!(ball.center().x, paddle.rect.center().x);
        assert_eq!(ball.rect.bottom(), paddle.rect.top());
        assert_eq!(ball.vel, Vec2::ZERO);

        let mut trail = Trail::default();
        assert_eq!(ball.step(&mut trail), BallStep::Idle);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_launch_only_when_inactive() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new();
        assert!(ball.launch(&mut rng));
        assert!(ball.active);
        assert_eq!(ball.vel.x.abs(), BALL_LAUNCH_SPEED_X);
        assert_eq!(ball.vel.y, -BALL_LAUNCH_SPEED_Y);

        let vel = ball.vel;
        assert!(!ball.launch(&mut rng));
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_ball_reflects_off_left_wall() {
        let mut ball = Ball::new();
        ball.active = true;
        ball.rect.set_left(4.0);
        ball.vel = Vec2::new(-4.0, -2.0);
        let mut trail = Trail::default();

        assert_eq!(ball.step(&mut trail), BallStep::Moved);
        assert!(ball.vel.x > 0.0);
        assert!(ball.rect.left() >= 0.0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_ball_reflects_off_right_wall_and_ceiling() {
        let mut ball = Ball::new();
        ball.active = true;
        ball.rect.set_right(SCREEN_WIDTH - 2.0);
        ball.rect.y = 3.0;
        ball.vel = Vec2::new(4.0, -4.0);
        let mut trail = Trail::default();

        ball.step(&mut trail);
        assert_eq!(ball.vel, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_ball_lost_below_screen() {
        let mut ball = Ball::new();
        ball.active = true;
        ball.rect.y = SCREEN_HEIGHT - 2.0;
        ball.vel = Vec2::new(0.0, 5.0);
        let mut trail = Trail::default();

        assert_eq!(ball.step(&mut trail), BallStep::Lost);
        // Reporting only; the session decides what a lost ball costs
        assert!(ball.active);
    }

    #[test]
    fn test_paddle_bounce_requires_downward_motion() {
        let paddle = Paddle::default();
        let mut ball = Ball::new();
        ball.active = true;
        ball.rect.set_center_x(paddle.rect.center().x);
        ball.rect.y = paddle.rect.top() - 10.0;

        ball.vel = Vec2::new(0.0, -5.0);
        assert!(!ball.bounce_off_paddle(&paddle));
        assert_eq!(ball.vel.y, -5.0);

        ball.vel = Vec2::new(2.0, 5.0);
        assert!(ball.bounce_off_paddle(&paddle));
        assert_eq!(ball.vel.x, 0.0);
        assert!(ball.vel.y < 0.0);
        assert_eq!(ball.rect.bottom(), paddle.rect.top());
    }

    #[test]
    fn test_paddle_bounce_at_right_edge() {
        let paddle = Paddle::default();
        let mut ball = Ball::new();
        ball.active = true;
        ball.rect.set_center_x(paddle.rect.right());
        ball.rect.y = paddle.rect.top() - 5.0;
        ball.vel = Vec2::new(-3.0, 4.0);

        assert!(ball.bounce_off_paddle(&paddle));
        assert_eq!(ball.vel.x, BALL_MAX_SPEED_X);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_break_brick_bookkeeping() {
        let mut session = GameSession::new(3);
        session.ball.active = true;
        session.ball.vel = Vec2::new(2.0, -4.0);
        let total = session.bricks.len();
        let first = session.bricks[0].rect;

        session.break_brick(0);
        assert_eq!(session.bricks.len(), total - 1);
        assert_ne!(session.bricks[0].rect, first);
        assert_eq!(session.ball.vel, Vec2::new(2.0, 4.0));
        assert_eq!(session.score, POINTS_PER_BRICK);
        assert_eq!(session.particles.len(), PARTICLES_PER_BURST);
        assert_eq!(session.floaters.len(), 1);
        assert_eq!(session.floaters.iter().next().map(|f| f.text.as_str()), Some("+100"));
        assert!(session.powerups.len() <= 1);
        assert_eq!(session.shake_ticks, SHAKE_BRICK_TICKS);
    }

    #[test]
    fn test_powerup_drop_rate_and_position() {
        let mut breaks = 0;
        let mut drops = 0;
        for seed in 0..20 {
            let mut session = GameSession::new(seed);
            while !session.bricks.is_empty() {
                let center = session.bricks[0].rect.center();
                let before = session.powerups.len();
                session.break_brick(0);
                breaks += 1;
                if session.powerups.len() > before {
                    drops += 1;
                    let dropped = session.powerups.iter().last().map(|p| p.rect.center());
                    assert_eq!(dropped, Some(center));
                }
            }
        }
        assert_eq!(breaks, 20 * BRICK_ROWS * BRICK_COLS);
        let rate = drops as f64 / breaks as f64;
        assert!((0.10..0.20).contains(&rate), "drop rate {rate}");
    }

    #[test]
    fn test_lose_ball_resets_paddle_and_parks_ball() {
        let mut session = GameSession::new(3);
        session.paddle.set_width(PADDLE_WIDE_WIDTH);
        session.ball.active = true;
        session.ball.rect.y = SCREEN_HEIGHT + 50.0;

        session.lose_ball();
        assert_eq!(session.lives, STARTING_LIVES - 1);
        assert!(!session.ball.active);
        assert_eq!(session.paddle.rect.w, PADDLE_WIDTH);
        assert_eq!(session.ball.rect.bottom(), session.paddle.rect.top());
    }

    #[test]
    fn test_apply_powerups() {
        let mut session = GameSession::new(3);
        session.apply_powerup(PowerUpKind::ExtraLife);
        assert_eq!(session.lives, STARTING_LIVES + 1);
        session.apply_powerup(PowerUpKind::WidenPaddle);
        assert_eq!(session.paddle.rect.w, PADDLE_WIDE_WIDTH);
        assert_eq!(session.floaters.len(), 2);
    }

    #[test]
    fn test_shake_countdown() {
        let mut session = GameSession::new(3);
        session.shake(2);
        session.shake(1);
        assert_eq!(session.shake_ticks, 2);

        session.update_shake();
        session.update_shake();
        assert_eq!(session.shake_ticks, 0);
        assert!(session.shake_offset.x.abs() <= SHAKE_MAGNITUDE);

        session.update_shake();
        assert_eq!(session.shake_offset, Vec2::ZERO);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut session = GameSession::new(3);
        session.break_brick(0);
        session.score = 12_300;
        session.lives = 0;
        session.launch_ball();

        session.reset();
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, STARTING_LIVES);
        assert_eq!(session.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert!(!session.ball.active);
        assert!(session.particles.is_empty());
        assert!(session.floaters.is_empty());
        assert!(session.powerups.is_empty());
    }
}
