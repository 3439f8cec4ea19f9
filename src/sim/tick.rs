//! Fixed-rate simulation tick
//!
//! One call advances a PLAYING session by exactly one tick. The order of the steps below
//! is part of the game's behaviour; moving them around changes what the player sees.

use glam::Vec2;

use super::collision::{first_intersecting, intersects};
use super::state::{BallStep, Direction, GameSession};
use crate::consts::*;

/// Input snapshot for a single tick, as delivered by the platform
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Launch key (space) held
    pub launch: bool,
    /// Pause key held (the state machine toggles on the press edge)
    pub pause: bool,
    /// "Back to menu" key held
    pub menu: bool,
    /// Quit requested (window closed etc.)
    pub quit: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
    /// Primary click happened this tick (edge, not held)
    pub click: bool,
}

/// Commands the session acts on this tick, derived from `TickInput` by the state machine
#[derive(Debug, Clone, Copy, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    /// Launch the parked ball (ignored while it is moving)
    pub launch: bool,
}

/// How a tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Last life lost
    GameOver,
    /// Last brick broken
    Won,
}

/// Advance the session by one tick
pub fn tick(session: &mut GameSession, controls: &Controls) -> TickOutcome {
    // 1. Paddle; a parked ball rides along
    if controls.left {
        session.paddle.slide(Direction::Left);
    }
    if controls.right {
        session.paddle.slide(Direction::Right);
    }
    session.ball.rest_on(&session.paddle);
    if controls.launch {
        session.launch_ball();
    }

    // 2. Ball motion and walls
    if session.ball.step(&mut session.trail) == BallStep::Lost {
        session.lose_ball();
        if session.lives == 0 {
            return TickOutcome::GameOver;
        }
    }

    // 3. Paddle bounce
    if session.ball.bounce_off_paddle(&session.paddle) {
        session.shake(SHAKE_PADDLE_TICKS);
    }

    // 4. Bricks: first match wins, one brick per tick
    let mut outcome = TickOutcome::Continue;
    if session.ball.active {
        let hit = first_intersecting(&session.ball.rect, session.bricks.iter().map(|b| &b.rect));
        if let Some(index) = hit {
            session.break_brick(index);
            if session.bricks.is_empty() {
                outcome = TickOutcome::Won;
            }
        }
    }

    // 5. Transient entities
    session.particles.tick();
    session.floaters.tick();

    let paddle_rect = session.paddle.rect;
    let mut collected = Vec::new();
    session.powerups.tick_with(|powerup| {
        if intersects(&powerup.rect, &paddle_rect) {
            collected.push(powerup.kind);
            true
        } else {
            false
        }
    });
    for kind in collected {
        session.apply_powerup(kind);
    }

    session.update_shake();

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::effects::{FloatingText, PowerUp, PowerUpKind};
    use crate::sim::registry::Transient;

    fn launched(seed: u64) -> GameSession {
        let mut session = GameSession::new(seed);
        tick(
            &mut session,
            &Controls {
                launch: true,
                ..Default::default()
            },
        );
        assert!(session.ball.active);
        session
    }

    /// Park the ball just above the bottom edge, falling, away from the paddle
    fn drop_ball(session: &mut GameSession) {
        if !session.ball.active {
            session.launch_ball();
        }
        session.ball.rect.set_center_x(50.0);
        session.ball.rect.y = SCREEN_HEIGHT - 1.0;
        session.ball.vel = Vec2::new(0.0, 5.0);
    }

    #[test]
    fn test_parked_ball_follows_paddle() {
        let mut session = GameSession::new(1);
        let controls = Controls {
            left: true,
            ..Default::default()
        };
        tick(&mut session, &controls);
        assert!(!session.ball.active);
        assert_eq!(session.ball.center().x, session.paddle.rect.center().x);
        assert_eq!(session.paddle.rect.left(), 350.0 - PADDLE_SPEED);
    }

    #[test]
    fn test_launch_moves_ball_same_tick() {
        let session = launched(1);
        assert!(session.ball.rect.bottom() < session.paddle.rect.top());
        assert_eq!(session.trail.len(), 1);
    }

    #[test]
    fn test_ball_lost_costs_a_life() {
        let mut session = launched(1);
        drop_ball(&mut session);
        let outcome = tick(&mut session, &Controls::default());
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(session.lives, STARTING_LIVES - 1);
        assert!(!session.ball.active);
    }

    #[test]
    fn test_three_drops_end_the_game() {
        let mut session = launched(1);
        let mut outcome = TickOutcome::Continue;
        for _ in 0..STARTING_LIVES {
            drop_ball(&mut session);
            outcome = tick(&mut session, &Controls::default());
        }
        assert_eq!(outcome, TickOutcome::GameOver);
        assert_eq!(session.lives, 0);
    }

    #[test]
    fn test_single_brick_per_tick() {
        let mut session = launched(9);
        // Straddle the gap between the first two bricks of the top row
        let a = session.bricks[0].rect;
        let b = session.bricks[1].rect;
        session.ball.rect.set_center_x((a.right() + b.left()) / 2.0);
        session.ball.rect.y = a.top() + 2.0;
        session.ball.vel = Vec2::new(0.0, -1.0);
        let total = session.bricks.len();

        tick(&mut session, &Controls::default());
        assert_eq!(session.bricks.len(), total - 1);
        // The earlier brick in the collection is the one that broke
        assert_eq!(session.bricks[0].rect, b);
        assert_eq!(session.score, POINTS_PER_BRICK);
        assert_eq!(session.ball.vel.y, 1.0);
    }

    #[test]
    fn test_last_brick_wins() {
        let mut session = launched(5);
        session.bricks.truncate(1);
        let target = session.bricks[0].rect;
        session.ball.rect.set_center_x(target.center().x);
        session.ball.rect.y = target.bottom() + 1.0;
        session.ball.vel = Vec2::new(0.0, -5.0);

        let outcome = tick(&mut session, &Controls::default());
        assert_eq!(outcome, TickOutcome::Won);
        assert!(session.bricks.is_empty());
    }

    #[test]
    fn test_brick_effects_update_in_the_hit_tick() {
        let mut session = launched(8);
        let target = session.bricks[0].rect;
        session.ball.rect.set_center_x(target.center().x);
        session.ball.rect.y = target.bottom() + 1.0;
        session.ball.vel = Vec2::new(0.0, -5.0);

        tick(&mut session, &Controls::default());
        let floater = session.floaters.iter().next().map(|f| (f.life, f.pos.y));
        assert_eq!(
            floater,
            Some((FLOATER_LIFE - 1, target.top() - FLOATER_RISE_SPEED))
        );
        assert!(session.particles.iter().all(|p| p.life < PARTICLE_MAX_LIFE));
    }

    #[test]
    fn test_powerup_collected_exactly_once() {
        let mut session = launched(2);
        let before = session.lives;
        let paddle_center = session.paddle.rect.center();
        // Sits on the paddle before and after this tick's fall
        session
            .powerups
            .spawn(PowerUp::new(paddle_center, PowerUpKind::ExtraLife));

        tick(&mut session, &Controls::default());
        assert!(session.powerups.is_empty());
        assert_eq!(session.lives, before + 1);

        tick(&mut session, &Controls::default());
        assert_eq!(session.lives, before + 1);
    }

    #[test]
    fn test_widen_powerup_sets_width() {
        let mut session = launched(2);
        let paddle_center = session.paddle.rect.center();
        session
            .powerups
            .spawn(PowerUp::new(paddle_center, PowerUpKind::WidenPaddle));

        tick(&mut session, &Controls::default());
        assert_eq!(session.paddle.rect.w, PADDLE_WIDE_WIDTH);
        assert!(session.floaters.iter().any(|f| f.text == "WIDE PADDLE"));
    }

    #[test]
    fn test_missed_powerup_has_no_effect() {
        let mut session = launched(2);
        let before = session.lives;
        session.powerups.spawn(PowerUp::new(
            Vec2::new(20.0, SCREEN_HEIGHT - 2.0),
            PowerUpKind::ExtraLife,
        ));
        for _ in 0..10 {
            tick(&mut session, &Controls::default());
        }
        assert!(session.powerups.is_empty());
        assert_eq!(session.lives, before);
    }

    #[test]
    fn test_floater_pruned_after_lifetime() {
        let mut session = launched(4);
        // Keep the ball out of trouble for the duration
        session.ball.active = false;
        session.floaters.spawn(FloatingText::new(Vec2::new(100.0, 300.0), "+100", WHITE));

        for _ in 0..FLOATER_LIFE - 1 {
            tick(&mut session, &Controls::default());
            assert_eq!(session.floaters.len(), 1);
        }
        tick(&mut session, &Controls::default());
        assert!(session.floaters.is_empty());
    }

    #[test]
    fn test_particles_eventually_drain() {
        let mut session = launched(4);
        session.ball.active = false;
        session.break_brick(0);
        assert_eq!(session.particles.len(), PARTICLES_PER_BURST);

        for _ in 0..PARTICLE_MAX_LIFE {
            let lives: Vec<u32> = session.particles.iter().map(|p| p.life).collect();
            tick(&mut session, &Controls::default());
            assert!(session.particles.iter().all(|p| !p.is_expired()));
            assert!(session.particles.len() <= lives.len());
        }
        assert!(session.particles.is_empty());
    }

    #[test]
    fn test_paddle_bounce_shakes_screen() {
        let mut session = launched(6);
        let paddle = session.paddle.rect;
        session.ball.rect.set_center_x(paddle.center().x);
        session.ball.rect.set_bottom(paddle.top() - 1.0);
        session.ball.vel = Vec2::new(1.0, 4.0);

        tick(&mut session, &Controls::default());
        assert!(session.ball.vel.y < 0.0);
        assert_eq!(session.shake_ticks, SHAKE_PADDLE_TICKS - 1);
    }
}
