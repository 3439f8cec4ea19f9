//! Collision detection and response for axis-aligned rectangles
//!
//! Everything solid is a `Rect`, so detection is a plain overlap test. The interesting
//! part is the paddle response: where the ball lands on the paddle decides where it goes.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::{BALL_MAX_SPEED_X, BALL_MIN_SPEED_Y};

/// Overlap test with inclusive edges: rectangles that only touch count as overlapping
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() <= b.right() && b.left() <= a.right() && a.top() <= b.bottom() && b.top() <= a.bottom()
}

/// Index of the first rectangle in `others` overlapping `rect`
///
/// First match wins and the result depends on collection order: when the ball straddles
/// two bricks, the one stored earlier breaks.
pub fn first_intersecting<'a, I>(rect: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    others.into_iter().position(|other| intersects(rect, other))
}

/// Normalized hit position along the paddle: 0 = center, -1/+1 = edges
pub fn paddle_hit_offset(ball: &Rect, paddle: &Rect) -> f32 {
    let half_width = paddle.w / 2.0;
    ((ball.center().x - paddle.center().x) / half_width).clamp(-1.0, 1.0)
}

/// Velocity after the ball bounces off the paddle
///
/// Always leaves upward. Horizontal speed is replaced by the hit offset scaled to the
/// maximum, so off-center hits steer the ball.
pub fn paddle_bounce_velocity(ball: &Rect, vel: Vec2, paddle: &Rect) -> Vec2 {
    let offset = paddle_hit_offset(ball, paddle);
    let vy = vel.y.abs().max(BALL_MIN_SPEED_Y);
    Vec2::new(offset * BALL_MAX_SPEED_X, -vy)
}
