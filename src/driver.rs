//! Fixed-rate frame driver
//!
//! One loop iteration = one tick: poll input, update the game, build the frame, hand it
//! to the presenter, then sleep off the rest of the tick. Quitting is checked before the
//! tick runs, never in the middle of one.

use std::time::{Duration, Instant};

use crate::renderer::{Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{Game, GamePhase, TickInput};

/// Supplies one input snapshot per tick
pub trait InputSource {
    /// The game is offered read-only for sources that react to it (autopilot, scripts)
    fn poll(&mut self, game: &Game) -> TickInput;
}

/// Consumes one frame per tick (rasterizer, recorder, logger)
pub trait FramePresenter {
    fn present(&mut self, frame: &Frame);
}

/// Paces the loop to a fixed tick duration
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick: Duration,
    next: Option<Instant>,
}

impl FrameClock {
    /// A zero duration disables pacing
    pub fn new(tick: Duration) -> Self {
        Self { tick, next: None }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tick_duration())
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    /// Sleep until the next tick is due. When running behind, the schedule restarts
    /// from now instead of bursting to catch up.
    pub fn wait(&mut self) {
        if self.tick.is_zero() {
            return;
        }
        let now = Instant::now();
        let due = self.next.unwrap_or(now) + self.tick;
        if due > now {
            std::thread::sleep(due - now);
            self.next = Some(due);
        } else {
            self.next = Some(now);
        }
    }
}

/// Run until the input source asks to quit. Returns the number of ticks run.
pub fn run<I, P>(
    game: &mut Game,
    input: &mut I,
    presenter: &mut P,
    settings: &Settings,
    clock: &mut FrameClock,
) -> u64
where
    I: InputSource,
    P: FramePresenter,
{
    let mut ticks = 0u64;
    loop {
        let snapshot = input.poll(game);
        if snapshot.quit {
            log::info!("Quit requested after {ticks} ticks");
            break;
        }

        game.update(&snapshot);
        let frame = build_frame(game, settings);
        presenter.present(&frame);
        ticks += 1;

        clock.wait();
    }
    ticks
}

/// Demo player: starts games, launches, and chases the ball
#[derive(Debug, Clone)]
pub struct Autopilot {
    ticks: u64,
    /// Quit after this many ticks
    max_ticks: Option<u64>,
    /// Quit when a game ends instead of going back to the menu
    quit_on_end: bool,
}

impl Autopilot {
    pub fn new(max_ticks: Option<u64>, quit_on_end: bool) -> Self {
        Self {
            ticks: 0,
            max_ticks,
            quit_on_end,
        }
    }

    /// Held keys are toggled so the game sees a fresh press every other tick
    fn tap(&self) -> bool {
        self.ticks.is_multiple_of(2)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, game: &Game) -> TickInput {
        self.ticks += 1;
        let mut input = TickInput::default();
        if self.max_ticks.is_some_and(|max| self.ticks > max) {
            input.quit = true;
            return input;
        }

        match game.phase() {
            GamePhase::Menu => input.launch = self.tap(),
            GamePhase::Paused => input.pause = self.tap(),
            GamePhase::GameOver | GamePhase::Win => {
                if self.quit_on_end {
                    input.quit = true;
                } else {
                    input.menu = true;
                }
            }
            GamePhase::Playing => {
                let session = &game.session;
                let paddle_x = session.paddle.rect.center().x;

                let target = if !session.ball.active {
                    input.launch = self.tap();
                    paddle_x
                } else if session.ball.vel.y < 0.0 {
                    // Ball heading away: go for the lowest falling power-up
                    session
                        .powerups
                        .iter()
                        .max_by(|a, b| a.rect.y.total_cmp(&b.rect.y))
                        .map_or(session.ball.center().x, |p| p.rect.center().x)
                } else {
                    // Sway around the ball so bounces are not all straight up
                    let sway = (self.ticks as f32 * 0.02).sin() * session.paddle.rect.w * 0.3;
                    session.ball.center().x + sway
                };

                let dead_zone = session.paddle.speed;
                input.left = target < paddle_x - dead_zone;
                input.right = target > paddle_x + dead_zone;
            }
        }
        input
    }
}
