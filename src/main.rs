//! Brick Junior Ball entry point
//!
//! Runs a headless session: the autopilot plays, and frames are summarised to the log
//! instead of rasterized. A windowed front end plugs in through `InputSource` and
//! `FramePresenter`.

use std::time::{SystemTime, UNIX_EPOCH};

use brick_junior_ball::Settings;
use brick_junior_ball::driver::{Autopilot, FrameClock, FramePresenter, run};
use brick_junior_ball::renderer::Frame;
use brick_junior_ball::sim::Game;

/// Five minutes of play at the default rate
const DEMO_TICK_LIMIT: u64 = 5 * 60 * 60;

/// Logs a one-line summary of every n-th frame
struct LogPresenter {
    frames: u64,
    every: u64,
}

impl FramePresenter for LogPresenter {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        if !self.frames.is_multiple_of(self.every) {
            return;
        }
        let (rects, circles, texts) = frame.census();
        let hud: Vec<&str> = frame.texts().take(2).collect();
        log::info!(
            "frame {}: {} rects, {} circles, {} texts, offset ({:.1}, {:.1}) | {}",
            self.frames,
            rects,
            circles,
            texts,
            frame.offset.x,
            frame.offset.y,
            hud.join("  ")
        );
    }
}

fn main() {
    env_logger::init();
    log::info!("Brick Junior Ball (headless) starting...");

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("Seed {seed}, {} ticks/s", settings.tick_rate);

    let mut game = Game::new(seed);
    let mut input = Autopilot::new(Some(DEMO_TICK_LIMIT), true);
    let mut presenter = LogPresenter {
        frames: 0,
        every: u64::from(settings.tick_rate.max(1)),
    };
    let mut clock = FrameClock::from_settings(&settings);

    let ticks = run(&mut game, &mut input, &mut presenter, &settings, &mut clock);

    log::info!(
        "Finished after {} ticks: {:?}, score {}, lives {}, {} bricks left",
        ticks,
        game.phase(),
        game.session.score,
        game.session.lives,
        game.session.bricks.len()
    );
}
