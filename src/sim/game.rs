//! Game flow: menu, play, pause, and the two endings
//!
//! `Game` owns the session and decides which triggers mean something in which phase.
//! A trigger that does not apply to the current phase is ignored.

use glam::Vec2;

use super::rect::Rect;
use super::state::GameSession;
use super::tick::{Controls, TickInput, TickOutcome, tick};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused; nothing moves
    Paused,
    /// All lives lost
    GameOver,
    /// All bricks broken
    Win,
}

/// The game: phase plus the session it drives
#[derive(Debug, Clone)]
pub struct Game {
    phase: GamePhase,
    pub session: GameSession,
    /// Key states last tick (press edge detection)
    launch_held: bool,
    pause_held: bool,
    menu_held: bool,
    /// Last pointer position seen
    pointer: Vec2,
    /// Simulation ticks run in the current game
    play_ticks: u64,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            session: GameSession::new(seed),
            launch_held: false,
            pause_held: false,
            menu_held: false,
            pointer: Vec2::ZERO,
            play_ticks: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn play_ticks(&self) -> u64 {
        self.play_ticks
    }

    /// The menu's start button
    pub fn start_button() -> Rect {
        Rect::from_center(
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 40.0),
            220.0,
            50.0,
        )
    }

    /// Pointer is over the start button
    pub fn start_hovered(&self) -> bool {
        Self::start_button().contains_point(self.pointer)
    }

    /// Process one tick of input
    pub fn update(&mut self, input: &TickInput) {
        let launch_pressed = input.launch && !self.launch_held;
        self.launch_held = input.launch;
        let pause_pressed = input.pause && !self.pause_held;
        self.pause_held = input.pause;
        let menu_pressed = input.menu && !self.menu_held;
        self.menu_held = input.menu;
        self.pointer = input.pointer;

        match self.phase {
            GamePhase::Menu => {
                if launch_pressed || (input.click && self.start_hovered()) {
                    self.start();
                }
            }
            GamePhase::Playing => {
                if pause_pressed {
                    self.pause();
                    return;
                }
                let controls = Controls {
                    left: input.left,
                    right: input.right,
                    launch: launch_pressed || input.click,
                };
                self.play_ticks += 1;
                match tick(&mut self.session, &controls) {
                    TickOutcome::Continue => {}
                    TickOutcome::GameOver => self.set_phase(GamePhase::GameOver),
                    TickOutcome::Won => self.set_phase(GamePhase::Win),
                }
            }
            GamePhase::Paused => {
                if menu_pressed {
                    self.return_to_menu();
                } else if pause_pressed {
                    self.resume();
                }
            }
            GamePhase::GameOver | GamePhase::Win => {
                if menu_pressed || launch_pressed || input.click {
                    self.return_to_menu();
                }
            }
        }
    }

    /// MENU -> PLAYING, with a full session reset
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.session.reset();
        self.play_ticks = 0;
        log::info!(
            "New game: {} bricks, {} lives",
            self.session.bricks.len(),
            self.session.lives
        );
        self.set_phase(GamePhase::Playing);
        true
    }

    /// PLAYING -> PAUSED
    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.set_phase(GamePhase::Paused);
        true
    }

    /// PAUSED -> PLAYING
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.set_phase(GamePhase::Playing);
        true
    }

    /// PAUSED/GAMEOVER/WIN -> MENU. The session is left as is until the next start.
    pub fn return_to_menu(&mut self) -> bool {
        match self.phase {
            GamePhase::Paused | GamePhase::GameOver | GamePhase::Win => {
                self.set_phase(GamePhase::Menu);
                true
            }
            _ => false,
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if phase == GamePhase::GameOver || phase == GamePhase::Win {
            log::info!(
                "{:?} -> {:?} (score {}, lives {})",
                self.phase,
                phase,
                self.session.score,
                self.session.lives
            );
        } else {
            log::info!("{:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }
}
