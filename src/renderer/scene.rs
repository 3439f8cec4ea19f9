//! Scene building: turns the game into an ordered list of draw commands

use glam::Vec2;

use super::intent::{Frame, TextAnchor};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Game, GamePhase, GameSession, Rect, Trail};
use crate::{Color, with_alpha};

const HUD_TEXT_SIZE: f32 = 24.0;
const BANNER_TEXT_SIZE: f32 = 48.0;
const PROMPT_TEXT_SIZE: f32 = 22.0;

/// Build this tick's frame
pub fn build_frame(game: &Game, settings: &Settings) -> Frame {
    let mut frame = Frame::new(BLACK);

    if game.phase() == GamePhase::Menu {
        draw_menu(&mut frame, game.start_hovered());
        return frame;
    }

    let session = &game.session;
    if settings.effective_screen_shake() {
        frame.offset = session.shake_offset;
    }

    draw_session(&mut frame, session, settings);
    draw_hud(&mut frame, session);
    if settings.show_ticks {
        frame.text(
            Vec2::new(10.0, SCREEN_HEIGHT - 24.0),
            format!("T {}", game.play_ticks()),
            14.0,
            with_alpha(WHITE, 0.5),
            TextAnchor::TopLeft,
        );
    }

    match game.phase() {
        GamePhase::Paused => draw_banner(
            &mut frame,
            "PAUSED",
            WHITE,
            &["P: RESUME    ESC: MENU".to_string()],
        ),
        GamePhase::GameOver => draw_banner(
            &mut frame,
            "GAME OVER",
            RED,
            &[
                format!("FINAL SCORE: {}", session.score),
                "PRESS SPACE TO RETURN TO MENU".to_string(),
            ],
        ),
        GamePhase::Win => draw_banner(
            &mut frame,
            "YOU WIN!",
            YELLOW,
            &[
                format!("FINAL SCORE: {}", session.score),
                "PRESS SPACE TO RETURN TO MENU".to_string(),
            ],
        ),
        GamePhase::Playing if !session.ball.active => {
            frame.text(
                Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT * 0.6),
                "PRESS SPACE TO LAUNCH",
                PROMPT_TEXT_SIZE,
                with_alpha(WHITE, 0.7),
                TextAnchor::Center,
            );
        }
        _ => {}
    }

    frame
}

/// Play field, back to front
fn draw_session(frame: &mut Frame, session: &GameSession, settings: &Settings) {
    for brick in &session.bricks {
        frame.fill_rect(brick.rect, brick.color, 4.0);
    }

    frame.fill_rect(session.paddle.rect, BLUE, PADDLE_HEIGHT / 2.0);

    if settings.trails && session.ball.active {
        draw_trail(frame, &session.trail);
    }
    frame.circle(session.ball.center(), BALL_RADIUS, WHITE);

    for powerup in &session.powerups {
        let center = powerup.rect.center();
        frame.circle(center, POWERUP_SIZE / 2.0, powerup.kind.color());
        frame.text(
            center,
            powerup.kind.glyph(),
            POWERUP_SIZE * 0.8,
            BLACK,
            TextAnchor::Center,
        );
    }

    if settings.particles {
        for particle in &session.particles {
            let alpha = (particle.life as f32 / PARTICLE_MIN_LIFE as f32).min(1.0);
            frame.circle(particle.pos, particle.radius, with_alpha(particle.color, alpha));
        }
    }

    if settings.floating_text {
        for floater in &session.floaters {
            frame.text(
                floater.pos,
                floater.text.clone(),
                20.0,
                with_alpha(floater.color, floater.alpha()),
                TextAnchor::Center,
            );
        }
    }
}

/// Ball trail: older samples smaller and fainter
fn draw_trail(frame: &mut Frame, trail: &Trail) {
    let len = trail.len() as f32;
    for (i, point) in trail.iter().enumerate() {
        // t: 0 = oldest, 1 = newest
        let t = (i + 1) as f32 / len;
        let radius = BALL_RADIUS * (0.3 + 0.6 * t);
        frame.circle(*point, radius, with_alpha(WHITE, 0.4 * t));
    }
}

fn draw_hud(frame: &mut Frame, session: &GameSession) {
    frame.text(
        Vec2::new(10.0, 10.0),
        format!("SCORE: {}", session.score),
        HUD_TEXT_SIZE,
        WHITE,
        TextAnchor::TopLeft,
    );
    frame.text(
        Vec2::new(SCREEN_WIDTH - 120.0, 10.0),
        format!("LIVES: {}", session.lives),
        HUD_TEXT_SIZE,
        WHITE,
        TextAnchor::TopLeft,
    );
}

fn draw_banner(frame: &mut Frame, title: &str, color: Color, lines: &[String]) {
    // Dim the frozen field underneath
    frame.fill_rect(
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        with_alpha(BLACK, 0.6),
        0.0,
    );
    let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    frame.text(center, title, BANNER_TEXT_SIZE, color, TextAnchor::Center);
    for (i, line) in lines.iter().enumerate() {
        frame.text(
            center + Vec2::new(0.0, 50.0 + 32.0 * i as f32),
            line.clone(),
            PROMPT_TEXT_SIZE,
            WHITE,
            TextAnchor::Center,
        );
    }
}

fn draw_menu(frame: &mut Frame, hovered: bool) {
    frame.text(
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 3.0),
        "BRICK JUNIOR BALL",
        56.0,
        YELLOW,
        TextAnchor::Center,
    );

    let button = Game::start_button();
    let alpha = if hovered { 1.0 } else { 0.7 };
    frame.fill_rect(button, with_alpha(BLUE, alpha), 12.0);
    frame.outline_rect(button, WHITE, 12.0, 2.0);
    frame.text(
        button.center(),
        "START",
        PROMPT_TEXT_SIZE,
        WHITE,
        TextAnchor::Center,
    );
    frame.text(
        Vec2::new(SCREEN_WIDTH / 2.0, button.bottom() + 40.0),
        "PRESS SPACE OR CLICK START",
        18.0,
        with_alpha(WHITE, 0.6),
        TextAnchor::Center,
    );
}
