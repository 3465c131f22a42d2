//! HUD Presenter - everything drawn over the office each frame.
//!
//! Drawing reads office state. A frame also advances the door and overlay
//! animations: finished door animations settle their door's transition, and
//! overlay hooks switch the scene and move power usage. The HUD itself writes
//! the player's toxicity (see [`toxicity`]) and the visibility of its buttons.

pub mod buttons;
pub mod debug;
pub mod toxicity;

use glam::Vec2;
use office_rules::RuntimeConfig;

use crate::collaborators::{Canvas, Color, Engine, TextStyle};
use crate::controls::advance_door_animations;
use crate::panels::PanelSwitch;
use crate::session::OfficeSession;

/// Text styles for the HUD readouts.
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub power: TextStyle,
    pub usage: TextStyle,
    pub time: TextStyle,
    pub night: TextStyle,
}

impl HudText {
    pub fn new(font: &str) -> Self {
        Self {
            power: TextStyle::new(font, 26, Color::WHITE),
            usage: TextStyle::new(font, 26, Color::WHITE),
            time: TextStyle::new(font, 26, Color::WHITE),
            night: TextStyle::new(font, 22, Color::WHITE),
        }
    }
}

/// Rebuild the HUD text and put both overlays back in their hidden, idle state.
pub fn reset(session: &mut OfficeSession, config: &RuntimeConfig) {
    let font = session
        .definition
        .text_font
        .as_deref()
        .unwrap_or(&config.default_font);
    session.hud = Some(HudText::new(font));

    session.camera.reset();
    session.mask.reset();
}

/// Draw one HUD frame.
pub fn draw<E>(session: &mut OfficeSession, engine: &mut E, config: &RuntimeConfig, delta_seconds: f32)
where
    E: Engine + ?Sized,
{
    let OfficeSession {
        state,
        sounds,
        registry,
        camera,
        mask,
        door_animations,
        hud,
        ..
    } = session;

    let Some(text) = hud.as_ref() else {
        tracing::warn!(target: "office", "draw_hud: HUD not reset for this session");
        return;
    };

    advance_door_animations(state, door_animations, delta_seconds);
    for panel in [&mut *camera, &mut *mask] {
        panel.run(&mut state.power, sounds, engine, delta_seconds);
        draw_panel(panel, engine);
    }

    engine.draw_text(
        &text.power,
        &format!("Power Left: {}%", state.power.level),
        Vec2::new(38.0, 601.0),
    );

    engine.draw_text(&text.usage, "Usage: ", Vec2::new(38.0, 637.0));
    let usage_icon = engine.texture(&format!("e.usage_{}", state.power.usage_bars() + 1));
    engine.draw_texture(&usage_icon, Vec2::new(136.0, 634.0), Color::WHITE);

    let clock = engine.clock();
    let clock_x = if clock.is_midnight() { 1160.0 } else { 1165.0 };
    engine.draw_text(&text.time, &clock.hud_label(), Vec2::new(clock_x, 10.0));

    engine.draw_text(
        &text.night,
        &format!("Night {}", state.night),
        Vec2::new(1160.0, 45.0),
    );

    buttons::draw_ui_buttons(registry, state, engine, Vec2::from(config.screen_scale));

    if state.settings.toxic {
        toxicity::update(state, mask, sounds, engine, config.toxic_rate, delta_seconds);
    }

    if config.debug_mode {
        debug::draw_overlay(state, engine);
    }
}

fn draw_panel<C: Canvas + ?Sized>(panel: &PanelSwitch, canvas: &mut C) {
    if !panel.animation.is_visible() {
        return;
    }
    if let Some(frame) = panel.animation.current_frame() {
        canvas.draw_texture(frame, Vec2::ZERO, Color::WHITE);
    }
}
