//! Mask exposure.

use glam::Vec2;
use office_rules::{Channel, OfficeState, SoundCues, ToxicityOutcome};

use crate::collaborators::{AssetCache, Canvas, Color, SoundPlayer};
use crate::panels::{toggle_mask, PanelSwitch};

const GAUGE_ICON: Vec2 = Vec2::new(25.0, 24.0);
const GAUGE_BAR: Vec2 = Vec2::new(30.0, 47.0);
const GAUGE_WIDTH: f32 = 114.0;
const GAUGE_HEIGHT: f32 = 20.0;

/// Step toxicity for one frame, force the mask off at the ceiling and draw the gauge.
pub fn update<E>(
    state: &mut OfficeState,
    mask: &mut PanelSwitch,
    sounds: &SoundCues,
    engine: &mut E,
    rate: f32,
    delta_seconds: f32,
) where
    E: AssetCache + Canvas + SoundPlayer + ?Sized,
{
    let player = &mut state.player;

    if player.advance_toxicity(delta_seconds, rate) == ToxicityOutcome::ForceMaskOff {
        tracing::info!(target: "office", toxic_level = player.toxic_level, "mask forced off");
        toggle_mask(player, mask, sounds, engine);
        engine.play_cue(sounds.mask_toxic.as_deref(), false, Channel::MASK);
    }

    if player.shows_toxicity_gauge() {
        let ratio = player.toxicity_ratio();
        let icon = engine.texture("e.toxic");
        engine.draw_texture(&icon, GAUGE_ICON, Color::WHITE);
        let width = (ratio * GAUGE_WIDTH).clamp(0.0, GAUGE_WIDTH);
        engine.draw_rect(GAUGE_BAR, Vec2::new(width, GAUGE_HEIGHT), Color::gauge(ratio));
    }

    player.restore_mask_capability();
}
