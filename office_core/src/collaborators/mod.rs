//! Engine capabilities the office consumes but does not implement.

use glam::Vec2;
use office_rules::{Channel, ClockTime, SceneKind};
use serde::{Deserialize, Serialize};

use crate::animation::Animation;

/// Handle to a texture owned by the asset cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureRef(pub String);

impl TextureRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Gauge color: green at 0.0, red at 1.0.
    pub fn gauge(ratio: f32) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        Self::rgba((ratio * 255.0) as u8, ((1.0 - ratio) * 255.0) as u8, 0, 255)
    }
}

/// Font, size and color for a line of HUD text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub size: u32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: impl Into<String>, size: u32, color: Color) -> Self {
        Self {
            font: font.into(),
            size,
            color,
        }
    }
}

/// Texture and animation lookup. Implementations cache by id.
pub trait AssetCache {
    fn texture(&mut self, id: &str) -> TextureRef;

    /// Resolve an animation by id, or `None` if the project has no such animation.
    fn animation(&mut self, id: &str) -> Option<Box<dyn Animation>>;
}

/// 2D drawing primitives.
pub trait Canvas {
    fn draw_text(&mut self, style: &TextStyle, content: &str, position: Vec2);
    fn draw_texture(&mut self, texture: &TextureRef, position: Vec2, tint: Color);
    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Color);
}

/// Channel-based audio playback.
pub trait SoundPlayer {
    fn play_on_channel(&mut self, sound: &str, looped: bool, channel: Channel);
    fn stop_channel(&mut self, channel: Channel);
    fn set_channel_volume(&mut self, channel: Channel, volume: f32);

    /// Play an optional cue. Missing or empty cues are skipped.
    fn play_cue(&mut self, cue: Option<&str>, looped: bool, channel: Channel) {
        if let Some(cue) = cue.filter(|cue| !cue.is_empty()) {
            self.play_on_channel(cue, looped, channel);
        }
    }
}

/// Scene switching that keeps the office state alive.
pub trait SceneSwitcher {
    fn current_scene(&self) -> SceneKind;
    fn set_scene_preserve(&mut self, scene: SceneKind);
}

/// Hooks into enemy navigation. Lit locations cost more to path through.
pub trait PathFinder {
    fn on_light_turned_on(&mut self, light_id: &str);
    fn on_light_turned_off(&mut self, light_id: &str);
}

/// The night clock.
pub trait GameClock {
    fn clock(&self) -> ClockTime;
}

/// Everything the office needs from the engine.
pub trait Engine: AssetCache + Canvas + SoundPlayer + SceneSwitcher + PathFinder + GameClock {}

impl<T> Engine for T where T: AssetCache + Canvas + SoundPlayer + SceneSwitcher + PathFinder + GameClock {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_color() {
        assert_eq!(Color::gauge(0.0), Color::rgba(0, 255, 0, 255));
        assert_eq!(Color::gauge(1.0), Color::rgba(255, 0, 0, 255));
        assert_eq!(Color::gauge(2.0), Color::rgba(255, 0, 0, 255));
    }
}
