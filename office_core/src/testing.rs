//! Recording engine for unit tests.

use glam::Vec2;
use office_rules::{Channel, ClockTime, ProjectDefinition, SceneKind};
use serde_json::json;
use std::collections::{HashMap, HashSet};

use crate::animation::{Animation, FrameAnimation};
use crate::collaborators::{
    AssetCache, Canvas, Color, GameClock, PathFinder, SceneSwitcher, SoundPlayer, TextStyle,
    TextureRef,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SoundCall {
    Play {
        sound: String,
        looped: bool,
        channel: Channel,
    },
    Stop(Channel),
    Volume(Channel, f32),
}

impl SoundCall {
    pub fn play(sound: &str, looped: bool, channel: Channel) -> Self {
        SoundCall::Play {
            sound: sound.to_string(),
            looped,
            channel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathCall {
    On(String),
    Off(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text {
        content: String,
        font: String,
        size: u32,
        position: Vec2,
    },
    Texture {
        texture: String,
        position: Vec2,
    },
    Rect {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
}

/// Implements every collaborator and records what the office asked for.
#[derive(Debug)]
pub struct RecordingEngine {
    pub sounds: Vec<SoundCall>,
    pub paths: Vec<PathCall>,
    pub draws: Vec<DrawCall>,
    pub scene: SceneKind,
    pub scene_switches: Vec<SceneKind>,
    pub clock: ClockTime,
    pub missing_animations: HashSet<String>,
    texture_requests: HashMap<String, u32>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            sounds: Vec::new(),
            paths: Vec::new(),
            draws: Vec::new(),
            scene: SceneKind::Office,
            scene_switches: Vec::new(),
            clock: ClockTime::default(),
            missing_animations: HashSet::new(),
            texture_requests: HashMap::new(),
        }
    }

    pub fn texture_requests(&self, id: &str) -> u32 {
        self.texture_requests.get(id).copied().unwrap_or(0)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.draws
            .iter()
            .filter_map(|draw| match draw {
                DrawCall::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn drew_texture(&self, id: &str) -> bool {
        self.draws
            .iter()
            .any(|draw| matches!(draw, DrawCall::Texture { texture, .. } if texture == id))
    }

    pub fn plays_of(&self, sound: &str) -> usize {
        self.sounds
            .iter()
            .filter(|call| matches!(call, SoundCall::Play { sound: s, .. } if s == sound))
            .count()
    }
}

impl AssetCache for RecordingEngine {
    fn texture(&mut self, id: &str) -> TextureRef {
        *self.texture_requests.entry(id.to_string()).or_default() += 1;
        TextureRef::new(id)
    }

    fn animation(&mut self, id: &str) -> Option<Box<dyn Animation>> {
        if self.missing_animations.contains(id) {
            return None;
        }
        let frames = (0..4).map(|i| TextureRef::new(format!("{}_{}", id, i))).collect();
        Some(Box::new(FrameAnimation::new(frames, 60)))
    }
}

impl Canvas for RecordingEngine {
    fn draw_text(&mut self, style: &TextStyle, content: &str, position: Vec2) {
        self.draws.push(DrawCall::Text {
            content: content.to_string(),
            font: style.font.clone(),
            size: style.size,
            position,
        });
    }

    fn draw_texture(&mut self, texture: &TextureRef, position: Vec2, _tint: Color) {
        self.draws.push(DrawCall::Texture {
            texture: texture.id().to_string(),
            position,
        });
    }

    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Color) {
        self.draws.push(DrawCall::Rect {
            position,
            size,
            color,
        });
    }
}

impl SoundPlayer for RecordingEngine {
    fn play_on_channel(&mut self, sound: &str, looped: bool, channel: Channel) {
        self.sounds.push(SoundCall::play(sound, looped, channel));
    }

    fn stop_channel(&mut self, channel: Channel) {
        self.sounds.push(SoundCall::Stop(channel));
    }

    fn set_channel_volume(&mut self, channel: Channel, volume: f32) {
        self.sounds.push(SoundCall::Volume(channel, volume));
    }
}

impl SceneSwitcher for RecordingEngine {
    fn current_scene(&self) -> SceneKind {
        self.scene
    }

    fn set_scene_preserve(&mut self, scene: SceneKind) {
        self.scene = scene;
        self.scene_switches.push(scene);
    }
}

impl PathFinder for RecordingEngine {
    fn on_light_turned_on(&mut self, light_id: &str) {
        self.paths.push(PathCall::On(light_id.to_string()));
    }

    fn on_light_turned_off(&mut self, light_id: &str) {
        self.paths.push(PathCall::Off(light_id.to_string()));
    }
}

impl GameClock for RecordingEngine {
    fn clock(&self) -> ClockTime {
        self.clock
    }
}

/// A small project with one office: two doors, three lights, camera and mask buttons.
pub fn sample_project() -> ProjectDefinition {
    let project = json!({
        "offices": {
            "Office": {
                "doors": {
                    "left_door": {
                        "button": { "position": [40, 300], "sprite": "door_button" },
                        "animation": "left_door_anim",
                        "open_sound": "door_open",
                        "close_sound": "door_close"
                    },
                    "broken_door": {
                        "button": { "position": [1200, 300], "sprite": "door_button" }
                    }
                },
                "lights": {
                    "A": { "position": [40, 400], "sprite": "light_button", "sound": "hum" },
                    "B": { "position": [1200, 400], "sprite": "light_button", "sound": "hum" },
                    "C": { "position": [600, 400], "sprite": "light_button", "sound": "hum", "clickstyle": true },
                    "ghost": { "sound": "hum" }
                },
                "ui_buttons": {
                    "camera": { "input": { "position": [700, 660], "image": "camera_button" } },
                    "mask": { "input": { "position": [200, 660], "image": "mask_button" } },
                    "hidden": { }
                },
                "light_state": "B,C",
                "animatronics": ["Freddy", "Bonnie"],
                "cameras": ["1A", "1B", "2A"]
            }
        },
        "sounds": {
            "camup": "cam_up",
            "camdown": "cam_down",
            "maskon": "mask_on",
            "maskoff": "mask_off",
            "mask_breathing": "breathing",
            "mask_toxic": "mask_toxic"
        }
    });

    serde_json::from_value(project).expect("sample project")
}
