//! Animation lifecycle: the consumed animation capability and the hook table
//! that reacts to it.
//!
//! Animations report what happened during a frame as [`AnimationEvent`]s. The
//! office never owns frame data; it keeps a [`HookTable`] per animation that
//! maps each (lifecycle, direction) pair to an ordered list of actions, and
//! runs those actions synchronously in the frame the event is reported.

mod frames;

pub use frames::*;

use serde::{Deserialize, Serialize};

use crate::collaborators::TextureRef;

/// Playback direction. `Forward` is the animation's "Normal" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationDirection {
    Forward,
    Reverse,
}

impl AnimationDirection {
    pub fn flipped(self) -> Self {
        match self {
            AnimationDirection::Forward => AnimationDirection::Reverse,
            AnimationDirection::Reverse => AnimationDirection::Forward,
        }
    }
}

/// Points in a playback that hooks can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    /// A playback started.
    Play,
    /// A playback reached its last frame.
    Finish,
}

/// One lifecycle transition reported by an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationEvent {
    pub lifecycle: Lifecycle,
    pub direction: AnimationDirection,
}

impl AnimationEvent {
    pub fn play(direction: AnimationDirection) -> Self {
        Self {
            lifecycle: Lifecycle::Play,
            direction,
        }
    }

    pub fn finish(direction: AnimationDirection) -> Self {
        Self {
            lifecycle: Lifecycle::Finish,
            direction,
        }
    }
}

/// An engine-side animation handle.
pub trait Animation: std::fmt::Debug {
    /// Step playback and report the lifecycle transitions that happened.
    fn advance(&mut self, delta_seconds: f32) -> Vec<AnimationEvent>;

    /// Check if the current playback has not reached its last frame yet.
    fn has_frames_left(&self) -> bool;

    /// Direction of the current (or next) playback.
    fn state(&self) -> AnimationDirection;

    /// Flip direction; the next advance plays back toward the other end.
    fn reverse(&mut self);

    /// Rewind to the first frame, playing forward.
    fn reset(&mut self);

    /// Hold the current frame.
    fn pause(&mut self);
    /// Continue from the held frame.
    fn resume(&mut self);
    /// Draw and advance from the next frame on.
    fn show(&mut self);
    /// Stop drawing; a hidden animation does not advance.
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    /// Texture of the frame currently on screen.
    fn current_frame(&self) -> Option<&TextureRef>;
}

/// Ordered actions per (lifecycle, direction) slot.
#[derive(Debug, Clone)]
pub struct HookTable<A> {
    play_forward: Vec<A>,
    play_reverse: Vec<A>,
    finish_forward: Vec<A>,
    finish_reverse: Vec<A>,
}

impl<A> Default for HookTable<A> {
    fn default() -> Self {
        Self {
            play_forward: Vec::new(),
            play_reverse: Vec::new(),
            finish_forward: Vec::new(),
            finish_reverse: Vec::new(),
        }
    }
}

impl<A: Clone> HookTable<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` when a playback starts in `direction` (any direction if `None`).
    pub fn on_play(&mut self, action: A, direction: Option<AnimationDirection>) {
        self.register(Lifecycle::Play, action, direction);
    }

    /// Run `action` when a playback finishes in `direction` (any direction if `None`).
    pub fn on_finish(&mut self, action: A, direction: Option<AnimationDirection>) {
        self.register(Lifecycle::Finish, action, direction);
    }

    /// Actions for an event, in registration order.
    pub fn handlers(&self, event: AnimationEvent) -> &[A] {
        self.slot(event.lifecycle, event.direction)
    }

    /// Total registered actions across all slots.
    pub fn len(&self) -> usize {
        self.play_forward.len()
            + self.play_reverse.len()
            + self.finish_forward.len()
            + self.finish_reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn register(&mut self, lifecycle: Lifecycle, action: A, direction: Option<AnimationDirection>) {
        match direction {
            Some(direction) => self.slot_mut(lifecycle, direction).push(action),
            None => {
                self.slot_mut(lifecycle, AnimationDirection::Forward)
                    .push(action.clone());
                self.slot_mut(lifecycle, AnimationDirection::Reverse)
                    .push(action);
            }
        }
    }

    fn slot(&self, lifecycle: Lifecycle, direction: AnimationDirection) -> &[A] {
        match (lifecycle, direction) {
            (Lifecycle::Play, AnimationDirection::Forward) => &self.play_forward,
            (Lifecycle::Play, AnimationDirection::Reverse) => &self.play_reverse,
            (Lifecycle::Finish, AnimationDirection::Forward) => &self.finish_forward,
            (Lifecycle::Finish, AnimationDirection::Reverse) => &self.finish_reverse,
        }
    }

    fn slot_mut(&mut self, lifecycle: Lifecycle, direction: AnimationDirection) -> &mut Vec<A> {
        match (lifecycle, direction) {
            (Lifecycle::Play, AnimationDirection::Forward) => &mut self.play_forward,
            (Lifecycle::Play, AnimationDirection::Reverse) => &mut self.play_reverse,
            (Lifecycle::Finish, AnimationDirection::Forward) => &mut self.finish_forward,
            (Lifecycle::Finish, AnimationDirection::Reverse) => &mut self.finish_reverse,
        }
    }
}
