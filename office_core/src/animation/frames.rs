//! A frame-list animation on a fixed timestep.

use super::{Animation, AnimationDirection, AnimationEvent};
use crate::collaborators::TextureRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Playback {
    /// Waiting for the next advance to start playing.
    Pending,
    Playing,
    Finished,
}

/// Plays a list of frame textures at a fixed rate.
///
/// Playback only advances while the animation is visible and not paused.
#[derive(Debug, Clone)]
pub struct FrameAnimation {
    frames: Vec<TextureRef>,
    frame_duration: f32,
    accumulator: f32,
    index: usize,
    direction: AnimationDirection,
    playback: Playback,
    paused: bool,
    visible: bool,
}

impl FrameAnimation {
    pub fn new(frames: Vec<TextureRef>, fps: u32) -> Self {
        Self {
            frames,
            frame_duration: 1.0 / fps.max(1) as f32,
            accumulator: 0.0,
            index: 0,
            direction: AnimationDirection::Forward,
            playback: Playback::Pending,
            paused: false,
            visible: true,
        }
    }

    /// Index of the frame currently on screen.
    pub fn frame_index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn end_index(&self) -> usize {
        match self.direction {
            AnimationDirection::Forward => self.frames.len().saturating_sub(1),
            AnimationDirection::Reverse => 0,
        }
    }

    fn at_end(&self) -> bool {
        self.index == self.end_index()
    }

    fn step(&mut self) {
        match self.direction {
            AnimationDirection::Forward => self.index += 1,
            AnimationDirection::Reverse => self.index -= 1,
        }
    }
}

impl Animation for FrameAnimation {
    fn advance(&mut self, delta_seconds: f32) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        if !self.visible || self.paused || self.playback == Playback::Finished {
            return events;
        }

        if self.playback == Playback::Pending {
            self.playback = Playback::Playing;
            self.accumulator = 0.0;
            events.push(AnimationEvent::play(self.direction));
        }

        self.accumulator += delta_seconds;
        while !self.at_end() && self.accumulator >= self.frame_duration {
            self.accumulator -= self.frame_duration;
            self.step();
        }

        if self.at_end() {
            self.playback = Playback::Finished;
            events.push(AnimationEvent::finish(self.direction));
        }

        events
    }

    fn has_frames_left(&self) -> bool {
        self.playback != Playback::Finished
    }

    fn state(&self) -> AnimationDirection {
        self.direction
    }

    fn reverse(&mut self) {
        self.direction = self.direction.flipped();
        self.playback = Playback::Pending;
    }

    fn reset(&mut self) {
        self.index = 0;
        self.accumulator = 0.0;
        self.direction = AnimationDirection::Forward;
        self.playback = Playback::Pending;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn current_frame(&self) -> Option<&TextureRef> {
        self.frames.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn frames(count: usize) -> Vec<TextureRef> {
        (0..count).map(|i| TextureRef::new(format!("frame_{}", i))).collect()
    }

    #[test]
    fn test_forward_playback_emits_play_then_finish() {
        let mut animation = FrameAnimation::new(frames(3), 60);

        assert_eq!(
            animation.advance(DT),
            vec![AnimationEvent::play(AnimationDirection::Forward)]
        );
        assert!(animation.has_frames_left());
        assert_eq!(
            animation.advance(DT),
            vec![AnimationEvent::finish(AnimationDirection::Forward)]
        );
        assert!(!animation.has_frames_left());
        assert_eq!(animation.current_frame().unwrap().id(), "frame_2");
        assert!(animation.advance(DT).is_empty());
    }

    #[test]
    fn test_reverse_plays_back_to_first_frame() {
        let mut animation = FrameAnimation::new(frames(3), 60);
        while animation.has_frames_left() {
            animation.advance(DT);
        }

        animation.reverse();
        assert_eq!(animation.state(), AnimationDirection::Reverse);

        let mut events = Vec::new();
        while animation.has_frames_left() {
            events.extend(animation.advance(DT));
        }
        assert_eq!(events.first(), Some(&AnimationEvent::play(AnimationDirection::Reverse)));
        assert_eq!(events.last(), Some(&AnimationEvent::finish(AnimationDirection::Reverse)));
        assert_eq!(animation.frame_index(), 0);
    }

    #[test]
    fn test_reverse_at_end_finishes_immediately() {
        let mut animation = FrameAnimation::new(frames(4), 60);
        animation.reverse();

        assert_eq!(
            animation.advance(DT),
            vec![
                AnimationEvent::play(AnimationDirection::Reverse),
                AnimationEvent::finish(AnimationDirection::Reverse),
            ]
        );
    }

    #[test]
    fn test_hidden_or_paused_does_not_advance() {
        let mut animation = FrameAnimation::new(frames(3), 60);
        animation.hide();
        assert!(animation.advance(DT).is_empty());

        animation.show();
        animation.pause();
        assert!(animation.advance(DT).is_empty());
        assert_eq!(animation.frame_index(), 0);

        animation.resume();
        assert!(!animation.advance(DT).is_empty());
    }

    #[test]
    fn test_reset_rewinds_forward() {
        let mut animation = FrameAnimation::new(frames(3), 60);
        animation.reverse();
        animation.pause();
        animation.reset();

        assert_eq!(animation.state(), AnimationDirection::Forward);
        assert_eq!(animation.frame_index(), 0);
        assert!(!animation.is_paused());
        assert!(animation.has_frames_left());
    }
}
