//! Animation-Driven Panel Switch - the camera and mask overlays.
//!
//! Each overlay cycles `Hidden -> playing forward -> Shown -> playing reverse
//! -> Hidden`. Input only sets the player's flag and shows the animation; the
//! rest of the transition (scene switch, power, breathing loop) runs from the
//! animation's lifecycle hooks.

use office_rules::{Channel, Player, PowerModel, SceneKind, SoundCues};

use crate::animation::{Animation, AnimationDirection, HookTable};
use crate::collaborators::{SceneSwitcher, SoundPlayer};

/// Which overlay a panel is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Camera,
    Mask,
}

/// Deferred work an overlay performs on an animation lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Switch between the office and camera scenes.
    ToggleCameraScene,
    Hide,
    Reverse,
    Pause,
    StartBreathing,
    StopBreathing,
}

/// One overlay animation and its lifecycle hooks.
#[derive(Debug)]
pub struct PanelSwitch {
    pub kind: PanelKind,
    pub animation: Box<dyn Animation>,
    pub hooks: HookTable<PanelAction>,
}

impl PanelSwitch {
    /// Wrap an overlay animation. Hooks are installed by [`PanelSwitch::reset`].
    pub fn new(kind: PanelKind, animation: Box<dyn Animation>) -> Self {
        Self {
            kind,
            animation,
            hooks: HookTable::new(),
        }
    }

    /// Rewind, install this overlay's hooks and hide it.
    pub fn reset(&mut self) {
        self.animation.reset();
        self.hooks = match self.kind {
            PanelKind::Camera => camera_hooks(),
            PanelKind::Mask => mask_hooks(),
        };
        self.animation.hide();
    }

    /// Check if the overlay rests in the forward ("Normal") state.
    pub fn is_forward(&self) -> bool {
        self.animation.state() == AnimationDirection::Forward
    }

    /// Advance the overlay and run its hooks for anything that happened.
    pub fn run<E>(&mut self, power: &mut PowerModel, sounds: &SoundCues, engine: &mut E, delta_seconds: f32)
    where
        E: SoundPlayer + SceneSwitcher + ?Sized,
    {
        for event in self.animation.advance(delta_seconds) {
            let actions = self.hooks.handlers(event).to_vec();
            for action in actions {
                tracing::trace!(panel = ?self.kind, ?event, ?action, "panel hook");
                self.apply(action, power, sounds, engine);
            }
        }
    }

    fn apply<E>(&mut self, action: PanelAction, power: &mut PowerModel, sounds: &SoundCues, engine: &mut E)
    where
        E: SoundPlayer + SceneSwitcher + ?Sized,
    {
        match action {
            PanelAction::ToggleCameraScene => toggle_camera_scene(power, sounds, engine),
            PanelAction::Hide => self.animation.hide(),
            PanelAction::Reverse => self.animation.reverse(),
            PanelAction::Pause => self.animation.pause(),
            PanelAction::StartBreathing => {
                engine.play_cue(sounds.mask_breathing.as_deref(), true, Channel::BREATHING)
            }
            PanelAction::StopBreathing => engine.stop_channel(Channel::BREATHING),
        }
    }
}

/// Camera overlay hooks.
///
/// The scene switches when the close animation starts and when the open
/// animation ends. Every finished playback hides the overlay and turns it
/// around; this also swallows the first forward playback, which would
/// otherwise leave the overlay over a frame of the office.
pub fn camera_hooks() -> HookTable<PanelAction> {
    let mut hooks = HookTable::new();
    hooks.on_play(PanelAction::ToggleCameraScene, Some(AnimationDirection::Reverse));
    hooks.on_finish(PanelAction::ToggleCameraScene, Some(AnimationDirection::Forward));
    hooks.on_finish(PanelAction::Hide, None);
    hooks.on_finish(PanelAction::Reverse, None);
    hooks
}

/// Mask overlay hooks.
pub fn mask_hooks() -> HookTable<PanelAction> {
    let mut hooks = HookTable::new();
    hooks.on_play(PanelAction::StopBreathing, Some(AnimationDirection::Reverse));
    hooks.on_finish(PanelAction::Hide, Some(AnimationDirection::Reverse));
    hooks.on_finish(PanelAction::Reverse, None);
    hooks.on_finish(PanelAction::Pause, Some(AnimationDirection::Forward));
    hooks.on_finish(PanelAction::StartBreathing, Some(AnimationDirection::Forward));
    hooks
}

/// Switch between the office and the cameras, moving power usage with it.
pub fn toggle_camera_scene<E>(power: &mut PowerModel, sounds: &SoundCues, engine: &mut E)
where
    E: SoundPlayer + SceneSwitcher + ?Sized,
{
    engine.set_channel_volume(Channel::AMBIENCE, 0.0);

    let (cue, target, delta) = match engine.current_scene() {
        SceneKind::Cameras => (sounds.camdown.as_deref(), SceneKind::Office, -1),
        SceneKind::Office => (sounds.camup.as_deref(), SceneKind::Cameras, 1),
    };
    engine.play_cue(cue, false, Channel::CAMERA);
    engine.set_scene_preserve(target);
    power.adjust(delta);

    tracing::debug!(scene = ?target, usage = power.usage, "camera scene toggled");
}

/// Camera button released: raise the panel if it rests forward, else lower it.
pub fn raise_camera(player: &mut Player, camera: &mut PanelSwitch) {
    player.is_camera_up = camera.is_forward();
    camera.animation.show();
}

/// Put the mask on if its overlay rests forward, else take it off.
///
/// Putting the mask on plays the `maskoff` cue and taking it off plays
/// `maskon`, matching how existing project files assign them.
pub fn toggle_mask<S>(player: &mut Player, mask: &mut PanelSwitch, sounds: &SoundCues, sound: &mut S)
where
    S: SoundPlayer + ?Sized,
{
    player.is_mask_on = mask.is_forward();
    let cue = if player.is_mask_on {
        &sounds.maskoff
    } else {
        &sounds.maskon
    };
    sound.play_cue(cue.as_deref(), false, Channel::MASK);
    mask.animation.resume();
    mask.animation.show();

    tracing::debug!(mask_on = player.is_mask_on, "mask toggled");
}
