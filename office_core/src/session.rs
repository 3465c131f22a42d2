//! Office sessions and the runtime the frame loop talks to.
//!
//! An [`OfficeRuntime`] owns the engine, the runtime configuration and at most
//! one loaded [`OfficeSession`]. Every per-frame and input entry point checks
//! for a session first and logs a warning instead of failing when none is
//! loaded.

use glam::Vec2;
use office_rules::{
    DefinitionError, OfficeDefinition, OfficeSettings, OfficeState, PowerModel, ProjectDefinition,
    RuntimeConfig, SessionId, SoundCues,
};
use thiserror::Error;

use crate::collaborators::{AssetCache, Engine};
use crate::controls::{on_door_click, on_light_click, park_door_animation, DoorAnimations};
use crate::hud::{self, HudText};
use crate::panels::{raise_camera, toggle_mask, PanelKind, PanelSwitch};
use crate::registry::{ButtonAction, ButtonEvent, ButtonRegion, ButtonRegistry};

#[derive(Debug, Error)]
pub enum OfficeError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("animation not found: {0}")]
    MissingAnimation(String),
}

/// Everything that lives for one office during one night.
#[derive(Debug)]
pub struct OfficeSession {
    pub id: SessionId,
    pub office: String,
    pub definition: OfficeDefinition,
    pub sounds: SoundCues,
    pub state: OfficeState,
    pub registry: ButtonRegistry,
    pub camera: PanelSwitch,
    pub mask: PanelSwitch,
    pub door_animations: DoorAnimations,
    /// Built by [`crate::hud::reset`]; `None` until then.
    pub hud: Option<HudText>,
}

impl OfficeSession {
    /// Build a session for `office` from a loaded project.
    ///
    /// The camera and mask animations are required. Door animations are
    /// optional: a door without one never toggles.
    pub fn load<A>(
        project: &ProjectDefinition,
        office: &str,
        night: u32,
        settings: OfficeSettings,
        assets: &mut A,
    ) -> Result<Self, OfficeError>
    where
        A: AssetCache + ?Sized,
    {
        let definition = project.office(office)?.clone();

        let camera = assets
            .animation(&project.hud.camera)
            .ok_or_else(|| OfficeError::MissingAnimation(project.hud.camera.clone()))?;
        let mask = assets
            .animation(&project.hud.mask)
            .ok_or_else(|| OfficeError::MissingAnimation(project.hud.mask.clone()))?;

        let mut door_animations = DoorAnimations::new();
        for (door_id, door) in &definition.doors {
            let Some(animation_id) = door.animation.as_deref() else {
                tracing::debug!(door = %door_id, "door has no animation");
                continue;
            };
            match assets.animation(animation_id) {
                Some(mut animation) => {
                    park_door_animation(animation.as_mut());
                    door_animations.insert(door_id.clone(), animation);
                }
                None => {
                    tracing::warn!(target: "office", door = %door_id, animation = animation_id, "door animation not found")
                }
            }
        }

        let state = OfficeState::from_definition(&definition, night, settings, PowerModel::default().level);

        Ok(Self {
            id: SessionId::new(),
            office: office.to_string(),
            definition,
            sounds: project.sounds.clone(),
            state,
            registry: ButtonRegistry::new(),
            camera: PanelSwitch::new(PanelKind::Camera, camera),
            mask: PanelSwitch::new(PanelKind::Mask, mask),
            door_animations,
            hud: None,
        })
    }

    /// The clickable region for a door button, created on first request.
    pub fn door_button<A>(&mut self, door_id: &str, scale: Vec2, assets: &mut A) -> Option<&ButtonRegion>
    where
        A: AssetCache + ?Sized,
    {
        let door = self.definition.doors.get(door_id)?;
        let action = ButtonAction::ToggleDoor(door_id.to_string());
        self.registry
            .get_or_create(door_id, &door.button, scale, assets, move |region| region.on_click(action))
            .map(|region| &*region)
    }

    /// The clickable region for a light button, created on first request.
    ///
    /// Click-style lights also toggle on release, so they stay lit only while held.
    pub fn light_button<A>(&mut self, light_id: &str, scale: Vec2, assets: &mut A) -> Option<&ButtonRegion>
    where
        A: AssetCache + ?Sized,
    {
        let light = self.definition.lights.get(light_id)?;
        let clickstyle = light.clickstyle;
        let id = light_id.to_string();
        self.registry
            .get_or_create(light_id, light, scale, assets, move |region| {
                region.on_click(ButtonAction::ToggleLight(id.clone()));
                if clickstyle {
                    region.on_release(ButtonAction::ToggleLight(id));
                }
            })
            .map(|region| &*region)
    }

    /// Route a pointer event on a region to its bound actions.
    ///
    /// Unknown and hidden regions ignore input.
    pub fn handle_input<E>(&mut self, region_id: &str, event: ButtonEvent, engine: &mut E)
    where
        E: Engine + ?Sized,
    {
        let actions: Vec<ButtonAction> = match self.registry.get(region_id) {
            Some(region) if region.visible => region.actions_for(event).cloned().collect(),
            Some(_) => {
                tracing::trace!(region = region_id, ?event, "region hidden; input ignored");
                return;
            }
            None => {
                tracing::trace!(region = region_id, ?event, "unknown region; input ignored");
                return;
            }
        };

        for action in &actions {
            self.dispatch(action, engine);
        }
    }

    /// Run one bound action against this session.
    pub fn dispatch<E>(&mut self, action: &ButtonAction, engine: &mut E)
    where
        E: Engine + ?Sized,
    {
        match action {
            ButtonAction::ToggleDoor(door_id) => {
                on_door_click(&mut self.state, &mut self.door_animations, door_id, engine);
            }
            ButtonAction::ToggleLight(light_id) => {
                on_light_click(&mut self.state, light_id, engine);
            }
            ButtonAction::RaiseCamera => raise_camera(&mut self.state.player, &mut self.camera),
            ButtonAction::ToggleMask => {
                toggle_mask(&mut self.state.player, &mut self.mask, &self.sounds, engine)
            }
        }
    }
}

/// The engine, its configuration and the loaded office, if any.
#[derive(Debug)]
pub struct OfficeRuntime<E> {
    engine: E,
    config: RuntimeConfig,
    session: Option<OfficeSession>,
}

impl<E: Engine> OfficeRuntime<E> {
    /// Create a runtime with no office loaded.
    pub fn new(engine: E, config: RuntimeConfig) -> Self {
        Self {
            engine,
            config,
            session: None,
        }
    }

    /// The engine collaborators.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the engine collaborators.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Configuration the runtime was created with.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&OfficeSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut OfficeSession> {
        self.session.as_mut()
    }

    fn screen_scale(&self) -> Vec2 {
        Vec2::from(self.config.screen_scale)
    }

    /// Load an office for a night, replacing any session already loaded.
    ///
    /// Power starts full. Call [`OfficeRuntime::reset_hud`] before the first frame.
    pub fn load_office(
        &mut self,
        project: &ProjectDefinition,
        office: &str,
        night: u32,
        settings: OfficeSettings,
    ) -> Result<SessionId, OfficeError> {
        let session = OfficeSession::load(project, office, night, settings, &mut self.engine)?;
        let id = session.id;

        tracing::info!(target: "office", session = %id, office, night, toxic = settings.toxic, "office loaded");
        if let Some(previous) = self.session.replace(session) {
            tracing::info!(target: "office", session = %previous.id, "previous office session replaced");
        }
        Ok(id)
    }

    /// Drop the loaded office and all of its regions.
    pub fn teardown(&mut self) {
        match self.session.take() {
            Some(mut session) => {
                session.registry.clear();
                tracing::info!(target: "office", session = %session.id, "office torn down");
            }
            None => tracing::debug!(target: "office", "teardown: no office session loaded"),
        }
    }

    /// Reinitialise the HUD text and put both overlays back to hidden and idle.
    pub fn reset_hud(&mut self) {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!(target: "office", "reset_hud: no office session loaded");
            return;
        };
        hud::reset(session, &self.config);
        tracing::debug!(target: "office", session = %session.id, "HUD reset");
    }

    /// Draw one HUD frame and advance everything animated on it.
    pub fn draw_hud(&mut self, delta_seconds: f32) {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!(target: "office", "draw_hud: no office session loaded");
            return;
        };
        hud::draw(session, &mut self.engine, &self.config, delta_seconds);
    }

    /// Route a pointer event on a region.
    pub fn handle_input(&mut self, region_id: &str, event: ButtonEvent) {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!(target: "office", region = region_id, "handle_input: no office session loaded");
            return;
        };
        session.handle_input(region_id, event, &mut self.engine);
    }

    /// The door's button region, created on first request.
    ///
    /// `None` without a loaded office or when the button cannot be placed.
    pub fn door_button(&mut self, door_id: &str) -> Option<&ButtonRegion> {
        let scale = self.screen_scale();
        let session = self.session.as_mut()?;
        session.door_button(door_id, scale, &mut self.engine)
    }

    /// The light's button region, created on first request.
    ///
    /// `None` without a loaded office or when the button cannot be placed.
    pub fn light_button(&mut self, light_id: &str) -> Option<&ButtonRegion> {
        let scale = self.screen_scale();
        let session = self.session.as_mut()?;
        session.light_button(light_id, scale, &mut self.engine)
    }
}
