//! Interactive Object Registry - clickable screen regions keyed by id.
//!
//! Regions are created the first time they are asked for and reused on every
//! frame after that, so texture lookup and binding setup run once per id.

use glam::Vec2;
use office_rules::{OfficeObject, RegionId};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::collaborators::{AssetCache, TextureRef};

/// Pointer events a region can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonEvent {
    Click,
    Release,
    Hover,
    Unhover,
}

/// What a region does when one of its events fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    ToggleDoor(String),
    ToggleLight(String),
    /// Raise or lower the camera panel.
    RaiseCamera,
    ToggleMask,
}

/// A clickable region on screen.
#[derive(Debug, Clone)]
pub struct ButtonRegion {
    pub handle: RegionId,
    pub id: String,
    pub position: Vec2,
    pub texture: TextureRef,
    pub visible: bool,
    pub movable: bool,
    bindings: Vec<(ButtonEvent, ButtonAction)>,
}

impl ButtonRegion {
    pub fn new(id: impl Into<String>, position: Vec2, texture: TextureRef) -> Self {
        Self {
            handle: RegionId::new(),
            id: id.into(),
            position,
            texture,
            visible: true,
            movable: false,
            bindings: Vec::new(),
        }
    }

    /// Bind an action to an event. Several actions may share an event.
    pub fn bind(&mut self, event: ButtonEvent, action: ButtonAction) {
        self.bindings.push((event, action));
    }

    pub fn on_click(&mut self, action: ButtonAction) {
        self.bind(ButtonEvent::Click, action);
    }

    pub fn on_release(&mut self, action: ButtonAction) {
        self.bind(ButtonEvent::Release, action);
    }

    pub fn on_hover(&mut self, action: ButtonAction) {
        self.bind(ButtonEvent::Hover, action);
    }

    pub fn on_unhover(&mut self, action: ButtonAction) {
        self.bind(ButtonEvent::Unhover, action);
    }

    /// Actions bound to an event, in binding order.
    pub fn actions_for(&self, event: ButtonEvent) -> impl Iterator<Item = &ButtonAction> {
        self.bindings
            .iter()
            .filter(move |(bound, _)| *bound == event)
            .map(|(_, action)| action)
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

/// Id-keyed store of regions.
///
/// Creation needs `&mut self`, so the lookup and the insert for an id happen
/// under one exclusive borrow: an id can never be constructed twice. Share a
/// registry across threads only behind a lock that covers [`ButtonRegistry::get_or_create`].
#[derive(Debug, Default)]
pub struct ButtonRegistry {
    regions: HashMap<String, ButtonRegion>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the region for `id`, creating it from `object` on first use.
    ///
    /// An existing region is returned unchanged and `setup` is not run. A new
    /// region needs both a position and a sprite; without them nothing is
    /// created and `None` is returned. `setup` runs exactly once, before the
    /// region is stored.
    pub fn get_or_create<A, F>(
        &mut self,
        id: &str,
        object: &OfficeObject,
        scale: Vec2,
        assets: &mut A,
        setup: F,
    ) -> Option<&mut ButtonRegion>
    where
        A: AssetCache + ?Sized,
        F: FnOnce(&mut ButtonRegion),
    {
        match self.regions.entry(id.to_string()) {
            Entry::Occupied(entry) => Some(entry.into_mut()),
            Entry::Vacant(entry) => {
                let (Some(position), Some(sprite)) = (object.position, object.sprite()) else {
                    tracing::trace!(region = id, "no position or sprite; region not created");
                    return None;
                };

                let texture = assets.texture(sprite);
                let mut region = ButtonRegion::new(id, Vec2::from(position) * scale, texture);
                setup(&mut region);

                tracing::debug!(region = id, handle = %region.handle, "created button region");
                Some(entry.insert(region))
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ButtonRegion> {
        self.regions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ButtonRegion> {
        self.regions.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Drop every region (office teardown).
    pub fn clear(&mut self) {
        self.regions.clear();
    }
}
