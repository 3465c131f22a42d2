//! # Office Core
//!
//! The interactive office. This crate turns pointer input on doors, lights and
//! the two HUD toggles into coordinated changes across door state, light state
//! and the shared power budget, gated by the animations that play those
//! changes out, and keeps audio and enemy pathing in step.
//!
//! ## Core Components
//!
//! - **registry**: lazily created, id-keyed clickable regions
//! - **controls**: gated door and light toggles
//! - **panels**: the camera and mask overlays, driven by animation lifecycle hooks
//! - **hud**: per-frame HUD drawing, the UI-button pass and the toxicity rule
//! - **session**: the office session the frame loop talks to
//!
//! Rendering, audio mixing, scene switching and pathing are engine
//! collaborators, reached through the traits in [`collaborators`].

pub mod animation;
pub mod collaborators;
pub mod controls;
pub mod hud;
pub mod panels;
pub mod registry;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use animation::*;
pub use collaborators::*;
pub use registry::*;
pub use session::*;
