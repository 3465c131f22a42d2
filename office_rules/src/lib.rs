//! # Office Rules
//!
//! The state crate for the office - the power budget, doors, lights, the
//! player's mask and camera flags, and the project definitions they are built
//! from. This crate owns no engine collaborators: it mutates its own values and
//! leaves sound, pathing and drawing to `office_core`.

pub mod config;
pub mod definitions;
pub mod mechanics;
pub mod objects;
pub mod office_state;

pub use config::*;
pub use definitions::*;
pub use mechanics::*;
pub use objects::*;
pub use office_state::*;
