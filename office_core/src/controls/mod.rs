//! Gated Toggle Controller - door and light toggles.
//!
//! Every toggle flips its object, plays its cue, moves the power usage by one
//! draw and (for lights) tells pathing, all inside one call. A rejected toggle
//! changes nothing.

mod doors;
mod lights;

pub use doors::*;
pub use lights::*;
