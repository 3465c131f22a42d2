//! The player's mask, camera and toxicity flags.

use serde::{Deserialize, Serialize};

use crate::mechanics::{ToxicityOutcome, TOXIC_CEILING};

/// Player-side state the office reacts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Mask exposure, always within `[0, TOXIC_CEILING]`.
    pub toxic_level: f32,
    pub is_mask_on: bool,
    /// Whether the mask may be put on. Cleared by a forced removal.
    pub mask_enabled: bool,
    pub is_camera_up: bool,
    pub camera_enabled: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            toxic_level: 0.0,
            is_mask_on: false,
            mask_enabled: true,
            is_camera_up: false,
            camera_enabled: true,
        }
    }
}

impl Player {
    /// Create a player with both capabilities enabled and no exposure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move toxicity toward the ceiling (mask on) or toward zero (mask off).
    ///
    /// Hitting the ceiling while the mask is on and enabled disables the mask
    /// and asks the caller to take it off. This happens once per exposure: the
    /// mask stays disabled until [`Player::restore_mask_capability`] sees zero.
    pub fn advance_toxicity(&mut self, delta_seconds: f32, rate: f32) -> ToxicityOutcome {
        let step = (if self.is_mask_on { rate } else { -rate }) * delta_seconds;
        self.toxic_level = (self.toxic_level + step).clamp(0.0, TOXIC_CEILING);

        if self.is_mask_on && self.toxic_level >= TOXIC_CEILING && self.mask_enabled {
            self.mask_enabled = false;
            ToxicityOutcome::ForceMaskOff
        } else {
            ToxicityOutcome::Steady
        }
    }

    /// Re-enable the mask once exposure is fully gone.
    pub fn restore_mask_capability(&mut self) {
        if self.toxic_level <= 0.0 {
            self.mask_enabled = true;
        }
    }

    /// Exposure as a fraction of the ceiling.
    pub fn toxicity_ratio(&self) -> f32 {
        self.toxic_level / TOXIC_CEILING
    }

    /// The gauge shows while the mask is on or any exposure remains.
    pub fn shows_toxicity_gauge(&self) -> bool {
        self.is_mask_on || self.toxic_level > 0.0
    }

    /// The camera toggle is hidden while the mask is on.
    pub fn camera_button_visible(&self) -> bool {
        !self.is_mask_on && self.camera_enabled
    }

    /// The mask toggle is hidden while the camera panel is up.
    pub fn mask_button_visible(&self) -> bool {
        !self.is_camera_up && self.mask_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.1;
    const RATE: f32 = 50.0;

    #[test]
    fn test_mask_on_reaches_ceiling_and_forces_off_once() {
        let mut player = Player::new();
        player.is_mask_on = true;

        let mut forced_at = Vec::new();
        for step in 1..=80 {
            if player.advance_toxicity(DT, RATE) == ToxicityOutcome::ForceMaskOff {
                forced_at.push(step);
            }
        }

        assert_eq!(forced_at.len(), 1);
        assert!(forced_at[0] as f32 * DT <= 5.6 + 1e-3);
        assert_eq!(player.toxic_level, TOXIC_CEILING);
        assert!(!player.mask_enabled);
    }

    #[test]
    fn test_mask_reenabled_only_at_zero() {
        let mut player = Player::new();
        player.toxic_level = TOXIC_CEILING;
        player.mask_enabled = false;

        let mut steps = 0;
        while player.toxic_level > 0.0 {
            player.advance_toxicity(DT, RATE);
            player.restore_mask_capability();
            steps += 1;
            if player.toxic_level > 0.0 {
                assert!(!player.mask_enabled, "re-enabled early at step {}", steps);
            }
        }

        assert!(steps as f32 * DT <= 5.6 + 1e-3);
        assert!(player.mask_enabled);
    }

    #[test]
    fn test_level_clamped() {
        let mut player = Player::new();
        player.advance_toxicity(10.0, RATE);
        assert_eq!(player.toxic_level, 0.0);

        player.is_mask_on = true;
        player.advance_toxicity(100.0, RATE);
        assert_eq!(player.toxic_level, TOXIC_CEILING);
    }

    #[test]
    fn test_button_visibility() {
        let mut player = Player::new();
        assert!(player.camera_button_visible());
        assert!(player.mask_button_visible());

        player.is_mask_on = true;
        player.camera_enabled = true;
        assert!(!player.camera_button_visible());

        player.is_mask_on = false;
        player.is_camera_up = true;
        player.mask_enabled = true;
        assert!(!player.mask_button_visible());

        player.is_camera_up = false;
        player.mask_enabled = false;
        assert!(!player.mask_button_visible());
    }
}
