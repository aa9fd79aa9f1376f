//! Play-field bounds shared by the entities

use crate::tuning::{BoundsPolicy, WorldTuning};

/// Fixed play-field size plus the vertical bounds policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub policy: BoundsPolicy,
}

impl WorldBounds {
    pub fn new(tuning: &WorldTuning) -> Self {
        Self {
            width: tuning.width,
            height: tuning.height,
            policy: tuning.bounds,
        }
    }

    /// Apply the policy to the y of an entity `entity_height` tall
    pub fn constrain_y(&self, y: f32, entity_height: f32) -> f32 {
        match self.policy {
            BoundsPolicy::Unbounded => y,
            BoundsPolicy::Clamp => y.clamp(0.0, (self.height - entity_height).max(0.0)),
        }
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(&WorldTuning::default())
    }
}
