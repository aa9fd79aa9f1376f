//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be re-tuned from JSON
//! without a rebuild. Persisted in LocalStorage on the web.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// How the player is kept inside the play field vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundsPolicy {
    /// No clamping; the player may leave the field
    #[default]
    Unbounded,
    /// Keep the whole player rect inside `[0, height]`
    Clamp,
}

/// Play-field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
    pub bounds: BoundsPolicy,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            bounds: BoundsPolicy::Unbounded,
        }
    }
}

/// Player ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub size: Vec2,
    pub start: Vec2,
    /// Vertical speed in pixels per tick
    pub max_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            max_speed: PLAYER_MAX_SPEED,
        }
    }
}

/// Lasers fired by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub size: Vec2,
    /// Horizontal speed in pixels per tick
    pub speed: f32,
    /// Spawn point relative to the player's position
    pub spawn_offset: Vec2,
    /// Fraction of the world width past which a projectile is culled
    pub cull_fraction: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
            spawn_offset: Vec2::new(PROJECTILE_OFFSET_X, PROJECTILE_OFFSET_Y),
            cull_fraction: PROJECTILE_CULL_FRACTION,
        }
    }
}

/// Ammo economy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmmoTuning {
    pub start: u32,
    pub max: u32,
    /// Milliseconds the timer must exceed before one unit is granted
    pub interval_ms: f64,
}

impl Default for AmmoTuning {
    fn default() -> Self {
        Self {
            start: AMMO_START,
            max: AMMO_MAX,
            interval_ms: AMMO_INTERVAL_MS,
        }
    }
}

/// Ammo indicator layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudTuning {
    pub origin: Vec2,
    pub spacing: f32,
    pub marker_size: Vec2,
}

impl Default for HudTuning {
    fn default() -> Self {
        Self {
            origin: Vec2::new(HUD_ORIGIN_X, HUD_ORIGIN_Y),
            spacing: HUD_MARKER_SPACING,
            marker_size: Vec2::new(HUD_MARKER_WIDTH, HUD_MARKER_HEIGHT),
        }
    }
}

/// Frame timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClockTuning {
    /// Upper bound on a single frame delta (ms). `None` accepts any delta.
    pub max_delta_ms: Option<f64>,
}

/// Complete gameplay tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub ammo: AmmoTuning,
    pub hud: HudTuning,
    pub clock: ClockTuning,
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "laser_runner_tuning";

    /// Parse and validate tuning from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if !(self.world.width > 0.0 && self.world.width.is_finite()) {
            return invalid("world.width", "must be positive");
        }
        if !(self.world.height > 0.0 && self.world.height.is_finite()) {
            return invalid("world.height", "must be positive");
        }
        if !self.player.max_speed.is_finite() || self.player.max_speed < 0.0 {
            return invalid("player.max_speed", "must be finite and non-negative");
        }
        if !self.projectile.speed.is_finite() || self.projectile.speed < 0.0 {
            return invalid("projectile.speed", "must be finite and non-negative");
        }
        if !(self.projectile.cull_fraction > 0.0 && self.projectile.cull_fraction <= 1.0) {
            return invalid("projectile.cull_fraction", "must be in (0, 1]");
        }
        if self.ammo.start > self.ammo.max {
            return invalid("ammo.start", "must not exceed ammo.max");
        }
        if !self.ammo.interval_ms.is_finite() || self.ammo.interval_ms < 0.0 {
            return invalid("ammo.interval_ms", "must be finite and non-negative");
        }
        if self.hud.spacing < 0.0 {
            return invalid("hud.spacing", "must be non-negative");
        }
        if let Some(cap) = self.clock.max_delta_ms {
            if cap.is_nan() || cap < 0.0 {
                return invalid("clock.max_delta_ms", "must be non-negative");
            }
        }
        Ok(())
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.world.width, 500.0);
        assert_eq!(tuning.player.start, Vec2::new(20.0, 100.0));
        assert_eq!(tuning.projectile.spawn_offset, Vec2::new(80.0, 30.0));
        assert_eq!(tuning.ammo.start, 20);
        assert_eq!(tuning.ammo.max, 50);
        assert_eq!(tuning.ammo.interval_ms, 500.0);
        assert_eq!(tuning.world.bounds, BoundsPolicy::Unbounded);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "ammo": { "max": 10, "start": 5 } }"#).unwrap();
        assert_eq!(tuning.ammo.max, 10);
        assert_eq!(tuning.ammo.start, 5);
        assert_eq!(tuning.ammo.interval_ms, AMMO_INTERVAL_MS);
        assert_eq!(tuning.player, PlayerTuning::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut tuning = Tuning::default();
        tuning.world.bounds = BoundsPolicy::Clamp;
        tuning.clock.max_delta_ms = Some(100.0);
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_start_above_max() {
        let err = Tuning::from_json(r#"{ "ammo": { "start": 60, "max": 50 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "ammo.start", .. }));
    }

    #[test]
    fn test_rejects_bad_cull_fraction() {
        let mut tuning = Tuning::default();
        tuning.projectile.cull_fraction = 0.0;
        assert!(tuning.validate().is_err());
        tuning.projectile.cull_fraction = 1.0;
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(Tuning::from_json("{ not json"), Err(TuningError::Parse(_))));
    }
}
