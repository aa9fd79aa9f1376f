//! Laser Runner - A side-scrolling laser shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (input, player, projectiles, ammo, game loop)
//! - `renderer`: Draw surface abstraction and WebGPU backend
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD overlay

pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use sim::{Game, InputEvent, Key, MoveKey};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Play-field dimensions in canvas pixels
    pub const WORLD_WIDTH: f32 = 500.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 190.0;
    pub const PLAYER_START_X: f32 = 20.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    /// Vertical speed in pixels per tick
    pub const PLAYER_MAX_SPEED: f32 = 3.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 3.0;
    /// Horizontal speed in pixels per tick
    pub const PROJECTILE_SPEED: f32 = 3.0;
    /// Spawn point relative to the player's top-left corner
    pub const PROJECTILE_OFFSET_X: f32 = 80.0;
    pub const PROJECTILE_OFFSET_Y: f32 = 30.0;
    /// Projectiles die once they pass this fraction of the world width
    pub const PROJECTILE_CULL_FRACTION: f32 = 0.8;

    /// Ammo economy
    pub const AMMO_START: u32 = 20;
    pub const AMMO_MAX: u32 = 50;
    /// Milliseconds between refills
    pub const AMMO_INTERVAL_MS: f64 = 500.0;

    /// HUD ammo markers
    pub const HUD_ORIGIN_X: f32 = 20.0;
    pub const HUD_ORIGIN_Y: f32 = 50.0;
    pub const HUD_MARKER_SPACING: f32 = 5.0;
    pub const HUD_MARKER_WIDTH: f32 = 3.0;
    pub const HUD_MARKER_HEIGHT: f32 = 20.0;
}
