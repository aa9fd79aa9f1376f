//! Frame-driven simulation
//!
//! All gameplay logic lives here:
//! - One tick per repaint, no fixed timestep
//! - Player motion in pixels per tick, ammo refill in milliseconds
//! - Stable iteration order (lasers kept in fire order)
//! - No platform dependencies; drawing goes through `renderer::Surface`

pub mod ammo;
pub mod clock;
pub mod game;
pub mod input;
pub mod player;
pub mod projectile;
pub mod world;

pub use ammo::AmmoRegenerator;
pub use clock::FrameClock;
pub use game::Game;
pub use input::{InputEvent, InputQueue, InputState, Key, KeyEventKind, MoveKey};
pub use player::Player;
pub use projectile::Projectile;
pub use world::WorldBounds;
