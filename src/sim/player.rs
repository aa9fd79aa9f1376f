//! The player's ship and the lasers it owns

use glam::Vec2;

use super::ammo::AmmoRegenerator;
use super::input::{InputState, MoveKey};
use super::projectile::Projectile;
use super::world::WorldBounds;
use crate::renderer::{Drawable, Rect, Surface, colors};
use crate::tuning::{PlayerTuning, ProjectileTuning};

#[derive(Debug, Clone)]
pub struct Player {
    pos: Vec2,
    size: Vec2,
    /// Always one of `-max_speed`, 0, `max_speed`; recomputed every tick
    speed_y: f32,
    max_speed: f32,
    projectile_tuning: ProjectileTuning,
    /// Live lasers in fire order
    projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new(tuning: &PlayerTuning, projectile_tuning: &ProjectileTuning) -> Self {
        Self {
            pos: tuning.start,
            size: tuning.size,
            speed_y: 0.0,
            max_speed: tuning.max_speed,
            projectile_tuning: *projectile_tuning,
            projectiles: Vec::new(),
        }
    }

    /// Advance one tick: steer from held keys, move, then advance and cull lasers
    pub fn update(&mut self, input: &InputState, bounds: &WorldBounds) {
        // Up wins when both are held
        self.speed_y = if input.is_held(MoveKey::Up) {
            -self.max_speed
        } else if input.is_held(MoveKey::Down) {
            self.max_speed
        } else {
            0.0
        };

        self.pos.y = bounds.constrain_y(self.pos.y + self.speed_y, self.size.y);

        for projectile in &mut self.projectiles {
            projectile.update(bounds.width);
        }
        self.projectiles.retain(Projectile::is_alive);
    }

    /// Fire one laser if there is ammo. Returns false (and does nothing) when empty.
    pub fn shoot(&mut self, ammo: &mut AmmoRegenerator) -> bool {
        if !ammo.try_consume() {
            log::debug!("Out of ammo, shot ignored");
            return false;
        }

        let spawn = self.pos + self.projectile_tuning.spawn_offset;
        self.projectiles.push(Projectile::new(spawn, &self.projectile_tuning));
        log::debug!(
            "Fired at ({:.1}, {:.1}), {} in flight, {} ammo left",
            spawn.x,
            spawn.y,
            self.projectiles.len(),
            ammo.amount()
        );
        true
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn speed_y(&self) -> f32 {
        self.speed_y
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect(), colors::PLAYER);

        for projectile in &self.projectiles {
            projectile.draw(surface);
        }
    }
}
