//! Lasers fired by the player

use glam::Vec2;

use crate::renderer::{Drawable, Rect, Surface, colors};
use crate::tuning::ProjectileTuning;

/// A single laser bolt travelling right at constant speed
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pos: Vec2,
    size: Vec2,
    speed: f32,
    cull_fraction: f32,
    alive: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, tuning: &ProjectileTuning) -> Self {
        Self {
            pos,
            size: tuning.size,
            speed: tuning.speed,
            cull_fraction: tuning.cull_fraction,
            alive: true,
        }
    }

    /// Move one tick; dies once past the cull line
    pub fn update(&mut self, world_width: f32) {
        self.pos.x += self.speed;

        if self.pos.x > world_width * self.cull_fraction {
            self.alive = false;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

impl Drawable for Projectile {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect(), colors::PROJECTILE);
    }
}
