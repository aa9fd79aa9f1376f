//! The game loop's composition root
//!
//! `Game` owns every piece of simulation state. The platform calls
//! [`Game::handle_event`] for input, then [`Game::frame`] once per repaint.

use glam::Vec2;

use super::ammo::AmmoRegenerator;
use super::input::{InputEvent, InputState, Key, KeyEventKind};
use super::player::Player;
use super::world::WorldBounds;
use crate::renderer::{Drawable, Rect, Surface};
use crate::tuning::Tuning;
use crate::ui::Hud;

#[derive(Debug, Clone)]
pub struct Game {
    bounds: WorldBounds,
    player: Player,
    input: InputState,
    ammo: AmmoRegenerator,
    hud: Hud,
}

impl Game {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            bounds: WorldBounds::new(&tuning.world),
            player: Player::new(&tuning.player, &tuning.projectile),
            input: InputState::new(),
            ammo: AmmoRegenerator::new(&tuning.ammo),
            hud: Hud::new(&tuning.hud),
        }
    }

    /// Apply one key event immediately.
    ///
    /// Movement keys update the held set; fire shoots on key-down only.
    pub fn handle_event(&mut self, event: InputEvent) {
        match (event.kind, event.key) {
            (KeyEventKind::Down, Key::Move(key)) => {
                if !self.input.press(key) {
                    log::trace!("{:?} already held", key);
                }
            }
            (KeyEventKind::Up, Key::Move(key)) => {
                if !self.input.release(key) {
                    log::trace!("{:?} released without press", key);
                }
            }
            (KeyEventKind::Down, Key::Fire) => {
                self.player.shoot(&mut self.ammo);
            }
            (KeyEventKind::Up, Key::Fire) => {}
            (_, Key::Other) => log::trace!("Ignoring unbound key"),
        }
    }

    /// Drop every held movement key (window lost focus, so no key-up will come)
    pub fn release_all(&mut self) {
        if !self.input.held().is_empty() {
            log::debug!("Releasing held keys {:?}", self.input.held());
            self.input.clear();
        }
    }

    /// Advance the simulation by one tick. Player first, then ammo refill.
    pub fn update(&mut self, delta_ms: f64) {
        self.player.update(&self.input, &self.bounds);

        if self.ammo.tick(delta_ms) {
            log::debug!("Ammo refilled to {}", self.ammo.amount());
        }
    }

    /// Paint the current state: player and lasers, then the HUD on top
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.player.draw(surface);
        self.hud.draw(surface, self.ammo.amount());
    }

    /// One full frame: clear, update, draw
    pub fn frame(&mut self, delta_ms: f64, surface: &mut dyn Surface) {
        surface.clear(Rect::new(0.0, 0.0, self.bounds.width, self.bounds.height));
        self.update(delta_ms);
        self.draw(surface);
    }

    pub fn ammo(&self) -> u32 {
        self.ammo.amount()
    }

    pub fn max_ammo(&self) -> u32 {
        self.ammo.max()
    }

    pub fn player_pos(&self) -> Vec2 {
        self.player.pos()
    }

    pub fn projectile_count(&self) -> usize {
        self.player.projectile_count()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }

    pub fn height(&self) -> f32 {
        self.bounds.height
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList, colors};
    use crate::sim::MoveKey;

    const UP: Key = Key::Move(MoveKey::Up);

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut game = Game::default();
        game.handle_event(InputEvent::down(Key::Fire));
        assert_eq!(game.projectile_count(), 1);

        // Holding fire across frames does nothing more
        game.update(16.0);
        game.update(16.0);
        assert_eq!(game.projectile_count(), 1);
        assert_eq!(game.ammo(), 19);

        game.handle_event(InputEvent::up(Key::Fire));
        assert_eq!(game.projectile_count(), 1);
        assert!(game.input().held().is_empty());
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut game = Game::default();
        game.handle_event(InputEvent::down(UP));
        // Repeat events do not stack
        game.handle_event(InputEvent::down(UP));
        for _ in 0..3 {
            game.update(16.0);
        }
        assert_eq!(game.player_pos().y, 91.0);
    }

    #[test]
    fn test_release_all_stops_stuck_movement() {
        let mut game = Game::default();
        game.handle_event(InputEvent::down(UP));
        for _ in 0..10 {
            game.update(16.0);
        }
        assert_eq!(game.player_pos().y, 70.0);

        // Focus lost before any key-up arrived
        game.release_all();
        assert!(game.input().held().is_empty());
        for _ in 0..10 {
            game.update(16.0);
        }
        assert_eq!(game.player_pos().y, 70.0);

        // A late key-up is a harmless no-op
        game.handle_event(InputEvent::up(UP));
        game.release_all();
        assert_eq!(game.player().speed_y(), 0.0);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut game = Game::default();
        game.handle_event(InputEvent::down(Key::Other));
        game.handle_event(InputEvent::up(Key::Move(MoveKey::Down)));
        game.update(16.0);
        assert_eq!(game.player_pos(), Vec2::new(20.0, 100.0));
        assert_eq!(game.projectile_count(), 0);
    }

    #[test]
    fn test_refill_runs_after_player_update() {
        let mut game = Game::default();
        for _ in 0..20 {
            game.handle_event(InputEvent::down(Key::Fire));
        }
        assert_eq!(game.ammo(), 0);

        game.update(501.0);
        assert_eq!(game.ammo(), 0);
        game.update(16.0);
        assert_eq!(game.ammo(), 1);
    }

    #[test]
    fn test_frame_clears_then_draws_player_then_hud() {
        let mut game = Game::default();
        game.handle_event(InputEvent::down(Key::Fire));

        let mut list = DrawList::new();
        game.frame(16.0, &mut list);

        assert_eq!(
            list.commands[0],
            DrawCommand::Clear(Rect::new(0.0, 0.0, 500.0, 500.0))
        );
        let fills: Vec<_> = list.filled().map(|(_, c)| *c).collect();
        assert_eq!(fills[0], colors::BLACK);
        assert_eq!(fills[1], colors::YELLOW);
        assert_eq!(fills.len(), 2 + 19);
        assert!(fills[2..].iter().all(|c| *c == colors::WHITE));
    }

    #[test]
    fn test_draw_does_not_mutate() {
        let game = Game::default();
        let mut list = DrawList::new();
        game.draw(&mut list);
        game.draw(&mut list);
        assert_eq!(game.ammo(), 20);
        assert_eq!(list.len(), 2 * (1 + 20));
    }

    #[test]
    fn test_scenario_exhaust_ammo() {
        let mut game = Game::default();
        for _ in 0..20 {
            game.handle_event(InputEvent::down(Key::Fire));
        }
        assert_eq!(game.ammo(), 0);
        assert_eq!(game.projectile_count(), 20);

        game.handle_event(InputEvent::down(Key::Fire));
        assert_eq!(game.ammo(), 0);
        assert_eq!(game.projectile_count(), 20);
    }

    #[test]
    fn test_scenario_refill_saturates() {
        let mut game = Game::default();
        let step = 500.0 + 1.0;
        let mut last = game.ammo();

        for _ in 0..30 {
            game.update(step);
            let now = game.ammo();
            assert!(now == last || now == last + 1);
            assert!(now <= game.max_ammo());
            last = now;
        }
        // First tick charges, the next grants: every other tick refills
        assert_eq!(game.ammo(), 35);

        for _ in 0..100 {
            game.update(step);
        }
        assert_eq!(game.ammo(), 50);
    }

    #[test]
    fn test_scenario_press_release_up() {
        let mut game = Game::default();
        let start = game.player_pos().y;

        game.handle_event(InputEvent::down(UP));
        game.update(16.0);
        assert_eq!(game.player_pos().y, start - game.player().max_speed());

        game.handle_event(InputEvent::up(UP));
        let held_y = game.player_pos().y;
        game.update(16.0);
        assert_eq!(game.player_pos().y, held_y);
    }
}
