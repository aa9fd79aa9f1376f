//! HUD overlay
//!
//! One marker per round of ammo, in a row.

use crate::renderer::{Rect, Surface, colors};
use crate::tuning::HudTuning;

#[derive(Debug, Clone)]
pub struct Hud {
    tuning: HudTuning,
}

impl Hud {
    pub fn new(tuning: &HudTuning) -> Self {
        Self { tuning: *tuning }
    }

    /// Draw `ammo` markers. Read-only.
    pub fn draw(&self, surface: &mut dyn Surface, ammo: u32) {
        let HudTuning {
            origin,
            spacing,
            marker_size,
        } = self.tuning;

        for i in 0..ammo {
            let x = origin.x + spacing * i as f32;
            surface.fill_rect(
                Rect::new(x, origin.y, marker_size.x, marker_size.y),
                colors::HUD,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    #[test]
    fn test_marker_layout() {
        let hud = Hud::new(&HudTuning::default());
        let mut list = DrawList::new();
        hud.draw(&mut list, 3);

        let rects: Vec<Rect> = list.filled_with(colors::WHITE).copied().collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(20.0, 50.0, 3.0, 20.0),
                Rect::new(25.0, 50.0, 3.0, 20.0),
                Rect::new(30.0, 50.0, 3.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_no_ammo_draws_nothing() {
        let hud = Hud::new(&HudTuning::default());
        let mut list = DrawList::new();
        hud.draw(&mut list, 0);
        assert!(list.is_empty());
    }
}
