//! Render seam and draw-order contract
//!
//! The wave never owns a renderer; it emits one box per visible entity
//! through [`RenderTarget`], back to front: formation, ship, defense line,
//! bolts. The order is part of the contract - the host relies on it for
//! z-ordering.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{BoltOwner, Wave};
use crate::consts::*;

/// What a box should be drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    /// Enemy unit with its palette variant
    Alien { variant: usize },
    Ship,
    /// Full-width defense line, a zero-height box at the boundary
    DefenseLine,
    Bolt { owner: BoltOwner },
}

/// Box-sprite draw calls issued by the wave
pub trait RenderTarget {
    fn draw_box(&mut self, rect: Rect, sprite: Sprite);
}

impl Wave {
    /// Issue draw calls for the current state, back to front: every live
    /// unit in row-major order, the ship if present, the defense line, then
    /// every live bolt. Repeated calls without an intervening `update`
    /// produce the identical sequence.
    pub fn draw(&self, view: &mut impl RenderTarget) {
        for unit in self.formation().live_units() {
            view.draw_box(unit.rect(), Sprite::Alien {
                variant: unit.variant,
            });
        }

        if let Some(ship) = self.ship() {
            view.draw_box(ship.rect(), Sprite::Ship);
        }

        view.draw_box(
            Rect::from_edges(0.0, GAME_WIDTH, self.defense_line(), self.defense_line()),
            Sprite::DefenseLine,
        );

        for bolt in self.bolts() {
            view.draw_box(bolt.rect(), Sprite::Bolt { owner: bolt.owner });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Bolt;
    use crate::sim::tick::TickInput;

    #[derive(Default)]
    struct RecordingView(Vec<(Rect, Sprite)>);

    impl RenderTarget for RecordingView {
        fn draw_box(&mut self, rect: Rect, sprite: Sprite) {
            self.0.push((rect, sprite));
        }
    }

    #[test]
    fn test_draw_order_back_to_front() {
        let mut wave = Wave::new(3);
        let ship = *wave.ship().unwrap();
        wave.bolts.push(Bolt::player(&ship));
        wave.bolts.push(Bolt::enemy(200.0, 500.0));

        let mut view = RecordingView::default();
        wave.draw(&mut view);

        let unit_count = wave.formation().live_count();
        assert_eq!(view.0.len(), unit_count + 1 + 1 + 2);

        // Units first, row-major
        for (_, sprite) in &view.0[..unit_count] {
            assert!(matches!(sprite, Sprite::Alien { .. }));
        }
        assert_eq!(view.0[unit_count].1, Sprite::Ship);
        assert_eq!(view.0[unit_count + 1].1, Sprite::DefenseLine);
        assert_eq!(view.0[unit_count + 2].1, Sprite::Bolt {
            owner: BoltOwner::Player,
        });
        assert_eq!(view.0[unit_count + 3].1, Sprite::Bolt {
            owner: BoltOwner::Enemy,
        });
    }

    #[test]
    fn test_draw_skips_destroyed_entities() {
        let mut wave = Wave::new(3);
        *wave.formation.cell_mut(0, 0) = None;
        wave.ship = None;

        let mut view = RecordingView::default();
        wave.draw(&mut view);

        let expected = wave.formation().live_count() + 1; // units + defense line
        assert_eq!(view.0.len(), expected);
        assert!(view.0.iter().all(|(_, s)| *s != Sprite::Ship));
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut wave = Wave::new(12);
        wave.update(&TickInput { fire: true, ..Default::default() }, 0.1, &mut ());

        let mut first = RecordingView::default();
        let mut second = RecordingView::default();
        wave.draw(&mut first);
        wave.draw(&mut second);
        assert_eq!(first.0, second.0);

        // Defense line spans the full screen width at the boundary height
        let line = first
            .0
            .iter()
            .find(|(_, s)| *s == Sprite::DefenseLine)
            .unwrap();
        assert_eq!(line.0.left(), 0.0);
        assert_eq!(line.0.right(), GAME_WIDTH);
        assert_eq!(line.0.bottom(), wave.defense_line());
    }
}
