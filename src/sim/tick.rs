//! Per-tick update pipeline
//!
//! Sub-step order is a contract: formation march and unit collisions, then
//! the ship, then bolt spawning/motion, then terminal evaluation. All
//! mutation for a tick happens inside one `update` call; `draw` between
//! ticks observes a frozen wave.

use rand::Rng;

use super::state::{Bolt, BoltOwner, Outcome, Ship, Wave};
use crate::audio::{AudioCue, CuePlayer};
use crate::consts::*;

/// Logical keys the wave reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Up and spacebar both map here
    Fire,
}

/// Boolean key-state queries supplied by the host's input layer
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Plain captured input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputSource for TickInput {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Fire => self.fire,
        }
    }
}

impl Wave {
    /// Advance the wave by one tick.
    ///
    /// `dt` is the elapsed real time in seconds since the previous tick and
    /// must be finite and non-negative; anything else is a caller bug. Once
    /// the outcome is non-ongoing the driver is expected to stop calling
    /// this - the wave does not halt itself.
    pub fn update(&mut self, input: &impl InputSource, dt: f32, cues: &mut impl CuePlayer) {
        assert!(
            dt.is_finite() && dt >= 0.0,
            "dt must be a non-negative number of seconds"
        );

        self.march_formation(dt, cues);
        self.update_ship(input, cues);
        self.update_bolts(input, cues);
        self.check_outcome();
    }

    /// Accumulate elapsed time and take at most one march step, then resolve
    /// bolt hits on units.
    ///
    /// The step is picked by a 4-branch machine keyed on phase parity and
    /// whether the leading edge still has one separation's worth of room.
    /// The phase flips only after a descent, so the next horizontal leg runs
    /// the other way.
    fn march_formation(&mut self, dt: f32, cues: &mut impl CuePlayer) {
        self.march_timer += dt;

        if self.march_timer >= self.speed {
            let marching_right = self.march_phase % 2 == 0;
            let room_right = self.formation.leading_right() < GAME_WIDTH - self.tuning.h_sep;
            let room_left = self.formation.leading_left() > self.tuning.h_sep;

            if marching_right && room_right {
                self.formation.step_right();
            } else if marching_right {
                self.formation.step_down();
                self.march_phase += 1;
            } else if room_left {
                self.formation.step_left();
            } else {
                self.formation.step_down();
                self.march_phase += 1;
            }

            self.march_timer = 0.0;
            self.steps_since_shot += 1;
        }

        self.resolve_unit_hits(cues);
    }

    /// Scan every live unit against every live player bolt; an overlap
    /// destroys both and speeds up the march for the rest of the wave.
    fn resolve_unit_hits(&mut self, cues: &mut impl CuePlayer) {
        for row in 0..self.formation.rows() {
            for col in 0..self.formation.cols() {
                let Some(unit) = self.formation.cell(row, col) else {
                    continue;
                };
                let unit_rect = unit.rect();
                let hit = self
                    .bolts
                    .iter()
                    .position(|bolt| {
                        bolt.owner == BoltOwner::Player && unit_rect.overlaps(&bolt.rect())
                    });
                if let Some(index) = hit {
                    cues.play(AudioCue::AlienDestroyed);
                    *self.formation.cell_mut(row, col) = None;
                    self.bolts.remove(index);
                    self.speed *= SPEED_DECAY;
                    log::debug!(
                        "unit ({row},{col}) destroyed, march interval now {:.3}s",
                        self.speed
                    );
                }
            }
        }
    }

    /// Move the ship from held keys, clamp it to the screen, and resolve
    /// enemy bolt hits. A live ship here clears the respawn pause, so play
    /// resumes on the first input after a respawn.
    fn update_ship(&mut self, input: &impl InputSource, cues: &mut impl CuePlayer) {
        if self.ship.is_some() {
            self.paused = false;
        }

        let mut delta = 0.0;
        if input.is_key_down(Key::Right) {
            delta += SHIP_MOVEMENT;
        }
        if input.is_key_down(Key::Left) {
            delta -= SHIP_MOVEMENT;
        }

        if let Some(ship) = self.ship.as_mut() {
            ship.center_x = (ship.center_x + delta)
                .clamp(SHIP_WIDTH / 2.0, GAME_WIDTH - SHIP_WIDTH / 2.0);
        }

        if let Some(ship_rect) = self.ship.map(|ship| ship.rect()) {
            let hit = self
                .bolts
                .iter()
                .position(|bolt| bolt.owner == BoltOwner::Enemy && ship_rect.overlaps(&bolt.rect()));
            if let Some(index) = hit {
                cues.play(AudioCue::ShipDestroyed);
                self.ship = None;
                self.bolts.remove(index);
            }
        }
    }

    /// Spawn enemy and player bolts, then advance every bolt and compact
    /// the ones that left the screen.
    fn update_bolts(&mut self, input: &impl InputSource, cues: &mut impl CuePlayer) {
        if self.steps_since_shot >= self.fire_threshold {
            self.enemy_fire(cues);
            self.steps_since_shot = 0;
            self.fire_threshold = self.rng.random_range(1..=self.tuning.bolt_rate);
        }

        if input.is_key_down(Key::Fire) {
            self.player_fire();
        }

        for bolt in &mut self.bolts {
            bolt.center.y += bolt.velocity;
        }
        self.bolts.retain(|bolt| !bolt.off_screen());
    }

    /// Fire from the bottommost unit of a uniformly random live column.
    /// A fully empty formation skips the shot; the scheduler still resets.
    fn enemy_fire(&mut self, cues: &mut impl CuePlayer) {
        let live_cols: Vec<usize> = (0..self.formation.cols())
            .filter(|&col| self.formation.column_has_live(col))
            .collect();
        if live_cols.is_empty() {
            log::debug!("enemy fire skipped: formation empty");
            return;
        }

        let col = live_cols[self.rng.random_range(0..live_cols.len())];
        if let Some(shooter) = self.formation.bottommost_in_column(col) {
            self.bolts
                .push(Bolt::enemy(shooter.center.x, shooter.rect().bottom()));
            cues.play(AudioCue::BoltFired);
        }
    }

    /// Spawn the ship's bolt if fire is held and no player bolt is live.
    /// Held fire is enough; the at-most-one rule is what throttles it.
    fn player_fire(&mut self) {
        if self.bolts.iter().any(|bolt| bolt.owner == BoltOwner::Player) {
            return;
        }
        if let Some(ship) = &self.ship {
            self.bolts.push(Bolt::player(ship));
        }
    }

    /// Ordered terminal evaluation. Later writes win within a tick, so the
    /// effective priority is breach over clear over loss-by-lives.
    fn check_outcome(&mut self) {
        if self.ship.is_none() && self.lives > 0 {
            self.lives -= 1;
            self.ship = Some(Ship::new());
            self.paused = true;
            log::info!("ship lost, {} lives left", self.lives);
        } else if self.ship.is_none() && self.lives == 0 {
            self.set_outcome(Outcome::ShipLost);
        }

        if self.formation.is_cleared() {
            self.set_outcome(Outcome::Cleared);
        }

        if self.formation.lowest_edge() < self.defense_line {
            self.set_outcome(Outcome::Breached);
        }
    }

    fn set_outcome(&mut self, outcome: Outcome) {
        if self.outcome != outcome {
            log::info!("wave outcome: {outcome:?}");
        }
        self.outcome = outcome;
    }
}
