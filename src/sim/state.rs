//! Wave state and entity types
//!
//! Everything needed to resume a wave mid-flight serializes from here, RNG
//! state included. The wave exclusively owns its entities; collaborators
//! only see them through [`crate::sim::Wave::draw`] and the status getters.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::formation::Formation;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::WaveTuning;

/// Which side fired a bolt. Owner decides direction and what the bolt can
/// damage: player bolts go up and hit units, enemy bolts go down and hit
/// the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltOwner {
    Player,
    Enemy,
}

/// A laser bolt in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    pub center: Vec2,
    /// Vertical displacement per tick, positive up. The sign is fixed at
    /// spawn and always agrees with `owner`.
    pub velocity: f32,
    pub owner: BoltOwner,
}

impl Bolt {
    /// Player bolt spawned just above the ship's nose
    pub fn player(ship: &Ship) -> Self {
        Self {
            center: Vec2::new(ship.center_x, ship.rect().top() + BOLT_HEIGHT / 2.0 + 1.0),
            velocity: BOLT_SPEED,
            owner: BoltOwner::Player,
        }
    }

    /// Enemy bolt spawned just under the shooter's bottom edge
    pub fn enemy(x: f32, shooter_bottom: f32) -> Self {
        Self {
            center: Vec2::new(x, shooter_bottom - 1.0),
            velocity: -BOLT_SPEED,
            owner: BoltOwner::Enemy,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.center, Vec2::new(BOLT_WIDTH, BOLT_HEIGHT))
    }

    /// True once the bolt has fully left the visible vertical range
    pub fn off_screen(&self) -> bool {
        match self.owner {
            BoltOwner::Player => self.rect().bottom() > GAME_HEIGHT,
            BoltOwner::Enemy => self.rect().top() < 0.0,
        }
    }
}

/// The player ship. Only the horizontal position varies; the ship sits at a
/// fixed height above the screen bottom. Absence (`Option<Ship>` in the
/// wave) means destroyed, pending respawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub center_x: f32,
}

impl Ship {
    pub fn new() -> Self {
        Self {
            center_x: GAME_WIDTH / 2.0,
        }
    }

    pub fn center_y() -> f32 {
        SHIP_BOTTOM + SHIP_HEIGHT / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.center_x, Self::center_y()),
            Vec2::new(SHIP_WIDTH, SHIP_HEIGHT),
        )
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal status of the wave. Sticky by contract: once the wave reports a
/// non-ongoing outcome the driver stops calling `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    /// Player ran out of lives
    ShipLost,
    /// A unit dropped below the defense line
    Breached,
    /// Every formation cell is empty
    Cleared,
}

impl Outcome {
    /// Wire code for the outer driver: 0 ongoing, 1 out of lives,
    /// 2 boundary breached, 3 wave cleared
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Ongoing => 0,
            Outcome::ShipLost => 1,
            Outcome::Breached => 2,
            Outcome::Cleared => 3,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != Outcome::Ongoing
    }
}

/// One wave of the game: the formation, the ship, in-flight bolts, and the
/// march/fire clocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    pub(super) formation: Formation,
    pub(super) ship: Option<Ship>,
    pub(super) bolts: Vec<Bolt>,
    pub(super) defense_line: f32,
    pub(super) lives: u32,
    /// Elapsed time since the last march step, in seconds
    pub(super) march_timer: f32,
    /// Step-parity counter; even marches right, odd marches left. Flips
    /// only after a descent.
    pub(super) march_phase: u32,
    /// March steps taken since the last enemy bolt
    pub(super) steps_since_shot: u32,
    /// Step count that triggers the next enemy bolt, rolled in
    /// `[1, bolt_rate]`
    pub(super) fire_threshold: u32,
    /// Seconds between march steps; shrinks 0.97x per destroyed unit and
    /// never grows back within a wave
    pub(super) speed: f32,
    /// Set when the ship respawns; cleared on the next update while the
    /// ship is alive
    pub(super) paused: bool,
    pub(super) outcome: Outcome,
    pub(super) rng: Pcg32,
    pub(super) tuning: WaveTuning,
}

impl Wave {
    /// Create a wave with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, WaveTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: WaveTuning) -> Self {
        assert!(tuning.bolt_rate >= 1, "bolt_rate must be at least 1");

        let mut rng = Pcg32::seed_from_u64(seed);
        let fire_threshold = rng.random_range(1..=tuning.bolt_rate);
        log::info!(
            "wave start: {}x{} units, first fire threshold {}",
            tuning.rows,
            tuning.cols,
            fire_threshold
        );

        Self {
            formation: Formation::new(&tuning),
            ship: Some(Ship::new()),
            bolts: Vec::new(),
            defense_line: DEFENSE_LINE,
            lives: INITIAL_LIVES,
            march_timer: 0.0,
            march_phase: 0,
            steps_since_shot: 0,
            fire_threshold,
            speed: tuning.speed,
            paused: false,
            outcome: Outcome::Ongoing,
            rng,
            tuning,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Current seconds-per-step of the march
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn bolts(&self) -> &[Bolt] {
        &self.bolts
    }

    pub fn defense_line(&self) -> f32 {
        self.defense_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_wave() {
        let wave = Wave::new(42);
        assert_eq!(wave.lives(), INITIAL_LIVES);
        assert!(!wave.paused());
        assert_eq!(wave.outcome(), Outcome::Ongoing);
        assert!(wave.ship().is_some());
        assert!(wave.bolts().is_empty());
        assert!(wave.fire_threshold >= 1 && wave.fire_threshold <= BOLT_RATE);
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Ongoing.code(), 0);
        assert_eq!(Outcome::ShipLost.code(), 1);
        assert_eq!(Outcome::Breached.code(), 2);
        assert_eq!(Outcome::Cleared.code(), 3);
        assert!(!Outcome::Ongoing.is_over());
        assert!(Outcome::Cleared.is_over());
    }

    #[test]
    fn test_bolt_sign_matches_owner() {
        let player = Bolt::player(&Ship::new());
        assert!(player.velocity > 0.0);

        let enemy = Bolt::enemy(100.0, 500.0);
        assert!(enemy.velocity < 0.0);
    }

    #[test]
    fn test_bolt_off_screen() {
        let mut player = Bolt::player(&Ship::new());
        assert!(!player.off_screen());
        player.center.y = GAME_HEIGHT + BOLT_HEIGHT;
        assert!(player.off_screen());

        let mut enemy = Bolt::enemy(100.0, 500.0);
        assert!(!enemy.off_screen());
        enemy.center.y = -BOLT_HEIGHT;
        assert!(enemy.off_screen());
    }

    #[test]
    fn test_wave_serializes_round_trip() {
        let wave = Wave::new(7);
        let json = serde_json::to_string(&wave).unwrap();
        let restored: Wave = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.lives(), wave.lives());
        assert_eq!(restored.formation().live_count(), wave.formation().live_count());
        assert_eq!(restored.fire_threshold, wave.fire_threshold);
    }

    #[test]
    #[should_panic(expected = "bolt_rate")]
    fn test_zero_bolt_rate_is_a_contract_breach() {
        Wave::with_tuning(
            1,
            WaveTuning {
                bolt_rate: 0,
                ..Default::default()
            },
        );
    }
}
