//! Invader Wave - single-wave simulation core for a marching-formation shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation march, collisions, wave state)
//! - `audio`: Fire-and-forget audio cue seam
//! - `tuning`: Data-driven wave layout and balance
//!
//! The crate owns no window, renderer, or input loop. An outer driver calls
//! [`sim::Wave::update`] once per frame with captured input and elapsed time,
//! and [`sim::Wave::draw`] with its render target. Coordinates are y-up with
//! the origin at the bottom-left corner of the screen.

pub mod audio;
pub mod sim;
pub mod tuning;

pub use audio::{AudioCue, CuePlayer};
pub use sim::{Outcome, TickInput, Wave};
pub use tuning::WaveTuning;

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;

    /// Enemy unit box size
    pub const ALIEN_WIDTH: f32 = 33.3;
    pub const ALIEN_HEIGHT: f32 = 35.3;
    /// Separation between units at layout time; also the edge-proximity
    /// margin that turns the march around
    pub const ALIEN_H_SEP: f32 = 16.0;
    pub const ALIEN_V_SEP: f32 = 16.0;
    /// Default formation shape
    pub const ALIEN_ROWS: usize = 5;
    pub const ALIENS_IN_ROW: usize = 12;
    /// Gap between the screen top and the top row's center
    pub const ALIEN_CEILING: f32 = 100.0;
    /// Horizontal distance covered by one march step
    pub const ALIEN_H_WALK: f32 = ALIEN_WIDTH / 4.0;
    /// Vertical distance covered by one descent step
    pub const ALIEN_V_WALK: f32 = ALIEN_HEIGHT / 2.0;
    /// Sprite palette size; the variant index advances every two rows
    pub const ALIEN_VARIANT_COUNT: usize = 3;
    /// Seconds between march steps at wave start
    pub const ALIEN_SPEED: f32 = 1.0;
    /// March interval multiplier applied per destroyed unit
    pub const SPEED_DECAY: f32 = 0.97;

    /// Player ship box size
    pub const SHIP_WIDTH: f32 = 44.0;
    pub const SHIP_HEIGHT: f32 = 44.0;
    /// Gap between the screen bottom and the ship
    pub const SHIP_BOTTOM: f32 = 32.0;
    /// Ship displacement per tick while a direction key is held
    pub const SHIP_MOVEMENT: f32 = 5.0;

    /// Bolt box size
    pub const BOLT_WIDTH: f32 = 4.0;
    pub const BOLT_HEIGHT: f32 = 16.0;
    /// Bolt displacement per tick
    pub const BOLT_SPEED: f32 = 10.0;
    /// Upper bound for the randomized enemy-fire step threshold
    pub const BOLT_RATE: u32 = 5;

    /// Height of the defense line; a unit dropping below it ends the wave
    pub const DEFENSE_LINE: f32 = 100.0;
    pub const INITIAL_LIVES: u32 = 3;
}
