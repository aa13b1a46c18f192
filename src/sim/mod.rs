//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies (traits at the seams)
//! - One `update` per tick, sub-steps in a fixed order

pub mod draw;
pub mod formation;
pub mod rect;
pub mod state;
pub mod tick;

pub use draw::{RenderTarget, Sprite};
pub use formation::{Alien, Formation};
pub use rect::Rect;
pub use state::{Bolt, BoltOwner, Outcome, Ship, Wave};
pub use tick::{InputSource, Key, TickInput};
