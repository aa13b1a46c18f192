//! Data-driven wave balance
//!
//! The defaults reproduce the first wave. Later waves scale by feeding a
//! different [`WaveTuning`] to [`crate::sim::Wave::with_tuning`] - more rows,
//! a faster march, a tighter fire threshold - without touching sim code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Layout and balance knobs for one wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    /// Formation rows
    pub rows: usize,
    /// Units per row
    pub cols: usize,
    /// Horizontal separation between units, and the edge margin that turns
    /// the march around
    pub h_sep: f32,
    /// Vertical separation between rows
    pub v_sep: f32,
    /// Gap between the screen top and the top row's center
    pub ceiling: f32,
    /// Seconds between march steps at wave start
    pub speed: f32,
    /// Upper bound for the randomized enemy-fire threshold, in march steps
    pub bolt_rate: u32,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            rows: ALIEN_ROWS,
            cols: ALIENS_IN_ROW,
            h_sep: ALIEN_H_SEP,
            v_sep: ALIEN_V_SEP,
            ceiling: ALIEN_CEILING,
            speed: ALIEN_SPEED,
            bolt_rate: BOLT_RATE,
        }
    }
}

impl WaveTuning {
    /// Parse tuning from JSON; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = WaveTuning::default();
        assert_eq!(tuning.rows, ALIEN_ROWS);
        assert_eq!(tuning.cols, ALIENS_IN_ROW);
        assert_eq!(tuning.bolt_rate, BOLT_RATE);
        assert!((tuning.speed - ALIEN_SPEED).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_json_partial() {
        let tuning = WaveTuning::from_json(r#"{"rows": 7, "speed": 0.6}"#).unwrap();
        assert_eq!(tuning.rows, 7);
        assert!((tuning.speed - 0.6).abs() < f32::EPSILON);
        // Unspecified fields keep their defaults
        assert_eq!(tuning.cols, ALIENS_IN_ROW);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(WaveTuning::from_json("not json").is_err());
    }
}
