//! Audio cue seam
//!
//! The sim never touches an audio backend. It reports cues through
//! [`CuePlayer`] as they happen and the host maps each cue onto whatever
//! sound it loaded. Playback is fire-and-forget: nothing in the sim waits
//! on or reads back from the player.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Player ship destroyed by an enemy bolt
    ShipDestroyed,
    /// Enemy bolt fired
    BoltFired,
    /// Enemy unit destroyed by a player bolt
    AlienDestroyed,
}

/// Fire-and-forget cue playback
pub trait CuePlayer {
    fn play(&mut self, cue: AudioCue);
}

/// Silent player for headless drivers and tests
impl CuePlayer for () {
    fn play(&mut self, _cue: AudioCue) {}
}
