//! Decoded SPLICE pattern data structures

use std::borrow::Cow;
use std::fmt;

use crate::{STEPS_PER_GROUP, STEPS_PER_TRACK};

/// Decoded drum pattern (version, tempo and tracks in file order)
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    version: String,
    tempo: f32,
    tracks: Vec<Track>,
}

impl Pattern {
    pub(crate) fn new(version: String, tempo: f32, tracks: Vec<Track>) -> Self {
        Self {
            version,
            tempo,
            tracks,
        }
    }

    /// Hardware/software version that saved the pattern
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Tempo in BPM
    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    /// Tracks in the order they appear in the file
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// First track with the given id
    ///
    /// Ids are not required to be unique, so later tracks sharing an id are
    /// only reachable through [`Pattern::tracks`].
    pub fn find_track(&self, id: u32) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Instrument names of all tracks, in file order
    pub fn instrument_names(&self) -> Vec<Cow<'_, str>> {
        self.tracks.iter().map(Track::instrument).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}

/// One instrument lane of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: u32,
    /// Raw name bytes (not guaranteed to be UTF-8)
    instrument: Vec<u8>,
    steps: Steps,
}

impl Track {
    pub(crate) fn new(id: u32, instrument: Vec<u8>, steps: Steps) -> Self {
        Self {
            id,
            instrument,
            steps,
        }
    }

    /// Instrument/sound slot id
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Instrument name, with invalid UTF-8 replaced
    pub fn instrument(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.instrument)
    }

    /// Instrument name exactly as stored in the file
    pub fn instrument_bytes(&self) -> &[u8] {
        &self.instrument
    }

    pub fn steps(&self) -> &Steps {
        &self.steps
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t{}", self.id, self.instrument(), self.steps)
    }
}

/// The 16 sequencer steps of a track (nonzero = active)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Steps([u8; STEPS_PER_TRACK]);

impl Steps {
    pub fn from_bytes(bytes: [u8; STEPS_PER_TRACK]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; STEPS_PER_TRACK] {
        &self.0
    }

    /// Check if the step at `index` is active (out of range steps are inactive)
    pub fn is_active(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|&b| b != 0)
    }

    /// Number of active steps
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&b| b != 0).count()
    }

    /// Active flag of every step, in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().map(|&b| b != 0)
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, active) in self.iter().enumerate() {
            if i % STEPS_PER_GROUP == 0 {
                f.write_str("|")?;
            }
            f.write_str(if active { "x" } else { "-" })?;
        }
        f.write_str("|")
    }
}
