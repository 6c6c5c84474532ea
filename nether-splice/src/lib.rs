//! Nether-Splice: SPLICE drum pattern decoder for Nethercore
//!
//! This crate decodes the binary `.splice` drum machine format into a
//! [`Pattern`]: the hardware version string that saved it, a tempo, and an
//! ordered list of instrument tracks with 16 on/off sequencer steps each.
//!
//! # SPLICE Format Overview
//!
//! | Offset | Size     | Field                                   |
//! |--------|----------|-----------------------------------------|
//! | 0      | 6        | Magic `"SPLICE"`                        |
//! | 6      | 8        | Payload size (i64, big-endian)          |
//! | 14     | 32       | Version string, zero padded             |
//! | 46     | 4        | Tempo (f32, little-endian)              |
//! | 50     | variable | Track records, `payload size - 36` bytes |
//!
//! Each track record is an id (u32, little-endian), a one byte name length,
//! the instrument name, and 16 step bytes. Anything after the payload region
//! is not part of the pattern and is left unread.
//!
//! The format is read-only here; there is no encoder.
//!
//! # Usage
//!
//! ```ignore
//! use nether_splice::decode_file;
//!
//! let pattern = decode_file("pattern_1.splice").unwrap();
//!
//! println!("Version: {}", pattern.version());
//! println!("Tracks: {}", pattern.track_count());
//! print!("{}", pattern);
//! ```

mod decoder;
mod error;
mod pattern;

pub use decoder::{Decoder, decode, decode_bytes, decode_file};
pub use error::SpliceError;
pub use pattern::{Pattern, Steps, Track};

// =============================================================================
// Constants
// =============================================================================

/// SPLICE format magic string
pub const SPLICE_MAGIC: &[u8; 6] = b"SPLICE";

/// Size of the payload size field following the magic
pub const SIZE_FIELD_SIZE: usize = 8;

/// Size of the zero padded version slot
pub const VERSION_SLOT_SIZE: usize = 32;

/// Fixed header: magic + payload size + version slot
pub const HEADER_SIZE: usize = SPLICE_MAGIC.len() + SIZE_FIELD_SIZE + VERSION_SLOT_SIZE;

/// Size of the tempo field following the header
pub const TEMPO_SIZE: usize = 4;

/// Bytes of the declared payload size already consumed by version and tempo
pub const PAYLOAD_ADJUSTMENT: i64 = (VERSION_SLOT_SIZE + TEMPO_SIZE) as i64;

/// Number of sequencer steps in every track
pub const STEPS_PER_TRACK: usize = 16;

/// Steps shown between `|` separators when rendering
pub const STEPS_PER_GROUP: usize = 4;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(SPLICE_MAGIC.len(), 6);
        assert_eq!(HEADER_SIZE, 46);
        assert_eq!(PAYLOAD_ADJUSTMENT, 36);
        assert_eq!(STEPS_PER_TRACK % STEPS_PER_GROUP, 0);
    }
}
