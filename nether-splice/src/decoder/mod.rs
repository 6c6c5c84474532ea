//! SPLICE stream decoder

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::SpliceError;
use crate::pattern::{Pattern, Steps, Track};
use crate::{HEADER_SIZE, PAYLOAD_ADJUSTMENT, SIZE_FIELD_SIZE, SPLICE_MAGIC, TEMPO_SIZE};

mod read;

use read::{read_array, read_padded_string, read_track_id};

/// Decode a pattern from a byte stream
///
/// Reads the header, tempo and exactly `payload size - 36` bytes of track
/// records. Bytes after the payload region are left in the stream.
pub fn decode<R: Read>(reader: R) -> Result<Pattern, SpliceError> {
    Decoder::new(reader).decode()
}

/// Decode a pattern from an in-memory buffer
pub fn decode_bytes(data: &[u8]) -> Result<Pattern, SpliceError> {
    decode(data)
}

/// Open the file at `path` and decode it
///
/// Open failures are returned as [`SpliceError::Open`] with the original
/// `io::Error` as the source.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Pattern, SpliceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SpliceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Decoding {}", path.display());
    decode(BufReader::new(file))
}

/// Single-use decoder over a byte stream
pub struct Decoder<R> {
    reader: R,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consume the decoder and decode one pattern
    pub fn decode(mut self) -> Result<Pattern, SpliceError> {
        // Read errors take priority over a bad magic
        let header: [u8; HEADER_SIZE] = read_array(&mut self.reader)?;
        let tempo = f32::from_le_bytes(read_array::<TEMPO_SIZE, _>(&mut self.reader)?);

        let header = Header::from_bytes(&header);
        if &header.magic != SPLICE_MAGIC {
            return Err(SpliceError::InvalidHeader);
        }

        let version = read_padded_string(&header.version);
        let payload_len = payload_len(header.total_size)?;

        debug!(
            "SPLICE header: version={:?} tempo={} total_size={} payload={}",
            version, tempo, header.total_size, payload_len
        );

        let mut region = self.reader.by_ref().take(payload_len);
        let tracks = read_tracks(&mut region)?;

        debug!("Decoded {} tracks", tracks.len());
        Ok(Pattern::new(version, tempo, tracks))
    }
}

/// Fixed 46-byte header, multi-byte fields big-endian
struct Header {
    magic: [u8; 6],
    total_size: i64,
    version: [u8; 32],
}

impl Header {
    fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let (magic_bytes, rest) = bytes.split_at(SPLICE_MAGIC.len());
        let (size_bytes, version_bytes) = rest.split_at(SIZE_FIELD_SIZE);

        let mut magic = [0u8; 6];
        magic.copy_from_slice(magic_bytes);
        let mut size = [0u8; SIZE_FIELD_SIZE];
        size.copy_from_slice(size_bytes);
        let mut version = [0u8; 32];
        version.copy_from_slice(version_bytes);

        Self {
            magic,
            total_size: i64::from_be_bytes(size),
            version,
        }
    }
}

/// Length of the track region left after version and tempo
fn payload_len(total_size: i64) -> Result<u64, SpliceError> {
    total_size
        .checked_sub(PAYLOAD_ADJUSTMENT)
        .and_then(|len| u64::try_from(len).ok())
        .ok_or_else(|| {
            SpliceError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "declared size {} is smaller than version and tempo fields ({})",
                    total_size, PAYLOAD_ADJUSTMENT
                ),
            ))
        })
}

/// Position within a track record
enum TrackState {
    ReadingId,
    ReadingLength { id: u32 },
    ReadingName { id: u32, len: u8 },
    ReadingSteps { id: u32, instrument: Vec<u8> },
}

/// Read track records until the region ends on a record boundary
fn read_tracks<R: Read>(region: &mut R) -> Result<Vec<Track>, SpliceError> {
    let mut tracks = Vec::new();
    let mut state = TrackState::ReadingId;

    loop {
        state = match state {
            TrackState::ReadingId => match read_track_id(region)? {
                Some(id) => TrackState::ReadingLength { id },
                None => return Ok(tracks),
            },
            TrackState::ReadingLength { id } => {
                let [len] = read_array::<1, _>(region)?;
                TrackState::ReadingName { id, len }
            }
            TrackState::ReadingName { id, len } => {
                let mut instrument = vec![0u8; len as usize];
                region.read_exact(&mut instrument)?;
                TrackState::ReadingSteps { id, instrument }
            }
            TrackState::ReadingSteps { id, instrument } => {
                let steps = Steps::from_bytes(read_array(region)?);
                let track = Track::new(id, instrument, steps);
                trace!("Track {}: {}", tracks.len(), track);
                tracks.push(track);
                TrackState::ReadingId
            }
        };
    }
}
