//! Helper functions for reading binary data

use std::io::{self, Read};

/// Read exactly `N` bytes
pub(crate) fn read_array<const N: usize, R: Read>(reader: &mut R) -> io::Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read a 32-bit little-endian track id
///
/// Returns `Ok(None)` when the reader is already at its end. Running out after
/// part of the id has been read is an `UnexpectedEof` error.
pub(crate) fn read_track_id<R: Read>(reader: &mut R) -> io::Result<Option<u32>> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("track id truncated after {} of 4 bytes", filled),
                ));
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(Some(u32::from_le_bytes(buf)))
}

/// Convert a zero padded slot to a string, stripping trailing zero bytes
pub(crate) fn read_padded_string(bytes: &[u8]) -> String {
    let len = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&bytes[..len]).into_owned()
}
