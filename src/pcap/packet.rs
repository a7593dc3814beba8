//! Packet record representation.

use byteorder::{ByteOrder, LittleEndian};

/// Size of the per-record header in bytes.
pub const RECORD_HEADER_LEN: usize = 16;

/// The fixed header preceding each captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Timestamp, whole seconds.
    pub ts_sec: u32,
    /// Timestamp, sub-second units.
    pub ts_frac: u32,
    /// Bytes present in the trace.
    pub captured_len: u32,
    /// Length of the frame on the wire.
    pub original_len: u32,
}

impl RecordHeader {
    /// Parse a record header in byte order `B`.
    pub(crate) fn parse<B: ByteOrder>(raw: &[u8; RECORD_HEADER_LEN]) -> Self {
        Self {
            ts_sec: B::read_u32(&raw[0..4]),
            ts_frac: B::read_u32(&raw[4..8]),
            captured_len: B::read_u32(&raw[8..12]),
            original_len: B::read_u32(&raw[12..16]),
        }
    }

    /// Serialize to the on-disk little-endian layout.
    pub fn to_bytes(&self) -> [u8; RECORD_HEADER_LEN] {
        let mut out = [0u8; RECORD_HEADER_LEN];
        LittleEndian::write_u32(&mut out[0..4], self.ts_sec);
        LittleEndian::write_u32(&mut out[4..8], self.ts_frac);
        LittleEndian::write_u32(&mut out[8..12], self.captured_len);
        LittleEndian::write_u32(&mut out[12..16], self.original_len);
        out
    }
}

/// One captured frame, borrowed from the trace buffer.
#[derive(Debug, Clone, Copy)]
pub struct PacketRecord<'a> {
    /// Frame number (1-indexed).
    pub frame_number: u64,

    /// Byte offset of the record header within the trace.
    pub offset: usize,

    pub header: RecordHeader,

    /// Captured frame bytes, `header.captured_len` long.
    pub data: &'a [u8],
}

impl PacketRecord<'_> {
    /// Timestamp in microseconds since epoch.
    pub fn timestamp_us(&self) -> i64 {
        (self.header.ts_sec as i64) * 1_000_000 + (self.header.ts_frac as i64)
    }

    /// Check if the packet was truncated during capture.
    pub fn is_truncated(&self) -> bool {
        self.header.captured_len < self.header.original_len
    }
}
