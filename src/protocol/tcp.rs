//! TCP header decoder.

use etherparse::err::tcp::HeaderSliceError;
use etherparse::TcpHeaderSlice;

use crate::error::ProtocolError;

/// Size of a TCP header without options.
pub const TCP_HEADER_LEN: usize = 20;

/// TCP flags bit positions within the flags byte.
pub mod flags {
    pub const FIN: u8 = 0x01;
    pub const SYN: u8 = 0x02;
    pub const PSH: u8 = 0x08;
    pub const ACK: u8 = 0x10;
}

/// Decoded TCP header. Options are skipped, not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpHeader {
    pub src_port: u16,
    pub dst_port: u16,
    pub seq: u32,
    pub ack: u32,
    /// Header length in 32-bit words.
    pub data_offset: u8,
    /// The raw flags byte (offset 13).
    pub flags: u8,
    pub window: u16,
    pub checksum: u16,
    pub urgent_ptr: u16,
}

impl TcpHeader {
    /// Header length in bytes, as declared by the data offset.
    pub fn header_len(&self) -> usize {
        self.data_offset as usize * 4
    }

    /// Bytes of options following the fixed header.
    pub fn options_len(&self) -> usize {
        self.header_len().saturating_sub(TCP_HEADER_LEN)
    }

    pub fn is_syn(&self) -> bool {
        self.flags & flags::SYN != 0
    }

    pub fn is_fin(&self) -> bool {
        self.flags & flags::FIN != 0
    }
}

/// Decode a TCP header from the start of `data`, skipping any options.
///
/// Returns the header and the number of bytes consumed: the fixed header
/// plus the options region.
pub fn parse(data: &[u8]) -> Result<(TcpHeader, usize), ProtocolError> {
    let tcp = TcpHeaderSlice::from_slice(data).map_err(|e| match e {
        HeaderSliceError::Len(len) => ProtocolError::PacketTooShort {
            protocol: if len.required_len > TCP_HEADER_LEN {
                "tcp options"
            } else {
                "tcp"
            },
            needed: len.required_len,
            have: len.len,
        },
        HeaderSliceError::Content(content) => ProtocolError::InvalidField {
            protocol: "tcp",
            field: "data_offset",
            reason: content.to_string(),
        },
    })?;

    let raw = tcp.slice();
    let header = TcpHeader {
        src_port: tcp.source_port(),
        dst_port: tcp.destination_port(),
        seq: tcp.sequence_number(),
        ack: tcp.acknowledgment_number(),
        data_offset: tcp.data_offset(),
        flags: raw[13],
        window: tcp.window_size(),
        checksum: tcp.checksum(),
        urgent_ptr: tcp.urgent_pointer(),
    };
    Ok((header, raw.len()))
}
