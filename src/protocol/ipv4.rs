//! IPv4 header decoder.
//!
//! Only the fixed 20-byte header is read, whatever the IHL declares. A
//! header announcing options is not realigned: the transport header is
//! still expected at byte 20.

use byteorder::{ByteOrder, NetworkEndian};

use crate::error::ProtocolError;
use crate::format::format_ipv4;

/// Size of an IPv4 header without options.
pub const IPV4_HEADER_LEN: usize = 20;

/// IP protocol number for TCP.
pub const IP_PROTO_TCP: u8 = 6;

/// Decoded IPv4 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    pub version_ihl: u8,
    pub tos: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags_fragment: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub src: [u8; 4],
    pub dst: [u8; 4],
}

impl Ipv4Header {
    /// Version nibble.
    pub fn version(&self) -> u8 {
        self.version_ihl >> 4
    }

    /// Header length in bytes, as declared by the IHL nibble.
    pub fn header_len(&self) -> usize {
        (self.version_ihl & 0x0f) as usize * 4
    }

    pub fn src_ip(&self) -> String {
        format_ipv4(self.src)
    }

    pub fn dst_ip(&self) -> String {
        format_ipv4(self.dst)
    }
}

/// Decode the fixed IPv4 header from the start of `data`.
///
/// Always consumes [`IPV4_HEADER_LEN`] bytes.
pub fn parse(data: &[u8]) -> Result<(Ipv4Header, usize), ProtocolError> {
    if data.len() < IPV4_HEADER_LEN {
        return Err(ProtocolError::PacketTooShort {
            protocol: "ipv4",
            needed: IPV4_HEADER_LEN,
            have: data.len(),
        });
    }

    let mut src = [0u8; 4];
    let mut dst = [0u8; 4];
    src.copy_from_slice(&data[12..16]);
    dst.copy_from_slice(&data[16..20]);

    let header = Ipv4Header {
        version_ihl: data[0],
        tos: data[1],
        total_length: NetworkEndian::read_u16(&data[2..4]),
        identification: NetworkEndian::read_u16(&data[4..6]),
        flags_fragment: NetworkEndian::read_u16(&data[6..8]),
        ttl: data[8],
        protocol: data[9],
        checksum: NetworkEndian::read_u16(&data[10..12]),
        src,
        dst,
    };
    Ok((header, IPV4_HEADER_LEN))
}
