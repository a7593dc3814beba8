//! Classic pcap global header.

use std::fmt;

use crate::error::PcapError;
use byteorder::{ByteOrder, LittleEndian};

/// Size of the global header in bytes.
pub const GLOBAL_HEADER_LEN: usize = 24;

/// The only supported magic: little-endian, microsecond timestamps.
pub const PCAP_MAGIC: u32 = 0xa1b2c3d4;

/// Link type constant for Ethernet.
pub const LINKTYPE_ETHERNET: u32 = 1;

// Markers we recognise only to give a better diagnostic.
const PCAP_MAGIC_SWAPPED: u32 = 0xd4c3b2a1;
const PCAP_MAGIC_NANO: u32 = 0xa1b23c4d;
const PCAP_MAGIC_NANO_SWAPPED: u32 = 0x4d3cb2a1;
const PCAPNG_MAGIC: u32 = 0x0a0d0d0a;

/// The 24-byte preamble of a classic pcap trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalHeader {
    pub magic: u32,
    pub version_major: u16,
    pub version_minor: u16,
    /// GMT to local correction, in seconds.
    pub thiszone: i32,
    /// Timestamp accuracy.
    pub sigfigs: u32,
    pub snaplen: u32,
    pub link_type: u32,
}

impl GlobalHeader {
    /// Parse the global header from the start of `data`.
    ///
    /// Fails if fewer than [`GLOBAL_HEADER_LEN`] bytes are available or the
    /// magic is anything other than [`PCAP_MAGIC`] read little-endian.
    pub fn parse(data: &[u8]) -> Result<Self, PcapError> {
        if data.len() < GLOBAL_HEADER_LEN {
            return Err(PcapError::InvalidFormat {
                offset: data.len(),
                reason: format!(
                    "file too small for PCAP header ({} of {GLOBAL_HEADER_LEN} bytes)",
                    data.len()
                ),
            });
        }

        let magic = LittleEndian::read_u32(&data[0..4]);
        if magic != PCAP_MAGIC {
            return Err(PcapError::InvalidFormat {
                offset: 0,
                reason: unsupported_magic_reason(magic),
            });
        }

        Ok(Self {
            magic,
            version_major: LittleEndian::read_u16(&data[4..6]),
            version_minor: LittleEndian::read_u16(&data[6..8]),
            thiszone: LittleEndian::read_i32(&data[8..12]),
            sigfigs: LittleEndian::read_u32(&data[12..16]),
            snaplen: LittleEndian::read_u32(&data[16..20]),
            link_type: LittleEndian::read_u32(&data[20..24]),
        })
    }

    /// Serialize back to the on-disk layout.
    pub fn to_bytes(&self) -> [u8; GLOBAL_HEADER_LEN] {
        let mut out = [0u8; GLOBAL_HEADER_LEN];
        LittleEndian::write_u32(&mut out[0..4], self.magic);
        LittleEndian::write_u16(&mut out[4..6], self.version_major);
        LittleEndian::write_u16(&mut out[6..8], self.version_minor);
        LittleEndian::write_i32(&mut out[8..12], self.thiszone);
        LittleEndian::write_u32(&mut out[12..16], self.sigfigs);
        LittleEndian::write_u32(&mut out[16..20], self.snaplen);
        LittleEndian::write_u32(&mut out[20..24], self.link_type);
        out
    }

    /// Whether the capture claims an Ethernet link layer.
    pub fn is_ethernet(&self) -> bool {
        self.link_type == LINKTYPE_ETHERNET
    }
}

impl Default for GlobalHeader {
    fn default() -> Self {
        Self {
            magic: PCAP_MAGIC,
            version_major: 2,
            version_minor: 4,
            thiszone: 0,
            sigfigs: 0,
            snaplen: 65535,
            link_type: LINKTYPE_ETHERNET,
        }
    }
}

impl fmt::Display for GlobalHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "magic:          {:#010x}", self.magic)?;
        writeln!(f, "version:        {}.{}", self.version_major, self.version_minor)?;
        writeln!(f, "thiszone:       {}", self.thiszone)?;
        writeln!(f, "sigfigs:        {}", self.sigfigs)?;
        writeln!(f, "snaplen:        {}", self.snaplen)?;
        write!(f, "link type:      {}", self.link_type)
    }
}

fn unsupported_magic_reason(magic: u32) -> String {
    match magic {
        PCAP_MAGIC_SWAPPED => "big-endian PCAP traces are not supported".to_string(),
        PCAP_MAGIC_NANO | PCAP_MAGIC_NANO_SWAPPED => {
            "nanosecond-resolution PCAP traces are not supported".to_string()
        }
        PCAPNG_MAGIC => "PCAPNG traces are not supported".to_string(),
        other => format!("Unknown PCAP magic: 0x{other:08x}"),
    }
}
