//! Layer decoding for captured frames.
//!
//! Each layer is a plain function with the same shape,
//! `fn parse(&[u8]) -> Result<(Header, usize), ProtocolError>`, returning the
//! decoded header and the bytes it consumed. All fields are in network order.
//! The layer order is fixed (Ethernet, IPv4, TCP), so [`decode_segment`]
//! calls them directly.

pub mod ethernet;
pub mod ipv4;
pub mod tcp;

// Test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

pub use ethernet::{ethertype, EthernetHeader, ETHERNET_HEADER_LEN};
pub use ipv4::{Ipv4Header, IPV4_HEADER_LEN, IP_PROTO_TCP};
pub use tcp::{flags, TcpHeader, TCP_HEADER_LEN};

use crate::error::ProtocolError;

/// The decoded layers of one frame and its TCP payload.
#[derive(Debug, Clone, Copy)]
pub struct TcpSegment<'a> {
    pub ethernet: EthernetHeader,
    pub ipv4: Ipv4Header,
    pub tcp: TcpHeader,
    /// Transport payload, `total_length - ip_header_len - tcp_header_len` long.
    pub payload: &'a [u8],
}

impl TcpSegment<'_> {
    pub fn seq(&self) -> u32 {
        self.tcp.seq
    }

    pub fn flags(&self) -> u8 {
        self.tcp.flags
    }

    pub fn total_length(&self) -> u16 {
        self.ipv4.total_length
    }
}

/// Decode Ethernet, IPv4 and TCP headers and slice out the TCP payload.
///
/// The payload length comes from the IPv4 total length, so trailing link
/// padding is excluded. No checksum is validated and neither the ethertype
/// nor the IP protocol number is checked.
pub fn decode_segment(data: &[u8]) -> Result<TcpSegment<'_>, ProtocolError> {
    let mut offset = 0;

    let (ethernet, consumed) = ethernet::parse(&data[offset..])?;
    offset += consumed;

    let (ipv4, consumed) = ipv4::parse(&data[offset..])?;
    offset += consumed;

    let (tcp, consumed) = tcp::parse(&data[offset..])?;
    offset += consumed;

    let ip_header_len = ipv4.header_len();
    let tcp_header_len = tcp.header_len();
    let payload_len = (ipv4.total_length as usize)
        .checked_sub(ip_header_len + tcp_header_len)
        .ok_or_else(|| ProtocolError::InvalidField {
            protocol: "ipv4",
            field: "total_length",
            reason: format!(
                "{} is smaller than IP header ({ip_header_len}) + TCP header ({tcp_header_len})",
                ipv4.total_length
            ),
        })?;

    let remaining = data.len() - offset;
    if payload_len > remaining {
        return Err(ProtocolError::PacketTooShort {
            protocol: "tcp payload",
            needed: payload_len,
            have: remaining,
        });
    }

    Ok(TcpSegment {
        ethernet,
        ipv4,
        tcp,
        payload: &data[offset..offset + payload_len],
    })
}
