//! Ethernet II header decoder.

use etherparse::Ethernet2HeaderSlice;

use crate::error::ProtocolError;
use crate::format::format_mac;

/// Size of the Ethernet II header in bytes.
pub const ETHERNET_HEADER_LEN: usize = 14;

/// Well-known EtherTypes.
pub mod ethertype {
    pub const IPV4: u16 = 0x0800;
    pub const IPV6: u16 = 0x86DD;
}

/// Decoded Ethernet II header.
///
/// The two address fields are kept in the order they appear in the frame.
/// Which one is the sender is not asserted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeader {
    pub first_addr: [u8; 6],
    pub second_addr: [u8; 6],
    pub ethertype: u16,
}

impl EthernetHeader {
    /// Both addresses as display strings, in wire order.
    pub fn addrs(&self) -> (String, String) {
        (format_mac(&self.first_addr), format_mac(&self.second_addr))
    }
}

/// Decode an Ethernet II header from the start of `data`.
pub fn parse(data: &[u8]) -> Result<(EthernetHeader, usize), ProtocolError> {
    let eth = Ethernet2HeaderSlice::from_slice(data).map_err(|e| ProtocolError::PacketTooShort {
        protocol: "ethernet",
        needed: e.required_len,
        have: e.len,
    })?;

    let header = EthernetHeader {
        first_addr: eth.destination(),
        second_addr: eth.source(),
        ethertype: eth.ether_type().0,
    };
    Ok((header, eth.slice().len()))
}
