//! Network address formatting.

use std::net::Ipv4Addr;

/// Format four octets as an IPv4 address in dotted-decimal notation.
///
/// # Example
///
/// ```
/// use pcapcarve::format::format_ipv4;
///
/// assert_eq!(format_ipv4([192, 168, 1, 1]), "192.168.1.1");
/// ```
pub fn format_ipv4(octets: [u8; 4]) -> String {
    Ipv4Addr::from(octets).to_string()
}

/// Format 6 bytes as a MAC address string in colon-separated hex format.
///
/// # Example
///
/// ```
/// use pcapcarve::format::format_mac;
///
/// assert_eq!(format_mac(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]), "aa:bb:cc:dd:ee:ff");
/// ```
pub fn format_mac(bytes: &[u8; 6]) -> String {
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
    )
}
