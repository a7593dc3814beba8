//! Test utilities for building frames and traces.
//!
//! Provides builders for Ethernet/IPv4/TCP frames and a trace builder that
//! wraps frames into a classic pcap file.

use crate::pcap::{GlobalHeader, RecordHeader};

/// Builder for constructing Ethernet frames.
#[derive(Debug, Clone)]
pub struct EthernetBuilder {
    first_addr: [u8; 6],
    second_addr: [u8; 6],
    ethertype: u16,
    payload: Vec<u8>,
}

impl Default for EthernetBuilder {
    fn default() -> Self {
        Self {
            first_addr: [0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
            second_addr: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            ethertype: 0x0800, // IPv4
            payload: Vec::new(),
        }
    }
}

impl EthernetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ethertype(mut self, ethertype: u16) -> Self {
        self.ethertype = ethertype;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(14 + self.payload.len());
        frame.extend_from_slice(&self.first_addr);
        frame.extend_from_slice(&self.second_addr);
        frame.extend_from_slice(&self.ethertype.to_be_bytes());
        frame.extend_from_slice(&self.payload);
        frame
    }
}

/// Builder for constructing IPv4 headers.
#[derive(Debug, Clone)]
pub struct Ipv4Builder {
    version_ihl: u8,
    total_length: Option<u16>,
    protocol: u8,
    src_ip: [u8; 4],
    dst_ip: [u8; 4],
    payload: Vec<u8>,
}

impl Default for Ipv4Builder {
    fn default() -> Self {
        Self {
            version_ihl: 0x45, // Version 4, IHL 5 (20 bytes)
            total_length: None,
            protocol: 6, // TCP
            src_ip: [192, 168, 1, 1],
            dst_ip: [192, 168, 1, 2],
            payload: Vec::new(),
        }
    }
}

impl Ipv4Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version_ihl(mut self, version_ihl: u8) -> Self {
        self.version_ihl = version_ihl;
        self
    }

    /// Override the total length instead of deriving it from the payload.
    pub fn total_length(mut self, total_length: u16) -> Self {
        self.total_length = Some(total_length);
        self
    }

    pub fn protocol(mut self, protocol: u8) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let total_length = self
            .total_length
            .unwrap_or(20 + self.payload.len() as u16);
        let mut header = Vec::with_capacity(20 + self.payload.len());

        header.push(self.version_ihl);
        header.push(0x00); // DSCP + ECN
        header.extend_from_slice(&total_length.to_be_bytes());
        header.extend_from_slice(&[0x00, 0x01]); // Identification
        header.extend_from_slice(&[0x40, 0x00]); // Don't fragment
        header.push(64); // TTL
        header.push(self.protocol);
        header.extend_from_slice(&[0x00, 0x00]); // Checksum (not calculated)
        header.extend_from_slice(&self.src_ip);
        header.extend_from_slice(&self.dst_ip);
        header.extend_from_slice(&self.payload);

        header
    }
}

/// Builder for constructing TCP headers.
#[derive(Debug, Clone)]
pub struct TcpBuilder {
    src_port: u16,
    dst_port: u16,
    seq: u32,
    ack: u32,
    flags: u8,
    data_offset: Option<u8>,
    options: Vec<u8>,
    payload: Vec<u8>,
}

impl Default for TcpBuilder {
    fn default() -> Self {
        Self {
            src_port: 80,
            dst_port: 49152,
            seq: 1,
            ack: 0,
            flags: 0x18, // PSH + ACK
            data_offset: None,
            options: Vec::new(),
            payload: Vec::new(),
        }
    }
}

impl TcpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seq(mut self, seq: u32) -> Self {
        self.seq = seq;
        self
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub fn syn(self) -> Self {
        self.flags(0x02)
    }

    pub fn fin(self) -> Self {
        self.flags(0x11)
    }

    /// Override the data offset nibble (header length in words).
    pub fn data_offset(mut self, words: u8) -> Self {
        self.data_offset = Some(words);
        self
    }

    /// Append options; the length must be a multiple of 4.
    pub fn options(mut self, options: Vec<u8>) -> Self {
        assert_eq!(options.len() % 4, 0, "TCP options must be word aligned");
        self.options = options;
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let header_len = 20 + self.options.len();
        let mut header = Vec::with_capacity(header_len + self.payload.len());

        header.extend_from_slice(&self.src_port.to_be_bytes());
        header.extend_from_slice(&self.dst_port.to_be_bytes());
        header.extend_from_slice(&self.seq.to_be_bytes());
        header.extend_from_slice(&self.ack.to_be_bytes());
        let data_offset = self.data_offset.unwrap_or((header_len / 4) as u8);
        header.push(data_offset << 4); // Data offset + reserved
        header.push(self.flags);
        header.extend_from_slice(&0xffffu16.to_be_bytes()); // Window
        header.extend_from_slice(&[0x00, 0x00]); // Checksum
        header.extend_from_slice(&[0x00, 0x00]); // Urgent pointer
        header.extend_from_slice(&self.options);
        header.extend_from_slice(&self.payload);

        header
    }
}

/// Build a complete Ethernet/IPv4/TCP frame.
pub fn build_tcp_frame(seq: u32, flags: u8, payload: &[u8]) -> Vec<u8> {
    let tcp = TcpBuilder::new()
        .seq(seq)
        .flags(flags)
        .payload(payload.to_vec())
        .build();
    let ip = Ipv4Builder::new().payload(tcp).build();
    EthernetBuilder::new().payload(ip).build()
}

/// Builder for classic little-endian pcap traces.
#[derive(Debug, Clone, Default)]
pub struct TraceBuilder {
    header: GlobalHeader,
    data: Vec<u8>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: GlobalHeader) -> Self {
        self.header = header;
        self
    }

    pub fn frame(mut self, frame: Vec<u8>) -> Self {
        let record = RecordHeader {
            ts_sec: 1_000_000_000,
            ts_frac: 0,
            captured_len: frame.len() as u32,
            original_len: frame.len() as u32,
        };
        self.data.extend_from_slice(&record.to_bytes());
        self.data.extend_from_slice(&frame);
        self
    }

    pub fn tcp(self, seq: u32, flags: u8, payload: &[u8]) -> Self {
        self.frame(build_tcp_frame(seq, flags, payload))
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = self.header.to_bytes().to_vec();
        out.extend_from_slice(&self.data);
        out
    }
}
