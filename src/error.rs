//! Error types for pcapcarve.
//!
//! Errors fall into two tiers:
//!
//! - [`PcapError`] and I/O failures are fatal: once the capture framing is
//!   wrong nothing after it can be trusted.
//! - [`ProtocolError`] describes a single record whose Ethernet/IPv4/TCP
//!   layers do not decode. It never becomes an [`Error`]: the driving loop
//!   logs it, records it and moves on.
//!
//! [`StreamError`] is raised by the extraction step only.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for pcapcarve operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading or parsing the capture framing
    #[error("PCAP error: {0}")]
    Pcap(#[from] PcapError),

    /// Error turning reassembled segments into an artifact
    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    /// Failure opening or reading a trace file
    #[error("Failed to read {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad magic number or truncated global header.
    Format,
    /// A record declares more bytes than the trace holds.
    TruncatedRecord,
    /// Extraction found no segments.
    EmptyStream,
    /// Reading the trace file failed.
    Io,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Pcap(PcapError::InvalidFormat { .. }) => ErrorKind::Format,
            Error::Pcap(PcapError::TruncatedRecord { .. }) => ErrorKind::TruncatedRecord,
            Error::Stream(StreamError::Empty) => ErrorKind::EmptyStream,
            Error::Source { .. } => ErrorKind::Io,
        }
    }
}

/// Errors related to the capture file framing.
#[derive(Error, Debug)]
pub enum PcapError {
    /// Invalid global header
    #[error("Invalid PCAP format at offset {offset}: {reason}")]
    InvalidFormat { offset: usize, reason: String },

    /// A record header declares more data than remains in the trace
    #[error(
        "Truncated record at frame {frame} (offset {offset}): expected {expected} bytes, got {actual}"
    )]
    TruncatedRecord {
        frame: u64,
        offset: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors related to decoding the layers of one record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Record too short for a protocol header
    #[error("{protocol}: packet too short (need {needed} bytes, have {have})")]
    PacketTooShort {
        protocol: &'static str,
        needed: usize,
        have: usize,
    },

    /// Invalid header field value
    #[error("{protocol}: invalid {field}: {reason}")]
    InvalidField {
        protocol: &'static str,
        field: &'static str,
        reason: String,
    },
}

/// Errors related to extracting the stream artifact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// No segment survived reassembly
    #[error("no TCP payload segments were collected")]
    Empty,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
