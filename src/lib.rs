//! pcapcarve - Recover an HTTP response body from a packet capture.
//!
//! Reads a classic little-endian pcap trace holding one server-to-client TCP
//! flow, reassembles the segments by sequence number, strips the HTTP
//! response header block and returns the body bytes.
//!
//! # Example
//!
//! ```no_run
//! use pcapcarve::io::CaptureSource;
//! use pcapcarve::stream::ExtractMode;
//!
//! fn main() -> anyhow::Result<()> {
//!     let source = CaptureSource::open("net.cap")?;
//!     let reassembled = pcapcarve::reassemble(&source, ExtractMode::StripHttpHeader)?;
//!     std::fs::write("img.jpg", &reassembled.body)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod format;
pub mod io;
pub mod pcap;
pub mod protocol;
pub mod stream;

use tracing::info;

use pcap::{CaptureReader, GlobalHeader};
use stream::{collect_segments, extract_with_head, ExtractMode, ResponseHead, SkippedRecord};

pub use error::{Error, Result};
pub use stream::extract;

/// Decode the global header of an in-memory trace.
pub fn load(data: &[u8]) -> Result<GlobalHeader> {
    Ok(*CaptureReader::load(data)?.header())
}

/// Everything produced by a full [`reassemble`] run.
#[derive(Debug, Clone)]
pub struct Reassembled {
    pub header: GlobalHeader,
    /// The recovered artifact.
    pub body: Vec<u8>,
    /// Response head taken from the stripped header block, if any.
    pub head: Option<ResponseHead>,
    pub records_read: u64,
    /// Records that failed to decode and were ignored, with their errors.
    pub skipped: Vec<SkippedRecord>,
    /// Distinct segments that made up the body.
    pub fragments: usize,
    /// Whether the stream was closed by a FIN rather than by running out of
    /// records.
    pub finished: bool,
}

/// Run a trace end to end: load the header, read records until FIN or
/// exhaustion, reassemble and extract.
pub fn reassemble(data: &[u8], mode: ExtractMode) -> Result<Reassembled> {
    let reader = CaptureReader::load(data)?;
    let header = *reader.header();

    let collected = collect_segments(reader.records())?;
    let finished = collected.state.is_terminated();
    let extracted = extract_with_head(collected.state, mode)?;

    info!(
        records = collected.records_read,
        skipped = collected.skipped.len(),
        fragments = extracted.fragments,
        bytes = extracted.body.len(),
        "reassembled stream"
    );

    Ok(Reassembled {
        header,
        body: extracted.body,
        head: extracted.head,
        records_read: collected.records_read,
        skipped: collected.skipped,
        fragments: extracted.fragments,
        finished,
    })
}
