//! PCAP trace reading module.
//!
//! This module decodes the classic little-endian capture format held in
//! memory and exposes its records one at a time.

mod header;
mod packet;
mod reader;

pub use header::{GlobalHeader, GLOBAL_HEADER_LEN, LINKTYPE_ETHERNET, PCAP_MAGIC};
pub use packet::{PacketRecord, RecordHeader, RECORD_HEADER_LEN};
pub use reader::{CaptureReader, RecordIter};
