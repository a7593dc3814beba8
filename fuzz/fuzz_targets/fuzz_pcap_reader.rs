//! Fuzz target for capture framing.
//!
//! Tests handling of malformed traces including:
//! - Magic and global header validation
//! - Record headers declaring lengths past the end of the trace

#![no_main]

use libfuzzer_sys::fuzz_target;
use pcapcarve::pcap::{CaptureReader, RECORD_HEADER_LEN};

fuzz_target!(|data: &[u8]| {
    if let Ok(reader) = CaptureReader::load(data) {
        let mut records = reader.records();
        // Iteration must terminate and never panic
        while let Ok(Some(record)) = records.next_record() {
            assert!(record.offset + RECORD_HEADER_LEN + record.data.len() <= data.len());
        }
    }
});
