//! Fuzz target for the Ethernet/IPv4/TCP decoding chain.
//!
//! Tests header bounds checking and the payload length arithmetic on
//! arbitrary frame bytes, then feeds whatever decodes through reassembly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pcapcarve::protocol::decode_segment;
use pcapcarve::stream::{extract, ReassemblyState};

fuzz_target!(|data: &[u8]| {
    let Ok(segment) = decode_segment(data) else {
        return;
    };
    assert!(segment.payload.len() <= data.len());

    let mut state = ReassemblyState::new();
    state.observe(segment.seq(), segment.flags(), segment.payload);
    let _ = extract(state);
});
