//! The record loop feeding a [`ReassemblyState`].

use tracing::{debug, trace, warn};

use super::reassembly::{Observation, ReassemblyState};
use crate::error::{Error, ProtocolError};
use crate::pcap::{PacketRecord, RecordIter};
use crate::protocol::{decode_segment, ethertype, IP_PROTO_TCP};

/// A record left out of reassembly because its layers did not decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub frame: u64,
    /// Byte offset of the record header within the trace.
    pub offset: usize,
    pub error: ProtocolError,
}

/// Result of running the record loop.
#[derive(Debug)]
pub struct Collected {
    pub state: ReassemblyState,
    /// Records pulled from the trace.
    pub records_read: u64,
    /// Records whose layers failed to decode, in trace order.
    pub skipped: Vec<SkippedRecord>,
}

impl Collected {
    pub fn records_skipped(&self) -> u64 {
        self.skipped.len() as u64
    }
}

/// Decode one record and offer its segment to `state`.
pub fn process_record(
    state: &mut ReassemblyState,
    record: &PacketRecord<'_>,
) -> Result<Observation, ProtocolError> {
    let segment = decode_segment(record.data)?;

    if segment.ethernet.ethertype != ethertype::IPV4 {
        debug!(
            frame = record.frame_number,
            ethertype = format_args!("{:#06x}", segment.ethernet.ethertype),
            "frame is not IPv4; decoded with the fixed layout"
        );
    }
    if segment.ipv4.protocol != IP_PROTO_TCP {
        debug!(
            frame = record.frame_number,
            protocol = segment.ipv4.protocol,
            "datagram is not TCP; decoded with the fixed layout"
        );
    }

    let observation = state.observe(segment.seq(), segment.flags(), segment.payload);
    if state.len() == 1 && matches!(observation, Observation::Inserted | Observation::Finished) {
        let (first_addr, second_addr) = segment.ethernet.addrs();
        let src = format!("{}:{}", segment.ipv4.src_ip(), segment.tcp.src_port);
        let dst = format!("{}:{}", segment.ipv4.dst_ip(), segment.tcp.dst_port);
        debug!(
            frame = record.frame_number,
            %src,
            %dst,
            %first_addr,
            %second_addr,
            "first segment of flow"
        );
    }
    trace!(
        frame = record.frame_number,
        seq = segment.seq(),
        flags = format_args!("{:#04x}", segment.flags()),
        len = segment.payload.len(),
        ?observation,
        "segment"
    );
    Ok(observation)
}

/// Pull records until the trace ends or a FIN segment is stored.
///
/// A record that fails to decode is logged and skipped. Framing errors from
/// the iterator are fatal and returned.
pub fn collect_segments(mut records: RecordIter<'_>) -> Result<Collected, Error> {
    let mut state = ReassemblyState::new();
    let mut skipped = Vec::new();

    while !state.is_terminated() {
        let Some(record) = records.next_record()? else {
            break;
        };

        if let Err(error) = process_record(&mut state, &record) {
            warn!(
                frame = record.frame_number,
                offset = record.offset,
                error = %error,
                "skipping record"
            );
            skipped.push(SkippedRecord {
                frame: record.frame_number,
                offset: record.offset,
                error,
            });
        }
    }

    if state.is_terminated() {
        debug!(records = records.records_read(), "stream finished by FIN");
    } else {
        debug!(records = records.records_read(), "trace exhausted without FIN");
    }

    Ok(Collected {
        state,
        records_read: records.records_read(),
        skipped,
    })
}
