//! Capture reader and record iteration over an in-memory trace.

use byteorder::LittleEndian;
use tracing::{debug, warn};

use super::header::{GlobalHeader, GLOBAL_HEADER_LEN};
use super::packet::{PacketRecord, RecordHeader, RECORD_HEADER_LEN};
use crate::error::{Error, PcapError};

/// Reader over a classic little-endian pcap trace held in memory.
///
/// The global header is decoded eagerly by [`CaptureReader::load`];
/// records are produced lazily by [`CaptureReader::records`].
#[derive(Debug, Clone)]
pub struct CaptureReader<'a> {
    header: GlobalHeader,
    data: &'a [u8],
}

impl<'a> CaptureReader<'a> {
    /// Decode the global header and position a cursor at the first record.
    pub fn load(data: &'a [u8]) -> Result<Self, Error> {
        let header = GlobalHeader::parse(data)?;

        if !header.is_ethernet() {
            warn!(
                link_type = header.link_type,
                "capture link type is not Ethernet; decoding frames as Ethernet anyway"
            );
        }
        debug!(
            version = %format!("{}.{}", header.version_major, header.version_minor),
            snaplen = header.snaplen,
            bytes = data.len(),
            "loaded capture header"
        );

        Ok(Self { header, data })
    }

    /// The decoded global header.
    pub fn header(&self) -> &GlobalHeader {
        &self.header
    }

    /// Iterate the packet records following the global header.
    pub fn records(self) -> RecordIter<'a> {
        RecordIter {
            data: self.data,
            offset: GLOBAL_HEADER_LEN,
            frame_number: 0,
            done: false,
        }
    }
}

/// Lazy, finite iterator over packet records.
///
/// Stops when fewer than a record header's worth of bytes remain. A record
/// that declares more data than the trace holds yields a single
/// [`PcapError::TruncatedRecord`] and ends the iteration.
#[derive(Debug)]
pub struct RecordIter<'a> {
    data: &'a [u8],
    offset: usize,
    frame_number: u64,
    done: bool,
}

impl<'a> RecordIter<'a> {
    /// Number of records yielded so far.
    pub fn records_read(&self) -> u64 {
        self.frame_number
    }

    /// Read the next record.
    pub fn next_record(&mut self) -> Result<Option<PacketRecord<'a>>, Error> {
        if self.done {
            return Ok(None);
        }

        let remaining = self.data.len() - self.offset;
        if remaining < RECORD_HEADER_LEN {
            if remaining > 0 {
                debug!(
                    offset = self.offset,
                    trailing = remaining,
                    "ignoring trailing bytes shorter than a record header"
                );
            }
            self.done = true;
            return Ok(None);
        }

        let record_offset = self.offset;
        let mut raw = [0u8; RECORD_HEADER_LEN];
        raw.copy_from_slice(&self.data[record_offset..record_offset + RECORD_HEADER_LEN]);
        let header = RecordHeader::parse::<LittleEndian>(&raw);

        let packet_start = record_offset + RECORD_HEADER_LEN;
        let available = self.data.len() - packet_start;
        let captured_len = header.captured_len as usize;
        if captured_len > available {
            self.done = true;
            return Err(PcapError::TruncatedRecord {
                frame: self.frame_number + 1,
                offset: record_offset,
                expected: captured_len,
                actual: available,
            }
            .into());
        }

        let packet_end = packet_start + captured_len;
        self.frame_number += 1;
        self.offset = packet_end;

        Ok(Some(PacketRecord {
            frame_number: self.frame_number,
            offset: record_offset,
            header,
            data: &self.data[packet_start..packet_end],
        }))
    }
}

/// Iterator adapter for RecordIter.
impl<'a> Iterator for RecordIter<'a> {
    type Item = Result<PacketRecord<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::iter::FusedIterator for RecordIter<'_> {}
