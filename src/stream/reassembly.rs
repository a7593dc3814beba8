use std::collections::BTreeMap;

use crate::protocol::flags;

/// Outcome of offering one segment to a [`ReassemblyState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Payload stored under its sequence number.
    Inserted,
    /// Payload stored and the FIN bit ended the stream.
    Finished,
    /// SYN segment, discarded.
    SkippedSyn,
    /// Sequence number already present, discarded.
    Duplicate,
}

/// Payload fragments of one TCP flow keyed by sequence number.
///
/// - SYN segments are never stored.
/// - The first payload seen for a sequence number is kept; later ones are
///   dropped unchanged.
/// - Storing a FIN segment terminates the state. The driving loop stops
///   reading records once [`is_terminated`](Self::is_terminated) is true.
#[derive(Debug, Default)]
pub struct ReassemblyState {
    segments: BTreeMap<u32, Vec<u8>>,
    terminated: bool,
    syn_skipped: u32,
    duplicates: u32,
}

impl ReassemblyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one segment.
    pub fn observe(&mut self, seq: u32, tcp_flags: u8, payload: &[u8]) -> Observation {
        if tcp_flags & flags::SYN != 0 {
            self.syn_skipped += 1;
            return Observation::SkippedSyn;
        }

        if self.segments.contains_key(&seq) {
            self.duplicates += 1;
            return Observation::Duplicate;
        }
        self.segments.insert(seq, payload.to_vec());

        if tcp_flags & flags::FIN != 0 {
            self.terminated = true;
            return Observation::Finished;
        }
        Observation::Inserted
    }

    /// Whether a FIN segment has been stored.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Number of stored fragments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, seq: u32) -> bool {
        self.segments.contains_key(&seq)
    }

    /// Fragment stored under `seq`.
    pub fn get(&self, seq: u32) -> Option<&[u8]> {
        self.segments.get(&seq).map(Vec::as_slice)
    }

    /// Fragments in ascending sequence-number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u8])> + '_ {
        self.segments.iter().map(|(&seq, data)| (seq, data.as_slice()))
    }

    /// Total payload bytes stored.
    pub fn payload_bytes(&self) -> usize {
        self.segments.values().map(Vec::len).sum()
    }

    /// Number of SYN segments discarded.
    pub fn syn_skipped(&self) -> u32 {
        self.syn_skipped
    }

    /// Number of duplicate segments discarded.
    pub fn duplicates(&self) -> u32 {
        self.duplicates
    }

    pub(crate) fn into_segments(self) -> BTreeMap<u32, Vec<u8>> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syn_never_inserted() {
        let mut state = ReassemblyState::new();

        for _ in 0..3 {
            assert_eq!(state.observe(500, flags::SYN, b""), Observation::SkippedSyn);
        }
        assert_eq!(
            state.observe(500, flags::SYN | flags::ACK, b"data"),
            Observation::SkippedSyn
        );

        assert!(state.is_empty());
        assert!(!state.contains(500));
        assert_eq!(state.syn_skipped(), 4);
    }

    #[test]
    fn test_syn_fin_does_not_terminate() {
        let mut state = ReassemblyState::new();
        state.observe(1, flags::SYN | flags::FIN, b"");
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut state = ReassemblyState::new();

        assert_eq!(state.observe(10, flags::ACK, b"first"), Observation::Inserted);
        assert_eq!(state.observe(10, flags::ACK, b"second"), Observation::Duplicate);

        assert_eq!(state.get(10), Some(&b"first"[..]));
        assert_eq!(state.len(), 1);
        assert_eq!(state.duplicates(), 1);
    }

    #[test]
    fn test_fin_terminates() {
        let mut state = ReassemblyState::new();

        state.observe(1, flags::ACK, b"a");
        assert!(!state.is_terminated());
        assert_eq!(state.observe(2, flags::FIN | flags::ACK, b"b"), Observation::Finished);
        assert!(state.is_terminated());
        assert_eq!(state.get(2), Some(&b"b"[..]));
    }

    #[test]
    fn test_duplicate_fin_does_not_terminate() {
        let mut state = ReassemblyState::new();

        state.observe(1, flags::ACK, b"a");
        assert_eq!(state.observe(1, flags::FIN, b"a"), Observation::Duplicate);
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_iter_ascending() {
        let mut state = ReassemblyState::new();
        state.observe(300, 0, b"c");
        state.observe(100, 0, b"a");
        state.observe(200, 0, b"b");

        let order: Vec<u32> = state.iter().map(|(seq, _)| seq).collect();
        assert_eq!(order, vec![100, 200, 300]);
        assert_eq!(state.payload_bytes(), 3);
    }

    #[test]
    fn test_empty_payload_is_stored() {
        let mut state = ReassemblyState::new();
        assert_eq!(state.observe(42, flags::ACK, b""), Observation::Inserted);
        assert!(state.contains(42));
    }
}
