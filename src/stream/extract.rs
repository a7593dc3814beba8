//! Turning a finished [`ReassemblyState`] into the output artifact.

use tracing::debug;

use super::http::{find_header_end, ResponseHead};
use super::reassembly::ReassemblyState;
use crate::error::StreamError;

/// How the first fragment is treated during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Drop everything up to and including the first `\r\n\r\n` of the
    /// lowest-sequence fragment.
    #[default]
    StripHttpHeader,
    /// Concatenate fragments untouched.
    Raw,
}

/// The artifact and what was learned while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Concatenated stream bytes.
    pub body: Vec<u8>,
    /// Response head parsed from the stripped block, when it parsed.
    pub head: Option<ResponseHead>,
    /// Number of header bytes removed from the first fragment.
    pub stripped: usize,
    /// Number of fragments concatenated.
    pub fragments: usize,
}

/// Concatenate the fragments in ascending sequence order, stripping the
/// HTTP header block from the lowest-sequence fragment.
///
/// Only the first fragment is searched for the delimiter. Sequence numbers
/// are ordered as plain integers.
pub fn extract(state: ReassemblyState) -> Result<Vec<u8>, StreamError> {
    extract_with_head(state, ExtractMode::StripHttpHeader).map(|e| e.body)
}

/// Like [`extract`], also reporting the stripped response head.
pub fn extract_with_head(
    state: ReassemblyState,
    mode: ExtractMode,
) -> Result<Extracted, StreamError> {
    if state.is_empty() {
        return Err(StreamError::Empty);
    }

    let fragments = state.len();
    let mut segments = state.into_segments().into_iter();
    let (first_seq, first) = segments.next().ok_or(StreamError::Empty)?;

    let (head, body_start) = match mode {
        ExtractMode::StripHttpHeader => match find_header_end(&first) {
            Some(end) => (ResponseHead::parse(&first[..end]), end),
            None => {
                debug!(seq = first_seq, "first fragment has no header delimiter; kept whole");
                (None, 0)
            }
        },
        ExtractMode::Raw => (None, 0),
    };

    let mut body = first[body_start..].to_vec();
    for (_, fragment) in segments {
        body.extend_from_slice(&fragment);
    }

    Ok(Extracted {
        body,
        head,
        stripped: body_start,
        fragments,
    })
}
