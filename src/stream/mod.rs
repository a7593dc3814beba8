//! TCP segment reassembly and payload extraction.
//!
//! [`collect_segments`] drives the record loop and owns the
//! [`ReassemblyState`] while it grows. Once the loop ends the state is moved
//! into [`extract`], which orders the fragments and strips the HTTP header
//! block from the first one.

mod collect;
mod extract;
pub mod http;
mod reassembly;

pub use collect::{collect_segments, process_record, Collected, SkippedRecord};
pub use extract::{extract, extract_with_head, ExtractMode, Extracted};
pub use http::{find_header_end, ResponseHead};
pub use reassembly::{Observation, ReassemblyState};
