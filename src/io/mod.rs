//! Trace file I/O.
//!
//! A trace is loaded into memory once before any record is decoded:
//!
//! - `CaptureSource` - memory-maps plain files, inflates gzip files
//! - `Compression` - magic-byte detection (gzip only)

mod decompress;
mod source;

pub use decompress::{decompress, Compression};
pub use source::CaptureSource;
