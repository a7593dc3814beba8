//! Loading a whole trace into memory.

use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use super::decompress::{decompress, Compression};
use crate::error::Error;

/// Trace bytes held in memory for the duration of a run.
///
/// Uncompressed files are memory-mapped; gzip files are inflated into an
/// owned buffer. Either way the content derefs to `&[u8]`.
pub struct CaptureSource {
    compression: Compression,
    inner: SourceInner,
}

enum SourceInner {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl CaptureSource {
    /// Open a trace file, decompressing it if it is gzipped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let source_err = |source| Error::Source {
            path: path.clone(),
            source,
        };

        let file = File::open(&path).map_err(source_err)?;
        let len = file.metadata().map_err(source_err)?.len();

        // Zero-length files cannot be mapped on every platform.
        if len == 0 {
            return Ok(Self {
                compression: Compression::None,
                inner: SourceInner::Owned(Vec::new()),
            });
        }

        // SAFETY: the mapping is read-only and lives as long as `self`. A
        // trace modified by another process while mapped is not supported.
        let mmap = unsafe { Mmap::map(&file) }.map_err(source_err)?;

        let compression = Compression::detect(&mmap);
        let inner = if compression.is_compressed() {
            let data = decompress(&mmap, compression).map_err(source_err)?;
            debug!(
                path = %path.display(),
                %compression,
                compressed = mmap.len(),
                decompressed = data.len(),
                "inflated trace"
            );
            SourceInner::Owned(data)
        } else {
            debug!(path = %path.display(), bytes = mmap.len(), "mapped trace");
            SourceInner::Mapped(mmap)
        };

        Ok(Self { compression, inner })
    }

    /// Compression detected on the file.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.inner, SourceInner::Mapped(_))
    }
}

impl Deref for CaptureSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match &self.inner {
            SourceInner::Mapped(mmap) => mmap,
            SourceInner::Owned(data) => data,
        }
    }
}

impl AsRef<[u8]> for CaptureSource {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl std::fmt::Debug for CaptureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSource")
            .field("compression", &self.compression)
            .field("mapped", &self.is_mapped())
            .field("len", &self.len())
            .finish()
    }
}
