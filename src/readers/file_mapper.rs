use crate::error::{ProcessingError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only memory mapping of an entire measurements file.
///
/// The mapping is released when the value is dropped; every chunk borrows
/// from it, so the borrow checker keeps it alive until all workers are done.
pub struct MappedFile {
    path: PathBuf,
    mmap: Mmap,
}

impl MappedFile {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ProcessingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| ProcessingError::Stat {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        // Slices are limited to isize::MAX bytes
        if size == 0 || size > isize::MAX as u64 || usize::try_from(size).is_err() {
            return Err(ProcessingError::InvalidSize { size });
        }

        // SAFETY: the mapping is read-only and the input is treated as
        // immutable for the lifetime of the run
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| ProcessingError::Map {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), size, "mapped measurements file");

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }
}

impl Deref for MappedFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}
