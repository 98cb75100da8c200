use crate::error::{ProcessingError, Result};
use crate::utils::constants::RECORD_TERMINATOR;
use std::ops::Range;

/// Splits a buffer into newline-aligned chunks of roughly equal size
pub struct ChunkPlanner {
    target_chunks: usize,
}

impl ChunkPlanner {
    pub fn new(target_chunks: usize) -> Self {
        Self { target_chunks }
    }

    /// Compute the end offset of every chunk.
    ///
    /// Each ideal split point (a multiple of `len / target_chunks`) is pushed
    /// forward to just past the next `\n`. When no newline follows a split
    /// point, everything left collapses into the final chunk, so fewer than
    /// `target_chunks` ends may be returned but never more. The last end is
    /// always `data.len()` and no chunk is empty.
    pub fn plan_ends(&self, data: &[u8]) -> Result<Vec<usize>> {
        let chunk_size = data.len().checked_div(self.target_chunks).unwrap_or(0);
        if chunk_size == 0 {
            return Err(ProcessingError::ChunkSize {
                size: data.len(),
                chunks: self.target_chunks,
            });
        }

        let mut ends = Vec::with_capacity(self.target_chunks);
        let mut offset = 0;

        while ends.len() + 1 < self.target_chunks {
            offset += chunk_size;
            if offset >= data.len() {
                break;
            }

            match data[offset..].iter().position(|&b| b == RECORD_TERMINATOR) {
                Some(pos) => {
                    offset += pos + 1;
                    if offset >= data.len() {
                        break;
                    }
                    ends.push(offset);
                }
                None => break,
            }
        }

        ends.push(data.len());
        Ok(ends)
    }

    /// Same as [`plan_ends`](Self::plan_ends), as `[start, end)` ranges
    pub fn plan(&self, data: &[u8]) -> Result<Vec<Range<usize>>> {
        let ends = self.plan_ends(data)?;

        let mut start = 0;
        Ok(ends
            .into_iter()
            .map(|end| {
                let range = start..end;
                start = end;
                range
            })
            .collect())
    }
}
