use crate::domain::Chunk;
use std::num::NonZeroUsize;

/// Splits `data` into consecutive `width`-byte chunks; only the last may be shorter.
/// Empty input yields no chunks.
pub struct FixedChunker<'a> {
    rest: &'a [u8],
    width: usize,
    ordinal: usize,
}

impl<'a> FixedChunker<'a> {
    pub fn new(data: &'a [u8], width: NonZeroUsize) -> Self {
        Self {
            rest: data,
            width: width.get(),
            ordinal: 0,
        }
    }
}

impl<'a> Iterator for FixedChunker<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let take = self.width.min(self.rest.len());
        let (bytes, rest) = self.rest.split_at(take);
        self.rest = rest;
        let chunk = Chunk {
            ordinal: self.ordinal,
            is_last: rest.is_empty(),
            bytes,
        };
        self.ordinal += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = chunk_count(self.rest.len(), self.width);
        (n, Some(n))
    }
}

impl ExactSizeIterator for FixedChunker<'_> {}

#[inline]
pub fn chunk_count(len: usize, width: usize) -> usize {
    len.div_ceil(width)
}
