//! Bounds-checked byte access for the block scanner.

use crate::foundation::error::GifError;

/// Forward-only, bounds-checked reader over a GIF buffer.
///
/// Every read past the end maps to [`GifError::InvalidStructure`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, GifError> {
        let b = self
            .data
            .get(self.pos)
            .copied()
            .ok_or(GifError::InvalidStructure)?;
        self.pos += 1;
        Ok(b)
    }

    pub(crate) fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], GifError> {
        let end = self.pos.checked_add(n).ok_or(GifError::InvalidStructure)?;
        let slice = self
            .data
            .get(self.pos..end)
            .ok_or(GifError::InvalidStructure)?;
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), GifError> {
        self.read_bytes(n).map(|_| ())
    }

    /// Skip a chain of length-prefixed sub-blocks up to and including its
    /// zero-length terminator.
    pub(crate) fn skip_sub_blocks(&mut self) -> Result<(), GifError> {
        loop {
            let len = self.read_u8()?;
            if len == 0 {
                return Ok(());
            }
            self.skip(usize::from(len))?;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gif/cursor.rs"]
mod tests;
