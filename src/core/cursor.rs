// Bounded read cursor over an in-memory EA3 buffer

/// Forward reader over a byte slice with explicit position control.
///
/// Reads never go past the end of the slice: a short read returns `None`
/// and leaves the position untouched, so callers can decide whether the
/// underrun is fatal or just the end of optional data.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Advance up to `len` bytes, stopping at the end of the data.
    pub fn skip(&mut self, len: usize) {
        self.pos += len.min(self.remaining());
    }

    pub fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.remaining() < len {
            return None;
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Some(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.take(N).and_then(|s| s.try_into().ok())
    }

    pub fn read_u32_le(&mut self) -> Option<u32> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// Read a u32 without consuming it.
    pub fn peek_u32_le(&self) -> Option<u32> {
        self.clone().read_u32_le()
    }
}
