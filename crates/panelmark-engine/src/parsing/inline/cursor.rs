/// Byte-stepping reader over one escaped inline fragment.
///
/// `base` is where the fragment starts in the block text, so positions handed
/// out by [`Cursor::pos`] index the whole block even while a nested label or
/// emphasis body is being read. Every delimiter is ASCII; recorded positions
/// therefore always fall on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    pub base: usize,
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Position in block coordinates.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Skips `n` bytes, clamped to the end.
    pub fn bump_n(&mut self, n: usize) {
        self.i = self.s.len().min(self.i + n);
    }

    /// Skips ahead to the next `stop` byte, or to the end if there is none.
    /// Returns how many bytes were passed over.
    pub fn bump_until(&mut self, stop: u8) -> usize {
        let skipped = self
            .rest()
            .iter()
            .position(|&b| b == stop)
            .unwrap_or(self.rest().len());
        self.i += skipped;
        skipped
    }

    fn rest(&self) -> &'a [u8] {
        self.s.as_bytes().get(self.i..).unwrap_or_default()
    }
}
