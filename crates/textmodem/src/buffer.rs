use alloc::collections::VecDeque;

/// Retained input: the current code point (if any) followed by everything not
/// yet visited. Visited code points before the current one linger only until
/// the next [`compact`](Buffer::compact).
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    data: VecDeque<char>,
    /// Index into `data` of the next code point to visit.
    next: usize,
}

impl Buffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk`, returning the number of code points added.
    pub(crate) fn push<I>(&mut self, chunk: I) -> usize
    where
        I: IntoIterator<Item = char>,
    {
        let before = self.data.len();
        let chunk = chunk.into_iter();
        self.data.reserve(chunk.size_hint().0);
        self.data.extend(chunk);
        self.data.len() - before
    }

    /// Evicts the visited prefix. With `keep_current` the last visited code
    /// point survives so the cursor can stay seated on it.
    ///
    /// Returns the number of evicted code points.
    pub(crate) fn compact(&mut self, keep_current: bool) -> usize {
        let visited = if keep_current {
            self.next.saturating_sub(1)
        } else {
            self.next
        };
        self.data.drain(..visited);
        self.next -= visited;
        visited
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.data.get(self.next).copied()
    }

    /// Code points held, including a retained current one.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Code points not yet visited.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.next
    }
}

impl Iterator for Buffer {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.peek()?;
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
