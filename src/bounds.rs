/// Bounds of the active window inside the LED chain
///
/// Every write to a [`PixelBuffer`](crate::PixelBuffer) is relative to
/// `start` and dropped when it lands at or past `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingBounds {
    pub start: usize,
    pub end: usize,
}

impl RenderingBounds {
    /// Window covering the first `count` LEDs of the chain
    pub const fn first(count: usize) -> Self {
        Self {
            start: 0,
            end: count,
        }
    }

    /// Get the number of LEDs in the window
    pub const fn count(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Clamp a relative `from`/`count` range to the window
    ///
    /// Returns absolute chain indices.
    pub(crate) fn clamp(self, from: usize, count: usize) -> core::ops::Range<usize> {
        let len = self.count();
        let from = from.min(len);
        let to = from.saturating_add(count).min(len);
        self.start + from..self.start + to
    }
}
