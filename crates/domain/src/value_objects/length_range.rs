/// Inclusive token-length window, measured in characters.
///
/// A window whose `min` exceeds its `max` is valid and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const DEFAULT_MIN: usize = 1;
    pub const DEFAULT_MAX: usize = 100;

    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}
