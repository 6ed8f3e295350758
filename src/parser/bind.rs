//! Bind-marker ordinal assignment.

/// Assigns zero-based ordinals to `?` markers in encounter order.
///
/// One counter lives for one parse. Batches share it with their inner
/// statements, so ordinals keep increasing across the whole batch.
#[derive(Debug, Clone, Default)]
pub struct BindMarkers {
    last: Option<usize>,
}

impl BindMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next ordinal.
    pub fn next_ordinal(&mut self) -> usize {
        let ordinal = self.last.map_or(0, |last| last + 1);
        self.last = Some(ordinal);
        ordinal
    }

    /// Highest ordinal handed out so far.
    pub fn current(&self) -> Option<usize> {
        self.last
    }

    /// Number of markers seen: one past the highest ordinal, or zero.
    pub fn count(&self) -> usize {
        self.last.map_or(0, |last| last + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_before_first() {
        let markers = BindMarkers::new();
        assert_eq!(markers.current(), None);
        assert_eq!(markers.count(), 0);
    }

    #[test]
    fn ordinals_are_sequential() {
        let mut markers = BindMarkers::new();
        assert_eq!(markers.next_ordinal(), 0);
        assert_eq!(markers.next_ordinal(), 1);
        assert_eq!(markers.next_ordinal(), 2);
        assert_eq!(markers.current(), Some(2));
        assert_eq!(markers.count(), 3);
    }
}
