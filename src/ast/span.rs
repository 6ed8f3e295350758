//! Source span type shared by tokens, diagnostics and statements.

use std::ops::Range;

/// A byte range in the query text.
pub type Span = Range<usize>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basic_properties() {
        let span: Span = 5..10;
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        let empty: Span = 5..5;
        assert!(empty.is_empty());
    }
}
