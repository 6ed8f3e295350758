//! Options for [`parse_with`](crate::parse_with).

/// Controls how a rejected parse is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name shown in rendered diagnostics, e.g. a script file.
    pub source_name: Option<String>,

    /// Keep every diagnostic in the error, not only the representative one.
    pub keep_all_diagnostics: bool,

    /// Upper bound on retained diagnostics. The most recent ones are kept.
    pub max_diagnostics: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_name: None,
            keep_all_diagnostics: true,
            max_diagnostics: None,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn with_all_diagnostics(mut self, keep: bool) -> Self {
        self.keep_all_diagnostics = keep;
        self
    }

    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = Some(max);
        self
    }

    /// How many of `total` diagnostics an error keeps. Never zero when
    /// `total` is not.
    pub(crate) fn retained(&self, total: usize) -> usize {
        let cap = if self.keep_all_diagnostics {
            self.max_diagnostics.unwrap_or(total)
        } else {
            1
        };
        cap.max(1).min(total)
    }
}
