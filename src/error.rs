//! The error returned when a statement is rejected.

use crate::config::ParseOptions;
use crate::diag::{
    Diag, DiagSeverity, SourceFile, build_labels, convert_diagnostics_to_reports, miette_severity,
};
use miette::{Diagnostic, LabeledSpan, Report, Severity, SourceCode};
use std::fmt;

const FALLBACK_MESSAGE: &str = "could not parse statement";

/// A rejected statement.
///
/// Displays as the representative (most recent) diagnostic. The full list
/// stays available for tooling through [`ParseError::diagnostics`] and
/// [`ParseError::reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    diagnostics: Vec<Diag>,
    source_file: SourceFile,
    aborted: bool,
}

impl ParseError {
    pub(crate) fn new(
        mut diagnostics: Vec<Diag>,
        source_file: SourceFile,
        aborted: bool,
        options: &ParseOptions,
    ) -> Self {
        if diagnostics.is_empty() {
            diagnostics.push(Diag::error(FALLBACK_MESSAGE));
        }
        let keep = options.retained(diagnostics.len());
        let dropped = diagnostics.len() - keep;
        diagnostics.drain(..dropped);
        Self {
            diagnostics,
            source_file,
            aborted,
        }
    }

    /// The diagnostic shown to users.
    pub fn representative(&self) -> Option<&Diag> {
        self.diagnostics.last()
    }

    pub fn message(&self) -> &str {
        self.representative()
            .map_or(FALLBACK_MESSAGE, |diag| diag.message.as_str())
    }

    /// Short code of the representative diagnostic, e.g. `P002`.
    pub fn code(&self) -> Option<&str> {
        self.representative().and_then(|diag| diag.code.as_deref())
    }

    /// Retained diagnostics in report order.
    pub fn diagnostics(&self) -> &[Diag] {
        &self.diagnostics
    }

    /// True when the missing-minus check stopped the parse.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn source_file(&self) -> &SourceFile {
        &self.source_file
    }

    /// Every retained diagnostic rendered with source context.
    pub fn reports(&self) -> Vec<Report> {
        convert_diagnostics_to_reports(&self.diagnostics, &self.source_file)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ParseError {}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(miette_severity(
            self.representative()
                .map_or(DiagSeverity::Error, |diag| diag.severity),
        ))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.representative()
            .and_then(|diag| diag.help.as_ref())
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.source_file.as_source_code())
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = build_labels(self.representative()?, &self.source_file);
        if labels.is_empty() {
            None
        } else {
            Some(Box::new(labels.into_iter()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::codes;

    fn error_with(messages: &[&str], options: &ParseOptions) -> ParseError {
        let diags = messages
            .iter()
            .enumerate()
            .map(|(i, m)| {
                Diag::error(*m)
                    .with_primary_label(i..i + 1, "here")
                    .with_code(codes::SYNTAX)
            })
            .collect();
        ParseError::new(diags, SourceFile::new("SELECT x"), false, options)
    }

    #[test]
    fn latest_diagnostic_is_representative() {
        let error = error_with(&["first", "second"], &ParseOptions::default());
        assert_eq!(error.message(), "second");
        assert_eq!(error.to_string(), "second");
        assert_eq!(error.diagnostics().len(), 2);
        assert_eq!(error.code(), Some(codes::SYNTAX));
    }

    #[test]
    fn options_trim_oldest_diagnostics() {
        let options = ParseOptions::new().with_max_diagnostics(2);
        let error = error_with(&["a", "b", "c"], &options);
        let kept: Vec<_> = error.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(kept, vec!["b", "c"]);

        let options = ParseOptions::new().with_all_diagnostics(false);
        let error = error_with(&["a", "b", "c"], &options);
        assert_eq!(error.diagnostics().len(), 1);
        assert_eq!(error.message(), "c");
    }

    #[test]
    fn empty_list_gets_fallback() {
        let error = ParseError::new(Vec::new(), SourceFile::new(""), false, &ParseOptions::default());
        assert_eq!(error.message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn miette_view_uses_representative() {
        let error = error_with(&["first", "second"], &ParseOptions::default());
        assert!(Diagnostic::source_code(&error).is_some());
        assert_eq!(Diagnostic::labels(&error).map(|l| l.count()), Some(1));
        assert_eq!(error.reports().len(), 2);
    }
}
