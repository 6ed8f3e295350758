//! Parser for CQL statements.
//!
//! The parser consumes the lexer's token stream and builds one statement.
//! Grammar rules record diagnostics in a per-parse collector and keep going
//! wherever they can still build something, so one call can surface several
//! problems. Whether the parse succeeded is decided once, by the caller, from
//! the collected diagnostics.

mod base;
mod bind;
mod modification;
mod permission;
mod primitives;
mod properties;
mod recovery;
mod relation;
mod schema;
mod select;
mod statement;
mod term;
mod types;

pub use base::{TokenStream, merge_spans};
pub use bind::BindMarkers;

use crate::ast::ParsedStatement;
use crate::diag::{Diag, Diagnostics};
use crate::lexer::token::Token;

/// Why a grammar rule produced no node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Halt {
    /// A diagnostic was recorded; callers may recover and continue.
    Recorded,
    /// A hard validation failure; the whole parse stops.
    Fatal,
}

pub(crate) type RuleResult<T> = Result<T, Halt>;

/// Deepest collection literal or collection type the parser descends into.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Everything one parse produced.
#[derive(Debug)]
pub struct ParseOutcome {
    /// The statement, when the grammar could build one.
    ///
    /// A statement may be present alongside diagnostics; it is then a
    /// best-effort result and must not be executed.
    pub statement: Option<ParsedStatement>,
    /// Lexer and parser diagnostics in the order they were reported.
    pub diagnostics: Diagnostics,
    /// True when a hard validation failure stopped the parse.
    pub aborted: bool,
}

impl ParseOutcome {
    /// True when a statement was built and nothing was reported.
    pub fn is_success(&self) -> bool {
        self.statement.is_some() && self.diagnostics.is_empty()
    }
}

/// CQL parser over one token stream.
pub struct Parser {
    stream: TokenStream,
    diagnostics: Diagnostics,
    bind_markers: BindMarkers,
    depth: usize,
}

impl Parser {
    /// Creates a parser. A missing trailing EOF token is added.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            diagnostics: Diagnostics::new(),
            bind_markers: BindMarkers::new(),
            depth: 0,
        }
    }

    /// Seeds the collector with the lexer's diagnostics.
    pub fn with_lexer_diagnostics(mut self, lex_diags: Vec<Diag>) -> Self {
        let mut all = Diagnostics::new();
        all.extend(lex_diags);
        all.extend(std::mem::take(&mut self.diagnostics).into_vec());
        self.diagnostics = all;
        self
    }

    /// Parses exactly one statement followed by optional semicolons and EOF.
    pub fn parse(mut self) -> ParseOutcome {
        let (statement, aborted) = match self.parse_query() {
            Ok(statement) => (Some(statement), false),
            Err(Halt::Recorded) => (None, false),
            Err(Halt::Fatal) => (None, true),
        };

        if statement.is_none() && self.diagnostics.is_empty() {
            let span = self.stream.current().span.clone();
            self.error(span, "could not parse statement");
        }

        ParseOutcome {
            statement,
            diagnostics: self.diagnostics,
            aborted,
        }
    }
}
