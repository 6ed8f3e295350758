//! Lexical analysis for CQL.
//!
//! The lexer converts query text into a stream of tokens terminated by EOF.
//! It keeps scanning after a bad character so that one call can report
//! several lexical problems; those diagnostics are later merged into the
//! parser's collector.

pub mod keywords;
pub mod token;

use crate::diag::{Diag, codes};
use token::{Token, TokenKind};

/// Result of lexical analysis.
///
/// Contains both the tokens produced and any diagnostics encountered during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerResult {
    /// The tokens produced, including an EOF token at the end.
    pub tokens: Vec<Token>,
    /// Diagnostics encountered during lexing.
    pub diagnostics: Vec<Diag>,
}

/// A lexical analyzer for CQL source text.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diag>,
}

/// Byte length of the canonical `8-4-4-4-12` UUID spelling.
const UUID_LEN: usize = 36;

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenizes the source text and returns the result.
    pub fn tokenize(mut self) -> LexerResult {
        while !self.is_at_end() {
            self.skip_whitespace_and_comments();
            if self.is_at_end() {
                break;
            }
            self.scan_token();
        }

        let eof_pos = self.source.len();
        self.tokens
            .push(Token::new(TokenKind::Eof, eof_pos..eof_pos, ""));

        LexerResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Scans a single token.
    fn scan_token(&mut self) {
        let start = self.pos;

        // The UUID pattern overlaps both numbers and identifiers, so it is
        // tried before either.
        if self.peek().is_ascii_hexdigit() && self.try_scan_uuid(start) {
            return;
        }

        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenKind::LParen, start),
            ')' => self.add_token(TokenKind::RParen, start),
            '[' => self.add_token(TokenKind::LBracket, start),
            ']' => self.add_token(TokenKind::RBracket, start),
            '{' => self.add_token(TokenKind::LBrace, start),
            '}' => self.add_token(TokenKind::RBrace, start),
            ',' => self.add_token(TokenKind::Comma, start),
            ';' => self.add_token(TokenKind::Semicolon, start),
            '.' => self.add_token(TokenKind::Dot, start),
            ':' => self.add_token(TokenKind::Colon, start),
            '=' => self.add_token(TokenKind::Eq, start),
            '+' => self.add_token(TokenKind::Plus, start),
            '*' => self.add_token(TokenKind::Star, start),
            '?' => self.add_token(TokenKind::QMark, start),
            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::LtEq, start);
                } else {
                    self.add_token(TokenKind::Lt, start);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::GtEq, start);
                } else {
                    self.add_token(TokenKind::Gt, start);
                }
            }
            '-' => {
                if self.peek().is_ascii_digit() {
                    self.scan_number(start);
                } else {
                    self.add_token(TokenKind::Minus, start);
                }
            }

            '\'' => self.scan_string_literal(start),
            '"' => self.scan_quoted_name(start),

            '0' if matches!(self.peek(), 'x' | 'X') => self.scan_hex_literal(start),
            '0'..='9' => self.scan_number(start),

            'a'..='z' | 'A'..='Z' => self.scan_identifier_or_keyword(start),

            _ => {
                self.error(start, &format!("invalid character '{ch}'"));
            }
        }
    }

    /// Tries to scan a UUID literal at `start`; leaves the position untouched on failure.
    fn try_scan_uuid(&mut self, start: usize) -> bool {
        let Some(candidate) = self.source.get(start..start + UUID_LEN) else {
            return false;
        };
        let well_formed = candidate.bytes().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        });
        if !well_formed {
            return false;
        }

        self.pos = start + UUID_LEN;
        self.add_token(TokenKind::UuidLiteral(candidate.into()), start);
        true
    }

    /// Scans an identifier or keyword.
    fn scan_identifier_or_keyword(&mut self, start: usize) {
        while Self::is_identifier_continue(self.peek()) {
            self.advance();
        }

        let text = &self.source[start..self.pos];
        match keywords::lookup_keyword(text) {
            Some(kind) => self.add_token(kind, start),
            None => self.add_token(TokenKind::Identifier(text.into()), start),
        }
    }

    /// Scans a single-quoted string literal; `''` stands for one quote.
    fn scan_string_literal(&mut self, start: usize) {
        let value = self.scan_doubled_quote_body('\'');
        match value {
            Some(value) => self.add_token(TokenKind::StringLiteral(value.into()), start),
            None => {
                self.error(start, "unclosed string literal");
                let value = self.source[start + 1..].replace("''", "'");
                self.add_token(TokenKind::StringLiteral(value.into()), start);
            }
        }
    }

    /// Scans a double-quoted identifier; `""` stands for one quote and case is kept.
    fn scan_quoted_name(&mut self, start: usize) {
        match self.scan_doubled_quote_body('"') {
            Some(value) => {
                if value.is_empty() {
                    self.error_span(
                        start..self.pos,
                        "empty quoted identifier",
                        codes::MALFORMED_LITERAL,
                    );
                }
                self.add_token(TokenKind::QuotedName(value.into()), start);
            }
            None => {
                self.error(start, "unclosed quoted identifier");
                let value = self.source[start + 1..].replace("\"\"", "\"");
                self.add_token(TokenKind::QuotedName(value.into()), start);
            }
        }
    }

    /// Reads up to the closing `quote`, folding doubled quotes.
    ///
    /// Returns `None` when the input ends first; the position is then at the end.
    fn scan_doubled_quote_body(&mut self, quote: char) -> Option<String> {
        let mut value = String::new();
        loop {
            if self.is_at_end() {
                return None;
            }
            let ch = self.advance();
            if ch == quote {
                if self.peek() == quote {
                    self.advance();
                    value.push(quote);
                } else {
                    return Some(value);
                }
            } else {
                value.push(ch);
            }
        }
    }

    /// Scans an integer or float; `start` may point at a leading `-`.
    fn scan_number(&mut self, start: usize) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let mut is_float = false;
        if self.peek() == '.' {
            // `3.` is a float with an empty fraction.
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
            is_float = true;
        }

        if matches!(self.peek(), 'e' | 'E') && self.exponent_follows() {
            self.advance();
            if matches!(self.peek(), '+' | '-') {
                self.advance();
            }
            while self.peek().is_ascii_digit() {
                self.advance();
            }
            is_float = true;
        }

        let text = &self.source[start..self.pos];
        if is_float {
            self.add_token(TokenKind::FloatLiteral(text.into()), start);
        } else {
            self.add_token(TokenKind::IntegerLiteral(text.into()), start);
        }
    }

    /// Returns true if the `e`/`E` under the cursor starts a complete exponent.
    fn exponent_follows(&self) -> bool {
        let rest = &self.source[self.pos + 1..];
        let digits = rest
            .strip_prefix(|c: char| c == '+' || c == '-')
            .unwrap_or(rest);
        digits.starts_with(|c: char| c.is_ascii_digit())
    }

    /// Scans a `0x`-prefixed blob constant.
    fn scan_hex_literal(&mut self, start: usize) {
        self.advance(); // consume 'x'
        while self.peek().is_ascii_hexdigit() {
            self.advance();
        }
        if Self::is_identifier_continue(self.peek()) {
            while Self::is_identifier_continue(self.peek()) {
                self.advance();
            }
            let text = &self.source[start..self.pos];
            self.error_span(
                start..self.pos,
                &format!("malformed hexadecimal constant '{text}'"),
                codes::MALFORMED_LITERAL,
            );
        }
        let text = &self.source[start..self.pos];
        self.add_token(TokenKind::HexLiteral(text.into()), start);
    }

    /// Skips whitespace and both comment forms.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '-' if self.peek_next() == '-' => self.skip_line_comment(),
                '/' if self.peek_next() == '/' => self.skip_line_comment(),
                '/' if self.peek_next() == '*' => {
                    let comment_start = self.pos;
                    self.advance();
                    self.advance();

                    let mut closed = false;
                    while !self.is_at_end() {
                        if self.peek() == '*' && self.peek_next() == '/' {
                            self.advance();
                            self.advance();
                            closed = true;
                            break;
                        }
                        self.advance();
                    }

                    if !closed {
                        self.error(comment_start, "unclosed block comment");
                    }
                }
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }

    fn is_identifier_continue(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    /// Adds a token to the token stream.
    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let text = &self.source[start..self.pos];
        self.tokens.push(Token::new(kind, start..self.pos, text));
    }

    /// Adds an error diagnostic pointing at one character.
    fn error(&mut self, pos: usize, message: &str) {
        let end = self.source[pos..]
            .chars()
            .next()
            .map_or(pos, |ch| pos + ch.len_utf8());
        self.error_span(pos..end, message, codes::LEXICAL);
    }

    /// Adds an error diagnostic with an explicit span and code.
    fn error_span(&mut self, span: std::ops::Range<usize>, message: &str, code: &str) {
        self.diagnostics.push(
            Diag::error(message)
                .with_primary_label(span, "here")
                .with_code(code),
        );
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> char {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Advances and returns the current character.
    fn advance(&mut self) -> char {
        let ch = self.peek();
        if ch != '\0' || self.pos < self.source.len() {
            self.pos += ch.len_utf8();
        }
        ch
    }

    /// Consumes a character if it matches the expected one.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Convenience function to tokenize a source string.
pub fn tokenize(source: &str) -> LexerResult {
    Lexer::new(source).tokenize()
}
