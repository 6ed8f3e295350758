//! Property bags of DDL statements.

use crate::ast::{PropertyDefinitions, PropertyValue, Span, Term, Value};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser, RuleResult, merge_spans};
use smol_str::SmolStr;
use std::collections::BTreeMap;

const NO_BIND_MARKERS: &str = " (bind variables are not supported in DDL queries)";

/// Raw text of a constant; `None` for bind markers and collections.
fn constant_text(value: &Value) -> Option<&str> {
    value.as_term().and_then(Term::raw_text)
}

impl Parser {
    /// `property (AND property)*`
    pub(crate) fn parse_properties(&mut self) -> RuleResult<PropertyDefinitions> {
        let mut properties = PropertyDefinitions::new();
        loop {
            self.parse_property(&mut properties)?;
            if !self.eat(&TokenKind::And) {
                break;
            }
        }
        Ok(properties)
    }

    /// `name '=' (propertyValue | map_literal)`
    ///
    /// Bad values are reported and skipped so the remaining properties are
    /// still checked.
    pub(crate) fn parse_property(&mut self, properties: &mut PropertyDefinitions) -> RuleResult<()> {
        let name = self.parse_identifier("for property name")?;
        self.expect(&TokenKind::Eq, "after property name")?;

        if self.at(&TokenKind::LBrace) {
            let start = self.peek().span.clone();
            let entries = self.parse_map_literal()?;
            let span = merge_spans(&start, &self.stream.previous_span());
            let map = self.convert_property_map(&entries, span);
            properties.insert(name.text(), PropertyValue::Map(map));
            return Ok(());
        }

        let token = self.peek().clone();
        if token.kind == TokenKind::QMark {
            self.advance();
            self.property_error(
                token.span,
                format!("Invalid property value: ? for property: {name}{NO_BIND_MARKERS}"),
            );
            return Ok(());
        }

        let value = if let Some(term) = super::term::constant_from_token(&token) {
            term.raw_text().map(SmolStr::new)
        } else if token.kind.is_unreserved_keyword() {
            Some(token.text.clone())
        } else {
            None
        };

        match value {
            Some(value) => {
                self.advance();
                properties.insert(name.text(), PropertyValue::Simple(value));
                Ok(())
            }
            None => {
                self.expected_token("property value", &format!("for property {name}"));
                Err(Halt::Recorded)
            }
        }
    }

    /// Converts a map literal into a string map.
    ///
    /// Keys and values must be constants. The first bad entry is reported
    /// and ends the conversion; entries before it are kept.
    fn convert_property_map(
        &mut self,
        entries: &[(Value, Value)],
        span: Span,
    ) -> BTreeMap<SmolStr, SmolStr> {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let Some(key_text) = constant_text(key) else {
                let mut message = format!("Invalid property name: {key}");
                if key.is_bind_marker() {
                    message.push_str(NO_BIND_MARKERS);
                }
                self.property_error(span.clone(), message);
                break;
            };
            let Some(value_text) = constant_text(value) else {
                let mut message = format!("Invalid property value: {value} for property: {key}");
                if value.is_bind_marker() {
                    message.push_str(NO_BIND_MARKERS);
                }
                self.property_error(span.clone(), message);
                break;
            };
            map.insert(SmolStr::new(key_text), SmolStr::new(value_text));
        }
        map
    }
}
