//! Column type grammar.

use crate::ast::{NativeType, ParsedType};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser, RuleResult};

fn native_type(kind: &TokenKind) -> Option<NativeType> {
    let native = match kind {
        TokenKind::Ascii => NativeType::Ascii,
        TokenKind::Bigint => NativeType::Bigint,
        TokenKind::Blob => NativeType::Blob,
        TokenKind::Boolean => NativeType::Boolean,
        TokenKind::Counter => NativeType::Counter,
        TokenKind::Decimal => NativeType::Decimal,
        TokenKind::Double => NativeType::Double,
        TokenKind::Float => NativeType::Float,
        TokenKind::Inet => NativeType::Inet,
        TokenKind::Int => NativeType::Int,
        TokenKind::Text => NativeType::Text,
        TokenKind::Timestamp => NativeType::Timestamp,
        TokenKind::Uuid => NativeType::Uuid,
        TokenKind::Varchar => NativeType::Varchar,
        TokenKind::Varint => NativeType::Varint,
        TokenKind::Timeuuid => NativeType::Timeuuid,
        _ => return None,
    };
    Some(native)
}

impl Parser {
    /// `comparatorType`: a native type, `map<K, V>`, `list<T>`, `set<T>`
    /// or a quoted custom class name.
    pub(crate) fn parse_type(&mut self) -> RuleResult<ParsedType> {
        if let Some(native) = native_type(self.peek_kind()) {
            self.advance();
            return Ok(ParsedType::Native(native));
        }

        match self.peek_kind().clone() {
            TokenKind::Map => {
                self.advance();
                self.expect(&TokenKind::Lt, "after MAP")?;
                let key = self.nested(Self::parse_type)?;
                self.expect(&TokenKind::Comma, "between map key and value types")?;
                let value = self.nested(Self::parse_type)?;
                self.expect(&TokenKind::Gt, "to close map type")?;
                Ok(ParsedType::Map(Box::new(key), Box::new(value)))
            }
            TokenKind::List => {
                self.advance();
                self.expect(&TokenKind::Lt, "after LIST")?;
                let element = self.nested(Self::parse_type)?;
                self.expect(&TokenKind::Gt, "to close list type")?;
                Ok(ParsedType::List(Box::new(element)))
            }
            TokenKind::Set => {
                self.advance();
                self.expect(&TokenKind::Lt, "after SET")?;
                let element = self.nested(Self::parse_type)?;
                self.expect(&TokenKind::Gt, "to close set type")?;
                Ok(ParsedType::Set(Box::new(element)))
            }
            TokenKind::StringLiteral(class) => {
                self.advance();
                Ok(ParsedType::Custom(class))
            }
            _ => {
                self.expected_token("column type", "");
                Err(Halt::Recorded)
            }
        }
    }
}
