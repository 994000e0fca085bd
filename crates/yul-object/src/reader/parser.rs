//! Recursive-descent parser for the object syntax.
//!
//! ```text
//! root   := use_src? (object | block) EOF
//! object := 'object' STRING '{' ('code' block)? (data | use_src? object)* '}'
//! data   := 'data' STRING (HEX | STRING)
//! block  := '{' <balanced tokens> '}'
//! ```
//!
//! Code blocks are matched by brace depth and handed over as raw text.

use std::sync::Arc;

use log::debug;
use rowan::{TextRange, TextSize};
use yul_object_core::Dialect;

use super::error::{ReadError, ReadErrorKind};
use super::lexer::{Token, TokenKind, lex, token_text, use_src_payload};
use crate::debug_data::{ObjectDebugData, SourceNameMap};
use crate::node::Data;
use crate::object::Object;
use crate::text_code::TextCode;

type ParseResult<T> = Result<T, ReadError>;

pub(super) struct Parser<'src> {
    source: &'src str,
    /// Non-trivia tokens only.
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    recursion_limit: u32,
    dialect: Option<Dialect>,
}

impl<'src> Parser<'src> {
    pub(super) fn new(source: &'src str) -> Self {
        let tokens = lex(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            recursion_limit: u32::MAX,
            dialect: None,
        }
    }

    pub(super) fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub(super) fn with_dialect(mut self, dialect: Option<Dialect>) -> Self {
        self.dialect = dialect;
        self
    }

    pub(super) fn parse_root(mut self) -> ParseResult<Object> {
        let use_src = self.parse_use_src()?;

        let object = match self.peek() {
            Some(t) if t.kind == TokenKind::BraceOpen => {
                let code = self.parse_block()?;
                let mut object = Object::unnamed().with_code(Arc::new(code));
                if let Some(names) = use_src {
                    object.set_debug_data(Arc::new(ObjectDebugData::with_source_names(names)));
                }
                object
            }
            Some(t) if t.kind == TokenKind::KwObject => self.parse_object(use_src)?.0,
            Some(t) => return Err(unexpected(t, "'object' or '{'")),
            None => {
                return Err(ReadError::new(
                    ReadErrorKind::UnexpectedEof("'object' or '{'"),
                    self.eof_span(),
                ));
            }
        };

        if let Some(t) = self.peek() {
            return Err(unexpected(t, "end of input"));
        }
        Ok(object)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn eof_span(&self) -> TextRange {
        TextRange::empty(TextSize::of(self.source))
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<Token> {
        match self.peek() {
            Some(t) if t.kind == kind => {
                self.pos += 1;
                Ok(t)
            }
            Some(t) => Err(unexpected(t, expected)),
            None => Err(ReadError::new(
                ReadErrorKind::UnexpectedEof(expected),
                self.eof_span(),
            )),
        }
    }

    fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    fn parse_use_src(&mut self) -> ParseResult<Option<SourceNameMap>> {
        if !self.at(TokenKind::UseSrcComment) {
            return Ok(None);
        }
        let Some(comment) = self.bump() else {
            return Ok(None);
        };
        parse_use_src_list(use_src_payload(self.text(&comment)))
            .map(Some)
            .map_err(|msg| ReadError::new(ReadErrorKind::InvalidUseSrc(msg), comment.span))
    }

    /// Returns the object and the span of its name.
    fn parse_object(&mut self, use_src: Option<SourceNameMap>) -> ParseResult<(Object, TextRange)> {
        let keyword = self.expect(TokenKind::KwObject, "'object'")?;
        if self.depth >= self.recursion_limit {
            return Err(ReadError::new(
                ReadErrorKind::RecursionLimitExceeded(self.recursion_limit),
                keyword.span,
            ));
        }
        self.depth += 1;

        let name_token = self.expect(TokenKind::StringLiteral, "object name")?;
        let name = self.parse_name(&name_token)?;
        let open = self.expect(TokenKind::BraceOpen, "'{'")?;
        debug!("reading object {name:?}");

        let mut object = Object::new(name);
        if let Some(names) = use_src {
            object.set_debug_data(Arc::new(ObjectDebugData::with_source_names(names)));
        }

        if self.at(TokenKind::KwCode) {
            self.bump();
            let code = self.parse_block()?;
            object.set_code(Arc::new(code), None);
        }

        loop {
            let Some(token) = self.peek() else {
                return Err(ReadError::new(ReadErrorKind::UnclosedBlock, open.span));
            };
            match token.kind {
                TokenKind::BraceClose => {
                    self.bump();
                    break;
                }
                TokenKind::KwData => {
                    let (data, span) = self.parse_data()?;
                    object
                        .attach(data)
                        .map_err(|err| ReadError::new(err, span))?;
                }
                TokenKind::KwObject | TokenKind::UseSrcComment => {
                    let use_src = self.parse_use_src()?;
                    let (nested, span) = self.parse_object(use_src)?;
                    object
                        .attach(nested)
                        .map_err(|err| ReadError::new(err, span))?;
                }
                _ => return Err(unexpected(token, "'object', 'data' or '}'")),
            }
        }

        self.depth -= 1;
        Ok((object, name_token.span))
    }

    fn parse_data(&mut self) -> ParseResult<(Data, TextRange)> {
        self.expect(TokenKind::KwData, "'data'")?;
        let name_token = self.expect(TokenKind::StringLiteral, "data name")?;
        let name = self.parse_name(&name_token)?;

        let Some(value) = self.bump() else {
            return Err(ReadError::new(
                ReadErrorKind::UnexpectedEof("data value"),
                self.eof_span(),
            ));
        };
        let bytes = match value.kind {
            TokenKind::HexLiteral => {
                let text = self.text(&value);
                let digits: String = text[4..text.len() - 1]
                    .chars()
                    .filter(|&c| c != '_')
                    .collect();
                hex::decode(&digits).map_err(|err| ReadError::new(err, value.span))?
            }
            TokenKind::StringLiteral => unquote(self.text(&value))
                .map_err(|esc| ReadError::new(ReadErrorKind::InvalidEscape(esc), value.span))?,
            _ => return Err(unexpected(value, "hex or string literal")),
        };

        Ok((Data::new(name, bytes), name_token.span))
    }

    fn parse_name(&self, token: &Token) -> ParseResult<String> {
        let bytes = unquote(self.text(token))
            .map_err(|esc| ReadError::new(ReadErrorKind::InvalidEscape(esc), token.span))?;
        String::from_utf8(bytes).map_err(|_| ReadError::new(ReadErrorKind::InvalidUtf8, token.span))
    }

    fn parse_block(&mut self) -> ParseResult<TextCode> {
        let open = self.expect(TokenKind::BraceOpen, "'{'")?;
        let mut depth = 1usize;

        while let Some(token) = self.bump() {
            match token.kind {
                TokenKind::BraceOpen => depth += 1,
                TokenKind::BraceClose => {
                    depth -= 1;
                    if depth == 0 {
                        let body_range = usize::from(open.span.end())..usize::from(token.span.start());
                        let code = TextCode::new(&self.source[body_range]);
                        return Ok(match &self.dialect {
                            Some(dialect) => code.with_dialect(dialect.clone()),
                            None => code,
                        });
                    }
                }
                _ => {}
            }
        }

        Err(ReadError::new(ReadErrorKind::UnclosedBlock, open.span))
    }
}

fn unexpected(token: Token, expected: &'static str) -> ReadError {
    ReadError::new(
        ReadErrorKind::UnexpectedToken {
            expected,
            found: token.kind.describe(),
        },
        token.span,
    )
}

/// Decode a quoted literal (either quote style) into raw bytes.
///
/// On failure returns the offending escape sequence.
fn unquote(literal: &str) -> Result<Vec<u8>, String> {
    let inner = &literal[1..literal.len() - 1];
    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        match chars.next() {
            Some('\\') => out.push(b'\\'),
            Some('"') => out.push(b'"'),
            Some('\'') => out.push(b'\''),
            Some('n') => out.push(b'\n'),
            Some('r') => out.push(b'\r'),
            Some('t') => out.push(b'\t'),
            Some('x') => {
                let digits: String = chars.by_ref().take(2).collect();
                let byte = (digits.len() == 2)
                    .then(|| u8::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .ok_or_else(|| format!("\\x{digits}"))?;
                out.push(byte);
            }
            Some('u') => {
                let digits: String = chars.by_ref().take(4).collect();
                let c = (digits.len() == 4)
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("\\u{digits}"))?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            Some(other) => return Err(format!("\\{other}")),
            None => return Err("\\".to_owned()),
        }
    }

    Ok(out)
}

/// Parse `0:"a.sol", 1:"b.sol"`.
fn parse_use_src_list(payload: &str) -> Result<SourceNameMap, String> {
    let tokens: Vec<Token> = lex(payload)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect();
    let text = |t: &Token| token_text(payload, t);

    let mut names = SourceNameMap::new();
    let mut iter = tokens.iter().peekable();

    while let Some(index_token) = iter.next() {
        if index_token.kind != TokenKind::Number {
            return Err(format!("expected source index, found {:?}", text(index_token)));
        }
        let index: u32 = text(index_token)
            .parse()
            .map_err(|_| format!("invalid source index {:?}", text(index_token)))?;

        match iter.next() {
            Some(t) if t.kind == TokenKind::Punct && text(t) == ":" => {}
            _ => return Err(format!("expected ':' after source index {index}")),
        }

        let name = match iter.next() {
            Some(t) if t.kind == TokenKind::StringLiteral => {
                let bytes = unquote(text(t)).map_err(|esc| format!("invalid escape {esc:?}"))?;
                String::from_utf8(bytes).map_err(|_| "source name is not valid UTF-8".to_owned())?
            }
            _ => return Err(format!("expected source name for index {index}")),
        };

        if names.insert(index, Arc::from(name)).is_some() {
            return Err(format!("source index {index} listed twice"));
        }

        match iter.next() {
            None => break,
            Some(t) if t.kind == TokenKind::Punct && text(t) == "," => {
                if iter.peek().is_none() {
                    return Err("trailing ','".to_owned());
                }
            }
            Some(t) => return Err(format!("expected ',', found {:?}", text(t))),
        }
    }

    Ok(names)
}
