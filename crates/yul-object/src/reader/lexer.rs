//! Lexer for the object syntax.
//!
//! Produces span-based tokens; text is sliced from source only when needed.
//! Code bodies are not tokenized meaningfully, the lexer only has to keep
//! braces inside strings and comments from being counted.
//!
//! Consecutive error characters are coalesced into a single `Garbage` token.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("object")]
    KwObject,

    #[token("code")]
    KwCode,

    #[token("data")]
    KwData,

    #[regex(r#"hex"[0-9a-fA-F_]*""#)]
    #[regex(r"hex'[0-9a-fA-F_]*'")]
    HexLiteral,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    StringLiteral,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$.]*")]
    Identifier,

    #[regex(r"[0-9][0-9a-zA-Z_]*")]
    Number,

    #[token("(")]
    #[token(")")]
    #[token(",")]
    #[token(":=")]
    #[token(":")]
    #[token("->")]
    Punct,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// `/// @use-src ...`, split off `LineComment` after lexing.
    UseSrcComment,

    /// Coalesced unrecognized input.
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::BraceOpen => "'{'",
            Self::BraceClose => "'}'",
            Self::KwObject => "'object'",
            Self::KwCode => "'code'",
            Self::KwData => "'data'",
            Self::HexLiteral => "hex literal",
            Self::StringLiteral => "string literal",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Punct => "punctuation",
            Self::Whitespace => "whitespace",
            Self::LineComment | Self::BlockComment => "comment",
            Self::UseSrcComment => "'@use-src' comment",
            Self::Garbage => "unexpected input",
        }
    }
}

/// Zero-copy token: kind + span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

pub(crate) fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

const USE_SRC_PREFIX: &str = "@use-src";

/// Tokenizes source into span-based tokens, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }

                let span = lexer.span();
                let kind = if kind == TokenKind::LineComment && is_use_src(&source[span.clone()]) {
                    TokenKind::UseSrcComment
                } else {
                    kind
                };
                tokens.push(Token::new(kind, range_to_text_range(span)));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

fn is_use_src(comment: &str) -> bool {
    comment
        .strip_prefix("///")
        .is_some_and(|rest| rest.trim_start().starts_with(USE_SRC_PREFIX))
}

/// Text of a `/// @use-src` comment after the pragma name.
pub(crate) fn use_src_payload(comment: &str) -> &str {
    comment
        .strip_prefix("///")
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix(USE_SRC_PREFIX))
        .unwrap_or("")
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
