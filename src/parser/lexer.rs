//! Lexer (tokenizer) for cleaned source text
//!
//! Tokenization happens in two passes:
//!
//! 1. [`Lexer::split`] scans the text once and cuts it into raw substrings.
//!    Whitespace and a fixed set of special characters end the current word;
//!    two adjacent characters from the multi-character subset (`= + & | < >`)
//!    are glued into one operator token.
//! 2. [`Lexer::classify`] assigns a [`TokenKind`] to each substring from its
//!    text alone.
//!
//! Quotes get no special treatment while splitting, so a string literal that
//! contains whitespace comes out as several tokens. The lexer never fails:
//! anything it does not recognise is classified as [`TokenKind::Symbol`].

use rustc_hash::FxHashSet;
use std::fmt;

/// Words (and stream/logical operators) that always classify as
/// [`TokenKind::ReservedWord`].
pub const RESERVED_WORDS: &[&str] = &[
    "int", "float", "void", "return", "if", "while", "for", "cin", "cout", "continue", "break",
    "#include", "using", "namespace", "std", "main", "endl", "<<", ">>", "&&", "||",
];

/// Characters that end the current word and form tokens of their own.
const SPECIAL_CHARS: &[char] = &[
    '=', '+', '&', '|', '<', '>', '(', ')', '{', '}', '[', ']', ';', ',', '.',
];

/// Special characters that combine with an adjacent member of the same set.
const MULTI_CHAR_SYMBOLS: &[char] = &['=', '+', '&', '|', '<', '>'];

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    ReservedWord,
    Symbol,
    String,
    /// Part of the vocabulary for consumers; the classifier never yields it.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::ReservedWord => "RESERVEDWORD",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::String => "STRING",
            TokenKind::Error => "ERROR",
        };
        f.pad(name)
    }
}

/// A classified token. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.text)
    }
}

/// Splits and classifies source text.
pub struct Lexer {
    reserved: FxHashSet<&'static str>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            reserved: RESERVED_WORDS.iter().copied().collect(),
        }
    }

    /// Tokenize the entire input: split, then classify every piece.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let tokens: Vec<Token> = self
            .split(source)
            .into_iter()
            .map(|text| Token::new(self.classify(&text), text))
            .collect();

        log::debug!("lexer produced {} tokens", tokens.len());
        tokens
    }

    /// Cut `source` into raw token substrings.
    pub fn split(&self, source: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut current = String::new();
        let mut chars = source.chars().peekable();

        while let Some(ch) = chars.next() {
            if !ch.is_whitespace() && !is_special(ch) {
                current.push(ch);
                continue;
            }

            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }

            if ch.is_whitespace() {
                continue;
            }

            let mut symbol = String::from(ch);
            if is_multi_char_symbol(ch) {
                if let Some(next) = chars.next_if(|&c| is_multi_char_symbol(c)) {
                    symbol.push(next);
                }
            }
            pieces.push(symbol);
        }

        if !current.is_empty() {
            pieces.push(current);
        }

        pieces
    }

    /// Classify a raw token by its text. First match wins:
    /// reserved word, identifier, number, string, symbol.
    pub fn classify(&self, text: &str) -> TokenKind {
        if self.reserved.contains(text) {
            TokenKind::ReservedWord
        } else if is_identifier(text) {
            TokenKind::Identifier
        } else if is_number(text) {
            TokenKind::Number
        } else if is_string(text) {
            TokenKind::String
        } else {
            TokenKind::Symbol
        }
    }
}

fn is_special(ch: char) -> bool {
    SPECIAL_CHARS.contains(&ch)
}

fn is_multi_char_symbol(ch: char) -> bool {
    MULTI_CHAR_SYMBOLS.contains(&ch)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// `[0-9]+`
fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn is_string(text: &str) -> bool {
    text.starts_with('"') && text.ends_with('"')
}
