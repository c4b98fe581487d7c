//! Placeholder token grammar.
//!
//! A token has the shape `SEP? '[' TYPE? (':' NAME)? ']' '?'?` where `SEP`
//! is a `/` or `.` taken from the character directly before the bracket.
//! Text that does not lex as a token stays literal, including a `[` with no
//! closing bracket.

const OPEN: u8 = b'[';
const CLOSE: u8 = b']';
const COLON: u8 = b':';
const SLASH: u8 = b'/';
const DOT: u8 = b'.';
const OPTIONAL: u8 = b'?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind<'a> {
    Int,
    Alnum,
    Hex,
    ShortWild,
    LongWild,
    Segment,
    Custom(&'a str),
}

impl<'a> MatchKind<'a> {
    fn from_type(ty: &'a str) -> Self {
        match ty {
            "i" => Self::Int,
            "a" => Self::Alnum,
            "h" => Self::Hex,
            "*" => Self::ShortWild,
            "**" => Self::LongWild,
            "" => Self::Segment,
            custom => Self::Custom(custom),
        }
    }

    /// Regex fragment implementing the type's matching rule.
    pub(crate) fn fragment(&self) -> &'a str {
        match *self {
            Self::Int => "[0-9]+",
            Self::Alnum => "[0-9A-Za-z]+",
            Self::Hex => "[0-9A-Fa-f]+",
            Self::ShortWild => ".+?",
            Self::LongWild => ".+",
            Self::Segment => "[^/]+",
            Self::Custom(custom) => custom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// `""`, `"/"` or `"."`; part of the matched unit, not the value.
    pub sep: &'a str,
    pub kind: MatchKind<'a>,
    /// Empty for anonymous tokens.
    pub name: &'a str,
    pub optional: bool,
    /// Full token text including separator, for error messages.
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Part<'a> {
    Literal(&'a str),
    Token(Token<'a>),
}

/// Splits a path template into literal runs and placeholder tokens.
///
/// Both the compiler and the reverse builder iterate this scanner, so the
/// two always agree on token boundaries.
pub(crate) fn scan(src: &str) -> Scanner<'_> {
    Scanner {
        src,
        pos: 0,
        queued: None,
    }
}

pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    queued: Option<Token<'a>>,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Part<'a>;

    fn next(&mut self) -> Option<Part<'a>> {
        if let Some(token) = self.queued.take() {
            return Some(Part::Token(token));
        }

        let bytes = self.src.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let lit_start = self.pos;
        let mut i = self.pos;
        while i < bytes.len() {
            if bytes[i] == OPEN {
                if let Some((token, end)) = lex_token(self.src, lit_start, i) {
                    self.pos = end;
                    let lit_end = i - token.sep.len();
                    if lit_end == lit_start {
                        return Some(Part::Token(token));
                    }
                    self.queued = Some(token);
                    return Some(Part::Literal(&self.src[lit_start..lit_end]));
                }
            }
            i += 1;
        }

        self.pos = bytes.len();
        Some(Part::Literal(&self.src[lit_start..]))
    }
}

/// Lexes one token whose `[` sits at `open`, or `None` if the text is not a
/// well-formed token. `lit_start` bounds the separator lookbehind so that a
/// character consumed by an earlier part is never reused.
fn lex_token(src: &str, lit_start: usize, open: usize) -> Option<(Token<'_>, usize)> {
    let bytes = src.as_bytes();

    let mut i = open + 1;
    let ty_start = i;
    while i < bytes.len() && bytes[i] != COLON && bytes[i] != CLOSE {
        i += 1;
    }
    if i >= bytes.len() {
        return None;
    }
    let ty = &src[ty_start..i];

    let name = if bytes[i] == COLON {
        i += 1;
        let name_start = i;
        while i < bytes.len() && bytes[i] != COLON && bytes[i] != CLOSE {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != CLOSE {
            return None;
        }
        &src[name_start..i]
    } else {
        ""
    };

    debug_assert_eq!(bytes[i], CLOSE);
    i += 1;

    let optional = bytes.get(i) == Some(&OPTIONAL);
    if optional {
        i += 1;
    }

    let sep = if open > lit_start && (bytes[open - 1] == SLASH || bytes[open - 1] == DOT) {
        &src[open - 1..open]
    } else {
        ""
    };

    let token = Token {
        sep,
        kind: MatchKind::from_type(ty),
        name,
        optional,
        text: &src[open - sep.len()..i],
    };
    Some((token, i))
}
