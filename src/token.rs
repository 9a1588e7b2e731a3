use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Identifier,
    /// `+ - * /`
    Operator,
    /// `:=`, `;` and `.`
    Sign,
    /// `(` and `)`
    Bracket,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: Some(text.into()),
        }
    }

    pub fn eof() -> Self {
        Token {
            kind: TokenKind::Eof,
            text: None,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text() == text
    }

    /// Keywords are matched without regard to case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text().eq_ignore_ascii_case(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Integer => write!(f, "integer `{}`", self.text()),
            TokenKind::Identifier => write!(f, "identifier `{}`", self.text()),
            _ => write!(f, "`{}`", self.text()),
        }
    }
}
