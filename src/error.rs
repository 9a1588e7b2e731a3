use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Lexical and syntax errors. Positions are character offsets into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid character `{ch}` at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("Integer literal `{text}` at position {pos} is too large")]
    IntegerTooLarge { text: String, pos: usize },

    #[error("Expected {expected}, found {found} at position {pos}")]
    Syntax {
        expected: String,
        found: String,
        pos: usize,
    },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::InvalidCharacter { pos, .. }
            | ParseError::IntegerTooLarge { pos, .. }
            | ParseError::Syntax { pos, .. } => *pos,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_lexical(&self) -> bool {
        !matches!(self, ParseError::Syntax { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("Arithmetic overflow in `{0}`")]
    Overflow(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Runtime error: {0}")]
    Eval(#[from] EvalError),
}
