mod token;
mod lexer;
mod ast;
mod error;
mod parser;
mod interpreter;
pub mod translator;

pub use token::{Token, TokenKind};
pub use lexer::Lexer;
pub use ast::{ASTNode, BinaryOperator, UnaryOperator};
pub use error::{Error, EvalError, ParseError};
pub use parser::Parser;
pub use interpreter::Interpreter;

use std::collections::HashMap;

/// Parses a complete `BEGIN ... END.` program.
pub fn parse(program: &str) -> Result<ASTNode, ParseError> {
    Parser::new(Lexer::new(program))?.parse()
}

/// Parses a bare arithmetic expression.
pub fn parse_expr(text: &str) -> Result<ASTNode, ParseError> {
    Parser::new(Lexer::new(text))?.expr()
}

pub fn execute(program: &str) -> Result<HashMap<String, i64>, Error> {
    let tree = parse(program)?;
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&tree)?;
    Ok(interpreter.into_variables())
}

pub fn evaluate(text: &str) -> Result<i64, Error> {
    let tree = parse_expr(text)?;
    Ok(Interpreter::new().interpret(&tree)?)
}
