use crate::error::{ParseError, Result};
use crate::token::{Token, TokenKind};

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    token_start: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
            token_start: 0,
        }
    }

    /// Offset of the first character of the last token returned.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn peek(&self) -> Option<char> {
        self.text.get(self.pos + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn integer(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn id(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    pub fn get_next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.token_start = self.pos;

        let Some(ch) = self.current_char else {
            return Ok(Token::eof());
        };

        if ch.is_ascii_digit() {
            return Ok(Token::new(TokenKind::Integer, self.integer()));
        }

        if ch.is_alphabetic() {
            return Ok(Token::new(TokenKind::Identifier, self.id()));
        }

        if ch == ':' && self.peek() == Some('=') {
            self.advance();
            self.advance();
            return Ok(Token::new(TokenKind::Sign, ":="));
        }

        let kind = match ch {
            '+' | '-' | '*' | '/' => TokenKind::Operator,
            ';' | '.' => TokenKind::Sign,
            '(' | ')' => TokenKind::Bracket,
            _ => return Err(ParseError::InvalidCharacter { ch, pos: self.pos }),
        };

        self.advance();
        Ok(Token::new(kind, ch))
    }
}
