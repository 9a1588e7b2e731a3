use crate::ast::{ASTNode, BinaryOperator, UnaryOperator};
use crate::error::{ParseError, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

const BEGIN: &str = "BEGIN";
const END: &str = "END";

/// LL(1) recursive-descent parser. Each instance owns its lexer and is
/// consumed by one of the entry points, [`Parser::parse`] or [`Parser::expr`].
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_pos: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current_token = lexer.get_next_token()?;
        let current_pos = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_pos,
        })
    }

    /// Parses a whole program. The root is always a `Compound`.
    pub fn parse(mut self) -> Result<ASTNode> {
        let node = self.program()?;
        self.expect_eof()?;
        Ok(node)
    }

    /// Parses a bare expression.
    pub fn expr(mut self) -> Result<ASTNode> {
        let node = self.expression()?;
        self.expect_eof()?;
        Ok(node)
    }

    fn advance(&mut self) -> Result<()> {
        self.current_token = self.lexer.get_next_token()?;
        self.current_pos = self.lexer.token_start();
        Ok(())
    }

    fn error(&self, expected: impl Into<String>) -> ParseError {
        ParseError::Syntax {
            expected: expected.into(),
            found: self.current_token.to_string(),
            pos: self.current_pos,
        }
    }

    fn eat(&mut self, kind: TokenKind, text: &str) -> Result<()> {
        if self.current_token.is(kind, text) {
            self.advance()
        } else {
            Err(self.error(format!("`{}`", text)))
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.current_token.is_keyword(keyword) {
            self.advance()
        } else {
            Err(self.error(format!("`{}`", keyword)))
        }
    }

    fn expect_eof(&self) -> Result<()> {
        if self.current_token.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(self.error("end of input"))
        }
    }

    fn program(&mut self) -> Result<ASTNode> {
        let node = self.compound_statement()?;
        self.eat(TokenKind::Sign, ".")?;
        Ok(node)
    }

    fn compound_statement(&mut self) -> Result<ASTNode> {
        self.eat_keyword(BEGIN)?;
        let children = self.statement_list()?;
        self.eat_keyword(END)?;
        Ok(ASTNode::Compound { children })
    }

    fn statement_list(&mut self) -> Result<Vec<ASTNode>> {
        let mut results = vec![self.statement()?];

        while self.current_token.is(TokenKind::Sign, ";") {
            self.advance()?;
            results.push(self.statement()?);
        }

        Ok(results)
    }

    fn statement(&mut self) -> Result<ASTNode> {
        if self.current_token.is_keyword(BEGIN) {
            self.compound_statement()
        } else if self.current_token.kind == TokenKind::Identifier
            && !self.current_token.is_keyword(END)
        {
            self.assignment()
        } else {
            Ok(self.empty())
        }
    }

    fn assignment(&mut self) -> Result<ASTNode> {
        let var = self.variable()?;
        self.eat(TokenKind::Sign, ":=")?;
        let expr = self.expression()?;
        Ok(ASTNode::assign(var, expr))
    }

    fn variable(&mut self) -> Result<String> {
        if self.current_token.kind != TokenKind::Identifier || self.current_token.is_keyword(END) {
            return Err(self.error("variable"));
        }
        let name = self.current_token.text().to_string();
        self.advance()?;
        Ok(name)
    }

    fn empty(&self) -> ASTNode {
        ASTNode::NoOp
    }

    fn binary_operator(&self, allowed: &[BinaryOperator]) -> Option<BinaryOperator> {
        if self.current_token.kind != TokenKind::Operator {
            return None;
        }
        BinaryOperator::from_symbol(self.current_token.text()).filter(|op| allowed.contains(op))
    }

    fn expression(&mut self) -> Result<ASTNode> {
        let mut node = self.term()?;

        while let Some(op) = self.binary_operator(&[BinaryOperator::Plus, BinaryOperator::Minus]) {
            self.advance()?;
            node = ASTNode::bin_op(node, op, self.term()?);
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<ASTNode> {
        let mut node = self.factor()?;

        while let Some(op) =
            self.binary_operator(&[BinaryOperator::Multiply, BinaryOperator::Divide])
        {
            self.advance()?;
            node = ASTNode::bin_op(node, op, self.factor()?);
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<ASTNode> {
        match self.current_token.kind {
            TokenKind::Operator => {
                let Some(op) = UnaryOperator::from_symbol(self.current_token.text()) else {
                    return Err(self.error("expression"));
                };
                self.advance()?;
                Ok(ASTNode::unary_op(op, self.factor()?))
            }
            TokenKind::Integer => {
                let text = self.current_token.text();
                let value = text.parse::<i64>().map_err(|_| ParseError::IntegerTooLarge {
                    text: text.to_string(),
                    pos: self.current_pos,
                })?;
                self.advance()?;
                Ok(ASTNode::Num(value))
            }
            TokenKind::Bracket if self.current_token.text() == "(" => {
                self.advance()?;
                let node = self.expression()?;
                self.eat(TokenKind::Bracket, ")")?;
                Ok(node)
            }
            TokenKind::Identifier => Ok(ASTNode::Var(self.variable()?)),
            _ => Err(self.error("expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ASTNode> {
        Parser::new(Lexer::new(text))?.parse()
    }

    fn expr(text: &str) -> Result<ASTNode> {
        Parser::new(Lexer::new(text))?.expr()
    }

    fn syntax_pos(err: ParseError) -> usize {
        match err {
            ParseError::Syntax { pos, .. } => pos,
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_simple_assignment() {
        let ast = parse("BEGIN x := 5 END.").unwrap();
        assert_eq!(
            ast,
            ASTNode::Compound {
                children: vec![ASTNode::assign("x", ASTNode::Num(5))],
            }
        );
    }

    #[test]
    fn test_parse_precedence() {
        let ast = expr("2 + 3 * 5").unwrap();
        assert_eq!(
            ast,
            ASTNode::bin_op(
                ASTNode::Num(2),
                BinaryOperator::Plus,
                ASTNode::bin_op(ASTNode::Num(3), BinaryOperator::Multiply, ASTNode::Num(5)),
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        let ast = expr("8 - 3 - 2").unwrap();
        assert_eq!(
            ast,
            ASTNode::bin_op(
                ASTNode::bin_op(ASTNode::Num(8), BinaryOperator::Minus, ASTNode::Num(3)),
                BinaryOperator::Minus,
                ASTNode::Num(2),
            )
        );

        let ast = expr("12 / 3 * 2").unwrap();
        assert_eq!(
            ast,
            ASTNode::bin_op(
                ASTNode::bin_op(ASTNode::Num(12), BinaryOperator::Divide, ASTNode::Num(3)),
                BinaryOperator::Multiply,
                ASTNode::Num(2),
            )
        );
    }

    #[test]
    fn test_parse_parentheses() {
        let ast = expr("(2 + 3) * 4").unwrap();
        assert_eq!(
            ast,
            ASTNode::bin_op(
                ASTNode::bin_op(ASTNode::Num(2), BinaryOperator::Plus, ASTNode::Num(3)),
                BinaryOperator::Multiply,
                ASTNode::Num(4),
            )
        );
    }

    #[test]
    fn test_parse_chained_unary() {
        let ast = expr("---4").unwrap();
        let expected = ASTNode::unary_op(
            UnaryOperator::Minus,
            ASTNode::unary_op(
                UnaryOperator::Minus,
                ASTNode::unary_op(UnaryOperator::Minus, ASTNode::Num(4)),
            ),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_parse_unary_binds_tighter() {
        let ast = expr("-2 + +x").unwrap();
        assert_eq!(
            ast,
            ASTNode::bin_op(
                ASTNode::unary_op(UnaryOperator::Minus, ASTNode::Num(2)),
                BinaryOperator::Plus,
                ASTNode::unary_op(UnaryOperator::Plus, ASTNode::var("x")),
            )
        );
    }

    #[test]
    fn test_parse_multiple_statements() {
        let ast = parse("BEGIN x := 5; y := 10 END.").unwrap();
        match ast {
            ASTNode::Compound { children } => assert_eq!(children.len(), 2),
            other => panic!("expected compound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nested_blocks() {
        let ast = parse("BEGIN x := 5; BEGIN y := 10 END END.").unwrap();
        assert_eq!(
            ast,
            ASTNode::Compound {
                children: vec![
                    ASTNode::assign("x", ASTNode::Num(5)),
                    ASTNode::Compound {
                        children: vec![ASTNode::assign("y", ASTNode::Num(10))],
                    },
                ],
            }
        );
    }

    #[test]
    fn test_parse_empty_block() {
        let ast = parse("BEGIN END.").unwrap();
        assert_eq!(
            ast,
            ASTNode::Compound {
                children: vec![ASTNode::NoOp],
            }
        );
    }

    #[test]
    fn test_parse_trailing_semicolon() {
        let ast = parse("BEGIN x := 1; END.").unwrap();
        assert_eq!(
            ast,
            ASTNode::Compound {
                children: vec![ASTNode::assign("x", ASTNode::Num(1)), ASTNode::NoOp],
            }
        );
    }

    #[test]
    fn test_parse_case_insensitive_keywords() {
        assert_eq!(parse("begin x:=1 end.").unwrap(), parse("BEGIN x:=1 END.").unwrap());
        assert!(parse("Begin x := 1 eNd.").is_ok());
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        let ast = parse("BEGIN X := x END.").unwrap();
        assert_eq!(
            ast,
            ASTNode::Compound {
                children: vec![ASTNode::assign("X", ASTNode::var("x"))],
            }
        );
    }

    #[test]
    fn test_parse_missing_dot() {
        let err = parse("BEGIN x := 5 END").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax {
                expected: "`.`".to_string(),
                found: "end of input".to_string(),
                pos: 16,
            }
        );
    }

    #[test]
    fn test_parse_missing_end() {
        let err = parse("BEGIN x := 5.").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax {
                expected: "`END`".to_string(),
                found: "`.`".to_string(),
                pos: 12,
            }
        );
    }

    #[test]
    fn test_parse_missing_assign() {
        let err = parse("BEGIN x 5 END.").unwrap_err();
        assert_eq!(syntax_pos(err), 8);
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let err = parse("BEGIN x := 5 END. y").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax {
                expected: "end of input".to_string(),
                found: "identifier `y`".to_string(),
                pos: 18,
            }
        );
        assert!(expr("1 2").is_err());
    }

    #[test]
    fn test_unclosed_bracket() {
        let err = expr("(3 + 4").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax {
                expected: "`)`".to_string(),
                found: "end of input".to_string(),
                pos: 6,
            }
        );
    }

    #[test]
    fn test_end_is_not_a_variable() {
        assert!(parse("BEGIN END := 1 END.").is_err());
        assert!(parse("BEGIN x := end END.").is_err());
        assert!(expr("END").is_err());
    }

    #[test]
    fn test_begin_is_a_variable_outside_statements() {
        assert_eq!(expr("begin").unwrap(), ASTNode::var("begin"));
        assert_eq!(
            parse("BEGIN x := Begin END.").unwrap(),
            ASTNode::Compound {
                children: vec![ASTNode::assign("x", ASTNode::var("Begin"))],
            }
        );
        assert_eq!(
            parse("BEGIN x := begin + 1 END.").unwrap(),
            ASTNode::Compound {
                children: vec![ASTNode::assign(
                    "x",
                    ASTNode::bin_op(ASTNode::var("begin"), BinaryOperator::Plus, ASTNode::Num(1)),
                )],
            }
        );
    }

    #[test]
    fn test_unexpected_token_in_factor() {
        let err = expr("2 * )").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax {
                expected: "expression".to_string(),
                found: "`)`".to_string(),
                pos: 4,
            }
        );
        assert!(expr("*3").is_err());
        assert!(expr("").is_err());
    }

    #[test]
    fn test_lexical_error_propagates() {
        let err = parse("BEGIN x := 5 # END.").unwrap_err();
        assert_eq!(err, ParseError::InvalidCharacter { ch: '#', pos: 13 });
    }

    #[test]
    fn test_integer_too_large() {
        let err = expr("99999999999999999999").unwrap_err();
        assert!(matches!(err, ParseError::IntegerTooLarge { pos: 0, .. }));
    }

    #[test]
    fn test_program_required_for_parse() {
        assert!(parse("x := 1").is_err());
        assert!(parse("1 + 2").is_err());
    }
}
