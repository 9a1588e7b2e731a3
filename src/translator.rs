//! Renderings of a syntax tree into other notations.
//!
//! `source` writes Pascal text with every operation parenthesized. For trees
//! produced by the parser, parsing the output gives back an equal tree. The
//! grammar has no negative literals, so a hand-built `Num(-5)` comes back as
//! a unary minus over `Num(5)`. `lisp` and `rpn` write prefix and postfix
//! forms.

use std::fmt;

use crate::ast::{ASTNode, UnaryOperator};

impl fmt::Display for ASTNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTNode::BinOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
            ASTNode::UnaryOp { op, expr } => write!(f, "({}{})", op, expr),
            ASTNode::Num(val) => write!(f, "{}", val),
            ASTNode::Var(name) => f.write_str(name),
            ASTNode::Assign { var, expr } => write!(f, "{} := {}", var, expr),
            ASTNode::Compound { children } => {
                f.write_str("BEGIN ")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(" END")
            }
            ASTNode::NoOp => Ok(()),
        }
    }
}

pub fn source(node: &ASTNode) -> String {
    node.to_string()
}

/// Source of a whole program, terminated by `.`.
pub fn program_source(node: &ASTNode) -> String {
    format!("{}.", node)
}

pub fn lisp(node: &ASTNode) -> String {
    match node {
        ASTNode::BinOp { left, op, right } => format!("({} {} {})", op, lisp(left), lisp(right)),
        ASTNode::UnaryOp { op, expr } => format!("({} {})", op, lisp(expr)),
        ASTNode::Num(val) => val.to_string(),
        ASTNode::Var(name) => name.clone(),
        ASTNode::Assign { var, expr } => format!("(:= {} {})", var, lisp(expr)),
        ASTNode::Compound { children } => {
            let body: Vec<String> = children.iter().map(lisp).collect();
            format!("(begin {})", body.join(" "))
        }
        ASTNode::NoOp => "()".to_string(),
    }
}

pub fn rpn(node: &ASTNode) -> String {
    match node {
        ASTNode::BinOp { left, op, right } => format!("{} {} {}", rpn(left), rpn(right), op),
        ASTNode::UnaryOp { op, expr } => {
            let name = match op {
                UnaryOperator::Plus => "pos",
                UnaryOperator::Minus => "neg",
            };
            format!("{} {}", rpn(expr), name)
        }
        ASTNode::Num(val) => val.to_string(),
        ASTNode::Var(name) => name.clone(),
        ASTNode::Assign { var, expr } => format!("{} {} :=", var, rpn(expr)),
        ASTNode::Compound { children } => {
            let body: Vec<String> = children.iter().map(rpn).collect();
            format!("begin {} end", body.join("; "))
        }
        ASTNode::NoOp => String::new(),
    }
}
