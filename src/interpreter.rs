use std::collections::HashMap;

use crate::ast::{ASTNode, BinaryOperator, UnaryOperator};
use crate::error::EvalError;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Reference evaluator over the parser's tree.
pub struct Interpreter {
    variables: HashMap<String, i64>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            variables: HashMap::new(),
        }
    }

    pub fn interpret(&mut self, node: &ASTNode) -> Result<i64> {
        match node {
            ASTNode::BinOp { left, op, right } => {
                let left_val = self.interpret(left)?;
                let right_val = self.interpret(right)?;
                let result = match op {
                    BinaryOperator::Plus => left_val.checked_add(right_val),
                    BinaryOperator::Minus => left_val.checked_sub(right_val),
                    BinaryOperator::Multiply => left_val.checked_mul(right_val),
                    BinaryOperator::Divide => {
                        if right_val == 0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        left_val.checked_div(right_val)
                    }
                };
                result.ok_or_else(|| EvalError::Overflow(format!("{} {} {}", left_val, op, right_val)))
            }
            ASTNode::UnaryOp { op, expr } => {
                let val = self.interpret(expr)?;
                match op {
                    UnaryOperator::Plus => Ok(val),
                    UnaryOperator::Minus => val
                        .checked_neg()
                        .ok_or_else(|| EvalError::Overflow(format!("-{}", val))),
                }
            }
            ASTNode::Num(val) => Ok(*val),
            ASTNode::Var(name) => self
                .variables
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
            ASTNode::Assign { var, expr } => {
                let val = self.interpret(expr)?;
                self.variables.insert(var.clone(), val);
                Ok(val)
            }
            ASTNode::Compound { children } => {
                let mut result = 0;
                for child in children {
                    result = self.interpret(child)?;
                }
                Ok(result)
            }
            ASTNode::NoOp => Ok(0),
        }
    }

    pub fn get_variables(&self) -> &HashMap<String, i64> {
        &self.variables
    }

    pub fn into_variables(self) -> HashMap<String, i64> {
        self.variables
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
