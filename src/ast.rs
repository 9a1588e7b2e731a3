use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(UnaryOperator::Plus),
            "-" => Some(UnaryOperator::Minus),
            _ => None,
        }
    }
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperator::Plus),
            "-" => Some(BinaryOperator::Minus),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Syntax tree produced by the parser. A `Compound` never has an empty
/// `children` list; an empty block holds a single `NoOp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ASTNode {
    BinOp {
        left: Box<ASTNode>,
        op: BinaryOperator,
        right: Box<ASTNode>,
    },
    UnaryOp {
        op: UnaryOperator,
        expr: Box<ASTNode>,
    },
    Num(i64),
    Var(String),
    Assign {
        var: String,
        expr: Box<ASTNode>,
    },
    Compound {
        children: Vec<ASTNode>,
    },
    NoOp,
}

impl ASTNode {
    pub fn bin_op(left: ASTNode, op: BinaryOperator, right: ASTNode) -> Self {
        ASTNode::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn unary_op(op: UnaryOperator, expr: ASTNode) -> Self {
        ASTNode::UnaryOp {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn assign(var: impl Into<String>, expr: ASTNode) -> Self {
        ASTNode::Assign {
            var: var.into(),
            expr: Box::new(expr),
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        ASTNode::Var(name.into())
    }
}
