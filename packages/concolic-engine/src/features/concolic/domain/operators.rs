//! Operator Tokens
//!
//! Closed sets of the operators the engine models, parsed from source tokens.

use std::fmt;
use std::str::FromStr;

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `==`
    Eq,
    /// `===`
    StrictEq,
    /// `!=`
    Ne,
    /// `!==`
    StrictNe,
    And,
    Or,
    Lt,
    Le,
    Gt,
    Ge,
    /// Numeric addition, string concatenation
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::StrictEq => "===",
            Self::Ne => "!=",
            Self::StrictNe => "!==",
            Self::And => "&&",
            Self::Or => "||",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

/// Token with no modeled semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for BinaryOp {
    type Err = UnknownOperator;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(match token {
            "==" => Self::Eq,
            "===" => Self::StrictEq,
            "!=" => Self::Ne,
            "!==" => Self::StrictNe,
            "&&" => Self::And,
            "||" => Self::Or,
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            other => return Err(UnknownOperator(other.to_string())),
        })
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!`
    Not,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `typeof`, never modeled
    TypeOf,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::TypeOf => "typeof",
        }
    }
}

impl FromStr for UnaryOp {
    type Err = UnknownOperator;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(match token {
            "!" => Self::Not,
            "+" => Self::Plus,
            "-" => Self::Minus,
            "typeof" => Self::TypeOf,
            other => return Err(UnknownOperator(other.to_string())),
        })
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
