//! Syntax tree for the SQL renderer: Postgres node kinds, the Oracle
//! kinds the renderer translates, and the `Node` view it dispatches on.

use crate::{
    common::Literal,
    expr::{BinaryOp, BinaryOperator, Expr},
};

pub mod common;
pub mod constraint;
pub mod expr;
pub mod macros;
pub mod node;
pub mod oracle;
pub mod query;
pub mod statement;
pub mod table;

pub use node::{Node, NodeKind, Origin};

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(common::Ident::new(name))
}

pub fn value(val: Literal) -> Expr {
    Expr::Literal(val)
}

pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::Binary(Box::new(BinaryOp { left, op, right }))
}
