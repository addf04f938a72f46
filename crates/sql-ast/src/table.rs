//! Defines the AST for table sources (the things that appear after FROM).

use crate::{
    common::TableRef, constraint::ColumnDef, expr::Expr, oracle::OracleTableReference,
    query::Query,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableSource {
    Named {
        table: TableRef,
        alias: Option<String>,
    },
    Join(Box<Join>),
    /// `(query) alias`
    Derived {
        query: Box<Query>,
        alias: Option<String>,
    },
    /// A set-returning function used as a relation.
    Function(FunctionTable),
    Oracle(Box<OracleTableReference>),
}

impl TableSource {
    pub fn named(name: impl Into<String>) -> Self {
        TableSource::Named {
            table: TableRef::new(name),
            alias: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub left: TableSource,
    pub kind: JoinKind,
    pub right: TableSource,
    pub constraint: Option<JoinConstraint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
    /// `a, b`
    Comma,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinConstraint {
    On(Expr),
    Using(Vec<String>),
}

/// `generate_series(1, 10) AS g(n integer)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionTable {
    pub expr: Expr,
    pub alias: Option<String>,
    pub parameters: Vec<ColumnDef>,
}
