//! Defines the AST for top-level statements.

use crate::{
    common::TableRef,
    constraint::{ColumnDef, Constraint},
    expr::Expr,
    query::{Query, WithClause},
    table::TableSource,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(SelectStatement),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Truncate(Truncate),
    Set(SetStatement),
    Grant(Grant),
    CreateUser(CreateUser),
    Show(Show),
    StartTransaction,
    CreateTable(CreateTable),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub with: Option<WithClause>,
    pub query: Query,
}

impl From<Query> for SelectStatement {
    fn from(query: Query) -> Self {
        SelectStatement { with: None, query }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub with: Option<WithClause>,
    pub only: bool,
    pub table: TableRef,
    pub alias: Option<String>,
    pub using: Option<TableSource>,
    pub where_clause: Option<Expr>,
    /// `RETURNING *`; column lists are not kept.
    pub returning: bool,
}

/// Represents a complete INSERT statement.
///
/// Multi-row inserts keep one inner vector per row; a query source
/// replaces the VALUES list entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub with: Option<WithClause>,
    pub table: TableRef,
    pub columns: Vec<String>,
    pub source: InsertSource,
    pub returning: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertSource {
    Values(Vec<Vec<Expr>>),
    Query(Box<Query>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub with: Option<WithClause>,
    pub only: bool,
    pub table: TableSource,
    pub assignments: Vec<Assignment>,
    pub from: Option<TableSource>,
    pub where_clause: Option<Expr>,
    pub returning: Vec<Expr>,
}

/// `target = value` in UPDATE, `target TO value` in SET.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Truncate {
    pub only: bool,
    pub tables: Vec<TableRef>,
    /// `Some(true)` is RESTART IDENTITY, `Some(false)` is CONTINUE IDENTITY.
    pub restart_identity: Option<bool>,
    /// `Some(true)` is CASCADE, `Some(false)` is RESTRICT.
    pub cascade: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetStatement {
    pub option: Option<SetOption>,
    pub items: Vec<Assignment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOption {
    Session,
    Local,
}

impl SetOption {
    pub fn as_str(self) -> &'static str {
        match self {
            SetOption::Session => "SESSION",
            SetOption::Local => "LOCAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    /// Privilege names as identifiers, e.g. `SELECT`, `CONNECT`, `CREATE TABLE`.
    pub privileges: Vec<Expr>,
    pub on: Option<GrantObject>,
    pub to: Option<Expr>,
    pub with_grant_option: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantObject {
    pub object_type: Option<ObjectType>,
    pub name: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    Table,
    Sequence,
    Database,
    Schema,
    Function,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub user: Expr,
    pub password: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub name: TableRef,
    pub if_not_exists: bool,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<Constraint>,
}
