//! Defines the AST for queries and the clauses hanging off a SELECT.

use crate::{
    common::{Ident, NullsOrder, OrderDir, TableRef},
    expr::Expr,
    table::TableSource,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Query {
    Select(Box<SelectQuery>),
    SetOperation(Box<SetOperation>),
    /// `VALUES(a, b, c)` used where a query is expected.
    Values(ValuesQuery),
}

impl From<SelectQuery> for Query {
    fn from(select: SelectQuery) -> Self {
        Query::Select(Box::new(select))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectQuery {
    /// `ALL` or `DISTINCT`.
    pub quantifier: Option<SetQuantifier>,

    /// `DISTINCT ON (...)` expressions; only meaningful with `DISTINCT`.
    pub distinct_on: Vec<Expr>,

    /// The list of columns or expressions to be returned.
    /// e.g., `id`, `name`, `COUNT(*)`
    pub projection: Vec<SelectItem>,

    /// `INTO [TEMPORARY] new_table`
    pub into: Option<IntoClause>,

    /// e.g., `FROM users`
    pub from: Option<TableSource>,

    /// The WHERE clause condition.
    pub where_clause: Option<Expr>,

    pub group_by: Option<GroupBy>,

    pub window: Option<WindowClause>,

    pub order_by: Option<OrderBy>,

    pub limit: Option<Limit>,

    pub fetch: Option<FetchClause>,

    /// `FOR UPDATE` / `FOR SHARE` row locking.
    pub for_clause: Option<ForClause>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetQuantifier {
    All,
    Distinct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<String>,
}

impl From<Expr> for SelectItem {
    fn from(expr: Expr) -> Self {
        SelectItem { expr, alias: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntoClause {
    pub option: Option<IntoOption>,
    pub target: TableRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntoOption {
    Temporary,
    Temp,
    Unlogged,
}

impl IntoOption {
    pub fn as_str(self) -> &'static str {
        match self {
            IntoOption::Temporary => "TEMPORARY",
            IntoOption::Temp => "TEMP",
            IntoOption::Unlogged => "UNLOGGED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOperation {
    pub left: Query,
    pub op: SetOperator,
    pub right: Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    Except,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesQuery {
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithClause {
    pub recursive: bool,
    pub ctes: Vec<Cte>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cte {
    pub name: String,
    pub columns: Vec<String>,
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    pub items: Vec<Expr>,
    pub having: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub items: Vec<OrderByItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByItem {
    pub expr: Expr,
    pub direction: Option<OrderDir>,
    pub nulls: Option<NullsOrder>,
}

/// `WINDOW name AS (definition), ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowClause {
    pub name: Ident,
    pub definitions: Vec<WindowSpec>,
}

/// The body of an `OVER (...)` or a `WINDOW` definition.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Name of an existing window this one refines.
    pub base: Option<String>,
    pub partition_by: Vec<Expr>,
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub row_count: Expr,
    pub offset: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchClause {
    pub option: FetchOption,
    pub count: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchOption {
    First,
    Next,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForClause {
    pub option: LockStrength,
    pub of: Vec<Expr>,
    pub no_wait: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockStrength {
    Update,
    Share,
}
