//! A borrowed, uniform view over every renderable node.
//!
//! `Node` is what the renderer dispatches on; `NodeKind` is its fieldless
//! discriminant, used to pick a rule set and to report errors.

use crate::{
    common::DataType,
    constraint::{ColumnDef, Constraint},
    expr::Expr,
    oracle::{OracleConstraint, OracleExpr},
    query::{
        FetchClause, ForClause, GroupBy, Limit, OrderBy, Query, SelectItem, WindowClause,
        WindowSpec, WithClause,
    },
    statement::{Assignment, Statement},
    table::TableSource,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Statement(&'a Statement),
    Query(&'a Query),
    Expr(&'a Expr),
    TableSource(&'a TableSource),
    Constraint(&'a Constraint),
    DataType(&'a DataType),
    ColumnDef(&'a ColumnDef),
    Assignment(&'a Assignment),
    SelectItem(&'a SelectItem),
    With(&'a WithClause),
    GroupBy(&'a GroupBy),
    OrderBy(&'a OrderBy),
    Window(&'a WindowClause),
    WindowSpec(&'a WindowSpec),
    Limit(&'a Limit),
    Fetch(&'a FetchClause),
    For(&'a ForClause),
}

/// Which grammar a node kind comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Origin {
    /// Shared by every dialect.
    Common,
    Postgres,
    Oracle,
}

/// Declares `NodeKind` and `NodeKind::ALL` from one list so a kind cannot
/// be left out of `ALL`.
macro_rules! node_kinds {
    ($($kind:ident,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum NodeKind {
            $($kind,)*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind,)*];
        }
    };
}

node_kinds! {
    // Statements
    SelectStatement,
    Insert,
    Update,
    Delete,
    Truncate,
    Set,
    Grant,
    CreateUser,
    Show,
    StartTransaction,
    CreateTable,

    // Queries
    SelectQuery,
    SetOperation,
    ValuesQuery,

    // Clauses
    With,
    GroupBy,
    OrderBy,
    Window,
    WindowSpec,
    Limit,
    Fetch,
    For,

    // Items
    SelectItem,
    Assignment,
    ColumnDef,
    DataType,

    // Expressions
    Identifier,
    Literal,
    AllColumns,
    Binary,
    Unary,
    Function,
    List,
    InList,
    Between,
    IsNull,
    Case,
    Exists,
    Subquery,
    Placeholder,
    TypeCast,
    Geometric,
    Interval,
    Extract,
    BitString,

    // Table sources
    NamedTable,
    Join,
    DerivedTable,
    FunctionTable,

    // Constraints
    Check,
    PrimaryKey,
    Unique,
    ForeignKey,

    // Oracle
    OracleSysdate,
    OracleSize,
    OracleInterval,
    OracleDatetime,
    OracleBinaryFloat,
    OracleBinaryDouble,
    OracleRange,
    OraclePrior,
    OracleOuterJoin,
    OracleTableReference,
    OracleCheck,
    OraclePrimaryKey,
    OracleForeignKey,
    OracleUnique,
}

impl NodeKind {
    pub fn origin(self) -> Origin {
        match self {
            NodeKind::Show
            | NodeKind::StartTransaction
            | NodeKind::ValuesQuery
            | NodeKind::Window
            | NodeKind::Fetch
            | NodeKind::For
            | NodeKind::TypeCast
            | NodeKind::Geometric
            | NodeKind::Interval
            | NodeKind::Extract
            | NodeKind::FunctionTable => Origin::Postgres,

            NodeKind::OracleSysdate
            | NodeKind::OracleSize
            | NodeKind::OracleInterval
            | NodeKind::OracleDatetime
            | NodeKind::OracleBinaryFloat
            | NodeKind::OracleBinaryDouble
            | NodeKind::OracleRange
            | NodeKind::OraclePrior
            | NodeKind::OracleOuterJoin
            | NodeKind::OracleTableReference
            | NodeKind::OracleCheck
            | NodeKind::OraclePrimaryKey
            | NodeKind::OracleForeignKey
            | NodeKind::OracleUnique => Origin::Oracle,

            NodeKind::SelectStatement
            | NodeKind::Insert
            | NodeKind::Update
            | NodeKind::Delete
            | NodeKind::Truncate
            | NodeKind::Set
            | NodeKind::Grant
            | NodeKind::CreateUser
            | NodeKind::CreateTable
            | NodeKind::SelectQuery
            | NodeKind::SetOperation
            | NodeKind::With
            | NodeKind::GroupBy
            | NodeKind::OrderBy
            | NodeKind::WindowSpec
            | NodeKind::Limit
            | NodeKind::SelectItem
            | NodeKind::Assignment
            | NodeKind::ColumnDef
            | NodeKind::DataType
            | NodeKind::Identifier
            | NodeKind::Literal
            | NodeKind::AllColumns
            | NodeKind::Binary
            | NodeKind::Unary
            | NodeKind::Function
            | NodeKind::List
            | NodeKind::InList
            | NodeKind::Between
            | NodeKind::IsNull
            | NodeKind::Case
            | NodeKind::Exists
            | NodeKind::Subquery
            | NodeKind::Placeholder
            | NodeKind::BitString
            | NodeKind::NamedTable
            | NodeKind::Join
            | NodeKind::DerivedTable
            | NodeKind::Check
            | NodeKind::PrimaryKey
            | NodeKind::Unique
            | NodeKind::ForeignKey => Origin::Common,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Node<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Statement(stmt) => match stmt {
                Statement::Select(_) => NodeKind::SelectStatement,
                Statement::Insert(_) => NodeKind::Insert,
                Statement::Update(_) => NodeKind::Update,
                Statement::Delete(_) => NodeKind::Delete,
                Statement::Truncate(_) => NodeKind::Truncate,
                Statement::Set(_) => NodeKind::Set,
                Statement::Grant(_) => NodeKind::Grant,
                Statement::CreateUser(_) => NodeKind::CreateUser,
                Statement::Show(_) => NodeKind::Show,
                Statement::StartTransaction => NodeKind::StartTransaction,
                Statement::CreateTable(_) => NodeKind::CreateTable,
            },
            Node::Query(query) => match query {
                Query::Select(_) => NodeKind::SelectQuery,
                Query::SetOperation(_) => NodeKind::SetOperation,
                Query::Values(_) => NodeKind::ValuesQuery,
            },
            Node::Expr(expr) => match expr {
                Expr::Identifier(_) => NodeKind::Identifier,
                Expr::Literal(_) => NodeKind::Literal,
                Expr::AllColumns { .. } => NodeKind::AllColumns,
                Expr::Binary(_) => NodeKind::Binary,
                Expr::Unary { .. } => NodeKind::Unary,
                Expr::Function(_) => NodeKind::Function,
                Expr::List(_) => NodeKind::List,
                Expr::InList { .. } => NodeKind::InList,
                Expr::Between { .. } => NodeKind::Between,
                Expr::IsNull { .. } => NodeKind::IsNull,
                Expr::Case(_) => NodeKind::Case,
                Expr::Exists(_) => NodeKind::Exists,
                Expr::Subquery(_) => NodeKind::Subquery,
                Expr::Placeholder(_) => NodeKind::Placeholder,
                Expr::TypeCast { .. } => NodeKind::TypeCast,
                Expr::Geometric { .. } => NodeKind::Geometric,
                Expr::Interval(_) => NodeKind::Interval,
                Expr::Extract { .. } => NodeKind::Extract,
                Expr::BitString(_) => NodeKind::BitString,
                Expr::Oracle(oracle) => match oracle {
                    OracleExpr::Sysdate => NodeKind::OracleSysdate,
                    OracleExpr::Size { .. } => NodeKind::OracleSize,
                    OracleExpr::Interval(_) => NodeKind::OracleInterval,
                    OracleExpr::Datetime { .. } => NodeKind::OracleDatetime,
                    OracleExpr::BinaryFloat(_) => NodeKind::OracleBinaryFloat,
                    OracleExpr::BinaryDouble(_) => NodeKind::OracleBinaryDouble,
                    OracleExpr::Range { .. } => NodeKind::OracleRange,
                    OracleExpr::Prior(_) => NodeKind::OraclePrior,
                    OracleExpr::OuterJoin(_) => NodeKind::OracleOuterJoin,
                },
            },
            Node::TableSource(source) => match source {
                TableSource::Named { .. } => NodeKind::NamedTable,
                TableSource::Join(_) => NodeKind::Join,
                TableSource::Derived { .. } => NodeKind::DerivedTable,
                TableSource::Function(_) => NodeKind::FunctionTable,
                TableSource::Oracle(_) => NodeKind::OracleTableReference,
            },
            Node::Constraint(constraint) => match constraint {
                Constraint::Check(_) => NodeKind::Check,
                Constraint::PrimaryKey(_) => NodeKind::PrimaryKey,
                Constraint::Unique(_) => NodeKind::Unique,
                Constraint::ForeignKey(_) => NodeKind::ForeignKey,
                Constraint::Oracle(oracle) => match oracle {
                    OracleConstraint::Check(_) => NodeKind::OracleCheck,
                    OracleConstraint::PrimaryKey(_) => NodeKind::OraclePrimaryKey,
                    OracleConstraint::ForeignKey(_) => NodeKind::OracleForeignKey,
                    OracleConstraint::Unique(_) => NodeKind::OracleUnique,
                },
            },
            Node::DataType(_) => NodeKind::DataType,
            Node::ColumnDef(_) => NodeKind::ColumnDef,
            Node::Assignment(_) => NodeKind::Assignment,
            Node::SelectItem(_) => NodeKind::SelectItem,
            Node::With(_) => NodeKind::With,
            Node::GroupBy(_) => NodeKind::GroupBy,
            Node::OrderBy(_) => NodeKind::OrderBy,
            Node::Window(_) => NodeKind::Window,
            Node::WindowSpec(_) => NodeKind::WindowSpec,
            Node::Limit(_) => NodeKind::Limit,
            Node::Fetch(_) => NodeKind::Fetch,
            Node::For(_) => NodeKind::For,
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(value: &'a $ty) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_from_node! {
    Statement => Statement,
    Query => Query,
    Expr => Expr,
    TableSource => TableSource,
    Constraint => Constraint,
    DataType => DataType,
    ColumnDef => ColumnDef,
    Assignment => Assignment,
    SelectItem => SelectItem,
    With => WithClause,
    GroupBy => GroupBy,
    OrderBy => OrderBy,
    Window => WindowClause,
    WindowSpec => WindowSpec,
    Limit => Limit,
    Fetch => FetchClause,
    For => ForClause,
}
