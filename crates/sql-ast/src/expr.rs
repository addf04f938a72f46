//! Defines the AST for SQL expressions.

use crate::{
    common::{DataType, Ident, Literal},
    oracle::OracleExpr,
    query::{Query, WindowSpec},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A literal value, such as a string, number, boolean, or NULL.
    Literal(Literal),

    /// `*` or `t.*`
    AllColumns { qualifier: Option<String> },

    /// A binary operation, e.g., `column = 'value'` or `a + b`.
    Binary(Box<BinaryOp>),

    Unary {
        op: UnaryOperator,
        expr: Box<Expr>,
    },

    /// A function call, e.g., `COUNT(*)` or `MAX(price)`.
    Function(FunctionCall),

    /// A parenthesized list literal, e.g. `(1, 2, 3)`.
    List(Vec<Expr>),

    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    IsNull {
        expr: Box<Expr>,
        negated: bool,
    },

    Case(Box<CaseExpr>),

    Exists(Box<Query>),

    /// A scalar subquery.
    Subquery(Box<Query>),

    /// A bind variable already present in the source text (`?`, `$1`, `:name`).
    Placeholder(String),

    /// `expr::type`
    TypeCast {
        expr: Box<Expr>,
        data_type: DataType,
    },

    /// Geometric and network literals such as `point '(1,2)'` or `inet '10.0.0.1'`.
    Geometric {
        kind: GeometricKind,
        value: Box<Expr>,
    },

    /// `INTERVAL '1 day'`
    Interval(Box<Expr>),

    /// `EXTRACT (field FROM source)`
    Extract {
        field: DateTimeField,
        source: Box<Expr>,
    },

    /// `B'0101'`, raw bits without quotes.
    BitString(String),

    /// Nodes produced by the Oracle grammar.
    Oracle(OracleExpr),
}

impl Expr {
    pub fn is_binary(&self) -> bool {
        matches!(self, Expr::Binary(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Pattern matching
    Like,
    NotLike,
    ILike,

    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    /// `||`
    Concat,

    // Logical
    And,
    Or,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Or => 1,
            BinaryOperator::And => 2,
            BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::Lt
            | BinaryOperator::LtEq
            | BinaryOperator::Gt
            | BinaryOperator::GtEq
            | BinaryOperator::Like
            | BinaryOperator::NotLike
            | BinaryOperator::ILike => 3,
            BinaryOperator::Concat => 4,
            BinaryOperator::Plus | BinaryOperator::Minus => 5,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 6,
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Minus,
    Plus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub distinct: bool,
    pub wildcard: bool, // represents the '*' in 'COUNT(*)'
    pub over: Option<WindowSpec>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
            distinct: false,
            wildcard: false,
            over: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExpr {
    pub operand: Option<Expr>,
    pub branches: Vec<WhenBranch>,
    pub else_result: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenBranch {
    pub condition: Expr,
    pub result: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometricKind {
    Box,
    Point,
    MacAddr,
    Inet,
    Cidr,
    Polygon,
    Circle,
    LineSegment,
}

/// Fields accepted by `EXTRACT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateTimeField {
    Century,
    Day,
    Decade,
    Dow,
    Doy,
    Epoch,
    Hour,
    IsoDow,
    IsoYear,
    Microseconds,
    Millennium,
    Milliseconds,
    Minute,
    Month,
    Quarter,
    Second,
    Timezone,
    TimezoneHour,
    TimezoneMinute,
    Week,
    Year,
}

impl DateTimeField {
    pub fn as_str(self) -> &'static str {
        match self {
            DateTimeField::Century => "CENTURY",
            DateTimeField::Day => "DAY",
            DateTimeField::Decade => "DECADE",
            DateTimeField::Dow => "DOW",
            DateTimeField::Doy => "DOY",
            DateTimeField::Epoch => "EPOCH",
            DateTimeField::Hour => "HOUR",
            DateTimeField::IsoDow => "ISODOW",
            DateTimeField::IsoYear => "ISOYEAR",
            DateTimeField::Microseconds => "MICROSECONDS",
            DateTimeField::Millennium => "MILLENNIUM",
            DateTimeField::Milliseconds => "MILLISECONDS",
            DateTimeField::Minute => "MINUTE",
            DateTimeField::Month => "MONTH",
            DateTimeField::Quarter => "QUARTER",
            DateTimeField::Second => "SECOND",
            DateTimeField::Timezone => "TIMEZONE",
            DateTimeField::TimezoneHour => "TIMEZONE_HOUR",
            DateTimeField::TimezoneMinute => "TIMEZONE_MINUTE",
            DateTimeField::Week => "WEEK",
            DateTimeField::Year => "YEAR",
        }
    }
}
