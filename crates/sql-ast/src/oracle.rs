//! Node kinds produced by the Oracle grammar.
//!
//! These never come out of the Postgres parser; the renderer either
//! translates them into a Postgres equivalent or rejects them.

use crate::{
    common::TableRef,
    constraint::{CheckConstraint, ForeignKeyConstraint, KeyConstraint},
    expr::Expr,
    query::SelectItem,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OracleExpr {
    /// `SYSDATE`
    Sysdate,

    /// A storage size such as `10 M`.
    Size { value: Box<Expr>, unit: SizeUnit },

    /// `INTERVAL '3' DAY(2) TO SECOND(4)`
    Interval(Box<OracleInterval>),

    /// `expr AT TIME ZONE tz` / `expr AT LOCAL`
    Datetime {
        expr: Box<Expr>,
        time_zone: Box<Expr>,
    },

    /// `1.5F`
    BinaryFloat(f32),

    /// `1.5D`
    BinaryDouble(f64),

    /// `low..high`
    Range { low: Box<Expr>, high: Box<Expr> },

    /// `PRIOR expr` from hierarchical queries.
    Prior(Box<Expr>),

    /// The `(+)` outer join marker.
    OuterJoin(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    K,
    M,
    G,
    T,
    P,
    E,
}

impl SizeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            SizeUnit::K => "K",
            SizeUnit::M => "M",
            SizeUnit::G => "G",
            SizeUnit::T => "T",
            SizeUnit::P => "P",
            SizeUnit::E => "E",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleInterval {
    pub value: Expr,
    pub unit: IntervalUnit,
    pub precision: Option<u32>,
    pub fractional_seconds_precision: Option<u32>,
    pub to_unit: Option<IntervalUnit>,
    pub to_fractional_seconds_precision: Option<u32>,
}

impl OracleInterval {
    pub fn new(value: Expr, unit: IntervalUnit) -> Self {
        Self {
            value,
            unit,
            precision: None,
            fractional_seconds_precision: None,
            to_unit: None,
            to_fractional_seconds_precision: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl IntervalUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            IntervalUnit::Year => "YEAR",
            IntervalUnit::Month => "MONTH",
            IntervalUnit::Day => "DAY",
            IntervalUnit::Hour => "HOUR",
            IntervalUnit::Minute => "MINUTE",
            IntervalUnit::Second => "SECOND",
        }
    }
}

/// A table reference carrying Oracle decorations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleTableReference {
    pub only: bool,
    pub table: TableRef,
    pub partition: Option<PartitionClause>,
    /// Optimizer hint bodies, without the `/*+ */` markers.
    pub hints: Vec<String>,
    pub sample: Option<SampleClause>,
    pub pivot: Option<PivotClause>,
    pub alias: Option<String>,
}

impl OracleTableReference {
    pub fn new(table: TableRef) -> Self {
        Self {
            only: false,
            table,
            partition: None,
            hints: Vec::new(),
            sample: None,
            pivot: None,
            alias: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionClause {
    pub subpartition: bool,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleClause {
    pub block: bool,
    pub percent: Expr,
    pub seed: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotClause {
    pub aggregates: Vec<SelectItem>,
    pub for_columns: Vec<String>,
    pub in_values: Vec<SelectItem>,
}

/// Constraint kinds that are spelled identically in both grammars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OracleConstraint {
    Check(CheckConstraint),
    PrimaryKey(KeyConstraint),
    ForeignKey(ForeignKeyConstraint),
    Unique(KeyConstraint),
}
