//! Translation rules for nodes produced by the Oracle grammar.
//!
//! Each rule writes the closest Postgres spelling. Kinds with no Postgres
//! equivalent (`PRIOR`, the `(+)` marker) are left out of `handles`, so
//! dispatch rejects them.

mod expr;
mod table;

use crate::{
    error::{RenderError, RenderResult},
    generic,
    renderer::Renderer,
};
use sql_ast::{
    Node, NodeKind,
    constraint::Constraint,
    expr::Expr,
    oracle::OracleConstraint,
    table::TableSource,
};

pub(crate) fn handles(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::OracleSysdate
            | NodeKind::OracleSize
            | NodeKind::OracleInterval
            | NodeKind::OracleDatetime
            | NodeKind::OracleBinaryFloat
            | NodeKind::OracleBinaryDouble
            | NodeKind::OracleRange
            | NodeKind::OracleTableReference
            | NodeKind::OracleCheck
            | NodeKind::OraclePrimaryKey
            | NodeKind::OracleForeignKey
            | NodeKind::OracleUnique
    )
}

pub(crate) fn render(node: Node<'_>, r: &mut Renderer) -> RenderResult {
    match node {
        Node::Expr(Expr::Oracle(oracle)) => expr::render_oracle_expr(oracle, r),
        Node::TableSource(TableSource::Oracle(reference)) => {
            table::render_table_reference(reference, r)
        }
        // Spelled the same in both grammars.
        Node::Constraint(Constraint::Oracle(constraint)) => match constraint {
            OracleConstraint::Check(check) => generic::render_check(check, r),
            OracleConstraint::PrimaryKey(key) => generic::render_key("PRIMARY KEY", key, r),
            OracleConstraint::ForeignKey(fk) => generic::render_foreign_key(fk, r),
            OracleConstraint::Unique(key) => generic::render_key("UNIQUE", key, r),
        },
        other => Err(RenderError::unsupported(other.kind())),
    }
}

