//! Dialect-independent rules.
//!
//! The Postgres rule set claims the kinds whose text differs from the
//! standard form; everything else of common origin ends up here.

mod ddl;
mod expr;
mod query;
mod table;

pub(crate) use ddl::{render_check, render_foreign_key, render_grant, render_key};
pub(crate) use table::{render_alias, render_table_ref};

use crate::{
    error::{RenderError, RenderResult},
    renderer::Renderer,
};
use sql_ast::{
    Node, NodeKind,
    constraint::Constraint,
    query::Query,
    statement::Statement,
};

pub(crate) fn handles(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::SelectStatement
            | NodeKind::Grant
            | NodeKind::CreateTable
            | NodeKind::SetOperation
            | NodeKind::With
            | NodeKind::GroupBy
            | NodeKind::OrderBy
            | NodeKind::WindowSpec
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
            | NodeKind::NamedTable
            | NodeKind::Join
            | NodeKind::DerivedTable
            | NodeKind::Check
            | NodeKind::PrimaryKey
            | NodeKind::Unique
            | NodeKind::ForeignKey
    )
}

pub(crate) fn render(node: Node<'_>, r: &mut Renderer) -> RenderResult {
    match node {
        Node::Statement(Statement::Select(select)) => query::render_select_statement(select, r),
        Node::Statement(Statement::Grant(grant)) => ddl::render_grant(grant, r),
        Node::Statement(Statement::CreateTable(create)) => ddl::render_create_table(create, r),
        Node::Query(Query::SetOperation(op)) => query::render_set_operation(op, r),
        Node::Expr(e) => expr::render_expr(e, r),
        Node::TableSource(source) => table::render_table_source(source, r),
        Node::Constraint(Constraint::Check(check)) => ddl::render_check(check, r),
        Node::Constraint(Constraint::PrimaryKey(key)) => ddl::render_key("PRIMARY KEY", key, r),
        Node::Constraint(Constraint::Unique(key)) => ddl::render_key("UNIQUE", key, r),
        Node::Constraint(Constraint::ForeignKey(fk)) => ddl::render_foreign_key(fk, r),
        Node::DataType(data_type) => ddl::render_data_type(data_type, r),
        Node::ColumnDef(column) => ddl::render_column_def(column, r),
        Node::Assignment(assignment) => ddl::render_assignment(assignment, r),
        Node::SelectItem(item) => query::render_select_item(item, r),
        Node::With(with) => query::render_with(with, r),
        Node::GroupBy(group_by) => query::render_group_by(group_by, r),
        Node::OrderBy(order_by) => query::render_order_by(order_by, r),
        Node::WindowSpec(spec) => query::render_window_spec(spec, r),
        other => Err(RenderError::unsupported(other.kind())),
    }
}
