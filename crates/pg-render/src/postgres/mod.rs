//! Postgres dialect rules: the kinds whose Postgres spelling differs from
//! the generic form, plus the Postgres-only kinds.

mod acl;
mod dml;
mod expr;
mod select;
mod session;

use crate::{
    error::{RenderError, RenderResult},
    renderer::Renderer,
};
use sql_ast::{Node, NodeKind, expr::Expr, query::Query, statement::Statement, table::TableSource};

pub(crate) fn handles(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::SelectQuery
            | NodeKind::Delete
            | NodeKind::Insert
            | NodeKind::Update
            | NodeKind::Truncate
            | NodeKind::Set
            | NodeKind::Grant
            | NodeKind::CreateUser
            | NodeKind::Show
            | NodeKind::StartTransaction
            | NodeKind::Window
            | NodeKind::Fetch
            | NodeKind::For
            | NodeKind::Limit
            | NodeKind::TypeCast
            | NodeKind::Geometric
            | NodeKind::Interval
            | NodeKind::Extract
            | NodeKind::ValuesQuery
            | NodeKind::BitString
            | NodeKind::FunctionTable
    )
}

pub(crate) fn render(node: Node<'_>, r: &mut Renderer) -> RenderResult {
    match node {
        Node::Statement(stmt) => match stmt {
            Statement::Delete(delete) => dml::render_delete(delete, r),
            Statement::Insert(insert) => dml::render_insert(insert, r),
            Statement::Update(update) => dml::render_update(update, r),
            Statement::Truncate(truncate) => dml::render_truncate(truncate, r),
            Statement::Set(set) => session::render_set(set, r),
            Statement::Show(show) => session::render_show(show, r),
            Statement::StartTransaction => {
                r.keyword("START TRANSACTION");
                Ok(())
            }
            Statement::Grant(grant) => acl::render_grant(grant, r),
            Statement::CreateUser(create) => acl::render_create_user(create, r),
            other => Err(RenderError::unsupported(Node::from(other).kind())),
        },
        Node::Query(Query::Select(select)) => select::render_select(select, r),
        Node::Query(Query::Values(values)) => select::render_values(values, r),
        Node::Window(window) => select::render_window(window, r),
        Node::Fetch(fetch) => select::render_fetch(fetch, r),
        Node::For(for_clause) => select::render_for(for_clause, r),
        Node::Limit(limit) => select::render_limit(limit, r),
        Node::Expr(Expr::TypeCast {
            expr: inner,
            data_type,
        }) => expr::render_type_cast(inner, data_type, r),
        Node::Expr(Expr::Geometric { kind, value }) => expr::render_geometric(*kind, value, r),
        Node::Expr(Expr::Interval(value)) => {
            r.keyword("INTERVAL ");
            r.render(value.as_ref())
        }
        Node::Expr(Expr::Extract { field, source }) => expr::render_extract(*field, source, r),
        Node::Expr(Expr::BitString(bits)) => {
            r.keyword("B'");
            r.push_str(bits);
            r.push('\'');
            Ok(())
        }
        Node::TableSource(TableSource::Function(table)) => expr::render_function_table(table, r),
        other => Err(RenderError::unsupported(other.kind())),
    }
}
