//! Renders `sql-ast` trees as Postgres SQL.
//!
//! Nodes from the Oracle grammar are translated to their closest Postgres
//! spelling where one exists. Every node goes through [`dispatch`], which
//! picks exactly one of three rule sets: Postgres dialect rules, Oracle
//! translation rules, or the generic fallback.

pub mod dispatch;
pub mod error;
pub mod options;
pub mod renderer;

mod generic;
mod oracle;
mod postgres;

pub use dispatch::{RuleSet, resolve};
pub use error::{RenderError, RenderResult};
pub use options::{KeywordCase, RenderOptions};
pub use renderer::{Render, Renderer};

use sql_ast::{Node, common::Literal};
use tracing::debug_span;

/// Renders one tree with a fresh renderer and returns the SQL text.
pub fn to_sql<'n>(node: impl Into<Node<'n>>, options: &RenderOptions) -> RenderResult<String> {
    to_sql_with_params(node, options).map(|(sql, _)| sql)
}

/// Like [`to_sql`], also returning the literals collected in parameterized
/// mode, in placeholder order.
pub fn to_sql_with_params<'n>(
    node: impl Into<Node<'n>>,
    options: &RenderOptions,
) -> RenderResult<(String, Vec<Literal>)> {
    let node = node.into();
    let _span = debug_span!("render", kind = %node.kind()).entered();

    let mut renderer = Renderer::new(options.clone());
    renderer.render(node)?;
    Ok(renderer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sql_ast::{
        ident, lit,
        query::{Query, SelectQuery},
        statement::{SelectStatement, Statement},
        table::TableSource,
    };

    #[test]
    fn test_to_sql_with_params() {
        let stmt = Statement::Select(SelectStatement::from(Query::from(SelectQuery {
            projection: vec![ident!("id").into()],
            from: Some(TableSource::named("users")),
            where_clause: Some(sql_ast::binary(
                ident!("name"),
                sql_ast::expr::BinaryOperator::Eq,
                lit!("Alice"),
            )),
            ..Default::default()
        })));

        let (sql, params) = to_sql_with_params(&stmt, &RenderOptions::parameterized()).unwrap();
        assert_eq!(sql, "SELECT id\nFROM users\nWHERE name = $1");
        assert_eq!(params, vec![Literal::String("Alice".to_string())]);

        assert_eq!(
            to_sql(&stmt, &RenderOptions::compact()).unwrap(),
            "SELECT id FROM users WHERE name = 'Alice'"
        );
    }

    #[test]
    fn test_render_trait_on_nodes() {
        let expr = lit!(5);
        let mut r = Renderer::default();
        expr.render(&mut r).unwrap();
        assert_eq!(r.sql(), "5");
    }
}
