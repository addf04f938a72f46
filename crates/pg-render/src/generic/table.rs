use crate::{
    error::{RenderError, RenderResult},
    renderer::Renderer,
};
use sql_ast::{
    Node,
    common::TableRef,
    table::{Join, JoinConstraint, JoinKind, TableSource},
};

pub(crate) fn render_table_ref(table: &TableRef, r: &mut Renderer) {
    if let Some(schema) = &table.schema {
        r.push_str(schema);
        r.push('.');
    }
    r.push_str(&table.name);
}

/// Table aliases are written without `AS`.
pub(crate) fn render_alias(alias: Option<&str>, r: &mut Renderer) {
    if let Some(alias) = alias {
        r.push(' ');
        r.push_str(alias);
    }
}

pub(super) fn render_table_source(source: &TableSource, r: &mut Renderer) -> RenderResult {
    match source {
        TableSource::Named { table, alias } => {
            render_table_ref(table, r);
            render_alias(alias.as_deref(), r);
            Ok(())
        }
        TableSource::Join(join) => render_join(join, r),
        TableSource::Derived { query, alias } => {
            r.push('(');
            r.render(query.as_ref())?;
            r.push(')');
            render_alias(alias.as_deref(), r);
            Ok(())
        }
        other => Err(RenderError::unsupported(Node::from(other).kind())),
    }
}

fn render_join(join: &Join, r: &mut Renderer) -> RenderResult {
    r.render(&join.left)?;

    if join.kind == JoinKind::Comma {
        r.push_str(", ");
    } else {
        r.newline();
        r.keyword(match join.kind {
            JoinKind::Inner => "JOIN ",
            JoinKind::Left => "LEFT JOIN ",
            JoinKind::Right => "RIGHT JOIN ",
            JoinKind::Full => "FULL JOIN ",
            JoinKind::Cross | JoinKind::Comma => "CROSS JOIN ",
        });
    }
    r.render(&join.right)?;

    match &join.constraint {
        Some(JoinConstraint::On(condition)) => {
            r.keyword(" ON ");
            r.render(condition)
        }
        Some(JoinConstraint::Using(columns)) => {
            r.keyword(" USING (");
            r.push_str(&columns.join(", "));
            r.push(')');
            Ok(())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::renderer::Renderer;
    use sql_ast::{
        binary,
        expr::BinaryOperator,
        ident,
        table::{Join, JoinConstraint, JoinKind, TableSource},
        table_ref,
    };

    #[test]
    fn test_render_join_chain() {
        let source = TableSource::Join(Box::new(Join {
            left: TableSource::Join(Box::new(Join {
                left: TableSource::Named {
                    table: table_ref!("public", "users"),
                    alias: Some("u".to_string()),
                },
                kind: JoinKind::Comma,
                right: TableSource::named("roles"),
                constraint: None,
            })),
            kind: JoinKind::Left,
            right: TableSource::Named {
                table: table_ref!("orders"),
                alias: Some("o".to_string()),
            },
            constraint: Some(JoinConstraint::On(binary(
                ident!("o", "user_id"),
                BinaryOperator::Eq,
                ident!("u", "id"),
            ))),
        }));

        let mut r = Renderer::default();
        r.render(&source).unwrap();
        assert_eq!(
            r.sql(),
            "public.users u, roles\nLEFT JOIN orders o ON o.user_id = u.id"
        );
    }

    #[test]
    fn test_render_join_using() {
        let source = TableSource::Join(Box::new(Join {
            left: TableSource::named("a"),
            kind: JoinKind::Inner,
            right: TableSource::named("b"),
            constraint: Some(JoinConstraint::Using(vec!["id".to_string()])),
        }));
        let mut r = Renderer::default();
        r.render(&source).unwrap();
        assert_eq!(r.sql(), "a\nJOIN b USING (id)");
    }
}
