use crate::{
    error::{RenderError, RenderResult},
    generic::render_table_ref,
    renderer::Renderer,
};
use sql_ast::{
    NodeKind,
    query::{
        FetchClause, FetchOption, ForClause, Limit, LockStrength, SelectQuery, SetQuantifier,
        ValuesQuery, WindowClause,
    },
};

/// Renders a SELECT query, one clause per line.
pub(super) fn render_select(select: &SelectQuery, r: &mut Renderer) -> RenderResult {
    // 1. SELECT [ALL | DISTINCT [ON (...)]] list
    r.keyword("SELECT ");
    match select.quantifier {
        Some(SetQuantifier::All) => r.keyword("ALL "),
        Some(SetQuantifier::Distinct) => {
            r.keyword("DISTINCT ");
            if !select.distinct_on.is_empty() {
                r.keyword("ON (");
                r.render_list(&select.distinct_on, ", ")?;
                r.push_str(") ");
            }
        }
        None => {}
    }
    r.render_list(&select.projection, ", ")?;

    // 2. INTO [option] target
    if let Some(into) = &select.into {
        r.newline();
        r.keyword("INTO ");
        if let Some(option) = into.option {
            r.push_str(option.as_str());
            r.push(' ');
        }
        render_table_ref(&into.target, r);
    }

    // 3. FROM / WHERE
    if let Some(from) = &select.from {
        r.newline();
        r.keyword("FROM ");
        r.render(from)?;
    }
    if let Some(where_clause) = &select.where_clause {
        r.newline();
        r.keyword("WHERE ");
        r.indented(|r| r.render(where_clause))?;
    }

    // 4. Trailing clauses, each on its own line
    if let Some(group_by) = &select.group_by {
        r.newline();
        r.render(group_by)?;
    }
    if let Some(window) = &select.window {
        r.newline();
        r.render(window)?;
    }
    if let Some(order_by) = &select.order_by {
        r.newline();
        r.render(order_by)?;
    }
    if let Some(limit) = &select.limit {
        r.newline();
        r.render(limit)?;
    }
    if let Some(fetch) = &select.fetch {
        r.newline();
        r.render(fetch)?;
    }
    if let Some(for_clause) = &select.for_clause {
        r.newline();
        r.render(for_clause)?;
    }
    Ok(())
}

pub(super) fn render_values(values: &ValuesQuery, r: &mut Renderer) -> RenderResult {
    r.keyword("VALUES(");
    r.render_list(&values.values, ", ")?;
    r.push(')');
    Ok(())
}

pub(super) fn render_window(window: &WindowClause, r: &mut Renderer) -> RenderResult {
    if window.definitions.is_empty() {
        return Err(RenderError::malformed(NodeKind::Window, "no window definitions"));
    }

    r.keyword("WINDOW ");
    r.push_str(&window.name.to_string());
    r.keyword(" AS ");
    for (i, definition) in window.definitions.iter().enumerate() {
        if i > 0 {
            r.push_str(", ");
        }
        r.push('(');
        r.render(definition)?;
        r.push(')');
    }
    Ok(())
}

pub(super) fn render_fetch(fetch: &FetchClause, r: &mut Renderer) -> RenderResult {
    r.keyword(match fetch.option {
        FetchOption::First => "FETCH FIRST ",
        FetchOption::Next => "FETCH NEXT ",
    });
    r.render(&fetch.count)?;
    r.keyword(" ROWS ONLY");
    Ok(())
}

pub(super) fn render_for(for_clause: &ForClause, r: &mut Renderer) -> RenderResult {
    r.keyword(match for_clause.option {
        LockStrength::Update => "FOR UPDATE",
        LockStrength::Share => "FOR SHARE",
    });
    if !for_clause.of.is_empty() {
        r.keyword(" OF ");
        r.render_list(&for_clause.of, ", ")?;
    }
    if for_clause.no_wait {
        r.keyword(" NOWAIT");
    }
    Ok(())
}

pub(super) fn render_limit(limit: &Limit, r: &mut Renderer) -> RenderResult {
    r.keyword("LIMIT ");
    r.render(&limit.row_count)?;
    if let Some(offset) = &limit.offset {
        r.keyword(" OFFSET ");
        r.render(offset)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{error::RenderError, options::RenderOptions, renderer::Renderer};
    use sql_ast::{
        binary,
        common::{Ident, OrderDir},
        expr::{BinaryOperator, Expr},
        ident, item_as, lit,
        query::{
            FetchClause, FetchOption, ForClause, IntoClause, IntoOption, Limit, LockStrength,
            OrderBy, OrderByItem, Query, SelectQuery, SetQuantifier, ValuesQuery, WindowClause,
            WindowSpec,
        },
        table::TableSource,
        table_ref,
    };

    fn render(query: &SelectQuery, options: RenderOptions) -> String {
        let query = Query::from(query.clone());
        let mut r = Renderer::new(options);
        r.render(&query).unwrap();
        assert_eq!(r.indent_level(), 0);
        r.finish().0
    }

    #[test]
    fn test_render_simple_select() {
        let query = SelectQuery {
            projection: vec![ident!("id").into(), item_as!(ident!("name"), "n")],
            from: Some(TableSource::named("users")),
            where_clause: Some(binary(
                binary(ident!("id"), BinaryOperator::Gt, lit!(10)),
                BinaryOperator::And,
                binary(ident!("active"), BinaryOperator::Eq, lit!(true)),
            )),
            ..Default::default()
        };

        assert_eq!(
            render(&query, RenderOptions::default()),
            "SELECT id, name AS n\nFROM users\nWHERE id > 10\n\tAND active = TRUE"
        );
        assert_eq!(
            render(&query, RenderOptions::compact()),
            "SELECT id, name AS n FROM users WHERE id > 10 AND active = TRUE"
        );
    }

    #[test]
    fn test_render_select_all_clauses() {
        let query = SelectQuery {
            quantifier: Some(SetQuantifier::Distinct),
            distinct_on: vec![ident!("dept")],
            projection: vec![ident!("dept").into(), ident!("name").into()],
            into: Some(IntoClause {
                option: Some(IntoOption::Temp),
                target: table_ref!("snapshot"),
            }),
            from: Some(TableSource::named("staff")),
            window: Some(WindowClause {
                name: Ident::new("w"),
                definitions: vec![WindowSpec {
                    partition_by: vec![ident!("dept")],
                    ..Default::default()
                }],
            }),
            order_by: Some(OrderBy {
                items: vec![OrderByItem {
                    expr: ident!("dept"),
                    direction: Some(OrderDir::Asc),
                    nulls: None,
                }],
            }),
            limit: Some(Limit {
                row_count: lit!(10),
                offset: Some(lit!(20)),
            }),
            fetch: Some(FetchClause {
                option: FetchOption::Next,
                count: lit!(5),
            }),
            for_clause: Some(ForClause {
                option: LockStrength::Update,
                of: vec![ident!("staff")],
                no_wait: true,
            }),
            ..Default::default()
        };

        assert_eq!(
            render(&query, RenderOptions::lowercase()),
            "select distinct on (dept) dept, name\n\
             into TEMP snapshot\n\
             from staff\n\
             window w as (partition by dept)\n\
             order by dept asc\n\
             limit 10 offset 20\n\
             fetch next 5 rows only\n\
             for update of staff nowait"
        );
    }

    #[test]
    fn test_render_values_query() {
        let query = Query::Values(ValuesQuery {
            values: vec![lit!(1), lit!("a")],
        });
        let mut r = Renderer::default();
        r.render(&query).unwrap();
        assert_eq!(r.sql(), "VALUES(1, 'a')");
    }

    #[test]
    fn test_window_without_definitions_is_malformed() {
        let window = WindowClause {
            name: Ident::new("w"),
            definitions: vec![],
        };
        let mut r = Renderer::default();
        assert!(matches!(
            r.render(&window),
            Err(RenderError::MalformedNode { .. })
        ));
    }

    #[test]
    fn test_where_indent_restored_after_failure() {
        let query = SelectQuery {
            projection: vec![lit!(1).into()],
            where_clause: Some(Expr::Oracle(sql_ast::oracle::OracleExpr::Prior(Box::new(
                ident!("id"),
            )))),
            ..Default::default()
        };
        let query = Query::from(query);
        let mut r = Renderer::default();
        assert!(r.render(&query).is_err());
        assert_eq!(r.indent_level(), 0);
        assert_eq!(r.sql(), "SELECT 1\nWHERE ");
    }
}
