use crate::{error::RenderResult, renderer::Renderer};
use sql_ast::{
    common::{NullsOrder, OrderDir},
    query::{GroupBy, OrderBy, SelectItem, SetOperation, SetOperator, WindowSpec, WithClause},
    statement::SelectStatement,
};

pub(super) fn render_select_statement(stmt: &SelectStatement, r: &mut Renderer) -> RenderResult {
    if let Some(with) = &stmt.with {
        r.render(with)?;
        r.newline();
    }
    r.render(&stmt.query)
}

pub(super) fn render_set_operation(op: &SetOperation, r: &mut Renderer) -> RenderResult {
    r.render(&op.left)?;
    r.newline();
    r.keyword(match op.op {
        SetOperator::Union => "UNION",
        SetOperator::UnionAll => "UNION ALL",
        SetOperator::Intersect => "INTERSECT",
        SetOperator::Except => "EXCEPT",
    });
    r.newline();
    r.render(&op.right)
}

pub(super) fn render_select_item(item: &SelectItem, r: &mut Renderer) -> RenderResult {
    r.render(&item.expr)?;
    if let Some(alias) = &item.alias {
        r.keyword(" AS ");
        r.push_str(alias);
    }
    Ok(())
}

/// `WITH [RECURSIVE] name [(cols)] AS (query), ...` with each CTE body
/// indented one level.
pub(super) fn render_with(with: &WithClause, r: &mut Renderer) -> RenderResult {
    r.keyword("WITH ");
    if with.recursive {
        r.keyword("RECURSIVE ");
    }

    for (i, cte) in with.ctes.iter().enumerate() {
        if i > 0 {
            r.push(',');
            r.newline();
        }
        r.push_str(&cte.name);
        if !cte.columns.is_empty() {
            r.push_str(" (");
            r.push_str(&cte.columns.join(", "));
            r.push(')');
        }
        r.keyword(" AS (");
        r.indented(|r| {
            r.newline();
            r.render(&cte.query)
        })?;
        r.newline();
        r.push(')');
    }
    Ok(())
}

pub(super) fn render_group_by(group_by: &GroupBy, r: &mut Renderer) -> RenderResult {
    r.keyword("GROUP BY ");
    r.render_list(&group_by.items, ", ")?;
    if let Some(having) = &group_by.having {
        r.newline();
        r.keyword("HAVING ");
        r.render(having)?;
    }
    Ok(())
}

pub(super) fn render_order_by(order_by: &OrderBy, r: &mut Renderer) -> RenderResult {
    r.keyword("ORDER BY ");
    for (i, item) in order_by.items.iter().enumerate() {
        if i > 0 {
            r.push_str(", ");
        }
        r.render(&item.expr)?;
        match item.direction {
            Some(OrderDir::Asc) => r.keyword(" ASC"),
            Some(OrderDir::Desc) => r.keyword(" DESC"),
            None => {}
        }
        match item.nulls {
            Some(NullsOrder::First) => r.keyword(" NULLS FIRST"),
            Some(NullsOrder::Last) => r.keyword(" NULLS LAST"),
            None => {}
        }
    }
    Ok(())
}

/// The body of a window, without the surrounding parentheses.
pub(super) fn render_window_spec(spec: &WindowSpec, r: &mut Renderer) -> RenderResult {
    let mut first = true;
    let mut part = |r: &mut Renderer| {
        if !std::mem::take(&mut first) {
            r.push(' ');
        }
    };

    if let Some(base) = &spec.base {
        part(r);
        r.push_str(base);
    }
    if !spec.partition_by.is_empty() {
        part(r);
        r.keyword("PARTITION BY ");
        r.render_list(&spec.partition_by, ", ")?;
    }
    if let Some(order_by) = &spec.order_by {
        part(r);
        r.render(order_by)?;
    }
    Ok(())
}
