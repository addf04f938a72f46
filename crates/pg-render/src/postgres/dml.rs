use crate::{
    error::{RenderError, RenderResult},
    generic::render_table_ref,
    renderer::Renderer,
};
use sql_ast::{
    NodeKind,
    query::WithClause,
    statement::{Delete, Insert, InsertSource, Truncate, Update},
};

fn render_with(with: Option<&WithClause>, r: &mut Renderer) -> RenderResult {
    if let Some(with) = with {
        r.render(with)?;
        r.newline();
    }
    Ok(())
}

pub(super) fn render_delete(delete: &Delete, r: &mut Renderer) -> RenderResult {
    render_with(delete.with.as_ref(), r)?;

    r.keyword("DELETE FROM ");
    if delete.only {
        r.keyword("ONLY ");
    }
    render_table_ref(&delete.table, r);
    if let Some(alias) = &delete.alias {
        r.keyword(" AS ");
        r.push_str(alias);
    }

    if let Some(using) = &delete.using {
        r.newline();
        r.keyword("USING ");
        r.render(using)?;
    }
    if let Some(where_clause) = &delete.where_clause {
        r.newline();
        r.keyword("WHERE ");
        r.indented(|r| r.render(where_clause))?;
    }
    if delete.returning {
        r.newline();
        r.keyword("RETURNING *");
    }
    Ok(())
}

pub(super) fn render_insert(insert: &Insert, r: &mut Renderer) -> RenderResult {
    render_with(insert.with.as_ref(), r)?;

    // 1. INSERT INTO table (...)
    r.keyword("INSERT INTO ");
    render_table_ref(&insert.table, r);
    if !insert.columns.is_empty() {
        r.push_str(" (");
        r.push_str(&insert.columns.join(", "));
        r.push(')');
    }

    // 2. VALUES (...) or a query
    match &insert.source {
        InsertSource::Values(rows) => {
            if rows.is_empty() {
                return Err(RenderError::malformed(NodeKind::Insert, "VALUES without rows"));
            }
            r.newline();
            r.keyword("VALUES ");
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    r.push(',');
                    r.newline();
                }
                r.push('(');
                r.render_list(row, ", ")?;
                r.push(')');
            }
        }
        InsertSource::Query(query) => {
            r.newline();
            r.render(query.as_ref())?;
        }
    }

    // 3. RETURNING
    if !insert.returning.is_empty() {
        r.newline();
        r.keyword("RETURNING ");
        r.render_list(&insert.returning, ", ")?;
    }
    Ok(())
}

pub(super) fn render_update(update: &Update, r: &mut Renderer) -> RenderResult {
    if update.assignments.is_empty() {
        return Err(RenderError::malformed(NodeKind::Update, "no SET items"));
    }

    render_with(update.with.as_ref(), r)?;

    r.keyword("UPDATE ");
    if update.only {
        r.keyword("ONLY ");
    }
    r.render(&update.table)?;

    r.newline();
    r.keyword("SET ");
    r.render_list(&update.assignments, ", ")?;

    if let Some(from) = &update.from {
        r.newline();
        r.keyword("FROM ");
        r.render(from)?;
    }
    if let Some(where_clause) = &update.where_clause {
        r.newline();
        r.keyword("WHERE ");
        r.indented(|r| r.render(where_clause))?;
    }
    if !update.returning.is_empty() {
        r.newline();
        r.keyword("RETURNING ");
        r.render_list(&update.returning, ", ")?;
    }
    Ok(())
}

pub(super) fn render_truncate(truncate: &Truncate, r: &mut Renderer) -> RenderResult {
    if truncate.tables.is_empty() {
        return Err(RenderError::malformed(NodeKind::Truncate, "no tables"));
    }

    r.keyword("TRUNCATE TABLE ");
    if truncate.only {
        r.keyword("ONLY ");
    }
    for (i, table) in truncate.tables.iter().enumerate() {
        if i > 0 {
            r.push(',');
            r.newline();
        }
        render_table_ref(table, r);
    }

    match truncate.restart_identity {
        Some(true) => r.keyword(" RESTART IDENTITY"),
        Some(false) => r.keyword(" CONTINUE IDENTITY"),
        None => {}
    }
    match truncate.cascade {
        Some(true) => r.keyword(" CASCADE"),
        Some(false) => r.keyword(" RESTRICT"),
        None => {}
    }
    Ok(())
}
