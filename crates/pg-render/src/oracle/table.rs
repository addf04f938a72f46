use crate::{
    error::RenderResult,
    generic::{render_alias, render_table_ref},
    renderer::Renderer,
};
use sql_ast::oracle::{OracleTableReference, PartitionClause, PivotClause, SampleClause};

/// Writes the decorations in a fixed order: partition, hints, sample,
/// pivot, alias. `ONLY` only adds parentheses around the table and
/// partition.
pub(super) fn render_table_reference(
    reference: &OracleTableReference,
    r: &mut Renderer,
) -> RenderResult {
    if reference.only {
        r.keyword("ONLY (");
    }
    render_table_ref(&reference.table, r);
    if let Some(partition) = &reference.partition {
        r.push(' ');
        render_partition(partition, r);
    }
    if reference.only {
        r.push(')');
    }

    if !reference.hints.is_empty() {
        r.push_str(" /*+ ");
        r.push_str(&reference.hints.join(", "));
        r.push_str(" */");
    }

    if let Some(sample) = &reference.sample {
        r.push(' ');
        render_sample(sample, r)?;
    }

    if let Some(pivot) = &reference.pivot {
        r.newline();
        render_pivot(pivot, r)?;
    }

    render_alias(reference.alias.as_deref(), r);
    Ok(())
}

fn render_partition(partition: &PartitionClause, r: &mut Renderer) {
    r.keyword(if partition.subpartition {
        "SUBPARTITION ("
    } else {
        "PARTITION ("
    });
    r.push_str(&partition.name);
    r.push(')');
}

fn render_sample(sample: &SampleClause, r: &mut Renderer) -> RenderResult {
    r.keyword("SAMPLE ");
    if sample.block {
        r.keyword("BLOCK ");
    }
    r.push('(');
    r.render(&sample.percent)?;
    r.push(')');
    if let Some(seed) = &sample.seed {
        r.keyword(" SEED (");
        r.render(seed)?;
        r.push(')');
    }
    Ok(())
}

fn render_pivot(pivot: &PivotClause, r: &mut Renderer) -> RenderResult {
    r.keyword("PIVOT (");
    r.render_list(&pivot.aggregates, ", ")?;
    r.keyword(" FOR (");
    r.push_str(&pivot.for_columns.join(", "));
    r.keyword(") IN (");
    r.render_list(&pivot.in_values, ", ")?;
    r.push_str("))");
    Ok(())
}
