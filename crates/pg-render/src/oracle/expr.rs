use crate::{
    error::{RenderError, RenderResult},
    renderer::Renderer,
};
use sql_ast::{
    Node, NodeKind,
    expr::Expr,
    oracle::{OracleExpr, OracleInterval},
};
use tracing::debug;

pub(super) fn render_oracle_expr(expr: &OracleExpr, r: &mut Renderer) -> RenderResult {
    match expr {
        // Postgres has a single spelling; the case option does not apply.
        OracleExpr::Sysdate => {
            r.push_str("CURRENT_TIMESTAMP");
            Ok(())
        }
        OracleExpr::Size { value, unit } => {
            r.render(value.as_ref())?;
            r.push(' ');
            r.push_str(unit.as_str());
            Ok(())
        }
        OracleExpr::Interval(interval) => render_interval(interval, r),
        OracleExpr::Datetime { expr, time_zone } => render_datetime(expr, time_zone, r),
        OracleExpr::BinaryFloat(value) => {
            if !value.is_finite() {
                return Err(RenderError::malformed(
                    NodeKind::OracleBinaryFloat,
                    "binary float must be finite",
                ));
            }
            r.push_str(ryu::Buffer::new().format_finite(*value));
            r.push('F');
            Ok(())
        }
        OracleExpr::BinaryDouble(value) => {
            if !value.is_finite() {
                return Err(RenderError::malformed(
                    NodeKind::OracleBinaryDouble,
                    "binary double must be finite",
                ));
            }
            r.push_str(ryu::Buffer::new().format_finite(*value));
            r.push('D');
            Ok(())
        }
        OracleExpr::Range { low, high } => {
            r.render(low.as_ref())?;
            r.push_str("..");
            r.render(high.as_ref())
        }
        OracleExpr::Prior(_) | OracleExpr::OuterJoin(_) => {
            let expr = Expr::Oracle(expr.clone());
            Err(RenderError::unsupported(Node::from(&expr).kind()))
        }
    }
}

/// `INTERVAL '3' DAY(2, 4) TO SECOND(6)`; a non-literal value is
/// parenthesized instead of introduced by the keyword.
fn render_interval(interval: &OracleInterval, r: &mut Renderer) -> RenderResult {
    if interval.value.is_literal() {
        r.keyword("INTERVAL ");
        r.render(&interval.value)?;
        r.push(' ');
    } else {
        r.push('(');
        r.render(&interval.value)?;
        r.push_str(") ");
    }

    r.push_str(interval.unit.as_str());

    if let Some(precision) = interval.precision {
        r.push('(');
        r.push_str(&precision.to_string());
        if let Some(fractional) = interval.fractional_seconds_precision {
            r.push_str(", ");
            r.push_str(&fractional.to_string());
        }
        r.push(')');
    }

    if let Some(to_unit) = interval.to_unit {
        r.keyword(" TO ");
        r.push_str(to_unit.as_str());
        if let Some(fractional) = interval.to_fractional_seconds_precision {
            r.push('(');
            r.push_str(&fractional.to_string());
            r.push(')');
        }
    }
    Ok(())
}

fn render_datetime(expr: &Expr, time_zone: &Expr, r: &mut Renderer) -> RenderResult {
    r.render(expr)?;

    if let Expr::Identifier(zone) = time_zone
        && zone.is("LOCAL")
    {
        debug!("rendering time zone LOCAL as AT LOCAL");
        r.keyword(" AT LOCAL");
        return Ok(());
    }

    r.keyword(" AT TIME ZONE ");
    r.render(time_zone)
}
