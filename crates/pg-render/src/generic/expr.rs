use crate::{
    error::{RenderError, RenderResult},
    renderer::Renderer,
};
use sql_ast::{
    Node,
    common::{Ident, Literal},
    expr::{BinaryOp, BinaryOperator, CaseExpr, Expr, FunctionCall, UnaryOperator},
};

pub(super) fn render_expr(expr: &Expr, r: &mut Renderer) -> RenderResult {
    match expr {
        Expr::Identifier(ident) => {
            render_ident(ident, r);
            Ok(())
        }
        Expr::Literal(lit) => {
            render_literal(lit, r);
            Ok(())
        }
        Expr::AllColumns { qualifier } => {
            if let Some(qualifier) = qualifier {
                r.push_str(qualifier);
                r.push('.');
            }
            r.push('*');
            Ok(())
        }
        Expr::Binary(op) => render_binary(op, r),
        Expr::Unary { op, expr } => render_unary(*op, expr, r),
        Expr::Function(func) => render_function(func, r),
        Expr::List(items) => {
            r.push('(');
            r.render_list(items, ", ")?;
            r.push(')');
            Ok(())
        }
        Expr::InList {
            expr,
            list,
            negated,
        } => {
            r.render(expr.as_ref())?;
            r.keyword(if *negated { " NOT IN (" } else { " IN (" });
            r.render_list(list, ", ")?;
            r.push(')');
            Ok(())
        }
        Expr::Between {
            expr,
            negated,
            low,
            high,
        } => {
            r.render(expr.as_ref())?;
            r.keyword(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
            r.render(low.as_ref())?;
            r.keyword(" AND ");
            r.render(high.as_ref())
        }
        Expr::IsNull { expr, negated } => {
            r.render(expr.as_ref())?;
            r.keyword(if *negated { " IS NOT NULL" } else { " IS NULL" });
            Ok(())
        }
        Expr::Case(case) => render_case(case, r),
        Expr::Exists(query) => {
            r.keyword("EXISTS (");
            r.render(query.as_ref())?;
            r.push(')');
            Ok(())
        }
        Expr::Subquery(query) => {
            r.push('(');
            r.render(query.as_ref())?;
            r.push(')');
            Ok(())
        }
        Expr::Placeholder(text) => {
            r.push_str(text);
            Ok(())
        }
        other => Err(RenderError::unsupported(Node::from(other).kind())),
    }
}

fn render_ident(ident: &Ident, r: &mut Renderer) {
    if let Some(qualifier) = &ident.qualifier {
        r.push_str(qualifier);
        r.push('.');
    }
    r.push_str(&ident.name);
}

/// NULL is always written inline; other literals become placeholders in
/// parameterized mode. Floats keep their decimal point or exponent so they
/// never read back as integers.
fn render_literal(lit: &Literal, r: &mut Renderer) {
    match lit {
        Literal::Null => r.keyword("NULL"),
        _ if r.options().parameterized => r.add_param(lit.clone()),
        Literal::Boolean(true) => r.keyword("TRUE"),
        Literal::Boolean(false) => r.keyword("FALSE"),
        Literal::Integer(i) => r.push_str(&i.to_string()),
        Literal::Float(f) if f.is_finite() => r.push_str(ryu::Buffer::new().format_finite(*f)),
        Literal::Float(f) => {
            let text = if f.is_nan() {
                "NaN"
            } else if f.is_sign_negative() {
                "-Infinity"
            } else {
                "Infinity"
            };
            r.push('\'');
            r.push_str(text);
            r.push_str("'::float8");
        }
        Literal::String(s) => {
            r.push('\'');
            r.push_str(&s.replace('\'', "''"));
            r.push('\'');
        }
    }
}

fn render_binary(op: &BinaryOp, r: &mut Renderer) -> RenderResult {
    render_operand(&op.left, op.op, false, r)?;

    // AND/OR chains break before the operator.
    if op.op.is_logical() {
        r.newline();
    } else {
        r.push(' ');
    }
    render_operator(op.op, r);
    r.push(' ');

    render_operand(&op.right, op.op, true, r)
}

/// Parenthesizes a child operation that binds looser than its parent, or
/// equally loosely on the right of a non-associative operator.
fn render_operand(
    expr: &Expr,
    parent: BinaryOperator,
    right: bool,
    r: &mut Renderer,
) -> RenderResult {
    let wrap = match expr {
        Expr::Binary(child) => {
            let (child_prec, parent_prec) = (child.op.precedence(), parent.precedence());
            child_prec < parent_prec || (right && child_prec == parent_prec && !parent.is_logical())
        }
        _ => false,
    };

    if wrap {
        r.push('(');
        r.render(expr)?;
        r.push(')');
        Ok(())
    } else {
        r.render(expr)
    }
}

fn render_operator(op: BinaryOperator, r: &mut Renderer) {
    match op {
        BinaryOperator::Eq => r.push('='),
        BinaryOperator::NotEq => r.push_str("<>"),
        BinaryOperator::Lt => r.push('<'),
        BinaryOperator::LtEq => r.push_str("<="),
        BinaryOperator::Gt => r.push('>'),
        BinaryOperator::GtEq => r.push_str(">="),
        BinaryOperator::Like => r.keyword("LIKE"),
        BinaryOperator::NotLike => r.keyword("NOT LIKE"),
        BinaryOperator::ILike => r.keyword("ILIKE"),
        BinaryOperator::Plus => r.push('+'),
        BinaryOperator::Minus => r.push('-'),
        BinaryOperator::Multiply => r.push('*'),
        BinaryOperator::Divide => r.push('/'),
        BinaryOperator::Modulo => r.push('%'),
        BinaryOperator::Concat => r.push_str("||"),
        BinaryOperator::And => r.keyword("AND"),
        BinaryOperator::Or => r.keyword("OR"),
    }
}

fn render_unary(op: UnaryOperator, expr: &Expr, r: &mut Renderer) -> RenderResult {
    match op {
        UnaryOperator::Not => r.keyword("NOT "),
        UnaryOperator::Minus => r.push('-'),
        UnaryOperator::Plus => r.push('+'),
    }

    // `--` would start a line comment.
    let signed = !matches!(op, UnaryOperator::Not) && starts_with_sign(expr, r);
    if expr.is_binary() || signed {
        r.push('(');
        r.render(expr)?;
        r.push(')');
        Ok(())
    } else {
        r.render(expr)
    }
}

fn starts_with_sign(expr: &Expr, r: &Renderer) -> bool {
    match expr {
        Expr::Unary {
            op: UnaryOperator::Minus | UnaryOperator::Plus,
            ..
        } => true,
        Expr::Literal(_) if r.options().parameterized => false,
        Expr::Literal(Literal::Integer(i)) => *i < 0,
        Expr::Literal(Literal::Float(f)) => f.is_sign_negative(),
        _ => false,
    }
}

fn render_function(func: &FunctionCall, r: &mut Renderer) -> RenderResult {
    r.push_str(&func.name);
    r.push('(');
    if func.distinct {
        r.keyword("DISTINCT ");
    }
    if func.wildcard {
        r.push('*');
    } else {
        r.render_list(&func.args, ", ")?;
    }
    r.push(')');

    if let Some(over) = &func.over {
        r.keyword(" OVER (");
        r.render(over)?;
        r.push(')');
    }
    Ok(())
}

fn render_case(case: &CaseExpr, r: &mut Renderer) -> RenderResult {
    r.keyword("CASE");
    if let Some(operand) = &case.operand {
        r.push(' ');
        r.render(operand)?;
    }
    for branch in &case.branches {
        r.keyword(" WHEN ");
        r.render(&branch.condition)?;
        r.keyword(" THEN ");
        r.render(&branch.result)?;
    }
    if let Some(else_result) = &case.else_result {
        r.keyword(" ELSE ");
        r.render(else_result)?;
    }
    r.keyword(" END");
    Ok(())
}
