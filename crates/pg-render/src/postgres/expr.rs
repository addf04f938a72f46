use crate::{error::RenderResult, renderer::Renderer};
use sql_ast::{
    common::DataType,
    expr::{DateTimeField, Expr, GeometricKind},
    table::FunctionTable,
};

/// `expr::type`. Only a binary operand needs parentheses to survive the
/// tighter-binding cast operator.
pub(super) fn render_type_cast(expr: &Expr, data_type: &DataType, r: &mut Renderer) -> RenderResult {
    if expr.is_binary() {
        r.push('(');
        r.render(expr)?;
        r.push(')');
    } else {
        r.render(expr)?;
    }
    r.push_str("::");
    r.render(data_type)
}

pub(super) fn render_geometric(kind: GeometricKind, value: &Expr, r: &mut Renderer) -> RenderResult {
    match kind {
        GeometricKind::Box => r.keyword("BOX "),
        GeometricKind::Point => r.keyword("POINT "),
        // Postgres spells these type names in lower case only.
        GeometricKind::MacAddr => r.push_str("macaddr "),
        GeometricKind::Inet => r.push_str("inet "),
        GeometricKind::Cidr => r.push_str("cidr "),
        GeometricKind::Polygon => r.push_str("polygon "),
        GeometricKind::Circle => r.push_str("circle "),
        GeometricKind::LineSegment => r.push_str("lseg "),
    }
    r.render(value)
}

pub(super) fn render_extract(field: DateTimeField, source: &Expr, r: &mut Renderer) -> RenderResult {
    r.keyword("EXTRACT (");
    r.push_str(field.as_str());
    r.keyword(" FROM ");
    r.render(source)?;
    r.push(')');
    Ok(())
}

pub(super) fn render_function_table(table: &FunctionTable, r: &mut Renderer) -> RenderResult {
    r.render(&table.expr)?;
    if let Some(alias) = &table.alias {
        r.keyword(" AS ");
        r.push_str(alias);
    }
    if !table.parameters.is_empty() {
        r.push('(');
        r.render_list(&table.parameters, ", ")?;
        r.push(')');
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{options::RenderOptions, renderer::Renderer};
    use sql_ast::{
        binary,
        common::DataType,
        constraint::ColumnDef,
        expr::{BinaryOperator, DateTimeField, Expr, FunctionCall, GeometricKind},
        ident, lit,
        table::{FunctionTable, TableSource},
    };

    fn render_with(expr: &Expr, options: RenderOptions) -> String {
        let mut r = Renderer::new(options);
        r.render(expr).unwrap();
        r.finish().0
    }

    fn render(expr: &Expr) -> String {
        render_with(expr, RenderOptions::default())
    }

    fn cast(expr: Expr, type_name: &str) -> Expr {
        Expr::TypeCast {
            expr: Box::new(expr),
            data_type: DataType::new(type_name),
        }
    }

    #[test]
    fn test_type_cast_parenthesizes_only_binary() {
        let sum = binary(ident!("a"), BinaryOperator::Plus, ident!("b"));
        assert_eq!(render(&cast(sum, "bigint")), "(a + b)::bigint");
        assert_eq!(render(&cast(ident!("a"), "text")), "a::text");
        assert_eq!(
            render(&Expr::TypeCast {
                expr: Box::new(lit!("{}")),
                data_type: DataType::new("int").array(),
            }),
            "'{}'::int[]"
        );
    }

    #[test]
    fn test_geometric_keyword_casing() {
        let point = Expr::Geometric {
            kind: GeometricKind::Point,
            value: Box::new(lit!("(1,2)")),
        };
        let inet = Expr::Geometric {
            kind: GeometricKind::Inet,
            value: Box::new(lit!("10.0.0.1")),
        };

        assert_eq!(render(&point), "POINT '(1,2)'");
        assert_eq!(
            render_with(&point, RenderOptions::lowercase()),
            "point '(1,2)'"
        );
        assert_eq!(render(&inet), "inet '10.0.0.1'");
        assert_eq!(
            render_with(&inet, RenderOptions::lowercase()),
            "inet '10.0.0.1'"
        );
    }

    #[test]
    fn test_interval_extract_bitstring() {
        assert_eq!(
            render(&Expr::Interval(Box::new(lit!("1 day")))),
            "INTERVAL '1 day'"
        );
        assert_eq!(
            render(&Expr::Extract {
                field: DateTimeField::Epoch,
                source: Box::new(ident!("created_at")),
            }),
            "EXTRACT (EPOCH FROM created_at)"
        );
        assert_eq!(
            render_with(
                &Expr::Extract {
                    field: DateTimeField::Year,
                    source: Box::new(ident!("d")),
                },
                RenderOptions::lowercase()
            ),
            "extract (YEAR from d)"
        );
        assert_eq!(render(&Expr::BitString("0101".to_string())), "B'0101'");
        assert_eq!(
            render_with(&Expr::BitString("1".to_string()), RenderOptions::lowercase()),
            "b'1'"
        );
    }

    #[test]
    fn test_function_table_source() {
        let source = TableSource::Function(FunctionTable {
            expr: Expr::Function(FunctionCall::new(
                "generate_series",
                vec![lit!(1), lit!(10)],
            )),
            alias: Some("g".to_string()),
            parameters: vec![ColumnDef::new("n", DataType::new("integer"))],
        });
        let mut r = Renderer::default();
        r.render(&source).unwrap();
        assert_eq!(r.sql(), "generate_series(1, 10) AS g(n integer)");
    }
}
