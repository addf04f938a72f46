use crate::{
    error::{RenderError, RenderResult},
    renderer::Renderer,
};
use sql_ast::{
    NodeKind,
    expr::Expr,
    statement::{SetStatement, Show},
};

/// `SET [SESSION|LOCAL] name TO value, ...`
///
/// `TIME ZONE` takes its value after a plain space, and list values are
/// written bare, without the surrounding parentheses.
pub(super) fn render_set(set: &SetStatement, r: &mut Renderer) -> RenderResult {
    if set.items.is_empty() {
        return Err(RenderError::malformed(NodeKind::Set, "no SET items"));
    }

    r.keyword("SET ");
    if let Some(option) = set.option {
        r.push_str(option.as_str());
        r.push(' ');
    }

    for (i, item) in set.items.iter().enumerate() {
        if i > 0 {
            r.push_str(", ");
        }
        r.render(&item.target)?;

        match &item.target {
            Expr::Identifier(name) if name.is("TIME ZONE") => r.push(' '),
            _ => r.keyword(" TO "),
        }

        match &item.value {
            Expr::List(values) => r.render_list(values, ", ")?,
            value => r.render(value)?,
        }
    }
    Ok(())
}

pub(super) fn render_show(show: &Show, r: &mut Renderer) -> RenderResult {
    r.keyword("SHOW ");
    r.render(&show.expr)
}

#[cfg(test)]
mod tests {
    use crate::{error::RenderError, options::RenderOptions, renderer::Renderer};
    use sql_ast::{
        expr::Expr,
        ident, lit,
        statement::{Assignment, SetOption, SetStatement, Show, Statement},
    };

    #[test]
    fn test_render_set_variants() {
        let stmt = Statement::Set(SetStatement {
            option: Some(SetOption::Local),
            items: vec![
                Assignment {
                    target: ident!("TIME ZONE"),
                    value: lit!("UTC"),
                },
                Assignment {
                    target: ident!("search_path"),
                    value: Expr::List(vec![ident!("app"), ident!("public")]),
                },
            ],
        });

        let mut r = Renderer::default();
        r.render(&stmt).unwrap();
        assert_eq!(
            r.sql(),
            "SET LOCAL TIME ZONE 'UTC', search_path TO app, public"
        );

        let mut r = Renderer::new(RenderOptions::lowercase());
        r.render(&stmt).unwrap();
        assert_eq!(
            r.sql(),
            "set LOCAL TIME ZONE 'UTC', search_path to app, public"
        );
    }

    #[test]
    fn test_set_without_items_is_malformed() {
        let stmt = Statement::Set(SetStatement {
            option: None,
            items: vec![],
        });
        let mut r = Renderer::default();
        assert!(matches!(
            r.render(&stmt),
            Err(RenderError::MalformedNode { .. })
        ));
    }

    #[test]
    fn test_render_show_and_start_transaction() {
        let mut r = Renderer::new(RenderOptions::lowercase());
        r.render(&Statement::Show(Show {
            expr: ident!("search_path"),
        }))
        .unwrap();
        r.push_str("; ");
        r.render(&Statement::StartTransaction).unwrap();
        assert_eq!(r.sql(), "show search_path; start transaction");
    }
}
