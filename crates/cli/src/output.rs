use crate::error::CliError;
use pg_render::{RenderOptions, RuleSet, resolve, to_sql_with_params};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sql_ast::{NodeKind, Origin, common::Literal, statement::Statement};

/// A single statement or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<Statement>),
    One(Statement),
}

pub fn parse_statements(source: &str) -> Result<Vec<Statement>, CliError> {
    let input: Input = serde_json::from_str(source)?;
    Ok(match input {
        Input::Many(statements) => statements,
        Input::One(statement) => vec![statement],
    })
}

/// Renders each statement terminated by `;`, separated by a blank line.
/// Parameterized output carries the collected values as a comment.
pub fn render_statements(
    statements: &[Statement],
    options: &RenderOptions,
) -> Result<String, CliError> {
    let mut rendered = Vec::with_capacity(statements.len());

    for (index, statement) in statements.iter().enumerate() {
        let (sql, params) = to_sql_with_params(statement, options)
            .map_err(|source| CliError::Render { index, source })?;

        let mut text = format!("{sql};");
        if options.parameterized {
            let values: Vec<Value> = params.iter().map(param_to_json).collect();
            let json = serde_json::to_string(&values).map_err(CliError::JsonSerialize)?;
            text.push_str("\n-- params: ");
            text.push_str(&json);
        }
        rendered.push(text);
    }

    Ok(rendered.join("\n\n"))
}

fn param_to_json(param: &Literal) -> Value {
    match param {
        Literal::Null => Value::Null,
        Literal::Boolean(b) => Value::Bool(*b),
        Literal::Integer(i) => Value::from(*i),
        Literal::Float(f) => Value::from(*f),
        Literal::String(s) => Value::String(s.clone()),
    }
}

#[derive(Serialize)]
struct KindRow {
    kind: NodeKind,
    origin: Origin,
    rules: Option<RuleSet>,
}

fn kind_rows() -> Vec<KindRow> {
    NodeKind::ALL
        .iter()
        .map(|&kind| KindRow {
            kind,
            origin: kind.origin(),
            rules: resolve(kind).ok(),
        })
        .collect()
}

pub fn print_kinds(as_json: bool) -> Result<(), CliError> {
    let rows = kind_rows();

    if as_json {
        let json = serde_json::to_string_pretty(&rows).map_err(CliError::JsonSerialize)?;
        println!("{json}");
        return Ok(());
    }

    println!("{:<24} {:<10} Rules", "Kind", "Origin");
    println!("------------------------------------------------");
    for row in rows {
        let rules = row
            .rules
            .map(|rules| format!("{rules:?}"))
            .unwrap_or_else(|| "unsupported".to_string());
        let origin = format!("{:?}", row.origin);
        println!("{:<24} {:<10} {rules}", row.kind.to_string(), origin);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"[
        "StartTransaction",
        {
            "Show": { "expr": { "Identifier": { "qualifier": null, "name": "search_path" } } }
        },
        {
            "Delete": {
                "with": null,
                "only": false,
                "table": { "schema": null, "name": "users" },
                "alias": null,
                "using": null,
                "where_clause": {
                    "Binary": {
                        "left": { "Identifier": { "qualifier": null, "name": "name" } },
                        "op": "Eq",
                        "right": { "Literal": { "String": "Bob" } }
                    }
                },
                "returning": false
            }
        }
    ]"#;

    #[test]
    fn test_parse_one_or_many() {
        assert_eq!(parse_statements(INPUT).unwrap().len(), 3);
        assert_eq!(
            parse_statements(r#""StartTransaction""#).unwrap(),
            vec![Statement::StartTransaction]
        );
        assert!(matches!(
            parse_statements("{"),
            Err(CliError::InputDeserialize(_))
        ));
    }

    #[test]
    fn test_render_statements() {
        let statements = parse_statements(INPUT).unwrap();
        let sql = render_statements(&statements, &RenderOptions::lowercase()).unwrap();
        assert_eq!(
            sql,
            "start transaction;\n\nshow search_path;\n\ndelete from users\nwhere name = 'Bob';"
        );
    }

    #[test]
    fn test_render_statements_parameterized() {
        let statements = parse_statements(INPUT).unwrap();
        let sql = render_statements(&statements[2..], &RenderOptions::parameterized()).unwrap();
        assert_eq!(
            sql,
            "DELETE FROM users\nWHERE name = $1;\n-- params: [\"Bob\"]"
        );
    }

    #[test]
    fn test_render_error_names_statement() {
        let statements = vec![
            Statement::StartTransaction,
            Statement::Truncate(Default::default()),
        ];
        let err = render_statements(&statements, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::Render { index: 1, .. }));
    }

    #[test]
    fn test_kind_rows_cover_every_kind() {
        let rows = kind_rows();
        assert_eq!(rows.len(), NodeKind::ALL.len());
        let unsupported: Vec<NodeKind> = rows
            .iter()
            .filter(|row| row.rules.is_none())
            .map(|row| row.kind)
            .collect();
        assert_eq!(
            unsupported,
            vec![NodeKind::OraclePrior, NodeKind::OracleOuterJoin]
        );
    }
}
