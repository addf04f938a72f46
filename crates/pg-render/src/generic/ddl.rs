use super::table::render_table_ref;
use crate::{
    error::{RenderError, RenderResult},
    renderer::Renderer,
};
use sql_ast::{
    NodeKind,
    common::DataType,
    constraint::{CheckConstraint, ColumnDef, ForeignKeyConstraint, KeyConstraint, ReferentialAction},
    statement::{Assignment, CreateTable, Grant, ObjectType},
};

pub(crate) fn render_grant(grant: &Grant, r: &mut Renderer) -> RenderResult {
    let Some(on) = &grant.on else {
        return Err(RenderError::malformed(NodeKind::Grant, "missing ON target"));
    };
    let Some(to) = &grant.to else {
        return Err(RenderError::malformed(NodeKind::Grant, "missing grantee"));
    };

    r.keyword("GRANT ");
    r.render_list(&grant.privileges, ", ")?;

    r.keyword(" ON ");
    if let Some(object_type) = on.object_type {
        r.keyword(match object_type {
            ObjectType::Table => "TABLE ",
            ObjectType::Sequence => "SEQUENCE ",
            ObjectType::Database => "DATABASE ",
            ObjectType::Schema => "SCHEMA ",
            ObjectType::Function => "FUNCTION ",
        });
    }
    r.render(&on.name)?;

    r.keyword(" TO ");
    r.render(to)?;

    if grant.with_grant_option {
        r.keyword(" WITH GRANT OPTION");
    }
    Ok(())
}

/// One column or constraint per line, indented inside the parentheses.
pub(super) fn render_create_table(create: &CreateTable, r: &mut Renderer) -> RenderResult {
    if create.columns.is_empty() {
        return Err(RenderError::malformed(NodeKind::CreateTable, "no columns"));
    }

    r.keyword("CREATE TABLE ");
    if create.if_not_exists {
        r.keyword("IF NOT EXISTS ");
    }
    render_table_ref(&create.name, r);
    r.push_str(" (");

    r.indented(|r| {
        for (i, column) in create.columns.iter().enumerate() {
            if i > 0 {
                r.push(',');
            }
            r.newline();
            r.render(column)?;
        }
        for constraint in &create.constraints {
            r.push(',');
            r.newline();
            r.render(constraint)?;
        }
        Ok(())
    })?;

    r.newline();
    r.push(')');
    Ok(())
}

pub(super) fn render_column_def(column: &ColumnDef, r: &mut Renderer) -> RenderResult {
    r.push_str(&column.name);
    r.push(' ');
    r.render(&column.data_type)?;
    if column.not_null {
        r.keyword(" NOT NULL");
    }
    if let Some(default) = &column.default {
        r.keyword(" DEFAULT ");
        r.render(default)?;
    }
    Ok(())
}

pub(super) fn render_data_type(data_type: &DataType, r: &mut Renderer) -> RenderResult {
    r.push_str(&data_type.name);
    if !data_type.modifiers.is_empty() {
        let modifiers: Vec<String> = data_type.modifiers.iter().map(u32::to_string).collect();
        r.push('(');
        r.push_str(&modifiers.join(", "));
        r.push(')');
    }
    for _ in 0..data_type.array_dimensions {
        r.push_str("[]");
    }
    Ok(())
}

pub(super) fn render_assignment(assignment: &Assignment, r: &mut Renderer) -> RenderResult {
    r.render(&assignment.target)?;
    r.push_str(" = ");
    r.render(&assignment.value)
}

fn render_constraint_name(name: Option<&str>, r: &mut Renderer) {
    if let Some(name) = name {
        r.keyword("CONSTRAINT ");
        r.push_str(name);
        r.push(' ');
    }
}

pub(crate) fn render_check(check: &CheckConstraint, r: &mut Renderer) -> RenderResult {
    render_constraint_name(check.name.as_deref(), r);
    r.keyword("CHECK (");
    r.render(&check.expr)?;
    r.push(')');
    Ok(())
}

/// PRIMARY KEY and UNIQUE share a shape; `keyword` picks which one.
pub(crate) fn render_key(keyword: &str, key: &KeyConstraint, r: &mut Renderer) -> RenderResult {
    render_constraint_name(key.name.as_deref(), r);
    r.keyword(keyword);
    r.push_str(" (");
    r.push_str(&key.columns.join(", "));
    r.push(')');
    Ok(())
}

pub(crate) fn render_foreign_key(fk: &ForeignKeyConstraint, r: &mut Renderer) -> RenderResult {
    render_constraint_name(fk.name.as_deref(), r);
    r.keyword("FOREIGN KEY (");
    r.push_str(&fk.columns.join(", "));
    r.keyword(") REFERENCES ");
    render_table_ref(&fk.referenced_table, r);
    if !fk.referenced_columns.is_empty() {
        r.push_str(" (");
        r.push_str(&fk.referenced_columns.join(", "));
        r.push(')');
    }
    if let Some(action) = fk.on_delete {
        r.keyword(" ON DELETE ");
        r.keyword(match action {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{error::RenderError, renderer::Renderer};
    use sql_ast::{
        common::DataType,
        constraint::{
            CheckConstraint, ColumnDef, Constraint, ForeignKeyConstraint, KeyConstraint,
            ReferentialAction,
        },
        expr::BinaryOperator,
        ident, lit,
        statement::{CreateTable, Grant, GrantObject, ObjectType, Statement},
        table_ref,
    };

    #[test]
    fn test_render_create_table() {
        let mut id = ColumnDef::new("id", DataType::new("bigint"));
        id.not_null = true;
        let mut name = ColumnDef::new("name", DataType::new("varchar").with_modifiers([64]));
        name.default = Some(lit!("anon"));
        let tags = ColumnDef::new("tags", DataType::new("text").array());

        let stmt = Statement::CreateTable(CreateTable {
            name: table_ref!("users"),
            if_not_exists: true,
            columns: vec![id, name, tags],
            constraints: vec![
                Constraint::PrimaryKey(KeyConstraint {
                    name: None,
                    columns: vec!["id".to_string()],
                }),
                Constraint::Check(CheckConstraint {
                    name: Some("name_len".to_string()),
                    expr: sql_ast::binary(ident!("name"), BinaryOperator::NotEq, lit!("")),
                }),
            ],
        });

        let mut r = Renderer::default();
        r.render(&stmt).unwrap();
        assert_eq!(
            r.sql(),
            "CREATE TABLE IF NOT EXISTS users (\n\
             \tid bigint NOT NULL,\n\
             \tname varchar(64) DEFAULT 'anon',\n\
             \ttags text[],\n\
             \tPRIMARY KEY (id),\n\
             \tCONSTRAINT name_len CHECK (name <> '')\n\
             )"
        );
        assert_eq!(r.indent_level(), 0);
    }

    #[test]
    fn test_render_foreign_key() {
        let fk = Constraint::ForeignKey(ForeignKeyConstraint {
            name: None,
            columns: vec!["user_id".to_string()],
            referenced_table: table_ref!("users"),
            referenced_columns: vec!["id".to_string()],
            on_delete: Some(ReferentialAction::SetNull),
        });
        let mut r = Renderer::default();
        r.render(&fk).unwrap();
        assert_eq!(
            r.sql(),
            "FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE SET NULL"
        );
    }

    #[test]
    fn test_render_grant_on_object() {
        let grant = Grant {
            privileges: vec![ident!("SELECT"), ident!("UPDATE")],
            on: Some(GrantObject {
                object_type: Some(ObjectType::Table),
                name: ident!("accounts"),
            }),
            to: Some(ident!("bob")),
            with_grant_option: true,
        };
        let mut r = Renderer::default();
        super::render_grant(&grant, &mut r).unwrap();
        assert_eq!(
            r.sql(),
            "GRANT SELECT, UPDATE ON TABLE accounts TO bob WITH GRANT OPTION"
        );
    }

    #[test]
    fn test_render_grant_without_grantee_is_malformed() {
        let grant = Grant {
            privileges: vec![ident!("SELECT")],
            on: Some(GrantObject {
                object_type: None,
                name: ident!("accounts"),
            }),
            to: None,
            with_grant_option: false,
        };
        let mut r = Renderer::default();
        let err = super::render_grant(&grant, &mut r).unwrap_err();
        assert!(matches!(err, RenderError::MalformedNode { .. }));
    }
}
