//! Access control statements.
//!
//! Postgres has no object-less GRANT; system privileges are role
//! attributes, so `GRANT CONNECT, CREATE TABLE TO bob` becomes
//! `ALTER ROLE bob LOGIN CREATEDB`. Oracle's `RESOURCE` role is not a
//! Postgres privilege and is dropped from object grants.

use crate::{
    error::{RenderError, RenderResult},
    generic,
    renderer::Renderer,
};
use sql_ast::{
    NodeKind,
    common::Ident,
    expr::Expr,
    statement::{CreateUser, Grant},
};
use tracing::debug;

pub(super) fn render_grant(grant: &Grant, r: &mut Renderer) -> RenderResult {
    if grant.on.is_some() {
        return render_object_grant(grant, r);
    }

    let Some(role) = &grant.to else {
        return Err(RenderError::malformed(
            NodeKind::Grant,
            "neither an ON target nor a grantee",
        ));
    };

    r.push_str("ALTER ROLE ");
    r.render(role)?;
    for attribute in role_attributes(&grant.privileges) {
        r.push(' ');
        r.render(&Expr::Identifier(Ident::new(attribute)))?;
    }
    Ok(())
}

fn render_object_grant(grant: &Grant, r: &mut Renderer) -> RenderResult {
    let privileges: Vec<Expr> = grant
        .privileges
        .iter()
        .filter(|privilege| !is_resource(privilege))
        .cloned()
        .collect();

    if privileges.len() == grant.privileges.len() {
        return generic::render_grant(grant, r);
    }
    debug!("dropping RESOURCE from object grant");

    if privileges.is_empty() {
        return Err(RenderError::malformed(
            NodeKind::Grant,
            "no privileges besides RESOURCE",
        ));
    }

    let grant = Grant {
        privileges,
        ..grant.clone()
    };
    generic::render_grant(&grant, r)
}

fn is_resource(privilege: &Expr) -> bool {
    matches!(privilege, Expr::Identifier(ident) if ident.is("RESOURCE"))
}

/// Maps system privileges onto role attributes, first-seen order, no
/// duplicates. Privileges without an equivalent are dropped.
fn role_attributes(privileges: &[Expr]) -> Vec<&'static str> {
    let mut attributes = Vec::new();

    for privilege in privileges {
        let Expr::Identifier(ident) = privilege else {
            debug!(?privilege, "dropping non-identifier privilege");
            continue;
        };

        let attribute = if ident.name.eq_ignore_ascii_case("CONNECT") {
            "LOGIN"
        } else if ident.name.to_ascii_lowercase().starts_with("create ") {
            "CREATEDB"
        } else {
            debug!(privilege = %ident, "privilege has no role attribute, dropping");
            continue;
        };

        debug!(privilege = %ident, attribute, "mapped privilege to role attribute");
        if !attributes.contains(&attribute) {
            attributes.push(attribute);
        }
    }

    attributes
}

pub(super) fn render_create_user(create: &CreateUser, r: &mut Renderer) -> RenderResult {
    r.keyword("CREATE USER ");
    r.render(&create.user)?;
    r.keyword(" PASSWORD ");

    match &create.password {
        Some(password @ Expr::Identifier(_)) => {
            r.push('\'');
            r.render(password)?;
            r.push('\'');
            Ok(())
        }
        Some(password) => r.render(password),
        None => Err(RenderError::malformed(
            NodeKind::CreateUser,
            "missing password",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use sql_ast::{
        ident, lit,
        statement::{GrantObject, Statement},
    };
    use tracing_test::traced_test;

    fn grant_to(privileges: Vec<Expr>, role: &str) -> Statement {
        Statement::Grant(Grant {
            privileges,
            on: None,
            to: Some(ident!(role)),
            with_grant_option: false,
        })
    }

    #[traced_test]
    #[test]
    fn test_grant_becomes_alter_role() {
        let stmt = grant_to(
            vec![
                ident!("CONNECT"),
                ident!("CREATE TABLE"),
                ident!("RESOURCE"),
                ident!("connect"),
            ],
            "bob",
        );
        let mut r = Renderer::default();
        r.render(&stmt).unwrap();
        assert_eq!(r.sql(), "ALTER ROLE bob LOGIN CREATEDB");

        assert!(logs_contain("mapped privilege to role attribute"));
        assert!(logs_contain("privilege has no role attribute, dropping"));
    }

    #[test]
    fn test_alter_role_tokens_ignore_case_option() {
        let stmt = grant_to(vec![ident!("create session"), ident!("Connect")], "app");
        let mut r = Renderer::new(RenderOptions::lowercase());
        r.render(&stmt).unwrap();
        assert_eq!(r.sql(), "ALTER ROLE app CREATEDB LOGIN");
    }

    #[test]
    fn test_grant_without_mappable_privileges() {
        let stmt = grant_to(vec![ident!("DBA")], "bob");
        let mut r = Renderer::default();
        r.render(&stmt).unwrap();
        assert_eq!(r.sql(), "ALTER ROLE bob");
    }

    #[test]
    fn test_grant_with_target_uses_generic_form() {
        let stmt = Statement::Grant(Grant {
            privileges: vec![ident!("SELECT")],
            on: Some(GrantObject {
                object_type: None,
                name: ident!("orders"),
            }),
            to: Some(ident!("reporting")),
            with_grant_option: false,
        });
        let mut r = Renderer::new(RenderOptions::lowercase());
        r.render(&stmt).unwrap();
        assert_eq!(r.sql(), "grant SELECT on orders to reporting");
    }

    #[traced_test]
    #[test]
    fn test_object_grant_drops_resource() {
        let grant = |privileges: Vec<Expr>| {
            Statement::Grant(Grant {
                privileges,
                on: Some(GrantObject {
                    object_type: None,
                    name: ident!("t"),
                }),
                to: Some(ident!("bob")),
                with_grant_option: false,
            })
        };

        let mut r = Renderer::default();
        r.render(&grant(vec![ident!("SELECT"), ident!("RESOURCE")]))
            .unwrap();
        assert_eq!(r.sql(), "GRANT SELECT ON t TO bob");
        assert!(logs_contain("dropping RESOURCE from object grant"));

        let mut r = Renderer::default();
        r.render(&grant(vec![
            ident!("resource"),
            ident!("SELECT"),
            ident!("app", "RESOURCE"),
            ident!("INSERT"),
        ]))
        .unwrap();
        assert_eq!(r.sql(), "GRANT SELECT, app.RESOURCE, INSERT ON t TO bob");

        let mut r = Renderer::default();
        let err = r.render(&grant(vec![ident!("RESOURCE")])).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MalformedNode {
                kind: NodeKind::Grant,
                ..
            }
        ));
        assert_eq!(r.sql(), "");
    }

    #[test]
    fn test_grant_without_target_or_grantee_is_malformed() {
        let stmt = Statement::Grant(Grant {
            privileges: vec![ident!("CONNECT")],
            on: None,
            to: None,
            with_grant_option: false,
        });
        let mut r = Renderer::default();
        let err = r.render(&stmt).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MalformedNode {
                kind: NodeKind::Grant,
                ..
            }
        ));
        assert_eq!(r.sql(), "");
    }

    #[test]
    fn test_create_user_password_quoting() {
        let stmt = Statement::CreateUser(CreateUser {
            user: ident!("bob"),
            password: Some(ident!("secret")),
        });
        let mut r = Renderer::default();
        r.render(&stmt).unwrap();
        assert_eq!(r.sql(), "CREATE USER bob PASSWORD 'secret'");

        let stmt = Statement::CreateUser(CreateUser {
            user: ident!("bob"),
            password: Some(lit!("secret")),
        });
        let mut r = Renderer::default();
        r.render(&stmt).unwrap();
        assert_eq!(r.sql(), "CREATE USER bob PASSWORD 'secret'");
    }

    #[test]
    fn test_create_user_without_password_keeps_partial_text() {
        let stmt = Statement::CreateUser(CreateUser {
            user: ident!("bob"),
            password: None,
        });
        let mut r = Renderer::default();
        assert!(matches!(
            r.render(&stmt),
            Err(RenderError::MalformedNode { .. })
        ));
        assert_eq!(r.sql(), "CREATE USER bob PASSWORD ");
    }
}
