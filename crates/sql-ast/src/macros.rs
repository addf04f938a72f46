#[macro_export]
macro_rules! lit {
    (null) => {
        $crate::expr::Expr::Literal($crate::common::Literal::Null)
    };
    ($val:literal) => {
        $crate::expr::Expr::Literal($crate::common::Literal::from($val))
    };
}

#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::common::TableRef {
            schema: None,
            name: $name.to_string(),
        }
    };
    ($schema:expr, $name:expr) => {
        $crate::common::TableRef {
            schema: Some($schema.to_string()),
            name: $name.to_string(),
        }
    };
}

#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        $crate::expr::Expr::Identifier($crate::common::Ident {
            qualifier: None,
            name: $name.to_string(),
        })
    };
    ($qualifier:expr, $name:expr) => {
        $crate::expr::Expr::Identifier($crate::common::Ident {
            qualifier: Some($qualifier.to_string()),
            name: $name.to_string(),
        })
    };
}

/// Creates an aliased select item.
#[macro_export]
macro_rules! item_as {
    ($expr:expr, $alias:expr) => {
        $crate::query::SelectItem {
            expr: $expr,
            alias: Some($alias.to_string()),
        }
    };
}
