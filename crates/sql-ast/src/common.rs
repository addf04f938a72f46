//! Defines common, reusable AST nodes shared by every statement kind.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }

    /// True when this is an unqualified identifier whose name equals `name`,
    /// ignoring ASCII case.
    pub fn is(&self, name: &str) -> bool {
        self.qualifier.is_none() && self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{qualifier}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A literal value, such as a string, number, boolean, or NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// A target type as written in a cast or column definition, e.g.
/// `varchar(32)`, `numeric(10, 2)` or `int[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataType {
    pub name: String,
    pub modifiers: Vec<u32>,
    pub array_dimensions: usize,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            array_dimensions: 0,
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = u32>) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    pub fn array(mut self) -> Self {
        self.array_dimensions += 1;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullsOrder {
    First,
    Last,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_is_ignores_case_but_not_qualifier() {
        assert!(Ident::new("time zone").is("TIME ZONE"));
        assert!(!Ident::qualified("pg", "TIME ZONE").is("TIME ZONE"));
    }

    #[test]
    fn test_table_ref_display() {
        let table = TableRef {
            schema: Some("public".to_string()),
            name: "users".to_string(),
        };
        assert_eq!(table.to_string(), "public.users");
        assert_eq!(TableRef::new("users").to_string(), "users");
    }
}
