//! Formatting options a render starts from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub keyword_case: KeywordCase,

    /// Replace literals with `$n` placeholders and collect them as parameters.
    pub parameterized: bool,

    /// When false every line break collapses to a single space.
    pub line_breaks: bool,

    /// Emitted once per indentation level after a line break.
    pub indent_unit: String,

    pub initial_indent: usize,

    /// Deepest node nesting accepted before rendering fails.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            keyword_case: KeywordCase::Upper,
            parameterized: false,
            line_breaks: true,
            indent_unit: "\t".to_string(),
            initial_indent: 0,
            max_depth: 256,
        }
    }
}

impl RenderOptions {
    pub fn lowercase() -> Self {
        Self {
            keyword_case: KeywordCase::Lower,
            ..Default::default()
        }
    }

    pub fn parameterized() -> Self {
        Self {
            parameterized: true,
            ..Default::default()
        }
    }

    pub fn compact() -> Self {
        Self {
            line_breaks: false,
            ..Default::default()
        }
    }

    pub fn is_upper(&self) -> bool {
        self.keyword_case == KeywordCase::Upper
    }
}
