//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{
    dispatch,
    error::{RenderError, RenderResult},
    options::RenderOptions,
};
use sql_ast::{Node, common::Literal};

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> RenderResult;
}

impl<T: ?Sized> Render for T
where
    for<'a> &'a T: Into<Node<'a>>,
{
    fn render(&self, renderer: &mut Renderer) -> RenderResult {
        renderer.render(self)
    }
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL text and, in parameterized mode, the literal
/// values replaced by placeholders. One renderer serves one tree; the sink
/// only ever grows.
#[derive(Debug)]
pub struct Renderer {
    sql: String,
    params: Vec<Literal>,
    options: RenderOptions,
    indent: usize,
    depth: usize,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            indent: options.initial_indent,
            depth: 0,
            options,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Literal>) {
        (self.sql, self.params)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Literal] {
        &self.params
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Entry point: renders any node through rule dispatch.
    pub fn render<'n>(&mut self, node: impl Into<Node<'n>>) -> RenderResult {
        dispatch::dispatch(node.into(), self)
    }

    pub fn render_list<'n, T>(&mut self, items: &'n [T], separator: &str) -> RenderResult
    where
        &'n T: Into<Node<'n>>,
    {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push_str(separator);
            }
            self.render(item)?;
        }
        Ok(())
    }

    /// Like `render_list`, with a line break after each separator.
    pub fn render_lines<'n, T>(&mut self, items: &'n [T], separator: &str) -> RenderResult
    where
        &'n T: Into<Node<'n>>,
    {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push_str(separator);
                self.newline();
            }
            self.render(item)?;
        }
        Ok(())
    }

    /// Emits a keyword given in upper case, honoring the keyword case option.
    pub fn keyword(&mut self, keyword: &str) {
        if self.options.is_upper() {
            self.sql.push_str(keyword);
        } else {
            self.sql.extend(keyword.chars().map(|c| c.to_ascii_lowercase()));
        }
    }

    pub fn push_str(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    pub fn push(&mut self, c: char) {
        self.sql.push(c);
    }

    pub fn newline(&mut self) {
        if !self.options.line_breaks {
            self.sql.push(' ');
            return;
        }
        self.sql.push('\n');
        for _ in 0..self.indent {
            self.sql.push_str(&self.options.indent_unit);
        }
    }

    /// Runs `f` one indentation level deeper. The previous level is restored
    /// whether `f` succeeds or fails.
    pub fn indented<F>(&mut self, f: F) -> RenderResult
    where
        F: FnOnce(&mut Self) -> RenderResult,
    {
        self.indent += 1;
        let result = f(self);
        self.indent -= 1;
        result
    }

    pub fn add_param(&mut self, value: Literal) {
        self.params.push(value);
        let placeholder = format!("${}", self.params.len());
        self.sql.push_str(&placeholder);
    }

    /// Tracks recursion depth around one dispatched node.
    pub(crate) fn nested<F>(&mut self, f: F) -> RenderResult
    where
        F: FnOnce(&mut Self) -> RenderResult,
    {
        if self.depth >= self.options.max_depth {
            return Err(RenderError::MaxDepthExceeded(self.options.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
