//! Turns AST nodes into SQL text plus positional parameters.
//!
//! Values are always bound as parameters; the dialect decides identifier
//! quoting and placeholder syntax.

use crate::query::{ast::common::TableRef, dialect::Dialect};
use model::core::value::Value;

pub mod create_table;
pub mod expr;
pub mod insert;
pub mod select;

pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Binds `value` and writes its placeholder.
    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn push_ident(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    /// Writes `(a, b, ...)` with every name quoted.
    pub fn push_ident_list<S: AsRef<str>>(&mut self, idents: &[S]) {
        self.sql.push('(');
        for (i, ident) in idents.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_ident(ident.as_ref());
        }
        self.sql.push(')');
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(schema) = &table.schema {
            self.push_ident(schema);
            self.sql.push('.');
        }
        self.push_ident(&table.name);
    }
}

/// Renders any AST node with the given dialect in one call.
pub fn render_sql(node: &impl Render, dialect: &dyn Dialect) -> (String, Vec<Value>) {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer);
    renderer.finish()
}
