use crate::query::ast::expr::{Expr, FunctionCall, Ident};
use model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod macros;
pub mod renderer;
pub mod typed;
pub mod validation;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn qualified(qualifier: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(qualifier.to_string()),
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}

pub fn count_all() -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: "COUNT".to_string(),
        args: Vec::new(),
        wildcard: true,
    })
}
