//! Defines the AST for SQL expressions.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `item` or `item.name`.
    Identifier(Ident),

    /// A literal value, rendered as a bound parameter.
    Value(Value),

    /// A binary operation, e.g., `column = 'value'` or `a AND b`.
    BinaryOp(Box<BinaryOp>),

    /// `expr IS NULL` / `expr IS NOT NULL`.
    IsNull { expr: Box<Expr>, negated: bool },

    /// A function call, e.g., `COUNT(*)` or `MAX(price)`.
    FunctionCall(FunctionCall),
}

impl Expr {
    /// Combines two conditions with `AND`.
    pub fn and(self, other: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: self,
            op: BinaryOperator::And,
            right: other,
        }))
    }

    /// Combines two conditions with `OR`.
    pub fn or(self, other: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: self,
            op: BinaryOperator::Or,
            right: other,
        }))
    }

    /// Visits every identifier in the expression tree, depth first.
    pub fn for_each_ident<'a>(&'a self, f: &mut impl FnMut(&'a Ident)) {
        match self {
            Expr::Identifier(ident) => f(ident),
            Expr::Value(_) => {}
            Expr::BinaryOp(op) => {
                op.left.for_each_ident(f);
                op.right.for_each_ident(f);
            }
            Expr::IsNull { expr, .. } => expr.for_each_ident(f),
            Expr::FunctionCall(func) => func.args.iter().for_each(|arg| arg.for_each_ident(f)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'item' in 'item.name'
    pub name: String,              // e.g., the 'name' in 'item.name'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub wildcard: bool, // represents the '*' in 'COUNT(*)'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Logical
    And,
    Or,
}
