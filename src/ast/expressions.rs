use std::fmt::{self, Display};

use super::types::{Constant, Identifier, Type};

/// The operation an `Expr::Op` performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Max,
    Min,

    And,
    Or,
    Xor,
    Not,

    Eq,
    Neq,

    Cat,
}

/// Argument-count discipline of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one argument.
    Unary,
    /// Exactly two arguments.
    Binary,
    /// Two or more arguments.
    Nary,
}

impl OpKind {
    /// `And` and `Or` have both a fixed binary surface form and an
    /// aggregate form, so they report `Nary`.
    pub fn arity(&self) -> Arity {
        match self {
            OpKind::Not => Arity::Unary,
            OpKind::And | OpKind::Or | OpKind::Cat => Arity::Nary,
            _ => Arity::Binary,
        }
    }
}

/// An expression: a unit of code which evaluates to some value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Non-destructive conversion of the inner expression.
    Cast(Box<Expr>, Type),
    Constant(Constant),
    Identifier(Identifier),
    /// A call of the function `name` living in `scope`.
    FuncCall {
        scope: Identifier,
        name: Identifier,
        args: Vec<Expr>,
    },
    /// Uniform representation for unary, binary, and n-ary operators.
    Op(OpKind, Vec<Expr>),
    /// The implicit variable `IT`.
    ImplicitVar,
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Cast(target, newtype) => write!(f, "MAEK {} A {}", target, newtype),
            Expr::Constant(constant) => write!(f, "{}", constant),
            Expr::Identifier(identifier) => write!(f, "{}", identifier),
            Expr::FuncCall { scope, name, args } => {
                write!(f, "{} IZ {}", scope, name)?;
                for (index, arg) in args.iter().enumerate() {
                    if index == 0 {
                        write!(f, " YR {}", arg)?;
                    } else {
                        write!(f, " AN YR {}", arg)?;
                    }
                }
                write!(f, " MKAY")
            }
            Expr::Op(OpKind::Not, args) => {
                write!(f, "NOT")?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                Ok(())
            }
            Expr::Op(op, args) => {
                let aggregate = match op {
                    OpKind::Cat => Some("SMOOSH"),
                    OpKind::And if args.len() != 2 => Some("ALL OF"),
                    OpKind::Or if args.len() != 2 => Some("ANY OF"),
                    _ => None,
                };
                let keyword = aggregate.unwrap_or(match op {
                    OpKind::Add => "SUM OF",
                    OpKind::Sub => "DIFF OF",
                    OpKind::Mult => "PRODUKT OF",
                    OpKind::Div => "QUOSHUNT OF",
                    OpKind::Mod => "MOD OF",
                    OpKind::Max => "BIGGR OF",
                    OpKind::Min => "SMALLR OF",
                    OpKind::And => "BOTH OF",
                    OpKind::Or => "EITHER OF",
                    OpKind::Xor => "WON OF",
                    OpKind::Eq => "BOTH SAEM",
                    OpKind::Neq => "DIFFRINT",
                    OpKind::Not | OpKind::Cat => "",
                });
                write!(f, "{}", keyword)?;
                for (index, arg) in args.iter().enumerate() {
                    if index == 0 {
                        write!(f, " {}", arg)?;
                    } else {
                        write!(f, " AN {}", arg)?;
                    }
                }
                if aggregate.is_some() {
                    write!(f, " MKAY")?;
                }
                Ok(())
            }
            Expr::ImplicitVar => write!(f, "IT"),
        }
    }
}
