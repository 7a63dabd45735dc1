use std::fmt::{self, Display};

use super::ast::Block;
use super::expressions::{Expr, OpKind};
use super::types::{Identifier, Type};

/// Whether a loop guard continues until its expression becomes true
/// (`TIL`) or while it stays true (`WILE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopGuardKind {
    Until,
    While,
}

/// A statement: a unit of code executed for its side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Changes the declared type of an existing variable.
    Cast { target: Identifier, newtype: Type },
    Print {
        args: Vec<Expr>,
        suppress_newline: bool,
    },
    Input { target: Identifier },
    Assignment { target: Identifier, value: Expr },
    /// Creates `target` inside `scope`. `init` and `declared_type` are
    /// mutually exclusive; at most one is present.
    Declaration {
        scope: Identifier,
        target: Identifier,
        init: Option<Expr>,
        declared_type: Option<Type>,
    },
    /// `guards` and `blocks` are the `MEBBE` clauses and always have
    /// equal length.
    IfThenElse {
        yes: Block,
        no: Option<Block>,
        guards: Vec<Expr>,
        blocks: Vec<Block>,
    },
    /// `guards` and `blocks` are the `OMG` clauses, equal length and
    /// never empty.
    Switch {
        guards: Vec<Expr>,
        blocks: Vec<Block>,
        default: Option<Block>,
    },
    Break,
    Return(Expr),
    /// If `update` is present, `var` is present too and names the
    /// variable the update rewrites.
    Loop {
        name: Identifier,
        var: Option<Identifier>,
        update: Option<Expr>,
        guard: Option<(LoopGuardKind, Expr)>,
        body: Block,
    },
    Deallocation { target: Identifier },
    FuncDef {
        scope: Identifier,
        name: Identifier,
        params: Vec<Identifier>,
        body: Block,
    },
    /// A bare expression; its value becomes the implicit variable at
    /// runtime.
    Expr(Expr),
}

impl Stmt {
    pub(crate) fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Stmt::Cast { target, newtype } => {
                writeln!(f, "{}{} IS NOW A {}", pad, target, newtype)
            }
            Stmt::Print {
                args,
                suppress_newline,
            } => {
                write!(f, "{}VISIBLE", pad)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                if *suppress_newline {
                    write!(f, " !")?;
                }
                writeln!(f)
            }
            Stmt::Input { target } => writeln!(f, "{}GIMMEH {}", pad, target),
            Stmt::Assignment { target, value } => writeln!(f, "{}{} R {}", pad, target, value),
            Stmt::Declaration {
                scope,
                target,
                init,
                declared_type,
            } => {
                write!(f, "{}{} HAS A {}", pad, scope, target)?;
                if let Some(init) = init {
                    write!(f, " ITZ {}", init)?;
                }
                if let Some(declared_type) = declared_type {
                    write!(f, " ITZ A {}", declared_type)?;
                }
                writeln!(f)
            }
            Stmt::IfThenElse {
                yes,
                no,
                guards,
                blocks,
            } => {
                writeln!(f, "{}O RLY?", pad)?;
                writeln!(f, "{}YA RLY", pad)?;
                yes.fmt_indented(f, indent + 1)?;
                for (guard, block) in guards.iter().zip(blocks) {
                    writeln!(f, "{}MEBBE {}", pad, guard)?;
                    block.fmt_indented(f, indent + 1)?;
                }
                if let Some(no) = no {
                    writeln!(f, "{}NO WAI", pad)?;
                    no.fmt_indented(f, indent + 1)?;
                }
                writeln!(f, "{}OIC", pad)
            }
            Stmt::Switch {
                guards,
                blocks,
                default,
            } => {
                writeln!(f, "{}WTF?", pad)?;
                for (guard, block) in guards.iter().zip(blocks) {
                    writeln!(f, "{}OMG {}", pad, guard)?;
                    block.fmt_indented(f, indent + 1)?;
                }
                if let Some(default) = default {
                    writeln!(f, "{}OMGWTF", pad)?;
                    default.fmt_indented(f, indent + 1)?;
                }
                writeln!(f, "{}OIC", pad)
            }
            Stmt::Break => writeln!(f, "{}GTFO", pad),
            Stmt::Return(value) => writeln!(f, "{}FOUND YR {}", pad, value),
            Stmt::Loop {
                name,
                var,
                update,
                guard,
                body,
            } => {
                write!(f, "{}IM IN YR {}", pad, name)?;
                if let (Some(var), Some(update)) = (var, update) {
                    match update {
                        Expr::Op(OpKind::Add, _) => write!(f, " UPPIN YR {}", var)?,
                        Expr::Op(OpKind::Sub, _) => write!(f, " NERFIN YR {}", var)?,
                        Expr::FuncCall { name: func, .. } => write!(f, " {} YR {}", func, var)?,
                        _ => {}
                    }
                }
                if let Some((kind, expr)) = guard {
                    let keyword = match kind {
                        LoopGuardKind::Until => "TIL",
                        LoopGuardKind::While => "WILE",
                    };
                    write!(f, " {} {}", keyword, expr)?;
                }
                writeln!(f)?;
                body.fmt_indented(f, indent + 1)?;
                writeln!(f, "{}IM OUTTA YR {}", pad, name)
            }
            Stmt::Deallocation { target } => writeln!(f, "{}{} R NOOB", pad, target),
            Stmt::FuncDef {
                scope,
                name,
                params,
                body,
            } => {
                write!(f, "{}HOW IZ {} {}", pad, scope, name)?;
                for (index, param) in params.iter().enumerate() {
                    if index == 0 {
                        write!(f, " YR {}", param)?;
                    } else {
                        write!(f, " AN YR {}", param)?;
                    }
                }
                writeln!(f)?;
                body.fmt_indented(f, indent + 1)?;
                writeln!(f, "{}IF U SAY SO", pad)
            }
            Stmt::Expr(expr) => writeln!(f, "{}{}", pad, expr),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
