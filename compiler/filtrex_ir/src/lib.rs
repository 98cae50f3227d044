//! Filtrex IR - parse tree types.
//!
//! This crate contains the data structures shared by the parser and the
//! evaluator:
//! - Spans for source locations
//! - `ExprId`/`ExprRange` indices into a flat arena
//! - Expression nodes (`Expr`, `ExprKind`) and operators
//! - Dot-separated symbol paths
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId(u32)` indices
//! - **Immutable after parse**: an `ExprArena` is built once by the parser and
//!   then only read, so a compiled expression can be shared across threads.

mod arena;
mod ast;
mod expr_id;
mod span;
mod symbol;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange};
pub use span::{Span, SpanError};
pub use symbol::SymbolPath;

pub use bigdecimal::BigDecimal;
