//! halo-fluent：不可变、可组合的 SQL 语句 builder。
//!
//! 每次链式调用都返回一个新快照；最终渲染得到 SQL 文本与有序参数列表，
//! 执行交给调用方提供的 [`Runner`]。

pub mod args;
pub mod case;
mod clause;
pub mod cond;
pub mod delete;
pub mod error;
pub mod expr;
pub mod fragment;
pub mod insert;
pub mod interpolate;
pub mod macros;
pub mod placeholder;
pub mod runner;
pub mod select;
#[cfg(test)]
mod select_tests;
pub mod statement;
mod string_builder;
pub mod update;
#[cfg(test)]
mod update_tests;
pub mod value;
pub mod valuer;

pub use crate::args::{Arg, Operand};
pub use crate::case::{CaseBuilder, case, case_of};
pub use crate::cond::{Eq, Gt, GtOrEq, ILike, Like, Lt, LtOrEq, NotEq, NotILike, NotLike};
pub use crate::delete::{DeleteBuilder, delete};
pub use crate::error::{Error, FormatError, Result, RunnerError, ValidationError};
pub use crate::expr::{Alias, And, Concat, Expr, Or, alias, concat_expr, expr, raw};
pub use crate::fragment::{Fragment, Part, Rendered};
pub use crate::insert::{InsertBuilder, insert, replace};
pub use crate::interpolate::debug_sql;
pub use crate::macros::IntoStrings;
pub use crate::placeholder::{
    DefaultFormatGuard, PlaceholderFormat, default_placeholder_format, placeholders,
    set_default_placeholder_format, set_default_placeholder_format_scoped,
};
pub use crate::runner::{
    ExecResult, Row, Rows, Runner, RunnerRef, exec_with, query_row_with, query_with,
};
pub use crate::select::{JoinKind, SelectBuilder, select};
pub use crate::statement::{Statement, StatementBuilder};
pub use crate::update::{UpdateBuilder, update};
pub use crate::value::SqlValue;
pub use crate::valuer::{SqlValuer, ValuerError};
