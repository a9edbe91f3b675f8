//! 列 → 值 的比较映射：`Eq` / `NotEq` / `Lt` / `Like` 等。
//!
//! 所有映射都按列名排序后渲染（`BTreeMap`），条目之间以 ` AND ` 连接，
//! 保证同样的内容无论插入顺序如何都得到同样的 SQL。

use crate::args::{Arg, Operand};
use crate::error::{Result, ValidationError};
use crate::fragment::{Fragment, Rendered, impl_fragment_conversions};
use crate::placeholder::placeholders;
use std::collections::BTreeMap;

macro_rules! comparison_map {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default)]
            pub struct $name(pub BTreeMap<String, Operand>);

            impl $name {
                pub fn new() -> Self {
                    Self::default()
                }

                /// 追加（或覆盖）一列。
                pub fn with(mut self, column: impl Into<String>, value: impl Into<Operand>) -> Self {
                    self.0.insert(column.into(), value.into());
                    self
                }

                pub fn len(&self) -> usize {
                    self.0.len()
                }

                pub fn is_empty(&self) -> bool {
                    self.0.is_empty()
                }

                pub fn iter(&self) -> impl Iterator<Item = (&String, &Operand)> {
                    self.0.iter()
                }
            }

            impl<K, V> FromIterator<(K, V)> for $name
            where
                K: Into<String>,
                V: Into<Operand>,
            {
                fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
                }
            }

            impl From<BTreeMap<String, Operand>> for $name {
                fn from(v: BTreeMap<String, Operand>) -> Self {
                    Self(v)
                }
            }

            impl_fragment_conversions!($name);
        )*
    };
}

comparison_map!(
    /// `col = ?`；NULL 渲染为 `IS NULL`，值列表渲染为 `IN (...)`，空列表渲染为 `(1=0)`。
    Eq,
    /// `col <> ?`；NULL 渲染为 `IS NOT NULL`，值列表渲染为 `NOT IN (...)`，空列表渲染为 `(1=1)`。
    NotEq,
    /// `col < ?`
    Lt,
    /// `col <= ?`
    LtOrEq,
    /// `col > ?`
    Gt,
    /// `col >= ?`
    GtOrEq,
    /// `col LIKE ?`
    Like,
    /// `col NOT LIKE ?`
    NotLike,
    /// `col ILIKE ?`
    ILike,
    /// `col NOT ILIKE ?`
    NotILike,
);

fn join_entries(exprs: Vec<String>, args: Vec<Arg>) -> Rendered {
    (exprs.join(" AND "), args)
}

fn render_equality(map: &BTreeMap<String, Operand>, negate: bool) -> Result<Rendered> {
    let (eq_op, null_op, in_op, empty_list) = if negate {
        ("<>", "IS NOT NULL", "NOT IN", "(1=1)")
    } else {
        ("=", "IS NULL", "IN", "(1=0)")
    };

    let mut exprs = Vec::with_capacity(map.len());
    let mut args = Vec::new();
    for (col, value) in map {
        match value {
            v if v.is_null() => exprs.push(format!("{col} {null_op}")),
            Operand::Scalar(a) => {
                exprs.push(format!("{col} {eq_op} ?"));
                args.push(a.clone());
            }
            Operand::List(items) if items.is_empty() => exprs.push(empty_list.to_string()),
            Operand::List(items) => {
                exprs.push(format!("{col} {in_op} ({})", placeholders(items.len())));
                args.extend(items.iter().cloned());
            }
            Operand::Expr(_) | Operand::Subquery(_) => {
                let (sql, a) = value.render_value()?;
                exprs.push(format!("{col} {eq_op} {sql}"));
                args.extend(a);
            }
        }
    }
    Ok(join_entries(exprs, args))
}

/// 大小比较与 LIKE 族：只接受标量或片段。
fn render_binary(map: &BTreeMap<String, Operand>, op: &'static str) -> Result<Rendered> {
    let mut exprs = Vec::with_capacity(map.len());
    let mut args = Vec::new();
    for (col, value) in map {
        if value.is_null() {
            return Err(ValidationError::NullOperand {
                column: col.clone(),
                operator: op,
            }
            .into());
        }
        if let Operand::List(_) = value {
            return Err(ValidationError::ListOperand {
                column: col.clone(),
                operator: op,
            }
            .into());
        }
        let (sql, a) = value.render_value()?;
        exprs.push(format!("{col} {op} {sql}"));
        args.extend(a);
    }
    Ok(join_entries(exprs, args))
}

impl Fragment for Eq {
    fn render(&self) -> Result<Rendered> {
        render_equality(&self.0, false)
    }
}

impl Fragment for NotEq {
    fn render(&self) -> Result<Rendered> {
        render_equality(&self.0, true)
    }
}

macro_rules! impl_binary_fragment {
    ($($name:ident => $op:literal),* $(,)?) => {
        $(
            impl Fragment for $name {
                fn render(&self) -> Result<Rendered> {
                    render_binary(&self.0, $op)
                }
            }
        )*
    };
}

impl_binary_fragment!(
    Lt => "<",
    LtOrEq => "<=",
    Gt => ">",
    GtOrEq => ">=",
    Like => "LIKE",
    NotLike => "NOT LIKE",
    ILike => "ILIKE",
    NotILike => "NOT ILIKE",
);
