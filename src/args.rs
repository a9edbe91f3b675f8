//! 参数模型：输出参数 [`Arg`] 与输入操作数 [`Operand`]。
//!
//! - `Arg` 是渲染结果里参数列表的元素，一个 `Arg` 对应 SQL 里的一个占位符。
//! - `Operand` 是调用方交给 builder 的“值”：标量、值列表、或一个片段（表达式/子查询）。
//!   渲染器按变体分派，而不是在运行期猜测类型。

use crate::fragment::{Fragment, Part};
use crate::placeholder::placeholders;
use crate::value::SqlValue;
use crate::valuer::{SqlValuer, ValuerError};

/// 参数列表中的一个元素。
#[derive(Clone)]
pub enum Arg {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
}

impl Arg {
    /// 取得实际值；`Valuer` 在这里才会被调用。
    pub fn resolve(&self) -> Result<SqlValue, ValuerError> {
        match self {
            Self::Value(v) => Ok(v.clone()),
            Self::Valuer(v) => v.value(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(SqlValue::Null))
    }
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Valuer(v) => f.debug_tuple("Valuer").field(v).finish(),
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl From<SqlValue> for Arg {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

impl From<Box<dyn SqlValuer>> for Arg {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

impl<T> From<Option<T>> for Arg
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}

macro_rules! impl_scalar_conversions {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Self::Value(SqlValue::from(v))
                }
            }

            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Self::Scalar(Arg::from(v))
                }
            }
        )*
    };
}

impl_scalar_conversions!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &'static str,
    time::OffsetDateTime,
);

impl From<Vec<u8>> for Arg {
    fn from(v: Vec<u8>) -> Self {
        Self::Value(SqlValue::Bytes(v))
    }
}

/// builder 接收的值。
#[derive(Debug, Clone)]
pub enum Operand {
    /// 单个参数，渲染为一个占位符。
    Scalar(Arg),
    /// 多个参数；在等值比较里渲染为 `IN (...)`。
    List(Vec<Arg>),
    /// 原样拼入的片段（表达式、CASE 等）。
    Expr(Part),
    /// 嵌套语句，拼入时加括号。
    Subquery(Part),
}

impl Operand {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(a) if a.is_null())
    }

    /// 渲染为“值”位置上的 SQL：标量 `?`，列表 `(?, ?)`，子查询 `(...)`。
    pub(crate) fn render_value(&self) -> crate::Result<(String, Vec<Arg>)> {
        match self {
            Self::Scalar(a) => Ok(("?".to_string(), vec![a.clone()])),
            Self::List(items) => Ok((format!("({})", placeholders(items.len())), items.clone())),
            Self::Expr(p) => p.render(),
            Self::Subquery(p) => {
                let (sql, args) = p.render()?;
                Ok((format!("({sql})"), args))
            }
        }
    }

    /// 只取参数，不要 SQL（用于多余参数的追加）。
    pub(crate) fn render_args(&self) -> crate::Result<Vec<Arg>> {
        match self {
            Self::Scalar(a) => Ok(vec![a.clone()]),
            Self::List(items) => Ok(items.clone()),
            Self::Expr(p) | Self::Subquery(p) => Ok(p.render()?.1),
        }
    }
}

impl From<Arg> for Operand {
    fn from(v: Arg) -> Self {
        Self::Scalar(v)
    }
}

impl From<SqlValue> for Operand {
    fn from(v: SqlValue) -> Self {
        Self::Scalar(Arg::Value(v))
    }
}

impl From<Box<dyn SqlValuer>> for Operand {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Scalar(Arg::Valuer(v))
    }
}

impl<T> From<Option<T>> for Operand
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::Scalar(Arg::from(v))
    }
}

/// `Vec<u8>` 是一个二进制标量，不是值列表。
impl From<Vec<u8>> for Operand {
    fn from(v: Vec<u8>) -> Self {
        Self::Scalar(Arg::Value(SqlValue::Bytes(v)))
    }
}

macro_rules! impl_list_conversions {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<Vec<$t>> for Operand {
                fn from(v: Vec<$t>) -> Self {
                    Self::List(v.into_iter().map(Arg::from).collect())
                }
            }

            impl<const N: usize> From<[$t; N]> for Operand {
                fn from(v: [$t; N]) -> Self {
                    Self::List(v.into_iter().map(Arg::from).collect())
                }
            }
        )*
    };
}

// 不含 u8：字节序列按二进制标量处理。
impl_list_conversions!(
    Arg,
    SqlValue,
    bool,
    i8,
    i16,
    i32,
    i64,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &'static str,
    time::OffsetDateTime,
    Vec<u8>,
    Box<dyn SqlValuer>,
);

impl<T> From<Vec<Option<T>>> for Operand
where
    T: Into<SqlValue>,
{
    fn from(v: Vec<Option<T>>) -> Self {
        Self::List(v.into_iter().map(Arg::from).collect())
    }
}

impl From<Part> for Operand {
    fn from(v: Part) -> Self {
        Self::Expr(v)
    }
}
