//! SqlValuer：在渲染之后、执行之前才计算实际值的参数。
//!
//! Builder 只会把 valuer 原样放进参数列表；由 Runner（或 `debug_sql`）调用
//! [`crate::Arg::resolve`] 取值。

use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("builder sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可延迟计算实际值的参数。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug + Send + Sync {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);
