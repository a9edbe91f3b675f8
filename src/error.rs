//! 错误类型：渲染期校验、占位符格式、Runner 透传。

use crate::valuer::ValuerError;

pub type Result<T> = std::result::Result<T, Error>;

/// Runner 上报的错误，不做任何解释，原样透传。
pub type RunnerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 渲染期发现的非法终态（构造期永不失败）。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{statement} statements must specify a table")]
    MissingTable { statement: &'static str },
    #[error("update statements must have at least one SET assignment")]
    MissingAssignments,
    #[error("insert statements must have at least one set of values or a select source")]
    MissingInsertSource,
    #[error("select statements must have at least one result column")]
    MissingColumns,
    #[error("case expression must contain at least one WHEN clause")]
    EmptyCase,
    #[error("cannot use NULL with {operator} operator on column {column}")]
    NullOperand {
        column: String,
        operator: &'static str,
    },
    #[error("cannot use a value list with {operator} operator on column {column}")]
    ListOperand {
        column: String,
        operator: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown placeholder format {0:?}")]
    Unknown(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("builder validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("builder format error: {0}")]
    Format(#[from] FormatError),
    /// 参数求值失败；runner 解析 [`crate::Arg`] 时可直接用 `?` 转换。
    #[error("{0}")]
    Valuer(#[from] ValuerError),
    #[error("builder runner not set")]
    RunnerNotSet,
    #[error("builder runner error: {0}")]
    Runner(#[source] RunnerError),
    #[error("builder no rows in result set")]
    NoRows,
}

impl Error {
    /// 是否为“没有挂 Runner”，用于和数据库侧的失败区分。
    pub fn is_runner_not_set(&self) -> bool {
        matches!(self, Self::RunnerNotSet)
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}
