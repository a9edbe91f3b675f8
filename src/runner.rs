//! Runner：调用方提供的执行能力。builder 只负责把最终 SQL 与参数交给它。

use crate::args::Arg;
use crate::error::{Error, Result, RunnerError};
use crate::statement::Statement;
use crate::value::SqlValue;
use std::fmt;
use std::sync::Arc;

/// `exec` 的结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    pub last_insert_id: Option<i64>,
}

pub type Row = Vec<SqlValue>;
pub type Rows = Box<dyn Iterator<Item = Row> + Send>;

/// 执行能力。线程安全由实现方负责；库内不做重试、超时或连接管理。
pub trait Runner: Send + Sync {
    fn exec(&self, sql: &str, args: &[Arg]) -> std::result::Result<ExecResult, RunnerError>;

    fn query(&self, sql: &str, args: &[Arg]) -> std::result::Result<Rows, RunnerError>;
}

/// builder 持有的 Runner 引用；生命周期由调用方管理。
#[derive(Clone)]
pub struct RunnerRef(Arc<dyn Runner>);

impl RunnerRef {
    pub(crate) fn new(runner: Arc<dyn Runner>) -> Self {
        Self(runner)
    }

    pub fn get(&self) -> &dyn Runner {
        self.0.as_ref()
    }
}

impl fmt::Debug for RunnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Runner(..)")
    }
}

/// 用指定 runner 执行语句（忽略语句自身挂的 runner）。
pub fn exec_with<S>(runner: &dyn Runner, stmt: &S) -> Result<ExecResult>
where
    S: Statement + ?Sized,
{
    let (sql, args) = stmt.build()?;
    tracing::debug!(sql = %sql, args = args.len(), "exec statement");
    runner.exec(&sql, &args).map_err(|e| {
        tracing::warn!(sql = %sql, error = %e, "runner exec failed");
        Error::Runner(e)
    })
}

/// 用指定 runner 查询。
pub fn query_with<S>(runner: &dyn Runner, stmt: &S) -> Result<Rows>
where
    S: Statement + ?Sized,
{
    let (sql, args) = stmt.build()?;
    tracing::debug!(sql = %sql, args = args.len(), "query statement");
    runner.query(&sql, &args).map_err(|e| {
        tracing::warn!(sql = %sql, error = %e, "runner query failed");
        Error::Runner(e)
    })
}

/// 查询并只取第一行；没有结果时返回 [`Error::NoRows`]。
pub fn query_row_with<S>(runner: &dyn Runner, stmt: &S) -> Result<Row>
where
    S: Statement + ?Sized,
{
    query_with(runner, stmt)?.next().ok_or(Error::NoRows)
}
