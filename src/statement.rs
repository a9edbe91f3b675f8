//! Statement：四种语句 builder 的公共能力，以及共享配置的 [`StatementBuilder`]。

use crate::delete::DeleteBuilder;
use crate::error::{Error, Result};
use crate::fragment::{Fragment, Part, Rendered};
use crate::insert::InsertBuilder;
use crate::macros::IntoStrings;
use crate::placeholder::{PlaceholderFormat, default_placeholder_format};
use crate::runner::{ExecResult, Row, Rows, Runner, RunnerRef, exec_with, query_row_with, query_with};
use crate::select::SelectBuilder;
use crate::update::UpdateBuilder;
use std::sync::Arc;

/// 顶层语句：渲染、改写占位符、交给 Runner 执行。
pub trait Statement: Fragment {
    /// 显式设置的占位符格式；`None` 表示渲染时读取进程默认值。
    fn configured_format(&self) -> Option<PlaceholderFormat>;

    fn attached_runner(&self) -> Option<&RunnerRef>;

    /// 渲染并按配置的格式改写占位符。
    ///
    /// 未显式设置格式时，每次调用都重新读取进程默认值，因此同一快照在默认值
    /// 被修改前后会得到不同文本。需要稳定输出时显式调用 `placeholder_format`。
    fn build(&self) -> Result<Rendered> {
        let format = self
            .configured_format()
            .unwrap_or_else(default_placeholder_format);
        self.build_with_format(format)
    }

    fn build_with_format(&self, format: PlaceholderFormat) -> Result<Rendered> {
        let (sql, args) = self.render()?;
        let sql = format.replace_placeholders(&sql);
        tracing::trace!(sql = %sql, args = args.len(), %format, "statement rendered");
        Ok((sql, args))
    }

    /// 与 `build` 相同，但渲染失败时直接 panic。
    ///
    /// 只适合调用方已经确保语句合法的场景。
    fn must_build(&self) -> Rendered {
        match self.build() {
            Ok(rendered) => rendered,
            Err(e) => panic!("{e}"),
        }
    }

    fn exec(&self) -> Result<ExecResult> {
        let runner = self.attached_runner().ok_or(Error::RunnerNotSet)?;
        exec_with(runner.get(), self)
    }

    fn query(&self) -> Result<Rows> {
        let runner = self.attached_runner().ok_or(Error::RunnerNotSet)?;
        query_with(runner.get(), self)
    }

    fn query_row(&self) -> Result<Row> {
        let runner = self.attached_runner().ok_or(Error::RunnerNotSet)?;
        query_row_with(runner.get(), self)
    }
}

/// 为语句 builder 生成公共的写时复制 setter 与 [`Statement`] 实现。
///
/// 要求结构体包含 `format`、`runner`、`prefixes`、`suffixes` 四个字段。
macro_rules! impl_statement {
    ($name:ident) => {
        impl $name {
            fn with(&self, f: impl FnOnce(&mut Self)) -> Self {
                let mut next = self.clone();
                f(&mut next);
                next
            }

            /// 设置占位符格式；嵌套在本语句里的子语句一并按此格式输出。
            pub fn placeholder_format(&self, format: $crate::placeholder::PlaceholderFormat) -> Self {
                self.with(|s| s.format = Some(format))
            }

            pub fn run_with(&self, runner: ::std::sync::Arc<dyn $crate::runner::Runner>) -> Self {
                self.with(|s| s.runner = Some($crate::runner::RunnerRef::new(runner)))
            }

            /// 语句最前面的片段，如 `WITH ... AS (...)`；多个前缀以空格连接。
            pub fn prefix(&self, part: impl Into<$crate::fragment::Part>) -> Self {
                let part = part.into();
                self.with(|s| s.prefixes.push(part))
            }

            /// 语句最后面的片段，如 `RETURNING id`；多个后缀以空格连接。
            pub fn suffix(&self, part: impl Into<$crate::fragment::Part>) -> Self {
                let part = part.into();
                self.with(|s| s.suffixes.push(part))
            }

            /// 见 [`crate::Statement::build`]：未设置格式时在渲染时读取进程默认值。
            pub fn build(&self) -> $crate::error::Result<$crate::fragment::Rendered> {
                $crate::statement::Statement::build(self)
            }
        }

        impl $crate::statement::Statement for $name {
            fn configured_format(&self) -> Option<$crate::placeholder::PlaceholderFormat> {
                self.format
            }

            fn attached_runner(&self) -> Option<&$crate::runner::RunnerRef> {
                self.runner.as_ref()
            }
        }
    };
}
pub(crate) use impl_statement;

/// 共享配置：占位符格式、Runner、以及所有由它创建的 SELECT/UPDATE/DELETE 共有的 WHERE 条件。
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    pub(crate) format: Option<PlaceholderFormat>,
    pub(crate) runner: Option<RunnerRef>,
    pub(crate) where_parts: Vec<Part>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder_format(&self, format: PlaceholderFormat) -> Self {
        let mut next = self.clone();
        next.format = Some(format);
        next
    }

    pub fn run_with(&self, runner: Arc<dyn Runner>) -> Self {
        let mut next = self.clone();
        next.runner = Some(RunnerRef::new(runner));
        next
    }

    pub fn where_(&self, pred: impl Into<Part>) -> Self {
        let mut next = self.clone();
        next.where_parts.push(pred.into());
        next
    }

    pub fn select(&self, columns: impl IntoStrings) -> SelectBuilder {
        SelectBuilder::from_base(self).columns(columns)
    }

    pub fn insert(&self, table: impl Into<String>) -> InsertBuilder {
        InsertBuilder::from_base(self, "INSERT").into_table(table)
    }

    /// `REPLACE INTO ...`（MySQL）。
    pub fn replace(&self, table: impl Into<String>) -> InsertBuilder {
        InsertBuilder::from_base(self, "REPLACE").into_table(table)
    }

    pub fn update(&self, tables: impl IntoStrings) -> UpdateBuilder {
        UpdateBuilder::from_base(self).table(tables)
    }

    pub fn delete(&self, table: impl Into<String>) -> DeleteBuilder {
        DeleteBuilder::from_base(self).from(table)
    }
}
