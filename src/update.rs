//! UpdateBuilder：构建 UPDATE 语句。

use crate::args::Operand;
use crate::clause::Clause;
use crate::cond::Eq;
use crate::error::{Result, ValidationError};
use crate::expr::alias;
use crate::fragment::{Fragment, Part, Rendered};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::placeholder::PlaceholderFormat;
use crate::runner::RunnerRef;
use crate::select::SelectBuilder;
use crate::statement::{StatementBuilder, impl_statement};
use crate::string_builder::StringBuilder;

/// `column = value`；子查询值会加括号。
#[derive(Debug, Clone)]
struct Assignment {
    column: String,
    value: Operand,
}

impl Fragment for Assignment {
    fn render(&self) -> Result<Rendered> {
        let (sql, args) = self.value.render_value()?;
        Ok((format!("{} = {sql}", self.column), args))
    }
}

/// 不可变的 UPDATE builder。
///
/// 渲染顺序：前缀、`UPDATE`、`SET`、`FROM`、`WHERE`、`ORDER BY`、`LIMIT`、`OFFSET`、后缀。
/// 没有表或没有任何赋值时渲染失败。
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    format: Option<PlaceholderFormat>,
    runner: Option<RunnerRef>,

    prefixes: Clause,
    tables: Vec<String>,
    assignments: Clause,
    from: Clause,
    where_parts: Clause,
    order_by: Clause,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Clause,
}

impl Default for UpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `UPDATE tables ...`，使用进程默认配置。
pub fn update(tables: impl IntoStrings) -> UpdateBuilder {
    UpdateBuilder::new().table(tables)
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self {
            format: None,
            runner: None,
            prefixes: Clause::bare(" "),
            tables: Vec::new(),
            assignments: Clause::new("SET", ", "),
            from: Clause::new("FROM", ", "),
            where_parts: Clause::new("WHERE", " AND "),
            order_by: Clause::new("ORDER BY", ", "),
            limit: None,
            offset: None,
            suffixes: Clause::bare(" "),
        }
    }

    pub(crate) fn from_base(base: &StatementBuilder) -> Self {
        let mut ub = Self::new();
        ub.format = base.format;
        ub.runner = base.runner.clone();
        ub.where_parts.extend(base.where_parts.iter().cloned());
        ub
    }

    /// 替换目标表清单；空字符串会被忽略。
    pub fn table(&self, tables: impl IntoStrings) -> Self {
        let tables = collect_into_strings(tables);
        self.with(|s| s.tables = tables)
    }

    pub fn set(&self, column: impl Into<String>, value: impl Into<Operand>) -> Self {
        let part = Part::new(Assignment {
            column: column.into(),
            value: value.into(),
        });
        self.with(|s| s.assignments.push(part))
    }

    /// 按列名排序把等值映射并入 SET。
    pub fn set_map(&self, values: impl Into<Eq>) -> Self {
        let values = values.into();
        self.with(|s| {
            for (column, value) in values.0 {
                s.assignments.push(Part::new(Assignment { column, value }));
            }
        })
    }

    pub fn from(&self, tables: impl IntoStrings) -> Self {
        let tables = collect_into_strings(tables);
        self.with(|s| {
            for t in tables {
                s.from.push(t);
            }
        })
    }

    /// `FROM (<sub>) AS alias`。
    pub fn from_select(&self, sub: SelectBuilder, alias_name: impl Into<String>) -> Self {
        let part = Part::from(alias(sub, alias_name));
        self.with(|s| s.from.push(part))
    }

    pub fn where_(&self, pred: impl Into<Part>) -> Self {
        let pred = pred.into();
        self.with(|s| s.where_parts.push(pred))
    }

    pub fn order_by(&self, columns: impl IntoStrings) -> Self {
        let columns = collect_into_strings(columns);
        self.with(|s| {
            for c in columns {
                s.order_by.push(c);
            }
        })
    }

    pub fn limit(&self, limit: u64) -> Self {
        self.with(|s| s.limit = Some(limit))
    }

    pub fn offset(&self, offset: u64) -> Self {
        self.with(|s| s.offset = Some(offset))
    }
}

impl_statement!(UpdateBuilder);

impl Fragment for UpdateBuilder {
    fn render(&self) -> Result<Rendered> {
        if self.tables.is_empty() {
            return Err(ValidationError::MissingTable { statement: "update" }.into());
        }
        if self.assignments.is_empty() {
            return Err(ValidationError::MissingAssignments.into());
        }

        let mut buf = StringBuilder::new();
        let mut args = Vec::new();

        self.prefixes.write_to(&mut buf, &mut args)?;
        buf.write_keyword("UPDATE", &self.tables.join(", "));
        self.assignments.write_to(&mut buf, &mut args)?;
        self.from.write_to(&mut buf, &mut args)?;
        self.where_parts.write_to(&mut buf, &mut args)?;
        self.order_by.write_to(&mut buf, &mut args)?;

        if let Some(limit) = self.limit {
            buf.write_keyword("LIMIT", &limit.to_string());
        }
        if let Some(offset) = self.offset {
            buf.write_keyword("OFFSET", &offset.to_string());
        }

        self.suffixes.write_to(&mut buf, &mut args)?;

        Ok((buf.into_string(), args))
    }
}
