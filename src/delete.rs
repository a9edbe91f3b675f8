//! DeleteBuilder：构建 DELETE 语句。

use crate::clause::Clause;
use crate::error::{Result, ValidationError};
use crate::fragment::{Fragment, Part, Rendered};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::placeholder::PlaceholderFormat;
use crate::runner::RunnerRef;
use crate::statement::{StatementBuilder, impl_statement};
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    format: Option<PlaceholderFormat>,
    runner: Option<RunnerRef>,

    prefixes: Clause,
    table: Option<String>,
    where_parts: Clause,
    order_by: Clause,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Clause,
}

impl Default for DeleteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `DELETE FROM table ...`，使用进程默认配置。
pub fn delete(table: impl Into<String>) -> DeleteBuilder {
    DeleteBuilder::new().from(table)
}

impl DeleteBuilder {
    pub fn new() -> Self {
        Self {
            format: None,
            runner: None,
            prefixes: Clause::bare(" "),
            table: None,
            where_parts: Clause::new("WHERE", " AND "),
            order_by: Clause::new("ORDER BY", ", "),
            limit: None,
            offset: None,
            suffixes: Clause::bare(" "),
        }
    }

    pub(crate) fn from_base(base: &StatementBuilder) -> Self {
        let mut db = Self::new();
        db.format = base.format;
        db.runner = base.runner.clone();
        db.where_parts.extend(base.where_parts.iter().cloned());
        db
    }

    pub fn from(&self, table: impl Into<String>) -> Self {
        let table = Some(table.into()).filter(|t| !t.is_empty());
        self.with(|s| s.table = table)
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

impl_statement!(DeleteBuilder);

impl Fragment for DeleteBuilder {
    fn render(&self) -> Result<Rendered> {
        let Some(table) = &self.table else {
            return Err(ValidationError::MissingTable { statement: "delete" }.into());
        };

        let mut buf = StringBuilder::new();
        let mut args = Vec::new();

        self.prefixes.write_to(&mut buf, &mut args)?;
        buf.write_keyword("DELETE FROM", table);
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
