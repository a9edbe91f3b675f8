//! InsertBuilder：构建 INSERT / REPLACE 语句。

use crate::args::{Arg, Operand};
use crate::clause::Clause;
use crate::cond::Eq;
use crate::error::{Result, ValidationError};
use crate::fragment::{Fragment, Rendered};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::placeholder::PlaceholderFormat;
use crate::runner::RunnerRef;
use crate::select::SelectBuilder;
use crate::statement::{StatementBuilder, impl_statement};
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    format: Option<PlaceholderFormat>,
    runner: Option<RunnerRef>,

    verb: &'static str,
    prefixes: Clause,
    options: Vec<String>,
    table: Option<String>,
    columns: Vec<String>,
    rows: Vec<Vec<Operand>>,
    select: Option<Box<SelectBuilder>>,
    suffixes: Clause,
}

impl Default for InsertBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `INSERT INTO table ...`，使用进程默认配置。
pub fn insert(table: impl Into<String>) -> InsertBuilder {
    InsertBuilder::new().into_table(table)
}

/// `REPLACE INTO table ...`。
pub fn replace(table: impl Into<String>) -> InsertBuilder {
    StatementBuilder::default().replace(table)
}

impl InsertBuilder {
    pub fn new() -> Self {
        Self::with_verb("INSERT")
    }

    fn with_verb(verb: &'static str) -> Self {
        Self {
            format: None,
            runner: None,
            verb,
            prefixes: Clause::bare(" "),
            options: Vec::new(),
            table: None,
            columns: Vec::new(),
            rows: Vec::new(),
            select: None,
            suffixes: Clause::bare(" "),
        }
    }

    pub(crate) fn from_base(base: &StatementBuilder, verb: &'static str) -> Self {
        let mut ib = Self::with_verb(verb);
        ib.format = base.format;
        ib.runner = base.runner.clone();
        ib
    }

    /// 追加动词之后的选项，如 `IGNORE`。
    pub fn options(&self, options: impl IntoStrings) -> Self {
        let options = collect_into_strings(options);
        self.with(|s| s.options.extend(options))
    }

    pub fn into_table(&self, table: impl Into<String>) -> Self {
        let table = Some(table.into()).filter(|t| !t.is_empty());
        self.with(|s| s.table = table)
    }

    pub fn columns(&self, columns: impl IntoStrings) -> Self {
        let columns = collect_into_strings(columns);
        self.with(|s| s.columns.extend(columns))
    }

    /// 追加一行值；值可以是片段（如 `expr("? + 1", [1])`）。
    pub fn values<I, T>(&self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        let row: Vec<Operand> = row.into_iter().map(Into::into).collect();
        self.with(|s| s.rows.push(row))
    }

    /// 用等值映射替换列与值：列按名称排序，只产生一行。
    pub fn set_map(&self, values: impl Into<Eq>) -> Self {
        let values = values.into();
        self.with(|s| {
            let (columns, row): (Vec<String>, Vec<Operand>) = values.0.into_iter().unzip();
            s.columns = columns;
            s.rows = vec![row];
        })
    }

    /// `INSERT INTO t (cols) SELECT ...`；设置后忽略 VALUES。
    pub fn select(&self, sub: SelectBuilder) -> Self {
        self.with(|s| s.select = Some(Box::new(sub)))
    }

    fn write_rows(&self, buf: &mut StringBuilder, args: &mut Vec<Arg>) -> Result<()> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut values = Vec::with_capacity(row.len());
            for v in row {
                let (sql, a) = v.render_value()?;
                values.push(sql);
                args.extend(a);
            }
            rows.push(format!("({})", values.join(", ")));
        }
        buf.write_keyword("VALUES", &rows.join(", "));
        Ok(())
    }
}

impl_statement!(InsertBuilder);

impl Fragment for InsertBuilder {
    fn render(&self) -> Result<Rendered> {
        let Some(table) = &self.table else {
            return Err(ValidationError::MissingTable { statement: "insert" }.into());
        };
        if self.rows.is_empty() && self.select.is_none() {
            return Err(ValidationError::MissingInsertSource.into());
        }

        let mut buf = StringBuilder::new();
        let mut args = Vec::new();

        self.prefixes.write_to(&mut buf, &mut args)?;
        buf.write_leading(self.verb);
        for opt in &self.options {
            buf.write_str(" ");
            buf.write_str(opt);
        }
        buf.write_keyword("INTO", table);

        if !self.columns.is_empty() {
            buf.write_leading(&format!("({})", self.columns.join(", ")));
        }

        match &self.select {
            Some(sub) => {
                let (sql, a) = sub.render()?;
                buf.write_leading(&sql);
                args.extend(a);
            }
            None => self.write_rows(&mut buf, &mut args)?,
        }

        self.suffixes.write_to(&mut buf, &mut args)?;

        Ok((buf.into_string(), args))
    }
}
