//! SelectBuilder：构建 SELECT 语句。

use crate::args::Operand;
use crate::clause::Clause;
use crate::error::{Result, ValidationError};
use crate::expr::alias;
use crate::fragment::{Fragment, Part, Rendered};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::placeholder::PlaceholderFormat;
use crate::runner::RunnerRef;
use crate::statement::{StatementBuilder, impl_statement};
use crate::string_builder::StringBuilder;

/// JOIN 的种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Join,
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Join => "JOIN",
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

#[derive(Debug, Clone)]
struct JoinPart {
    kind: JoinKind,
    target: Part,
}

impl Fragment for JoinPart {
    fn render(&self) -> Result<Rendered> {
        let (sql, args) = self.target.render()?;
        Ok((format!("{} {sql}", self.kind.as_str()), args))
    }
}

/// 不可变的 SELECT builder：每次调用都返回一个新快照，原值保持不变。
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    format: Option<PlaceholderFormat>,
    runner: Option<RunnerRef>,

    prefixes: Clause,
    distinct: bool,
    options: Vec<String>,
    columns: Clause,
    from: Clause,
    joins: Clause,
    where_parts: Clause,
    group_by: Clause,
    having: Clause,
    order_by: Clause,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Clause,
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `SELECT columns ...`，使用进程默认配置。
pub fn select(columns: impl IntoStrings) -> SelectBuilder {
    SelectBuilder::new().columns(columns)
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self {
            format: None,
            runner: None,
            prefixes: Clause::bare(" "),
            distinct: false,
            options: Vec::new(),
            columns: Clause::bare(", "),
            from: Clause::new("FROM", ", "),
            joins: Clause::bare(" "),
            where_parts: Clause::new("WHERE", " AND "),
            group_by: Clause::new("GROUP BY", ", "),
            having: Clause::new("HAVING", " AND "),
            order_by: Clause::new("ORDER BY", ", "),
            limit: None,
            offset: None,
            suffixes: Clause::bare(" "),
        }
    }

    pub(crate) fn from_base(base: &StatementBuilder) -> Self {
        let mut sb = Self::new();
        sb.format = base.format;
        sb.runner = base.runner.clone();
        sb.where_parts.extend(base.where_parts.iter().cloned());
        sb
    }

    pub fn distinct(&self) -> Self {
        self.with(|s| s.distinct = true)
    }

    /// 追加 SELECT 关键字之后的选项，如 `SQL_NO_CACHE`。
    pub fn options(&self, options: impl IntoStrings) -> Self {
        let options = collect_into_strings(options);
        self.with(|s| s.options.extend(options))
    }

    pub fn columns(&self, columns: impl IntoStrings) -> Self {
        let columns = collect_into_strings(columns);
        self.with(|s| {
            for c in columns {
                s.columns.push(c);
            }
        })
    }

    /// 追加一个结果列片段，可以带参数或是一个别名子查询。
    pub fn column(&self, column: impl Into<Part>) -> Self {
        let column = column.into();
        self.with(|s| s.columns.push(column))
    }

    pub fn remove_columns(&self) -> Self {
        self.with(|s| s.columns.clear())
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

    pub fn join_clause(&self, kind: JoinKind, target: impl Into<Part>) -> Self {
        let part = Part::new(JoinPart {
            kind,
            target: target.into(),
        });
        self.with(|s| s.joins.push(part))
    }

    pub fn join(&self, target: impl Into<Part>) -> Self {
        self.join_clause(JoinKind::Join, target)
    }

    pub fn inner_join(&self, target: impl Into<Part>) -> Self {
        self.join_clause(JoinKind::Inner, target)
    }

    pub fn left_join(&self, target: impl Into<Part>) -> Self {
        self.join_clause(JoinKind::Left, target)
    }

    pub fn right_join(&self, target: impl Into<Part>) -> Self {
        self.join_clause(JoinKind::Right, target)
    }

    pub fn full_join(&self, target: impl Into<Part>) -> Self {
        self.join_clause(JoinKind::Full, target)
    }

    pub fn cross_join(&self, target: impl Into<Part>) -> Self {
        self.join_clause(JoinKind::Cross, target)
    }

    /// 追加一个 WHERE 条件，多个条件以 AND 连接。
    pub fn where_(&self, pred: impl Into<Part>) -> Self {
        let pred = pred.into();
        self.with(|s| s.where_parts.push(pred))
    }

    pub fn group_by(&self, columns: impl IntoStrings) -> Self {
        let columns = collect_into_strings(columns);
        self.with(|s| {
            for c in columns {
                s.group_by.push(c);
            }
        })
    }

    pub fn having(&self, pred: impl Into<Part>) -> Self {
        let pred = pred.into();
        self.with(|s| s.having.push(pred))
    }

    pub fn order_by(&self, columns: impl IntoStrings) -> Self {
        let columns = collect_into_strings(columns);
        self.with(|s| {
            for c in columns {
                s.order_by.push(c);
            }
        })
    }

    /// 带参数的排序项，如 `expr("id = ? DESC", [1])`。
    pub fn order_by_clause(&self, part: impl Into<Part>) -> Self {
        let part = part.into();
        self.with(|s| s.order_by.push(part))
    }

    pub fn limit(&self, limit: u64) -> Self {
        self.with(|s| s.limit = Some(limit))
    }

    pub fn remove_limit(&self) -> Self {
        self.with(|s| s.limit = None)
    }

    pub fn offset(&self, offset: u64) -> Self {
        self.with(|s| s.offset = Some(offset))
    }

    pub fn remove_offset(&self) -> Self {
        self.with(|s| s.offset = None)
    }
}

impl_statement!(SelectBuilder);

impl Fragment for SelectBuilder {
    fn render(&self) -> Result<Rendered> {
        if self.columns.is_empty() {
            return Err(ValidationError::MissingColumns.into());
        }

        let mut buf = StringBuilder::new();
        let mut args = Vec::new();

        self.prefixes.write_to(&mut buf, &mut args)?;

        buf.write_leading("SELECT");
        if self.distinct {
            buf.write_str(" DISTINCT");
        }
        for opt in &self.options {
            buf.write_str(" ");
            buf.write_str(opt);
        }

        self.columns.write_to(&mut buf, &mut args)?;
        self.from.write_to(&mut buf, &mut args)?;
        self.joins.write_to(&mut buf, &mut args)?;
        self.where_parts.write_to(&mut buf, &mut args)?;
        self.group_by.write_to(&mut buf, &mut args)?;
        self.having.write_to(&mut buf, &mut args)?;
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

impl From<SelectBuilder> for Part {
    fn from(v: SelectBuilder) -> Self {
        Part::new(v)
    }
}

/// 作为值使用时是子查询，渲染时加括号。
impl From<SelectBuilder> for Operand {
    fn from(v: SelectBuilder) -> Self {
        Operand::Subquery(Part::new(v))
    }
}
