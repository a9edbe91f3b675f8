//! 原始 SQL 片段、别名、拼接与 AND/OR 连接。

use crate::args::{Arg, Operand};
use crate::error::Result;
use crate::fragment::{Fragment, Part, Rendered, impl_fragment_conversions};
use crate::placeholder::{PLACEHOLDER, placeholders};

/// 一段原始 SQL 与它绑定的参数。
///
/// 参数按 `?` 出现的顺序对应：
/// - 标量保留 `?` 并追加参数；
/// - 值列表把 `?` 展开为 `?, ?, ...`；
/// - 片段（表达式 / 子查询）用其 SQL 原样替换 `?`，并在该位置拼入它的参数。
///
/// `??` 是字面问号的转义，不消耗参数。比 `?` 多出来的参数追加在参数列表末尾。
#[derive(Debug, Clone)]
pub struct Expr {
    sql: String,
    args: Vec<Operand>,
}

impl Expr {
    pub fn new<I, T>(sql: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        Self {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// 不带参数的原始 SQL。
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }
}

impl Fragment for Expr {
    fn render(&self) -> Result<Rendered> {
        let mut out = String::with_capacity(self.sql.len());
        let mut args: Vec<Arg> = Vec::new();
        let mut rest = self.sql.as_str();
        let mut operands = self.args.iter();
        let mut next = operands.next();

        while let Some(op) = next {
            let Some(pos) = rest.find(PLACEHOLDER) else {
                break;
            };
            if rest[pos + 1..].starts_with(PLACEHOLDER) {
                out.push_str(&rest[..pos + 2]);
                rest = &rest[pos + 2..];
                continue;
            }
            out.push_str(&rest[..pos]);
            rest = &rest[pos + 1..];

            match op {
                Operand::Scalar(a) => {
                    out.push(PLACEHOLDER);
                    args.push(a.clone());
                }
                Operand::List(items) => {
                    out.push_str(&placeholders(items.len()));
                    args.extend(items.iter().cloned());
                }
                Operand::Expr(p) | Operand::Subquery(p) => {
                    let (sql, a) = p.render()?;
                    out.push_str(&sql);
                    args.extend(a);
                }
            }
            next = operands.next();
        }
        out.push_str(rest);

        for op in next.into_iter().chain(operands) {
            args.extend(op.render_args()?);
        }
        Ok((out, args))
    }
}

/// `Expr::new` 的简写。
pub fn expr<I, T>(sql: impl Into<String>, args: I) -> Expr
where
    I: IntoIterator<Item = T>,
    T: Into<Operand>,
{
    Expr::new(sql, args)
}

/// `Expr::raw` 的简写。
pub fn raw(sql: impl Into<String>) -> Expr {
    Expr::raw(sql)
}

/// `(<sql>) AS alias`。
#[derive(Debug, Clone)]
pub struct Alias {
    part: Part,
    alias: String,
}

impl Fragment for Alias {
    fn render(&self) -> Result<Rendered> {
        let (sql, args) = self.part.render()?;
        Ok((format!("({sql}) AS {}", self.alias), args))
    }
}

pub fn alias(part: impl Into<Part>, alias: impl Into<String>) -> Alias {
    Alias {
        part: part.into(),
        alias: alias.into(),
    }
}

/// 把若干片段首尾相接（不加分隔符）。
#[derive(Debug, Clone)]
pub struct Concat(Vec<Part>);

impl Fragment for Concat {
    fn render(&self) -> Result<Rendered> {
        let mut sql = String::new();
        let mut args = Vec::new();
        for p in &self.0 {
            let (s, a) = p.render()?;
            sql.push_str(&s);
            args.extend(a);
        }
        Ok((sql, args))
    }
}

pub fn concat_expr<I, T>(parts: I) -> Concat
where
    I: IntoIterator<Item = T>,
    T: Into<Part>,
{
    Concat(parts.into_iter().map(Into::into).collect())
}

fn render_conj(parts: &[Part], sep: &str, when_empty: &str) -> Result<Rendered> {
    if parts.is_empty() {
        return Ok((when_empty.to_string(), Vec::new()));
    }
    let mut sqls = Vec::with_capacity(parts.len());
    let mut args = Vec::new();
    for p in parts {
        let (s, a) = p.render()?;
        if s.is_empty() {
            continue;
        }
        sqls.push(s);
        args.extend(a);
    }
    if sqls.is_empty() {
        return Ok((String::new(), args));
    }
    Ok((format!("({})", sqls.join(sep)), args))
}

/// `(a AND b AND ...)`；没有任何条件时为 `(1=1)`。
#[derive(Debug, Clone, Default)]
pub struct And(pub Vec<Part>);

/// `(a OR b OR ...)`；没有任何条件时为 `(1=0)`。
#[derive(Debug, Clone, Default)]
pub struct Or(pub Vec<Part>);

impl And {
    pub fn new<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Part>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }
}

impl Or {
    pub fn new<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Part>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }
}

impl Fragment for And {
    fn render(&self) -> Result<Rendered> {
        render_conj(&self.0, " AND ", "(1=1)")
    }
}

impl Fragment for Or {
    fn render(&self) -> Result<Rendered> {
        render_conj(&self.0, " OR ", "(1=0)")
    }
}

impl_fragment_conversions!(Expr, Alias, Concat, And, Or);
