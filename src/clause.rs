//! Clause：某个子句下按顺序累积的片段。

use crate::args::Arg;
use crate::error::Result;
use crate::fragment::{Fragment, Part, Rendered};
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
pub(crate) struct Clause {
    keyword: Option<&'static str>,
    sep: &'static str,
    parts: Vec<Part>,
}

impl Clause {
    /// 带关键字的子句，如 `WHERE` / `ORDER BY`。
    pub(crate) const fn new(keyword: &'static str, sep: &'static str) -> Self {
        Self {
            keyword: Some(keyword),
            sep,
            parts: Vec::new(),
        }
    }

    /// 没有关键字的子句，如列清单、前后缀、JOIN。
    pub(crate) const fn bare(sep: &'static str) -> Self {
        Self {
            keyword: None,
            sep,
            parts: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, part: impl Into<Part>) {
        self.parts.push(part.into());
    }

    pub(crate) fn extend(&mut self, parts: impl IntoIterator<Item = Part>) {
        self.parts.extend(parts);
    }

    pub(crate) fn clear(&mut self) {
        self.parts.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// 渲染所有片段；渲染为空文本的片段被跳过，全部为空时返回 `None`。
    pub(crate) fn render(&self) -> Result<Option<Rendered>> {
        let mut sql = String::new();
        let mut args = Vec::new();
        for part in &self.parts {
            let (s, a) = part.render()?;
            if s.is_empty() {
                continue;
            }
            if !sql.is_empty() {
                sql.push_str(self.sep);
            }
            sql.push_str(&s);
            args.extend(a);
        }
        if sql.is_empty() {
            return Ok(None);
        }
        Ok(Some((sql, args)))
    }

    /// 追加到语句缓冲；空子句不留任何痕迹（包括关键字）。
    pub(crate) fn write_to(&self, buf: &mut StringBuilder, args: &mut Vec<Arg>) -> Result<()> {
        let Some((sql, a)) = self.render()? else {
            return Ok(());
        };
        match self.keyword {
            Some(kw) => buf.write_keyword(kw, &sql),
            None => buf.write_leading(&sql),
        }
        args.extend(a);
        Ok(())
    }
}
