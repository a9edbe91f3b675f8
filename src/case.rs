//! CASE 表达式。

use crate::error::{Result, ValidationError};
use crate::fragment::{Fragment, Part, Rendered, impl_fragment_conversions};

/// `CASE [subject] WHEN .. THEN .. [ELSE ..] END`。
///
/// WHEN / THEN / ELSE 都是片段：字符串按原始 SQL 处理，需要绑定参数时传 [`crate::Expr`]。
/// 参数顺序：subject、各 WHEN/THEN 对、ELSE。
#[derive(Debug, Clone, Default)]
pub struct CaseBuilder {
    subject: Option<Part>,
    whens: Vec<(Part, Part)>,
    else_part: Option<Part>,
}

/// 不带 subject 的 CASE（每个 WHEN 是一个条件）。
pub fn case() -> CaseBuilder {
    CaseBuilder::default()
}

/// 带 subject 的 CASE（每个 WHEN 是一个待比较的值）。
pub fn case_of(subject: impl Into<Part>) -> CaseBuilder {
    CaseBuilder {
        subject: Some(subject.into()),
        ..CaseBuilder::default()
    }
}

impl CaseBuilder {
    pub fn when(&self, cond: impl Into<Part>, then: impl Into<Part>) -> Self {
        let mut next = self.clone();
        next.whens.push((cond.into(), then.into()));
        next
    }

    pub fn else_(&self, value: impl Into<Part>) -> Self {
        let mut next = self.clone();
        next.else_part = Some(value.into());
        next
    }
}

impl Fragment for CaseBuilder {
    fn render(&self) -> Result<Rendered> {
        if self.whens.is_empty() {
            return Err(ValidationError::EmptyCase.into());
        }

        let mut sql = String::from("CASE");
        let mut args = Vec::new();
        let mut push = |keyword: &str, part: &Part| -> Result<()> {
            let (s, a) = part.render()?;
            sql.push(' ');
            sql.push_str(keyword);
            if !keyword.is_empty() {
                sql.push(' ');
            }
            sql.push_str(&s);
            args.extend(a);
            Ok(())
        };

        if let Some(subject) = &self.subject {
            push("", subject)?;
        }
        for (cond, then) in &self.whens {
            push("WHEN", cond)?;
            push("THEN", then)?;
        }
        if let Some(e) = &self.else_part {
            push("ELSE", e)?;
        }
        sql.push_str(" END");
        Ok((sql, args))
    }
}

impl_fragment_conversions!(CaseBuilder);
