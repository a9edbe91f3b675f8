//! 调试用插值：把参数以字面量形式内联进 SQL，便于日志与排查。
//!
//! 安全警告：输出只给人看，永远不要拿去执行。字符串字面量内部的 `?` 不做识别。

use crate::args::Arg;
use crate::error::Error;
use crate::fragment::Fragment;
use crate::placeholder::PLACEHOLDER;
use crate::value::SqlValue;

#[derive(Debug, thiserror::Error)]
enum InlineError {
    #[error("{0}")]
    Render(#[from] Error),
    #[error("datetime format: {0}")]
    DateTime(#[from] time::error::Format),
    #[error("missing argument for placeholder #{0}")]
    MissingArg(usize),
    #[error("{0} surplus argument(s) without placeholder")]
    SurplusArgs(usize),
}

/// 渲染片段并内联所有参数。渲染失败或占位符与参数数量不一致时，
/// 返回 `[debug_sql error: ...]`。
pub fn debug_sql<F>(fragment: &F) -> String
where
    F: Fragment + ?Sized,
{
    let inlined = fragment
        .render()
        .map_err(InlineError::from)
        .and_then(|(sql, args)| inline_args(&sql, &args));
    match inlined {
        Ok(sql) => sql,
        Err(e) => format!("[debug_sql error: {e}]"),
    }
}

fn inline_args(sql: &str, args: &[Arg]) -> Result<String, InlineError> {
    let mut out = String::with_capacity(sql.len() + args.len() * 8);
    let mut args_iter = args.iter();
    let mut used = 0usize;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if c != PLACEHOLDER {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&PLACEHOLDER) {
            chars.next();
            out.push(PLACEHOLDER);
            continue;
        }
        used += 1;
        let arg = args_iter.next().ok_or(InlineError::MissingArg(used))?;
        encode_value(&mut out, &arg.resolve().map_err(Error::from)?)?;
    }

    let surplus = args_iter.count();
    if surplus > 0 {
        return Err(InlineError::SurplusArgs(surplus));
    }
    Ok(out)
}

fn encode_value(out: &mut String, v: &SqlValue) -> Result<(), InlineError> {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::String(s) => quote_string(out, s),
        SqlValue::Bytes(b) => {
            out.push_str("X'");
            push_hex(out, b);
            out.push('\'');
        }
        SqlValue::DateTime(dt) => {
            let s = dt.format(time::macros::format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))?;
            quote_string(out, &s);
        }
    }
    Ok(())
}

/// 单引号包裹，内部单引号写成 `''`。
fn quote_string(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for b in data {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
}
