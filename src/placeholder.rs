//! 占位符格式：把通用的 `?` 改写为目标数据库的参数语法。
//!
//! 所有片段内部一律输出 `?`；只有最外层语句在最终渲染时调用一次
//! [`PlaceholderFormat::replace_placeholders`]。

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 片段内部使用的通用占位符。
pub const PLACEHOLDER: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceholderFormat {
    /// `?`，原样输出（MySQL / SQLite）。
    #[default]
    Question,
    /// `$1, $2, ...`（PostgreSQL）。
    Dollar,
    /// `:1, :2, ...`（Oracle）。
    Colon,
    /// `@p1, @p2, ...`（SQL Server）。
    AtP,
}

static DEFAULT_FORMAT: AtomicU8 = AtomicU8::new(PlaceholderFormat::Question as u8);
static DEFAULT_FORMAT_LOCK: Mutex<()> = Mutex::new(());

impl PlaceholderFormat {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Dollar,
            2 => Self::Colon,
            3 => Self::AtP,
            _ => Self::Question,
        }
    }

    fn numbered_prefix(self) -> Option<&'static str> {
        match self {
            Self::Question => None,
            Self::Dollar => Some("$"),
            Self::Colon => Some(":"),
            Self::AtP => Some("@p"),
        }
    }

    /// 改写 `sql` 中的占位符。
    ///
    /// 编号格式下第 N 个 `?` 变为 `<prefix>N`，`??` 是转义，输出一个字面 `?` 且不计数。
    /// 字符串字面量内的 `?` 同样会被改写。
    pub fn replace_placeholders(self, sql: &str) -> String {
        let Some(prefix) = self.numbered_prefix() else {
            return sql.to_string();
        };

        let mut out = String::with_capacity(sql.len() + 16);
        let mut rest = sql;
        let mut n = 0usize;
        while let Some(pos) = rest.find(PLACEHOLDER) {
            out.push_str(&rest[..pos]);
            rest = &rest[pos + 1..];
            if let Some(r) = rest.strip_prefix(PLACEHOLDER) {
                out.push(PLACEHOLDER);
                rest = r;
                continue;
            }
            n += 1;
            out.push_str(prefix);
            out.push_str(&n.to_string());
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for PlaceholderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Question => "question",
            Self::Dollar => "dollar",
            Self::Colon => "colon",
            Self::AtP => "atp",
        };
        f.write_str(s)
    }
}

impl FromStr for PlaceholderFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" | "?" => Ok(Self::Question),
            "dollar" | "$" => Ok(Self::Dollar),
            "colon" | ":" => Ok(Self::Colon),
            "atp" | "@p" => Ok(Self::AtP),
            _ => Err(FormatError::Unknown(s.to_string())),
        }
    }
}

/// 当前进程级默认格式；语句未显式设置格式时在渲染时读取。
pub fn default_placeholder_format() -> PlaceholderFormat {
    PlaceholderFormat::from_u8(DEFAULT_FORMAT.load(Ordering::Relaxed))
}

/// 设置默认格式，返回旧值。
pub fn set_default_placeholder_format(format: PlaceholderFormat) -> PlaceholderFormat {
    let old = DEFAULT_FORMAT.swap(format as u8, Ordering::Relaxed);
    PlaceholderFormat::from_u8(old)
}

/// 作用域内临时修改默认格式；持有全局锁，drop 时恢复旧值。
pub struct DefaultFormatGuard {
    _lock: MutexGuard<'static, ()>,
    old: PlaceholderFormat,
}

impl Drop for DefaultFormatGuard {
    fn drop(&mut self) {
        set_default_placeholder_format(self.old);
    }
}

pub fn set_default_placeholder_format_scoped(format: PlaceholderFormat) -> DefaultFormatGuard {
    let lock = DEFAULT_FORMAT_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_placeholder_format(format);
    DefaultFormatGuard { _lock: lock, old }
}

/// `n` 个通用占位符，以 `, ` 连接。
pub fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
