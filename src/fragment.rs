//! Fragment：可渲染为 (SQL 文本, 参数列表) 的最小单元。

use crate::args::Arg;
use crate::error::Result;
use crate::expr::Expr;
use std::fmt;
use std::sync::Arc;

/// 渲染结果：SQL 文本与按占位符出现顺序排列的参数。
pub type Rendered = (String, Vec<Arg>);

/// 所有片段与语句的公共接口。
///
/// `render` 总是输出通用占位符 `?`，方言改写只发生在最外层语句上
/// （见 [`crate::Statement::build`]）。实现必须是纯函数：同一状态渲染两次结果一致。
pub trait Fragment: fmt::Debug + Send + Sync {
    fn render(&self) -> Result<Rendered>;
}

/// 共享的、不可变的片段引用，可在多个 builder 快照之间廉价复制。
#[derive(Clone)]
pub struct Part(Arc<dyn Fragment>);

impl Part {
    pub fn new(fragment: impl Fragment + 'static) -> Self {
        Self(Arc::new(fragment))
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Fragment for Part {
    fn render(&self) -> Result<Rendered> {
        self.0.render()
    }
}

impl From<&str> for Part {
    fn from(sql: &str) -> Self {
        Self::new(Expr::raw(sql))
    }
}

impl From<String> for Part {
    fn from(sql: String) -> Self {
        Self::new(Expr::raw(sql))
    }
}

/// 为片段类型生成到 [`Part`] 与 [`crate::Operand::Expr`] 的转换。
macro_rules! impl_fragment_conversions {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for $crate::fragment::Part {
                fn from(v: $t) -> Self {
                    Self::new(v)
                }
            }

            impl From<$t> for $crate::args::Operand {
                fn from(v: $t) -> Self {
                    Self::Expr($crate::fragment::Part::new(v))
                }
            }
        )*
    };
}
pub(crate) use impl_fragment_conversions;
