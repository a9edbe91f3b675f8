//! 宏与字符串清单工具：为 builder 提供类似可变参数的调用方式。

/// 把若干值转换为 `Vec<Operand>`，用于混合类型的参数列表。
///
/// ```ignore
/// expr("a = ? AND b = ?", args![1_i64, "x"])
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Operand>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Operand::from($value)),+]
    };
}

/// 构造 [`crate::Eq`]：`eq! { "x" => 1_i64, "y" => 2_i64 }`。
#[macro_export]
macro_rules! eq {
    () => {
        $crate::Eq::new()
    };
    ($($col:expr => $value:expr),+ $(,)?) => {
        $crate::Eq::new()$(.with($col, $value))+
    };
}

/// 构造 [`crate::NotEq`]：`not_eq! { "x" => 1_i64 }`。
#[macro_export]
macro_rules! not_eq {
    () => {
        $crate::NotEq::new()
    };
    ($($col:expr => $value:expr),+ $(,)?) => {
        $crate::NotEq::new()$(.with($col, $value))+
    };
}

/// 可以展开为字符串清单的参数（表名、列名等）。
pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl<const N: usize, T> IntoStrings for [T; N]
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T> IntoStrings for &[T]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.iter().cloned().map(Into::into));
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

/// 展开并丢弃空字符串。
pub(crate) fn collect_into_strings<T>(value: T) -> Vec<String>
where
    T: IntoStrings,
{
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst.retain(|s| !s.is_empty());
    dst
}
