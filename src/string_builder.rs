//! 语句拼接用的字符串缓冲。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// 写入 `s`；如果不是首次写入，会先写入一个空格。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// 写入 `keyword value`（带前导空格）。
    pub(crate) fn write_keyword(&mut self, keyword: &str, value: &str) {
        self.write_leading(keyword);
        self.buf.push(' ');
        self.buf.push_str(value);
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
