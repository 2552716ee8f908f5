use core::str::Split;

use crate::Error;

const SEPARATOR: char = '/';

/// 绝对路径的各个分量，按出现顺序；可 `clone` 后重新遍历
#[derive(Debug, Clone)]
pub struct Components<'a> {
    // 根目录没有分量
    inner: Option<Split<'a, char>>,
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

/// 切分绝对路径。
///
/// 去掉开头的 `/` 后按每个 `/` 切分，空分量照常保留：
/// `split("/a/b/c")` 为 `["a", "b", "c"]`，`split("/a/")` 为 `["a", ""]`，
/// `split("/")` 为空。
pub fn split(path: &str) -> Result<Components<'_>, Error> {
    let rest = path.strip_prefix(SEPARATOR).ok_or(Error::InvalidPath)?;
    Ok(Components {
        inner: (!rest.is_empty()).then(|| rest.split(SEPARATOR)),
    })
}
