use log::debug;

use crate::models::TitlePage;
use crate::utils::fountain_constants::{TITLE_PAGE_KEY, TITLE_PAGE_VALUE};

/// 解析剧本开头的标题页
///
/// `Key: value` 为单行值，下一行必须是新的 key；`Key:` 后面可以跟若干缩进的值行。
/// 只要有一行既不是 key 也不是缩进值，整个标题页作废，返回 None（不会返回部分结果）。
/// 没有任何值的标题页同样返回 None。
pub fn parse_title_page<S: AsRef<str>>(lines: &[S]) -> Option<TitlePage> {
    let mut page = TitlePage::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();
        let Some(caps) = TITLE_PAGE_KEY.captures(line) else {
            debug!("标题页第 {} 行无法识别，放弃标题页: {:?}", i + 1, line);
            return None;
        };
        let key = caps[1].trim_end();
        let value = &caps[2];
        i += 1;

        if !value.is_empty() {
            page.append(key, value);
            continue;
        }

        while i < lines.len() {
            match TITLE_PAGE_VALUE.captures(lines[i].as_ref()) {
                Some(value) => {
                    page.append(key, &value[1]);
                    i += 1;
                }
                None => break,
            }
        }
    }

    if page.is_empty() {
        None
    } else {
        Some(page)
    }
}
