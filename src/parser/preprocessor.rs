use crate::models::Conf;
use crate::utils::fountain_constants::{BONEYARD, LINE_BREAK};
use crate::utils::{expand_tabs, FountainConstants};

/// 把整段剧本文本切成行：先去掉 /* */ 注释（可跨行），再按 \r\n、\n、\r 分行
pub fn split_script(script: &str, cfg: &Conf) -> Vec<String> {
    let content = if cfg.strip_boneyard {
        BONEYARD.replace_all(script, "")
    } else {
        script.into()
    };
    LINE_BREAK.split(&content).map(str::to_string).collect()
}

/// 展开制表符并去掉行尾的换行符
pub fn clean_line(raw_line: &str, tab_width: usize) -> String {
    expand_tabs(raw_line, tab_width)
        .trim_end_matches(&['\r', '\n'][..])
        .to_string()
}

/// 空行判断：空串或全空白；恰好两个空格的行不算空行
pub fn is_blank(line: &str) -> bool {
    line != FountainConstants::TWO_SPACES && line.trim().is_empty()
}
