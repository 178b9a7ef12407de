pub mod fountain_constants;

pub use fountain_constants::FountainConstants;
use unicode_segmentation::UnicodeSegmentation;

/// 判断一行是否只由大写字母及非字母字符组成
///
/// 至少要有一个大写字母，且不能出现小写字母（"R2D2" 算，"23" 不算）
pub fn is_upper_case(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

/// 按 tab_width 的制表位展开制表符
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(line.len() + tab_width);
    let mut column = 0;
    for g in line.graphemes(true) {
        if g == "\t" {
            let pad = tab_width - column % tab_width;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push_str(g);
            column += 1;
        }
    }
    out
}
