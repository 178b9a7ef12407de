use crate::models::DialogBlock;
use crate::parser::emphasis::parse_emphasis;
use crate::utils::FountainConstants;

/// 解析角色名之后的对白行，每行一个块，不合并
///
/// 以 `(` 开头的行进入括号注释状态，直到某行以 `)` 结尾
pub fn parse_dialog_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<DialogBlock> {
    let mut inside_parenthesis = false;
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref().trim();
            if line.starts_with(&FountainConstants::PARENTHETICAL_BEGIN[..]) {
                inside_parenthesis = true;
            }
            let block = (inside_parenthesis, parse_emphasis(line));
            if line.ends_with(&FountainConstants::PARENTHETICAL_END[..]) {
                inside_parenthesis = false;
            }
            block
        })
        .collect()
}
