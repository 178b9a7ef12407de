use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 只含两个空格的行不算空行，用来把段落连在一起
    pub const TWO_SPACES: &'static str = "  ";
    pub const TAB_WIDTH: usize = 4;
    pub const FORCED_CHARACTER: char = '@';
    pub const FORCED_SLUG: char = '.';
    pub const SYNOPSIS: char = '=';
    pub const TRANSITION_FORCE: char = '>';
    /// 括号注释，兼容全角括号
    pub const PARENTHETICAL_BEGIN: [char; 2] = ['(', '（'];
    pub const PARENTHETICAL_END: [char; 2] = [')', '）'];
}

lazy_static! {
    // 预处理
    pub static ref BONEYARD: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    pub static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\n|\r").unwrap();

    // 块级元素
    pub static ref SCENE_HEADING_PREFIX: Regex =
        Regex::new(r"^(?:INT|EXT|EST|INT\.?/EXT\.?|I/E)[ .]").unwrap();
    pub static ref SCENE_NUMBER: Regex = Regex::new(r"^(.*?)\s*#([\w\-.]+)#\s*$").unwrap();
    pub static ref SECTION: Regex = Regex::new(r"^(#+)\s*([^#].*)$").unwrap();
    pub static ref CENTERED: Regex = Regex::new(r"^\s*>\s*(.*?)\s*<\s*$").unwrap();
    pub static ref DUAL_DIALOGUE: Regex = Regex::new(r"^(.+?)\s*\^$").unwrap();
    pub static ref PAGE_BREAK: Regex = Regex::new(r"^={3,}$").unwrap();

    // 标题页
    pub static ref TITLE_PAGE_KEY: Regex = Regex::new(r"^([A-Za-z][A-Za-z ]*):\s*(.*)$").unwrap();
    pub static ref TITLE_PAGE_VALUE: Regex = Regex::new(r"^\s+(\S.*)$").unwrap();
}
