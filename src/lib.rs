pub mod models;
pub mod utils;
pub mod parser;
pub mod error;
pub mod api;

pub use models::{
    Action,
    Conf,
    Dialog,
    DialogBlock,
    DualDialog,
    Element,
    RichText,
    Screenplay,
    ScreenplayProperties,
    Section,
    Segment,
    Slug,
    Style,
    TitleKeywordFormat,
    TitlePage,
    Transition,
    TransitionPolicy
};

pub use parser::{
    FountainParser,
    ParseOutput,
    parse_emphasis
};

pub use error::{ScreenplayError, ScreenplayResult};

pub use api::{
    parse_fountain_text,
    parse_fountain_file,
    parse_documents
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
/// * `config` - 配置对象
///
/// # Returns
///
/// 解析结果对象
pub fn parse(script: &str, config: &Conf) -> ParseOutput {
    FountainParser::with_conf(config.clone()).parse(script)
}

/// 解析已经分好行的剧本
pub fn parse_lines<I, S>(lines: I, config: &Conf) -> Screenplay
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FountainParser::with_conf(config.clone()).parse_lines(lines)
}
