use std::time::Instant;

use log::info;
use serde::Serialize;

use crate::models::{Conf, Screenplay, ScreenplayProperties, TitlePage};
use crate::parser::classifier::classify;
use crate::parser::preprocessor::{clean_line, is_blank, split_script};
use crate::parser::segmenter::Segmenter;
use crate::parser::title_page::parse_title_page;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutput {
    pub screenplay: Screenplay,
    pub properties: ScreenplayProperties,
    /// 解析耗时（毫秒）
    pub parse_time: u64,
}

impl ParseOutput {
    pub fn new(screenplay: Screenplay) -> Self {
        let properties = ScreenplayProperties::from_screenplay(&screenplay);
        ParseOutput {
            screenplay,
            properties,
            parse_time: 0,
        }
    }
}

/// Fountain 剧本解析器
///
/// 一次解析内的状态都在调用栈上，同一个解析器可以重复使用，
/// 不同文档也可以在不同线程上各自解析。
#[derive(Debug, Clone, Default)]
pub struct FountainParser {
    cfg: Conf,
}

impl FountainParser {
    pub fn new() -> Self {
        FountainParser::default()
    }

    pub fn with_conf(cfg: Conf) -> Self {
        FountainParser { cfg }
    }

    pub fn conf(&self) -> &Conf {
        &self.cfg
    }

    /// 解析Fountain格式文本
    ///
    /// # Arguments
    ///
    /// * `script` - Fountain格式的剧本文本
    ///
    /// # Returns
    ///
    /// 解析结果对象
    pub fn parse(&self, script: &str) -> ParseOutput {
        let start = Instant::now();
        let screenplay = self.parse_lines(split_script(script, &self.cfg));
        let mut result = ParseOutput::new(screenplay);
        result.parse_time = start.elapsed().as_millis() as u64;

        info!(
            "解析完成: {} 个元素, {} 个场景, {} 个角色, 耗时 {}ms",
            result.screenplay.len(),
            result.properties.scene_count(),
            result.properties.characters.len(),
            result.parse_time
        );
        result
    }

    /// 解析已经分好行的文本
    pub fn parse_lines<I, S>(&self, lines: I) -> Screenplay
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tab_width = self.cfg.tab_width;
        let mut source = lines
            .into_iter()
            .map(|line| clean_line(line.as_ref(), tab_width))
            .peekable();

        // 第一个空行之前的内容可能是标题页
        let mut head = Vec::new();
        if self.cfg.parse_title_page {
            while let Some(line) = source.next_if(|line| !is_blank(line)) {
                head.push(line);
            }
        }
        let (title_page, head) = match parse_title_page(&head) {
            Some(title_page) => (title_page, Vec::new()),
            None => (TitlePage::new(), head),
        };

        let paragraphs = Segmenter::new(head.into_iter().chain(source));
        Screenplay::new(title_page, classify(paragraphs, &self.cfg))
    }
}
