use std::iter::Peekable;

use crate::parser::preprocessor::is_blank;

/// 一个输入段落：前面的空行数 + 连续的非空行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParagraph {
    pub blanks_before: usize,
    pub lines: Vec<String>,
}

impl InputParagraph {
    pub fn new(blanks_before: usize, lines: Vec<String>) -> Self {
        InputParagraph {
            blanks_before,
            lines,
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.lines.len() == 1
    }
}

/// 按空行把行流切成段落，惰性地逐段产出
pub struct Segmenter<I: Iterator<Item = String>> {
    lines: Peekable<I>,
    first: bool,
}

impl<I: Iterator<Item = String>> Segmenter<I> {
    pub fn new(lines: I) -> Self {
        Segmenter {
            lines: lines.peekable(),
            first: true,
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for Segmenter<I> {
    type Item = InputParagraph;

    fn next(&mut self) -> Option<InputParagraph> {
        let mut blanks = 0;
        while self.lines.next_if(|line| is_blank(line)).is_some() {
            blanks += 1;
        }

        let mut lines = Vec::new();
        while let Some(line) = self.lines.next_if(|line| !is_blank(line)) {
            lines.push(line);
        }
        if lines.is_empty() {
            return None;
        }

        // 第一个段落的空行数记为 0
        let blanks_before = if self.first { 0 } else { blanks };
        self.first = false;
        Some(InputParagraph::new(blanks_before, lines))
    }
}

/// 切分整个行序列
pub fn segment<I, S>(lines: I) -> Vec<InputParagraph>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Segmenter::new(lines.into_iter().map(Into::into)).collect()
}
