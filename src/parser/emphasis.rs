//! 行内强调解析：`**粗体**`、`*斜体*`、`_下划线_`，可嵌套、可交叠，`\*` 表示字面星号。
//!
//! 每种样式按 Bold → Italic → Underline 的顺序各扫描一遍，把匹配到的定界符改写成
//! 开/闭标记，最后从左到右归约成 RichText。扫描都是显式的，不依赖回溯正则。

use std::collections::BTreeSet;
use std::mem;

use crate::models::rich_text::{RichText, Segment, Style};

/// 强调解析的输出记号流
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmphasisToken {
    Text(String),
    Open(Style),
    Close(Style),
}

/// 单字符级别的中间记号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Char(char),
    /// 转义后的 `*`，对扫描不可见
    LiteralStar,
    Open(Style),
    Close(Style),
}

impl Mark {
    fn is(self, c: char) -> bool {
        matches!(self, Mark::Char(x) if x == c)
    }

    fn is_space(self) -> bool {
        matches!(self, Mark::Char(c) if c.is_whitespace())
    }
}

fn is_at(marks: &[Mark], i: usize, c: char) -> bool {
    marks.get(i).map_or(false, |m| m.is(c))
}

/// 把一行文本解析成 RichText
pub fn parse_emphasis(source: &str) -> RichText {
    reduce(tokenize_emphasis(source))
}

/// 把一行文本解析成记号流
pub fn tokenize_emphasis(source: &str) -> Vec<EmphasisToken> {
    let mut marks = unescape(source);
    for style in Style::ORDER {
        marks = rewrite(&marks, style);
    }

    let mut tokens = Vec::new();
    let mut text = String::new();
    for mark in marks {
        match mark {
            Mark::Char(c) => text.push(c),
            Mark::LiteralStar => text.push('*'),
            Mark::Open(style) | Mark::Close(style) => {
                if !text.is_empty() {
                    tokens.push(EmphasisToken::Text(mem::take(&mut text)));
                }
                tokens.push(if matches!(mark, Mark::Open(_)) {
                    EmphasisToken::Open(style)
                } else {
                    EmphasisToken::Close(style)
                });
            }
        }
    }
    if !text.is_empty() {
        tokens.push(EmphasisToken::Text(text));
    }
    tokens
}

/// 用当前激活的样式集合把记号流归约成 Segment 序列
pub fn reduce(tokens: Vec<EmphasisToken>) -> RichText {
    let mut active: BTreeSet<Style> = BTreeSet::new();
    let mut segments = Vec::new();
    for token in tokens {
        match token {
            EmphasisToken::Text(text) => segments.push(Segment {
                text,
                styles: active.clone(),
            }),
            EmphasisToken::Open(style) => {
                active.insert(style);
            }
            EmphasisToken::Close(style) => {
                active.remove(&style);
            }
        }
    }
    RichText::new(segments)
}

fn unescape(source: &str) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&'*') {
            chars.next();
            marks.push(Mark::LiteralStar);
        } else {
            marks.push(Mark::Char(c));
        }
    }
    marks
}

/// 定界符长度（开, 闭）
fn delimiter_len(style: Style) -> (usize, usize) {
    match style {
        Style::Bold => (2, 2),
        Style::Italic | Style::Underline => (1, 1),
    }
}

/// 从左到右找不重叠的匹配，替换成开/闭标记
fn rewrite(marks: &[Mark], style: Style) -> Vec<Mark> {
    let (open_len, close_len) = delimiter_len(style);
    let mut out = Vec::with_capacity(marks.len());
    let mut i = 0;
    while i < marks.len() {
        let close = match style {
            Style::Bold => match_bold(marks, i),
            Style::Italic => match_italic(marks, i),
            Style::Underline => match_underline(marks, i),
        };
        match close {
            Some(close) => {
                out.push(Mark::Open(style));
                out.extend_from_slice(&marks[i + open_len..close]);
                out.push(Mark::Close(style));
                i = close + close_len;
            }
            None => {
                out.push(marks[i]);
                i += 1;
            }
        }
    }
    out
}

/// `**` + 非空白开头的最短内容（可带尾随的 `*`/`_`）+ 非空白结尾 + `**`，返回闭合 `**` 的位置
fn match_bold(marks: &[Mark], i: usize) -> Option<usize> {
    if !(is_at(marks, i, '*') && is_at(marks, i + 1, '*')) {
        return None;
    }
    if marks.get(i + 2)?.is_space() {
        return None;
    }
    for end in (i + 3)..=marks.len() {
        let run = marks[end..]
            .iter()
            .take_while(|m| m.is('*') || m.is('_'))
            .count();
        // 尾随的 `*`/`_` 尽量多地归入内容
        for extra in (0..=run).rev() {
            let close = end + extra;
            if is_at(marks, close, '*') && is_at(marks, close + 1, '*') && !marks[close - 1].is_space() {
                return Some(close);
            }
        }
    }
    None
}

/// `*` + 非空白开头的最短内容 + 后面不再跟 `*` 的 `*`
fn match_italic(marks: &[Mark], i: usize) -> Option<usize> {
    if !is_at(marks, i, '*') {
        return None;
    }
    if marks.get(i + 1)?.is_space() {
        return None;
    }
    ((i + 2)..marks.len()).find(|&k| marks[k].is('*') && !is_at(marks, k + 1, '*'))
}

/// `_` + 不含 `_` 且首尾非空白的内容 + `_`
fn match_underline(marks: &[Mark], i: usize) -> Option<usize> {
    if !is_at(marks, i, '_') {
        return None;
    }
    let first = *marks.get(i + 1)?;
    if first.is_space() || first.is('_') {
        return None;
    }
    let close = ((i + 2)..marks.len()).find(|&k| marks[k].is('_'))?;
    if marks[close - 1].is_space() {
        return None;
    }
    Some(close)
}
