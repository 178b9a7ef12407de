use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// 文本样式。枚举的声明顺序就是解析顺序和输出顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Bold,
    Italic,
    Underline,
}

impl Style {
    /// 解析优先级：`**` 必须先于 `*` 被认领
    pub const ORDER: [Style; 3] = [Style::Bold, Style::Italic, Style::Underline];
}

/// 富文本中的一段，拥有一组样式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub styles: BTreeSet<Style>,
}

impl Segment {
    pub fn new(text: impl Into<String>, styles: impl IntoIterator<Item = Style>) -> Self {
        Segment {
            text: text.into(),
            styles: styles.into_iter().collect(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            styles: BTreeSet::new(),
        }
    }

    /// 按 Bold、Italic、Underline 的固定顺序返回样式
    pub fn ordered_styles(&self) -> impl DoubleEndedIterator<Item = Style> + '_ {
        self.styles.iter().copied()
    }

    pub fn has_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }
}

/// 由若干 Segment 组成的字符串，所有渲染器共用
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    pub fn new(segments: Vec<Segment>) -> Self {
        RichText { segments }
    }

    pub fn empty() -> Self {
        RichText::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 去掉样式后的纯文本
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// 显示宽度（按字素簇计），用于排版时的折行计算
    pub fn width(&self) -> usize {
        self.segments
            .iter()
            .map(|s| s.text.graphemes(true).count())
            .sum()
    }

    /// 第一段是否以 prefix 开头
    pub fn starts_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        self.segments
            .first()
            .map_or(false, |s| s.text.starts_with(prefix))
    }

    /// 最后一段是否以 suffix 结尾
    pub fn ends_with(&self, suffix: &str) -> bool {
        if suffix.is_empty() {
            return true;
        }
        self.segments
            .last()
            .map_or(false, |s| s.text.ends_with(suffix))
    }

    /// 以某种标记格式输出带样式的文本
    pub fn render<M: StyleMarkup>(&self, markup: &M) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            for style in segment.ordered_styles() {
                out.push_str(markup.open(style));
            }
            out.push_str(&markup.text(&segment.text));
            for style in segment.ordered_styles().rev() {
                out.push_str(markup.close(style));
            }
        }
        markup.finish(out)
    }

    pub fn to_html(&self) -> String {
        self.render(&Html)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

impl Add for RichText {
    type Output = RichText;

    fn add(mut self, other: RichText) -> RichText {
        self += other;
        self
    }
}

impl AddAssign for RichText {
    fn add_assign(&mut self, other: RichText) {
        self.segments.extend(other.segments);
    }
}

impl From<Segment> for RichText {
    fn from(segment: Segment) -> Self {
        RichText::new(vec![segment])
    }
}

/// 单一样式的富文本
pub fn styled(text: impl Into<String>, styles: &[Style]) -> RichText {
    Segment::new(text, styles.iter().copied()).into()
}

pub fn plain(text: impl Into<String>) -> RichText {
    Segment::plain(text).into()
}

pub fn bold(text: impl Into<String>) -> RichText {
    styled(text, &[Style::Bold])
}

pub fn italic(text: impl Into<String>) -> RichText {
    styled(text, &[Style::Italic])
}

pub fn underline(text: impl Into<String>) -> RichText {
    styled(text, &[Style::Underline])
}

/// 目标格式的样式标记。渲染器实现它即可复用 RichText::render
pub trait StyleMarkup {
    fn open(&self, style: Style) -> &'static str;
    fn close(&self, style: Style) -> &'static str;
    /// 转义正文，并保留连续空格
    fn text(&self, text: &str) -> String;
    fn finish(&self, rendered: String) -> String {
        rendered
    }
}

/// HTML 输出
pub struct Html;

impl StyleMarkup for Html {
    fn open(&self, style: Style) -> &'static str {
        match style {
            Style::Bold => "<strong>",
            Style::Italic => "<em>",
            Style::Underline => "<u>",
        }
    }

    fn close(&self, style: Style) -> &'static str {
        match style {
            Style::Bold => "</strong>",
            Style::Italic => "</em>",
            Style::Underline => "</u>",
        }
    }

    fn text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut spaces = 0;
        for c in text.chars() {
            if c == ' ' {
                // 连续空格：第一个保留为普通空格，其余换成不换行空格
                out.push_str(if spaces == 0 { " " } else { "&nbsp;" });
                spaces += 1;
                continue;
            }
            spaces = 0;
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn finish(&self, rendered: String) -> String {
        match rendered.strip_prefix(' ') {
            Some(rest) => format!("&nbsp;{}", rest),
            None => rendered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string_has_one_segment() {
        let s = plain("hello");
        assert_eq!(s.segments().len(), 1);
        assert_eq!(s.segments()[0].text, "hello");
        assert!(s.segments()[0].styles.is_empty());
    }

    #[test]
    fn display_drops_styles() {
        let s = bold("Hello") + plain(" there ") + bold("folks");
        assert_eq!(s.to_string(), "Hello there folks");
        assert_eq!(s.plain_text(), "Hello there folks");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(bold("Hello"), bold("Hello"));
        assert_ne!(bold("Hello"), bold("Foo"));
        assert_ne!(plain("Hello"), bold("Hello"));
        assert_ne!(plain("ab"), plain("a") + plain("b"));
    }

    #[test]
    fn concatenation_appends_segments() {
        let expected = RichText::new(vec![
            Segment::plain("hello"),
            Segment::new(" there", [Style::Bold]),
        ]);
        assert_eq!(plain("hello") + bold(" there"), expected);

        let mut s = RichText::empty();
        s += italic("x");
        assert_eq!(s, italic("x"));
    }

    #[test]
    fn styles_are_ordered() {
        let segment = Segment::new("x", [Style::Underline, Style::Bold, Style::Italic]);
        let order: Vec<Style> = segment.ordered_styles().collect();
        assert_eq!(order, Style::ORDER.to_vec());

        let segment = Segment::new("y", [Style::Italic]);
        assert!(segment.has_style(Style::Italic));
        assert!(!segment.has_style(Style::Bold));
    }

    #[test]
    fn starts_and_ends_with_look_at_edge_segments() {
        let s = plain("(quietly") + italic(" now)");
        assert!(s.starts_with("("));
        assert!(s.ends_with(")"));
        assert!(!RichText::empty().starts_with("("));
        assert!(RichText::empty().ends_with(""));
    }

    #[test]
    fn to_html_nests_tags() {
        assert_eq!(plain("hello").to_html(), "hello");
        let s = bold("bold") + plain(" normal ") + italic("italic") + underline("wonderline");
        assert_eq!(
            s.to_html(),
            "<strong>bold</strong> normal <em>italic</em><u>wonderline</u>"
        );
        assert_eq!(
            styled("x", &[Style::Underline, Style::Bold]).to_html(),
            "<strong><u>x</u></strong>"
        );
    }

    #[test]
    fn to_html_escapes_and_keeps_spaces() {
        assert_eq!(plain("Brick & <Steel>").to_html(), "Brick &amp; &lt;Steel&gt;");
        assert_eq!(plain("a   b").to_html(), "a &nbsp;&nbsp;b");
        assert_eq!(plain("  indented").to_html(), "&nbsp;&nbsp;indented");
    }

    #[test]
    fn width_counts_graphemes() {
        assert_eq!((plain("abc") + bold("de")).width(), 5);
        assert_eq!(plain("e\u{301}").width(), 1);
    }
}
