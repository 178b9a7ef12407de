use serde::{Deserialize, Serialize};

use crate::models::rich_text::RichText;

/// 场景标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub line: RichText,
    pub scene_number: Option<RichText>,
    pub synopsis: Option<String>,
}

impl Slug {
    pub fn new(line: RichText, scene_number: Option<RichText>) -> Self {
        Slug {
            line,
            scene_number,
            synopsis: None,
        }
    }
}

/// 章节标题，level 为 # 的个数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub text: RichText,
    pub level: usize,
    pub synopsis: Option<String>,
}

impl Section {
    pub fn new(text: RichText, level: usize) -> Self {
        Section {
            text,
            level,
            synopsis: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub lines: Vec<RichText>,
    pub centered: bool,
}

impl Action {
    pub fn new(lines: Vec<RichText>) -> Self {
        Action {
            lines,
            centered: false,
        }
    }

    pub fn centered(lines: Vec<RichText>) -> Self {
        Action {
            lines,
            centered: true,
        }
    }
}

/// 对白中的一行：(是否括号注释, 文本)
pub type DialogBlock = (bool, RichText);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub character: RichText,
    pub blocks: Vec<DialogBlock>,
}

impl Dialog {
    pub fn new(character: RichText, blocks: Vec<DialogBlock>) -> Self {
        Dialog { character, blocks }
    }

    pub fn parentheticals(&self) -> impl Iterator<Item = &RichText> {
        self.blocks.iter().filter(|(p, _)| *p).map(|(_, t)| t)
    }

    pub fn spoken_lines(&self) -> impl Iterator<Item = &RichText> {
        self.blocks.iter().filter(|(p, _)| !*p).map(|(_, t)| t)
    }
}

/// 双对白：left 为先出现的对白
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualDialog {
    pub left: Dialog,
    pub right: Dialog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub line: RichText,
}

impl Transition {
    pub fn new(line: RichText) -> Self {
        Transition { line }
    }

    /// 第二遍修正时用内容相同的 Action 替换
    pub fn into_action(self) -> Action {
        Action::new(vec![self.line])
    }
}

/// 剧本元素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Slug(Slug),
    Section(Section),
    Action(Action),
    Dialog(Dialog),
    DualDialog(DualDialog),
    Transition(Transition),
    PageBreak,
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Slug(_) => "slug",
            Element::Section(_) => "section",
            Element::Action(_) => "action",
            Element::Dialog(_) => "dialog",
            Element::DualDialog(_) => "dual_dialog",
            Element::Transition(_) => "transition",
            Element::PageBreak => "page_break",
        }
    }

    pub fn is_slug(&self) -> bool {
        matches!(self, Element::Slug(_))
    }

    /// 元素的正文行（不含角色名和括号注释的区别）
    pub fn lines(&self) -> Vec<&RichText> {
        match self {
            Element::Slug(slug) => vec![&slug.line],
            Element::Section(section) => vec![&section.text],
            Element::Action(action) => action.lines.iter().collect(),
            Element::Dialog(dialog) => std::iter::once(&dialog.character)
                .chain(dialog.blocks.iter().map(|(_, t)| t))
                .collect(),
            Element::DualDialog(dual) => [&dual.left, &dual.right]
                .into_iter()
                .flat_map(|d| std::iter::once(&d.character).chain(d.blocks.iter().map(|(_, t)| t)))
                .collect(),
            Element::Transition(transition) => vec![&transition.line],
            Element::PageBreak => Vec::new(),
        }
    }

    /// 只有 Slug 和 Section 可以挂提要
    pub fn set_synopsis(&mut self, text: String) -> bool {
        match self {
            Element::Slug(slug) => {
                slug.synopsis = Some(text);
                true
            }
            Element::Section(section) => {
                section.synopsis = Some(text);
                true
            }
            _ => false,
        }
    }
}
