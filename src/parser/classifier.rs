use log::debug;

use crate::models::{
    Action, Conf, Dialog, DualDialog, Element, Section, Slug, Transition, TransitionPolicy,
};
use crate::models::rich_text::plain;
use crate::parser::dialog::parse_dialog_blocks;
use crate::parser::emphasis::parse_emphasis;
use crate::parser::segmenter::InputParagraph;
use crate::utils::fountain_constants::{
    CENTERED, DUAL_DIALOGUE, PAGE_BREAK, SCENE_HEADING_PREFIX, SCENE_NUMBER, SECTION,
};
use crate::utils::{is_upper_case, FountainConstants};

/// 段落分类器
///
/// 按固定顺序尝试各条规则，第一条成立的规则决定元素类型。跨段落的状态只有
/// 已分类的元素列表本身（双对白合并、提要挂载都只看最后一个元素）。
pub struct Classifier<'c> {
    cfg: &'c Conf,
    elements: Vec<Element>,
}

impl<'c> Classifier<'c> {
    pub fn new(cfg: &'c Conf) -> Self {
        Classifier {
            cfg,
            elements: Vec::new(),
        }
    }

    /// 分类一个段落并加入结果，永远不会失败
    pub fn push(&mut self, paragraph: &InputParagraph) {
        let classified = self.append_page_break(paragraph)
            || self.append_synopsis(paragraph)
            || self.append_sections(paragraph)
            || self.append_slug(paragraph)
            || self.append_centered_action(paragraph)
            || self.append_dialog(paragraph)
            || self.append_transition(paragraph);
        if !classified {
            self.append_action(paragraph);
        }
    }

    /// 目前为止的临时结果（尚未做过渡修正）
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// 结束分类，执行第二遍过渡修正
    pub fn finish(self) -> Vec<Element> {
        fixup_transitions(self.elements, self.cfg.transition_policy)
    }

    fn append_page_break(&mut self, paragraph: &InputParagraph) -> bool {
        if !(paragraph.is_single_line() && PAGE_BREAK.is_match(&paragraph.lines[0])) {
            return false;
        }
        self.elements.push(Element::PageBreak);
        true
    }

    fn append_synopsis(&mut self, paragraph: &InputParagraph) -> bool {
        if !paragraph.is_single_line() {
            return false;
        }
        let Some(text) = synopsis_text(&paragraph.lines[0]) else {
            return false;
        };
        self.elements
            .last_mut()
            .map_or(false, |last| last.set_synopsis(text))
    }

    fn append_sections(&mut self, paragraph: &InputParagraph) -> bool {
        let mut sections: Vec<Element> = Vec::new();
        for line in &paragraph.lines {
            if let Some(caps) = SECTION.captures(line) {
                let level = caps[1].len();
                let text = parse_emphasis(caps[2].trim_end());
                sections.push(Element::Section(Section::new(text, level)));
                continue;
            }
            // 同一段落内的提要行挂到前一个章节上
            let attached = match (synopsis_text(line), sections.last_mut()) {
                (Some(text), Some(last)) => last.set_synopsis(text),
                _ => false,
            };
            if !attached {
                return false;
            }
        }
        self.elements.extend(sections);
        true
    }

    fn append_slug(&mut self, paragraph: &InputParagraph) -> bool {
        if !paragraph.is_single_line() {
            return false;
        }
        let line = paragraph.lines[0].as_str();

        // 行首单个 . 强制为场景标题，.. 不算
        let (forced, rest) = match line.strip_prefix(FountainConstants::FORCED_SLUG) {
            Some(rest) if !rest.is_empty() && !rest.starts_with(FountainConstants::FORCED_SLUG) => {
                (true, rest.trim_start())
            }
            _ => (false, line),
        };
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return false;
        }

        let text = rest.trim_end().to_uppercase();
        let by_blank_lines = self.cfg.blank_lines_force_slug && paragraph.blanks_before >= 2;
        if !(forced || by_blank_lines || SCENE_HEADING_PREFIX.is_match(&text)) {
            return false;
        }

        let slug = match SCENE_NUMBER.captures(&text) {
            Some(caps) => Slug::new(parse_emphasis(&caps[1]), Some(plain(&caps[2]))),
            None => Slug::new(parse_emphasis(&text), None),
        };
        self.elements.push(Element::Slug(slug));
        true
    }

    fn append_centered_action(&mut self, paragraph: &InputParagraph) -> bool {
        let mut lines = Vec::with_capacity(paragraph.lines.len());
        for line in &paragraph.lines {
            match CENTERED.captures(line) {
                Some(caps) => lines.push(parse_emphasis(&caps[1])),
                None => return false,
            }
        }
        self.elements.push(Element::Action(Action::centered(lines)));
        true
    }

    fn append_dialog(&mut self, paragraph: &InputParagraph) -> bool {
        if paragraph.lines.len() < 2 {
            return false;
        }
        let first = paragraph.lines[0].as_str();
        // 行尾两个空格表示这不是角色名
        if first.ends_with(FountainConstants::TWO_SPACES) {
            return false;
        }
        let character = match first.strip_prefix(FountainConstants::FORCED_CHARACTER) {
            Some(forced) if !forced.is_empty() => forced,
            _ if is_upper_case(first) => first,
            _ => return false,
        };
        let character = character.trim();
        let blocks = parse_dialog_blocks(&paragraph.lines[1..]);

        let dual_cue = DUAL_DIALOGUE
            .captures(character)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|_| self.cfg.use_dual_dialogue);
        if let Some(cue) = dual_cue {
            if matches!(self.elements.last(), Some(Element::Dialog(_))) {
                if let Some(Element::Dialog(left)) = self.elements.pop() {
                    let right = Dialog::new(parse_emphasis(cue), blocks);
                    debug!(
                        "双对白: {} / {}",
                        left.character.plain_text(),
                        right.character.plain_text()
                    );
                    self.elements.push(Element::DualDialog(DualDialog { left, right }));
                    return true;
                }
            }
        }

        self.elements
            .push(Element::Dialog(Dialog::new(parse_emphasis(character), blocks)));
        true
    }

    fn append_transition(&mut self, paragraph: &InputParagraph) -> bool {
        if !paragraph.is_single_line() {
            return false;
        }
        let line = paragraph.lines[0].as_str();
        let text = match line.strip_prefix(FountainConstants::TRANSITION_FORCE) {
            Some(rest) if !rest.trim().is_empty() => rest.trim().to_uppercase(),
            Some(_) => return false,
            None if is_upper_case(line) && line.ends_with(':') => line.trim_start().to_string(),
            None => return false,
        };
        self.elements
            .push(Element::Transition(Transition::new(parse_emphasis(&text))));
        true
    }

    fn append_action(&mut self, paragraph: &InputParagraph) {
        let lines = paragraph
            .lines
            .iter()
            .map(|line| parse_emphasis(line.trim_end()))
            .collect();
        self.elements.push(Element::Action(Action::new(lines)));
    }
}

/// `= 提要` 行的正文
fn synopsis_text(line: &str) -> Option<String> {
    line.strip_prefix(FountainConstants::SYNOPSIS)
        .map(|rest| rest.trim_start().to_string())
}

/// 第二遍：把后面不是场景标题的过渡改写成内容相同的 Action
///
/// 先标记再生成新序列，原有元素不做原地修改。文末的过渡保留。
pub fn fixup_transitions(elements: Vec<Element>, policy: TransitionPolicy) -> Vec<Element> {
    if policy == TransitionPolicy::Keep {
        return elements;
    }
    let demote: Vec<bool> = elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            matches!(element, Element::Transition(_))
                && elements.get(i + 1).map_or(false, |next| !next.is_slug())
        })
        .collect();

    elements
        .into_iter()
        .zip(demote)
        .map(|(element, demote)| match element {
            Element::Transition(transition) if demote => {
                debug!("过渡后面不是场景标题，改为动作: {}", transition.line);
                Element::Action(transition.into_action())
            }
            other => other,
        })
        .collect()
}

/// 对段落序列做完整分类
pub fn classify<I>(paragraphs: I, cfg: &Conf) -> Vec<Element>
where
    I: IntoIterator<Item = InputParagraph>,
{
    let mut classifier = Classifier::new(cfg);
    for paragraph in paragraphs {
        classifier.push(&paragraph);
    }
    classifier.finish()
}
