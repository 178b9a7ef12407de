use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::element::{Dialog, Element};
use crate::models::screenplay::Screenplay;

/// 从模型统计出的剧本属性
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenplayProperties {
    pub scene_names: Vec<String>,
    pub scene_numbers: Vec<Option<String>>,
    pub section_count: usize,
    pub transition_count: usize,
    pub dual_dialogue_count: usize,
    /// 角色名 → 对白段数
    pub characters: BTreeMap<String, usize>,
    pub title_keys: Vec<String>,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_screenplay(screenplay: &Screenplay) -> Self {
        let mut properties = ScreenplayProperties::new();
        properties.title_keys = screenplay.title_page.keys().map(str::to_string).collect();

        for element in screenplay {
            match element {
                Element::Slug(slug) => {
                    properties.scene_names.push(slug.line.plain_text());
                    properties
                        .scene_numbers
                        .push(slug.scene_number.as_ref().map(|n| n.plain_text()));
                }
                Element::Section(_) => properties.section_count += 1,
                Element::Dialog(dialog) => properties.add_character(dialog),
                Element::DualDialog(dual) => {
                    properties.dual_dialogue_count += 1;
                    properties.add_character(&dual.left);
                    properties.add_character(&dual.right);
                }
                Element::Transition(_) => properties.transition_count += 1,
                Element::Action(_) | Element::PageBreak => {}
            }
        }
        properties
    }

    pub fn scene_count(&self) -> usize {
        self.scene_names.len()
    }

    fn add_character(&mut self, dialog: &Dialog) {
        let name = dialog.character.plain_text().trim().to_uppercase();
        *self.characters.entry(name).or_insert(0) += 1;
    }
}
