use serde::Serialize;

use crate::models::element::Element;
use crate::models::rich_text::RichText;
use crate::models::title_page::TitlePage;
use crate::parser::emphasis::parse_emphasis;

/// 解析结果：标题页 + 按源文顺序排列的元素
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Screenplay {
    pub title_page: TitlePage,
    pub elements: Vec<Element>,
}

impl Screenplay {
    pub fn new(title_page: TitlePage, elements: Vec<Element>) -> Self {
        Screenplay {
            title_page,
            elements,
        }
    }

    /// 取标题页某个 key 的值并解析样式，例如 `screenplay.rich_attribute("Title")`
    pub fn rich_attribute(&self, key: &str) -> Vec<RichText> {
        self.title_page
            .get(key)
            .map(|values| values.iter().map(|v| parse_emphasis(v)).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Screenplay {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
