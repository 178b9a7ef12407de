use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 标题页关键字在页面上的位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleKeywordFormat {
    pub position: String,
    pub index: i32,
}

impl TitleKeywordFormat {
    fn new(position: &str, index: i32) -> Self {
        TitleKeywordFormat {
            position: position.to_string(),
            index,
        }
    }

    /// 已知关键字的位置，大小写不敏感，空格与下划线等价
    pub fn for_key(key: &str) -> Option<TitleKeywordFormat> {
        let normalized = key.trim().to_lowercase().replace(' ', "_");
        let format = match normalized.as_str() {
            "title" => Self::new("cc", 0),
            "credit" => Self::new("cc", 1),
            "author" => Self::new("cc", 2),
            "authors" => Self::new("cc", 3),
            "source" => Self::new("cc", 4),

            "watermark" | "font" | "font_italic" | "font_bold" | "font_bold_italic" | "header"
            | "footer" | "metadata" => Self::new("hidden", -1),

            "notes" => Self::new("bl", 0),
            "copyright" => Self::new("bl", 1),

            "revision" => Self::new("br", 0),
            "date" => Self::new("br", 1),
            "draft_date" => Self::new("br", 2),
            "contact" => Self::new("br", 3),
            "contact_info" => Self::new("br", 4),

            "br" | "bl" | "tr" | "tc" | "tl" | "cc" => Self::new(&normalized, -1),
            _ => return None,
        };
        Some(format)
    }
}

/// 标题页：保持插入顺序的 key → 多行原始值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitlePage {
    entries: Vec<(String, Vec<String>)>,
}

impl TitlePage {
    pub fn new() -> Self {
        TitlePage::default()
    }

    /// 追加一个值，同名 key 合并到已有条目
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 页面上已有 key 的排版位置，未知 key 跳过
    pub fn placements(&self) -> impl Iterator<Item = (&str, TitleKeywordFormat)> {
        self.keys()
            .filter_map(|key| TitleKeywordFormat::for_key(key).map(|format| (key, format)))
    }
}

impl Serialize for TitlePage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for TitlePage {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut page = TitlePage::new();
        for (key, value) in iter {
            page.append(key, value);
        }
        page
    }
}
