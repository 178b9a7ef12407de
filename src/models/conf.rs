use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScreenplayResult;
use crate::utils::FountainConstants;

/// 过渡（Transition）的第二遍修正策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// 后面紧跟的不是场景标题时改写为 Action（文末的过渡保留）
    RequireSlug,
    /// 不做修正
    Keep,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        TransitionPolicy::RequireSlug
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 制表位宽度
    pub tab_width: usize,
    /// 解析前去除 /* */ 注释
    pub strip_boneyard: bool,
    /// 是否识别标题页
    pub parse_title_page: bool,
    /// 是否合并双对白（角色名后带 ^）
    pub use_dual_dialogue: bool,
    /// 前面有两个以上空行的单行段落视为场景标题
    pub blank_lines_force_slug: bool,
    pub transition_policy: TransitionPolicy,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            tab_width: FountainConstants::TAB_WIDTH,
            strip_boneyard: true,
            parse_title_page: true,
            use_dual_dialogue: true,
            blank_lines_force_slug: true,
            transition_policy: TransitionPolicy::default(),
        }
    }
}

impl Conf {
    /// 从 JSON 字符串读取配置，缺省字段取默认值
    pub fn from_json_str(json: &str) -> ScreenplayResult<Conf> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ScreenplayResult<Conf> {
        let content = fs::read_to_string(path)?;
        Conf::from_json_str(&content)
    }
}
