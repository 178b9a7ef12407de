//! 异步 API
//!
//! 面向宿主程序的入口：返回 JSON 字符串或解析结果，解析本身放到阻塞线程池里执行

use std::path::Path;

use log::{debug, warn};

use crate::error::ScreenplayResult;
use crate::models::Conf;
use crate::parser::{FountainParser, ParseOutput};

/// 解析Fountain文本，返回JSON
pub async fn parse_fountain_text(text: String, config: Option<Conf>) -> String {
    let parser = FountainParser::with_conf(config.unwrap_or_default());
    let result = match tokio::task::spawn_blocking(move || parser.parse(&text)).await {
        Ok(result) => result,
        Err(e) => {
            warn!("解析任务失败: {}", e);
            return "{}".to_string();
        }
    };

    serde_json::to_string(&result).unwrap_or_else(|e| {
        warn!("序列化解析结果失败: {}", e);
        "{}".to_string()
    })
}

/// 读取并解析一个 .fountain 文件
pub async fn parse_fountain_file(
    path: impl AsRef<Path>,
    config: Option<Conf>
) -> ScreenplayResult<ParseOutput> {
    let path = path.as_ref();
    debug!("读取剧本文件: {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    let parser = FountainParser::with_conf(config.unwrap_or_default());
    Ok(tokio::task::spawn_blocking(move || parser.parse(&text)).await?)
}

/// 并发解析多个文档，结果顺序与输入一致
pub async fn parse_documents(
    texts: Vec<String>,
    config: Option<Conf>
) -> ScreenplayResult<Vec<ParseOutput>> {
    let parser = FountainParser::with_conf(config.unwrap_or_default());
    let handles: Vec<_> = texts
        .into_iter()
        .map(|text| {
            let parser = parser.clone();
            tokio::task::spawn_blocking(move || parser.parse(&text))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }
    Ok(results)
}
