use thiserror::Error;

/// 解析以外的可失败操作：读文件、读配置、并发任务
#[derive(Error, Debug)]
pub enum ScreenplayError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的配置: {0}")]
    Config(#[from] serde_json::Error),

    #[error("解析任务失败: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type ScreenplayResult<T> = Result<T, ScreenplayError>;
