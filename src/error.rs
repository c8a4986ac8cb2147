//! 错误类型定义
//!
//! 搜索链路的统一错误类型，上游失败会被转换成结构化错误响应

use reqwest::StatusCode;
use thiserror::Error;

/// 搜索链路错误
#[derive(Debug, Error)]
pub enum SearchError {
    /// 令牌接口返回非 2xx 状态
    #[error("获取访问令牌失败: 上游返回 {status}")]
    UpstreamAuth { status: StatusCode },

    /// 令牌响应缺少 access_token 字段
    #[error("令牌响应缺少 access_token 字段")]
    MalformedToken,

    /// 搜索接口返回非 2xx 状态
    #[error("商品搜索失败: 上游返回 {status}")]
    UpstreamSearch { status: StatusCode },

    /// 网络请求失败（超时、连接失败、响应体解析失败等）
    #[error("请求上游接口失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 结果序列化失败
    #[error("结果序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}
