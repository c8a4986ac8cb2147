//! 搜索接口数据模型

use serde::{Deserialize, Serialize};

/// 搜索请求体
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// 搜索关键词（缺失时按空字符串处理，由上游拒绝）
    #[serde(default)]
    pub query: String,
}

/// 搜索响应体
///
/// 与上游保持一致的 itemSummaries 包装，前端直接消费
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub item_summaries: Vec<serde_json::Value>,
}
