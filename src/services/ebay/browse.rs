//! eBay Browse API 商品搜索
//!
//! 对接 item_summary/search 关键词搜索接口

use reqwest::Client;

use crate::config::{EbayConfig, Postprocess};
use crate::error::SearchError;
use crate::models::ItemSummary;

/// 关键词搜索
///
/// auto_correct=KEYWORD 让上游自动纠正拼写；
/// 字段投影模式额外请求价格升序排序
pub async fn search_items(
    client: &Client,
    token: &str,
    query: &str,
    config: &EbayConfig,
) -> Result<Vec<ItemSummary>, SearchError> {
    let limit = config.limit.to_string();
    let mut params = vec![
        ("q", query),
        ("auto_correct", "KEYWORD"),
        ("limit", limit.as_str()),
    ];
    if config.postprocess == Postprocess::FieldProjection {
        params.push(("sort", "price"));
    }

    let response = client
        .get(super::search_url(config.environment))
        .bearer_auth(token)
        .header("X-EBAY-C-MARKETPLACE-ID", &config.marketplace_id)
        .query(&params)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SearchError::UpstreamSearch {
            status: response.status(),
        });
    }

    let body: serde_json::Value = response.json().await?;
    Ok(extract_items(&body))
}

/// 从响应体提取 itemSummaries 列表（字段缺失时为空列表）
fn extract_items(body: &serde_json::Value) -> Vec<ItemSummary> {
    let mut items = Vec::new();

    if let Some(arr) = body["itemSummaries"].as_array() {
        for item in arr {
            match serde_json::from_value::<ItemSummary>(item.clone()) {
                Ok(summary) => items.push(summary),
                Err(e) => log::warn!("跳过无法解析的商品条目: {}", e),
            }
        }
    }

    items
}
