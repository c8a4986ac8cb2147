//! 搜索编排服务
//!
//! 串联令牌换取、上游搜索和结果后处理

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::{Credentials, EbayConfig, Postprocess};
use crate::error::SearchError;
use crate::models::ItemSummary;
use crate::services::{ebay, postprocess};

/// 搜索服务
///
/// 持有共享 HTTP 客户端和启动时校验过的凭证
pub struct SearchService {
    client: Client,
    credentials: Credentials,
    config: EbayConfig,
}

impl SearchService {
    /// 创建搜索服务，HTTP 客户端按配置设置超时
    pub fn new(credentials: Credentials, config: EbayConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    /// 关键词搜索
    ///
    /// 每次搜索重新换取令牌，结果按配置做后处理
    pub async fn search(&self, query: &str) -> Result<Vec<Value>, SearchError> {
        let token =
            ebay::auth::get_access_token(&self.client, &self.credentials, self.config.environment)
                .await?;

        let raw_items =
            ebay::browse::search_items(&self.client, &token, query, &self.config).await?;
        log::info!("关键词 \"{}\" 命中 {} 条结果", query, raw_items.len());

        self.postprocess(raw_items)
    }

    /// 按配置做结果后处理
    fn postprocess(&self, items: Vec<ItemSummary>) -> Result<Vec<Value>, SearchError> {
        match self.config.postprocess {
            Postprocess::OutlierFilter => {
                let before = items.len();
                let filtered = postprocess::remove_price_outliers(items);
                if filtered.len() < before {
                    log::info!("价格离群值过滤: {} -> {} 条", before, filtered.len());
                }
                to_values(filtered)
            }
            Postprocess::FieldProjection => to_values(postprocess::project_items(&items)),
        }
    }
}

fn to_values<T: serde::Serialize>(items: Vec<T>) -> Result<Vec<Value>, SearchError> {
    items
        .into_iter()
        .map(|i| serde_json::to_value(i).map_err(SearchError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn test_credentials() -> Credentials {
        Credentials {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
        }
    }

    /// 测试默认配置下 3 条结果不会被过滤
    #[test]
    fn test_postprocess_small_result_set() {
        println!("\n========== 测试小结果集不过滤 ==========");
        let service = SearchService::new(test_credentials(), EbayConfig::default()).unwrap();

        let raw = serde_json::json!([
            { "title": "A", "price": { "value": "9.99", "currency": "USD" } },
            { "title": "B", "price": { "value": "10.99", "currency": "USD" } },
            { "title": "C", "price": { "value": "11.99", "currency": "USD" } }
        ]);
        let items: Vec<ItemSummary> = serde_json::from_value(raw).unwrap();

        let values = service.postprocess(items).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["title"], "A");
        println!("✅ 小结果集不过滤测试通过！");
    }

    /// 测试离群值过滤模式的后处理
    #[test]
    fn test_postprocess_outlier_filter() {
        println!("\n========== 测试离群值过滤后处理 ==========");
        let service = SearchService::new(test_credentials(), EbayConfig::default()).unwrap();

        let raw = serde_json::json!([
            { "title": "A", "price": { "value": "10", "currency": "USD" } },
            { "title": "B", "price": { "value": "12", "currency": "USD" } },
            { "title": "C", "price": { "value": "11", "currency": "USD" } },
            { "title": "D", "price": { "value": "13", "currency": "USD" } },
            { "title": "E", "price": { "value": "9", "currency": "USD" } },
            { "title": "Lot", "price": { "value": "1000", "currency": "USD" } }
        ]);
        let items: Vec<ItemSummary> = serde_json::from_value(raw).unwrap();

        let values = service.postprocess(items).unwrap();
        println!("  过滤后剩余 {} 条", values.len());
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|v| v["title"] != "Lot"));
        println!("✅ 离群值过滤后处理测试通过！");
    }

    /// 测试字段投影模式的后处理
    #[test]
    fn test_postprocess_field_projection() {
        println!("\n========== 测试字段投影后处理 ==========");
        let config = EbayConfig {
            postprocess: Postprocess::FieldProjection,
            ..EbayConfig::default()
        };
        let service = SearchService::new(test_credentials(), config).unwrap();

        let raw = serde_json::json!([{
            "itemId": "v1|123|0",
            "title": "Card",
            "price": { "value": "9.99", "currency": "USD" },
            "categories": [{ "categoryName": "CCG Individual Cards" }],
            "seller": { "username": "shop", "feedbackPercentage": "99.1" },
            "itemWebUrl": "https://www.ebay.com/itm/123"
        }]);
        let items: Vec<ItemSummary> = serde_json::from_value(raw).unwrap();

        let values = service.postprocess(items).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["mainCategory"], "CCG Individual Cards");
        assert_eq!(values[0]["seller"], "shop");
        assert!(values[0].get("itemId").is_none());
        println!("✅ 字段投影后处理测试通过！");
    }

    /// 测试线上完整搜索链路（需要配置凭证）
    #[tokio::test]
    async fn test_live_search() {
        println!("\n========== 测试线上搜索链路 ==========");
        dotenv::dotenv().ok();

        let credentials = match Credentials::from_env() {
            Ok(c) => c,
            Err(_) => {
                println!("⚠️ 未配置凭证，跳过线上测试");
                return;
            }
        };

        let config = EbayConfig {
            environment: Environment::Production,
            ..EbayConfig::default()
        };
        let service = SearchService::new(credentials, config).unwrap();

        match service.search("pokemon").await {
            Ok(items) => {
                println!("✅ 搜索成功！共 {} 条", items.len());
                for item in items.iter().take(5) {
                    println!(
                        "  {}: {} {}",
                        item["title"].as_str().unwrap_or("-"),
                        item["price"]["value"].as_str().unwrap_or("-"),
                        item["price"]["currency"].as_str().unwrap_or("")
                    );
                }
            }
            Err(e) => {
                println!("❌ 搜索失败: {}", e);
            }
        }
    }
}
