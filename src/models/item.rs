//! 商品数据模型
//!
//! 对应 eBay Browse API 返回的商品摘要结构

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 商品摘要
///
/// 只显式建模价格字段，其余字段原样透传，
/// 序列化后与上游 JSON 保持一致（字段顺序除外）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSummary {
    /// 价格信息（部分商品可能缺失）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// 其余字段原样透传
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 商品价格
///
/// eBay 的 value 字段通常是字符串（如 "12.99"），也兼容数字
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    /// 金额
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// 币种（如 USD）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// 其余字段原样透传（如换算价格）
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Price {
    /// 解析金额为浮点数
    ///
    /// 字符串和数字均可解析；缺失、非数字、NaN、无穷大均视为不可解析
    pub fn amount(&self) -> Option<f64> {
        match self.value.as_ref()? {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

impl ItemSummary {
    /// 商品价格金额，价格缺失或无法解析时为 None
    pub fn price_amount(&self) -> Option<f64> {
        self.price.as_ref().and_then(|p| p.amount())
    }
}

/// 固定字段投影后的商品
///
/// 字段集合与前端展示需要对齐
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedItem {
    pub title: Option<String>,
    pub price: Option<Price>,
    pub main_category: Option<String>,
    pub condition: Option<String>,
    pub seller: Option<String>,
    pub seller_feedback: Option<String>,
    pub item_web_url: Option<String>,
}

impl ProjectedItem {
    /// 从完整商品摘要提取固定字段子集
    pub fn from_summary(item: &ItemSummary) -> Self {
        let extra = &item.extra;
        Self {
            title: extra.get("title").and_then(Value::as_str).map(String::from),
            price: item.price.clone(),
            main_category: extra
                .get("categories")
                .and_then(|c| c.get(0))
                .and_then(|c| c["categoryName"].as_str())
                .map(String::from),
            condition: extra.get("condition").and_then(Value::as_str).map(String::from),
            seller: extra
                .get("seller")
                .and_then(|s| s["username"].as_str())
                .map(String::from),
            seller_feedback: extra
                .get("seller")
                .and_then(|s| s["feedbackPercentage"].as_str())
                .map(String::from),
            item_web_url: extra.get("itemWebUrl").and_then(Value::as_str).map(String::from),
        }
    }
}
