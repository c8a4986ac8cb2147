//! eBay 开放接口接入
//!
//! auth 负责 OAuth2 令牌换取，browse 负责 Browse API 商品搜索

pub mod auth;
pub mod browse;

use crate::config::Environment;

// eBay API 端点常量
const PRODUCTION_TOKEN_URL: &str = "https://api.ebay.com/identity/v1/oauth2/token";
const PRODUCTION_SEARCH_URL: &str = "https://api.ebay.com/buy/browse/v1/item_summary/search";
const SANDBOX_TOKEN_URL: &str = "https://api.sandbox.ebay.com/identity/v1/oauth2/token";
const SANDBOX_SEARCH_URL: &str = "https://api.sandbox.ebay.com/buy/browse/v1/item_summary/search";

/// OAuth 授权范围（Browse API 公共只读范围）
const OAUTH_SCOPE: &str = "https://api.ebay.com/oauth/api_scope";

/// 环境对应的令牌端点
fn token_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Sandbox => SANDBOX_TOKEN_URL,
        Environment::Production => PRODUCTION_TOKEN_URL,
    }
}

/// 环境对应的搜索端点
fn search_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Sandbox => SANDBOX_SEARCH_URL,
        Environment::Production => PRODUCTION_SEARCH_URL,
    }
}
