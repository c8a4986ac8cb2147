//! eBay OAuth2 令牌接口
//!
//! 通过 client_credentials 授权方式换取短期访问令牌
//! 每次搜索重新换取，不做缓存（搜索量低，够用）

use reqwest::Client;

use crate::config::{Credentials, Environment};
use crate::error::SearchError;

/// 换取访问令牌
///
/// 使用 HTTP Basic 认证携带应用凭证，表单提交授权类型和范围
pub async fn get_access_token(
    client: &Client,
    credentials: &Credentials,
    environment: Environment,
) -> Result<String, SearchError> {
    let response = client
        .post(super::token_url(environment))
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "client_credentials"),
            ("scope", super::OAUTH_SCOPE),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SearchError::UpstreamAuth {
            status: response.status(),
        });
    }

    let token_info: serde_json::Value = response.json().await?;
    match token_info["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(SearchError::MalformedToken),
    }
}
