//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，应用凭证从环境变量读取

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// eBay 接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EbayConfig {
    /// 目标环境：sandbox 或 production
    #[serde(default)]
    pub environment: Environment,
    /// 结果后处理方式：outlier_filter 或 field_projection
    #[serde(default)]
    pub postprocess: Postprocess,
    /// 市场站点标识（X-EBAY-C-MARKETPLACE-ID 请求头）
    #[serde(default = "default_marketplace_id")]
    pub marketplace_id: String,
    /// 单次搜索返回数量上限
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// eBay 环境，决定令牌和搜索端点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Sandbox,
    #[default]
    Production,
}

/// 搜索结果后处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Postprocess {
    /// 剔除价格离群值
    #[default]
    OutlierFilter,
    /// 投影为固定字段子集
    FieldProjection,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// eBay 接口配置
    #[serde(default)]
    pub ebay: EbayConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_marketplace_id() -> String { "EBAY_US".to_string() }
fn default_limit() -> u32 { 200 }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for EbayConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            postprocess: Postprocess::default(),
            marketplace_id: default_marketplace_id(),
            limit: default_limit(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ebay: EbayConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值
    pub fn load() -> Self {
        let config_paths = ["config.json", "config/config.json"];

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        log::info!("从 {} 加载配置成功", path);
                        return config;
                    }
                    Err(e) => {
                        log::warn!("加载配置文件 {} 失败: {}", path, e);
                    }
                }
            }
        }

        log::info!("使用默认配置");
        Self::default()
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// eBay 应用凭证
///
/// 启动时从环境变量读取一次，之后显式传入搜索服务
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// 从环境变量读取凭证，缺失时返回错误（启动失败）
    pub fn from_env() -> anyhow::Result<Self> {
        let client_id = env::var("CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("缺少 CLIENT_ID 环境变量"))?;
        let client_secret = env::var("CLIENT_SECRET")
            .map_err(|_| anyhow::anyhow!("缺少 CLIENT_SECRET 环境变量"))?;
        Ok(Self { client_id, client_secret })
    }
}
