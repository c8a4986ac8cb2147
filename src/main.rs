//! PriceScout 后端服务
//!
//! 代理 eBay Browse API 的关键词搜索，并按配置对结果做
//! 价格离群值过滤或固定字段投影，供网页前端调用
//! 附带控制台模式用于手工测试

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{web, App, HttpServer, middleware::Logger};
use env_logger::Env;
use std::io::Write;

use crate::config::{AppConfig, Credentials};
use crate::middleware::CorsMiddleware;
use crate::services::search_service::SearchService;

/// 应用程序入口
///
/// 校验凭证并启动 HTTP 服务器；
/// 以 `pricescout-backend search` 方式运行时进入控制台模式
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 加载 .env 文件（不存在则忽略）
    dotenv::dotenv().ok();

    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let app_config = AppConfig::load();

    // 凭证缺失时启动失败
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            log::error!("凭证加载失败: {}", e);
            std::process::exit(1);
        }
    };

    let service = match SearchService::new(credentials, app_config.ebay.clone()) {
        Ok(service) => service,
        Err(e) => {
            log::error!("HTTP 客户端初始化失败: {}", e);
            std::process::exit(1);
        }
    };

    // 控制台模式：从标准输入读取关键词并打印结果
    if std::env::args().nth(1).as_deref() == Some("search") {
        return run_console_search(&service).await;
    }

    log::info!("启动 PriceScout 后端服务: {}", app_config.bind_addr());

    let service_data = web::Data::new(service);
    let workers = app_config.server.workers;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(service_data.clone())
            .wrap(Logger::default())  // 添加请求日志中间件
            .wrap(CorsMiddleware)     // 跨域头
            .configure(handlers::config)  // 配置路由
    })
    .bind(app_config.bind_addr())?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await
}

/// 控制台模式
///
/// 读取一行关键词，走与 HTTP 接口相同的搜索链路，逐行打印结果
async fn run_console_search(service: &SearchService) -> std::io::Result<()> {
    print!("Item name: ");
    std::io::stdout().flush()?;

    let mut query = String::new();
    std::io::stdin().read_line(&mut query)?;
    let query = query.trim();

    match service.search(query).await {
        Ok(items) => {
            for (i, item) in items.iter().enumerate() {
                println!(
                    "{}. {}: {} {}",
                    i + 1,
                    item["title"].as_str().unwrap_or("-"),
                    item["price"]["value"].as_str().unwrap_or("-"),
                    item["price"]["currency"].as_str().unwrap_or("")
                );
            }
            Ok(())
        }
        Err(e) => {
            log::error!("搜索失败: {}", e);
            std::process::exit(1);
        }
    }
}
