//! 业务逻辑服务模块
//!
//! 封装令牌换取、商品搜索和结果后处理逻辑

pub mod ebay;            // eBay 开放接口
pub mod postprocess;     // 结果后处理
pub mod search_service;  // 搜索编排
