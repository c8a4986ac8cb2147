//! 搜索结果后处理
//!
//! 提供两种处理方式：
//! - 价格离群值过滤：按四分位距（Tukey 围栏）剔除标价异常的商品，
//!   适应不同类目的价格水平，避免写死阈值
//! - 固定字段投影：把商品裁剪为前端展示需要的字段子集

use crate::models::{ItemSummary, ProjectedItem};

/// 统计所需的最小样本数，低于该数量不做过滤
const MIN_SAMPLES: usize = 4;

/// 计算排序样本的第 i 个四分位数（i 取 1、2、3）
///
/// 排除法线性插值：把数据划分为 4 个等概率区间，
/// 区间边界落在两个样本之间时做线性插值
fn quartile(sorted: &[f64], i: usize) -> f64 {
    let ld = sorted.len();
    let m = ld + 1;
    let j = (i * m / 4).clamp(1, ld - 1);
    let delta = (i * m) % 4;
    (sorted[j - 1] * (4 - delta) as f64 + sorted[j] * delta as f64) / 4.0
}

/// 剔除价格离群值
///
/// 价格在 [Q1 - 1.5*IQR, Q3 + 1.5*IQR] 之外的商品被丢弃；
/// 商品不足 4 个或可解析价格不足 4 个时原样返回。
/// 第二遍按原始列表过滤，价格缺失或无法解析按 0 处理，
/// 因此只有下界 <= 0 时这类商品才会保留
pub fn remove_price_outliers(items: Vec<ItemSummary>) -> Vec<ItemSummary> {
    if items.len() < MIN_SAMPLES {
        return items;
    }

    let mut prices: Vec<f64> = items.iter().filter_map(|i| i.price_amount()).collect();
    if prices.len() < MIN_SAMPLES {
        return items;
    }

    prices.sort_by(|a, b| a.total_cmp(b));

    let q1 = quartile(&prices, 1);
    let q3 = quartile(&prices, 3);
    let iqr = q3 - q1;
    let lower_bound = q1 - 1.5 * iqr;
    let upper_bound = q3 + 1.5 * iqr;

    items
        .into_iter()
        .filter(|item| {
            let price = item.price_amount().unwrap_or(0.0);
            lower_bound <= price && price <= upper_bound
        })
        .collect()
}

/// 投影为固定字段子集
pub fn project_items(items: &[ItemSummary]) -> Vec<ProjectedItem> {
    items.iter().map(ProjectedItem::from_summary).collect()
}
