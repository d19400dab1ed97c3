use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    pub score_lower_bound: i64,
    pub count: usize,
}

/// 分数分布：最低分、最高分以及按固定间隔划分的直方图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    pub min_score: i64,
    pub max_score: i64,
    pub distribution: Vec<HistogramBucket>,
}
