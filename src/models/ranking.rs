use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::chart::StyleMatrix;

/// 排行基础数据：某谱面在某段位、某 Flare Rank 下的达成人数与总人数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RankingBaseRow {
    pub song_id: i64,
    pub category: String,
    pub chart_type: String,
    pub grade: String,
    #[sqlx(rename = "spdp")]
    pub play_style: String,
    pub achieved_count: i64,
    pub total_count: i64,
    pub flare_rank: String,
}

impl RankingBaseRow {
    /// 达成率 (0~100)。总数为 0 的行上游已过滤，这里仍返回 0 而不是 NaN
    pub fn achieved_percentage(&self) -> f64 {
        if self.total_count <= 0 {
            log::warn!(
                "排行数据总人数为 0: song_id={}, chart_type={}, grade={}",
                self.song_id,
                self.chart_type,
                self.grade
            );
            return 0.0;
        }
        self.achieved_count as f64 * 100.0 / self.total_count as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingSong {
    pub song_id: i64,
    pub title: String,
    pub level: i64,
    pub chart_type: String,
    pub flare_rank: String,
    pub overall_percentage: f64,
}

/// 单个分组的一页排行，`total_count` 为分页前的分组总数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingPage {
    pub entries: Vec<RankingSong>,
    pub total_count: usize,
}

pub type RankingSongsSpDp = StyleMatrix<RankingPage>;

/// 指定谱面上值得关注的高段位达成情况
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NominatedRanking {
    pub grade: String,
    pub flare_rank: String,
    pub overall_percentage: f64,
}
