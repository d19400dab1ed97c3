use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 推荐谱面：同样把目标谱面作为技能对象的玩家还在打的谱面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSong {
    pub song_id: i64,
    pub title: String,
    pub level: i64,
    pub chart_type: String,
    pub flare_rank: String,
    /// 把该谱面作为技能对象的玩家数
    pub count: usize,
    /// 占目标玩家总数的百分比
    pub percentage: f64,
}
