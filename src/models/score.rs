use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::chart::StyleMatrix;

/// 玩家在某谱面上的成绩行
///
/// `chart_type` 和 `flare_rank` 保持上游的原始字符串，非法值在聚合时按默认值处理。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: i64,
    pub song_id: i64,
    pub chart_type: String,
    pub score: i64,
    pub flare_rank: String,
    pub flare_skill: f64,
}

/// 技能表中的单条成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillBookSong {
    pub title: String,
    pub score: i64,
    pub level: i64,
    pub chart_type: String,
    pub flare_rank: String,
    pub flare_skill: f64,
}

pub type CategorizedSongs = StyleMatrix<Vec<SkillBookSong>>;
