use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::utils::grade::SkillGrade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub total_flare_skill_sp: f64,
    pub total_flare_skill_dp: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SkillHistoryRecord {
    pub player_id: i64,
    pub total_flare_skill_sp: f64,
    pub total_flare_skill_dp: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_flare_skill: f64,
    #[schema(value_type = String, example = "SATURN+")]
    pub grade: SkillGrade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillHistoryPoint {
    /// RFC 3339 时间字符串
    pub date: String,
    pub sp_skill_point: f64,
    pub dp_skill_point: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "SP")]
    pub sp: Stats,
    #[serde(rename = "DP")]
    pub dp: Stats,
    pub skill_history: Vec<SkillHistoryPoint>,
}
