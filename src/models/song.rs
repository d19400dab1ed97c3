use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::chart::ChartType;

/// 歌曲元数据，每个谱面类型对应一个难度等级 (0 表示没有该谱面)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub version: String,
    pub be_sp: i64,
    pub b_sp: i64,
    pub d_sp: i64,
    pub e_sp: i64,
    pub c_sp: i64,
    pub b_dp: i64,
    pub d_dp: i64,
    pub e_dp: i64,
    pub c_dp: i64,
}

impl Song {
    pub fn level(&self, chart_type: ChartType) -> i64 {
        match chart_type {
            ChartType::Besp => self.be_sp,
            ChartType::Bsp => self.b_sp,
            ChartType::Dsp => self.d_sp,
            ChartType::Esp => self.e_sp,
            ChartType::Csp => self.c_sp,
            ChartType::Bdp => self.b_dp,
            ChartType::Ddp => self.d_dp,
            ChartType::Edp => self.e_dp,
            ChartType::Cdp => self.c_dp,
        }
    }
}

// gimmick 表中的一行，chart_type 只保存难度首字母
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GimmickAndNotesRow {
    pub song_id: i64,
    pub chart_type: String,
    pub has_soflan: bool,
    pub has_stop: bool,
    pub has_shock_arrow: bool,
    pub notes: i64,
    pub freeze: i64,
    pub shock_arrow: i64,
}

/// 谱面的变速/停顿/震动箭头信息及物量
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GimmickAndNotes {
    pub has_soflan: bool,
    pub has_stop: bool,
    pub has_shock_arrow: bool,
    pub notes: i64,
    pub freeze: i64,
    pub shock_arrow: i64,
}

impl From<GimmickAndNotesRow> for GimmickAndNotes {
    fn from(row: GimmickAndNotesRow) -> Self {
        Self {
            has_soflan: row.has_soflan,
            has_stop: row.has_stop,
            has_shock_arrow: row.has_shock_arrow,
            notes: row.notes,
            freeze: row.freeze,
            shock_arrow: row.shock_arrow,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_song(id: i64, title: &str, version: &str) -> Song {
    Song {
        id,
        title: title.to_string(),
        version: version.to_string(),
        be_sp: 1,
        b_sp: 3,
        d_sp: 7,
        e_sp: 11,
        c_sp: 15,
        b_dp: 4,
        d_dp: 8,
        e_dp: 12,
        c_dp: 16,
    }
}
