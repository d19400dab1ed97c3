use crate::models::{GimmickAndNotesRow, Song};
use crate::utils::safe_parse::parse_int_or_default;

// 歌曲表的列位置
const SONG_ID_COL: usize = 0;
const SONG_TITLE_COL: usize = 1;
const SONG_VERSION_COL: usize = 3;
const SONG_LEVEL_START_COL: usize = 6;

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// 解析歌曲表
///
/// 列: 0 ID, 1 曲名, 3 版本, 6~14 BESP/BSP/DSP/ESP/CSP/BDP/DDP/EDP/CDP 难度。
/// 数值无法解析时记为 0 并继续，不会因为单个字段放弃整张表。
pub fn parse_song_rows(rows: &[Vec<String>]) -> Vec<Song> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let id = parse_int_or_default(cell(row, SONG_ID_COL), "ID", 0);
            if id.is_fallback() {
                log::warn!("歌曲表第 {} 行的 ID 无效，按 0 导入", index + 1);
            }
            let level = |offset: usize, field: &str| {
                parse_int_or_default(cell(row, SONG_LEVEL_START_COL + offset), field, 0).value()
            };

            Song {
                id: id.value(),
                title: cell(row, SONG_TITLE_COL).to_string(),
                version: cell(row, SONG_VERSION_COL).to_string(),
                be_sp: level(0, "BE SP"),
                b_sp: level(1, "B SP"),
                d_sp: level(2, "D SP"),
                e_sp: level(3, "E SP"),
                c_sp: level(4, "C SP"),
                b_dp: level(5, "B DP"),
                d_dp: level(6, "D DP"),
                e_dp: level(7, "E DP"),
                c_dp: level(8, "C DP"),
            }
        })
        .collect()
}

/// 解析 gimmick 表
///
/// 列: 0 歌曲ID, 2 谱面 (难度首字母), 3 变速, 4 停顿, 5 震动箭头 ("1" 为有),
/// 6 物量, 7 Freeze 数, 8 震动箭头数。
pub fn parse_gimmick_rows(rows: &[Vec<String>]) -> Vec<GimmickAndNotesRow> {
    rows.iter()
        .map(|row| GimmickAndNotesRow {
            song_id: parse_int_or_default(cell(row, 0), "ID", 0).value(),
            chart_type: cell(row, 2).trim().to_string(),
            has_soflan: cell(row, 3).trim() == "1",
            has_stop: cell(row, 4).trim() == "1",
            has_shock_arrow: cell(row, 5).trim() == "1",
            notes: parse_int_or_default(cell(row, 6), "notes", 0).value(),
            freeze: parse_int_or_default(cell(row, 7), "freeze", 0).value(),
            shock_arrow: parse_int_or_default(cell(row, 8), "shockArrow", 0).value(),
        })
        .collect()
}
