// DDR 固定定义：版本分类、Flare Rank 显示、谱面难度查询

use crate::models::{Category, ChartType, Song};

/// 版本名 → 分类。未收录的版本归入 CLASSIC 并记录警告
pub fn version_to_category(version: &str) -> Category {
    match version {
        "1st" | "2nd" | "3rd" | "4th" | "5th" | "6th" | "7th" | "8th" | "9th" | "10th" | "MAX"
        | "MAX2" | "EXTREME" | "Super Nova" | "Super Nova2" | "X" | "X2" | "X3" => Category::Classic,
        "2013" | "2014" | "A" => Category::White,
        "A20" | "A20 PLUS" | "A3" | "WORLD" => Category::Gold,
        _ => {
            log::warn!("未知的版本 '{version}'，按 CLASSIC 归类");
            Category::Classic
        }
    }
}

/// Flare Rank 代号 → 显示用罗马数字。非法代号显示为 "0"
pub fn convert_to_display_flare_rank(flare_rank: &str) -> &'static str {
    match flare_rank {
        "0" => "0",
        "1" => "I",
        "2" => "II",
        "3" => "III",
        "4" => "IV",
        "5" => "V",
        "6" => "VI",
        "7" => "VII",
        "8" => "VIII",
        "9" => "IX",
        "10" => "EX",
        _ => "0",
    }
}

/// 查询歌曲在指定谱面类型下的难度，无法识别的谱面类型返回 0
pub fn get_level_from_chart_type(song: &Song, chart_type: &str) -> i64 {
    match chart_type.parse::<ChartType>() {
        Ok(chart_type) => song.level(chart_type),
        Err(_) => {
            log::warn!("未知的谱面类型: {} (歌曲ID: {})", chart_type, song.id);
            0
        }
    }
}
