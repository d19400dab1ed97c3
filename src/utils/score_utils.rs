use std::collections::HashMap;

use crate::models::{Category, CategorizedSongs, PlayStyle, PlayerScore, SkillBookSong, Song};
use crate::utils::ddr_definition::{get_level_from_chart_type, version_to_category};
use crate::utils::distribution_utils::THEORETICAL_MAX_SCORE;

/// 把玩家成绩按 游玩方式 × 版本分类 分组
///
/// 单元格内保持输入顺序；每条成绩恰好出现一次。找不到歌曲的成绩仍会保留
/// (标题为空、难度 0、归入 CLASSIC)。
pub fn categorize_scores(scores: &[PlayerScore], songs: &HashMap<i64, Song>) -> CategorizedSongs {
    let mut categorized = CategorizedSongs::default();

    for score in scores {
        let play_style = PlayStyle::from_chart_type(&score.chart_type);
        let (entry, category) = match songs.get(&score.song_id) {
            Some(song) => (
                to_skill_book_song(score, &song.title, get_level_from_chart_type(song, &score.chart_type)),
                version_to_category(&song.version),
            ),
            None => {
                log::warn!("成绩引用了不存在的歌曲: song_id={}", score.song_id);
                (to_skill_book_song(score, "", 0), Category::Classic)
            }
        };

        categorized.cell_mut(play_style, category).push(entry);
    }

    categorized
}

fn to_skill_book_song(score: &PlayerScore, title: &str, level: i64) -> SkillBookSong {
    SkillBookSong {
        title: title.to_string(),
        // 上游偶尔会给出超过理论值的分数，截断而不是丢弃
        score: score.score.clamp(0, THEORETICAL_MAX_SCORE),
        level,
        chart_type: score.chart_type.to_uppercase(),
        flare_rank: score.flare_rank.clone(),
        flare_skill: score.flare_skill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_song;

    fn score(song_id: i64, chart_type: &str, value: i64) -> PlayerScore {
        PlayerScore {
            player_id: 1,
            song_id,
            chart_type: chart_type.to_string(),
            score: value,
            flare_rank: "5".to_string(),
            flare_skill: 400.0,
        }
    }

    fn songs() -> HashMap<i64, Song> {
        [
            sample_song(1, "MAX 300", "MAX"),
            sample_song(2, "PARANOiA Revolution", "X3"),
            sample_song(3, "Pluto", "2013"),
            sample_song(4, "Lachryma", "A20"),
        ]
        .into_iter()
        .map(|s| (s.id, s))
        .collect()
    }

    #[test]
    fn places_scores_into_style_and_category() {
        let scores = vec![
            score(1, "CSP", 990_000),
            score(3, "edp", 980_000),
            score(4, "DSP", 970_000),
            score(4, "CDP", 960_000),
        ];
        let result = categorize_scores(&scores, &songs());

        assert_eq!(result.sp.classic.len(), 1);
        assert_eq!(result.sp.classic[0].title, "MAX 300");
        assert_eq!(result.sp.classic[0].level, 15);

        assert_eq!(result.dp.white.len(), 1);
        assert_eq!(result.dp.white[0].chart_type, "EDP");
        assert_eq!(result.dp.white[0].level, 12);

        assert_eq!(result.sp.gold.len(), 1);
        assert_eq!(result.dp.gold.len(), 1);
        assert_eq!(result.dp.gold[0].score, 960_000);
    }

    #[test]
    fn never_drops_or_duplicates_rows() {
        let scores: Vec<PlayerScore> = (0..40)
            .map(|i| {
                let chart = ["BESP", "BSP", "CDP", "XYZ", "DDP"][i % 5];
                score((i % 6) as i64, chart, 900_000 + i as i64)
            })
            .collect();
        let result = categorize_scores(&scores, &songs());

        let total: usize = result.cells().map(Vec::len).sum();
        assert_eq!(total, scores.len());
    }

    #[test]
    fn keeps_input_order_within_a_cell() {
        let scores = vec![score(2, "BSP", 1), score(1, "DSP", 3), score(2, "ESP", 2)];
        let result = categorize_scores(&scores, &songs());

        let order: Vec<i64> = result.sp.classic.iter().map(|s| s.score).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn scores_are_clamped_to_theoretical_max() {
        let result = categorize_scores(&[score(4, "ESP", 1_200_000), score(4, "CSP", -5)], &songs());
        let scores: Vec<i64> = result.sp.gold.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![THEORETICAL_MAX_SCORE, 0]);
    }

    #[test]
    fn unknown_song_is_kept_with_defaults() {
        let result = categorize_scores(&[score(99, "BDP", 123)], &songs());
        assert_eq!(result.dp.classic.len(), 1);
        assert_eq!(result.dp.classic[0].title, "");
        assert_eq!(result.dp.classic[0].level, 0);
    }
}
